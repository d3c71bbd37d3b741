//! Wire models exchanged with the diet backend.

mod food;
mod goal;
mod meal;
mod summary;

pub use food::{FoodSearchResult, Nutrition, SearchResponse, Snack, SnackResponse};
pub use goal::{ActivityLevel, Goal, GoalResponse};
pub use meal::{DeleteResponse, Meal, MealRequest, MealResponse, MealType};
pub use summary::{NutritionTotal, Summary};
