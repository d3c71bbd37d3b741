//! Text the cards render, kept out of the components so it can be tested.

use api::{FoodSearchResult, Meal, NutritionTotal, Snack, Summary};

use crate::meal_form::{ItemSource, PendingItem};

/// One row of the daily totals grid.
pub struct NutrientRow {
    pub label: &'static str,
    pub unit: &'static str,
    pub value: fn(&NutritionTotal) -> f64,
}

pub const NUTRIENT_ROWS: [NutrientRow; 7] = [
    NutrientRow { label: "칼로리", unit: "kcal", value: |n| n.kcal },
    NutrientRow { label: "단백질", unit: "g", value: |n| n.protein },
    NutrientRow { label: "지방", unit: "g", value: |n| n.fat },
    NutrientRow { label: "탄수화물", unit: "g", value: |n| n.carbs },
    NutrientRow { label: "나트륨", unit: "mg", value: |n| n.sodium },
    NutrientRow { label: "칼륨", unit: "mg", value: |n| n.potassium },
    NutrientRow { label: "인", unit: "mg", value: |n| n.phosphorus },
];

impl NutrientRow {
    /// `"{value:.1} {unit}"` for the given totals.
    pub fn render(&self, total: &NutritionTotal) -> String {
        format!("{:.1} {}", (self.value)(total), self.unit)
    }
}

pub fn remaining_kcal_line(summary: &Summary) -> String {
    match summary.remaining_kcal {
        Some(kcal) => format!("남은 칼로리: {kcal:.1} kcal"),
        None => "남은 칼로리: N/A kcal".to_string(),
    }
}

/// Weights print without a forced decimal, so `70.0` shows as `70 kg`.
pub fn weight(kg: f64) -> String {
    format!("{kg} kg")
}

pub fn search_result_line(food: &FoodSearchResult) -> String {
    format!(
        "{} ({:.0} kcal) - 유사도: {:.2}",
        food.name, food.nutrition.kcal, food.score
    )
}

pub fn pending_item_line(item: &PendingItem) -> String {
    match item.source {
        ItemSource::Manual => format!("{} (약 {:.0} kcal - 직접입력)", item.name, item.nutrition.kcal),
        ItemSource::Search => format!("{} (약 {:.0} kcal)", item.name, item.nutrition.kcal),
    }
}

pub fn snack_kcal(snack: &Snack) -> String {
    format!("{:.1} kcal", snack.kcal)
}

/// `"2024-05-01 (lunch):"`
pub fn meal_heading(meal: &Meal) -> String {
    format!("{} ({}):", meal.date, meal.meal_type)
}

pub fn meal_items(meal: &Meal) -> String {
    meal.items.join(", ")
}
