use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::summary::NutritionTotal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "아침",
            MealType::Lunch => "점심",
            MealType::Dinner => "저녁",
            MealType::Snack => "간식",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// Body of `POST /meal`. Only food names travel; the backend resolves nutrition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRequest {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub items: Vec<String>,
}

/// A meal as listed by `GET /summary`.
///
/// `meal_type` stays a plain string so an unexpected value on the server side
/// never breaks decoding of the whole summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub date: String,
    #[serde(rename = "type")]
    pub meal_type: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nutrition: Option<NutritionTotal>,
}

/// Body returned by `POST /meal`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub meal: Option<Meal>,
    #[serde(default)]
    pub nutrition: Option<NutritionTotal>,
}

/// Body returned by `DELETE /meal/{index}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: Option<String>,
}
