//! # Daily summary
//!
//! `GET /summary` is recomputed in full by the backend on every call. The client
//! replaces its copy wholesale and never patches it locally.

use serde::{Deserialize, Serialize};

use super::food::zero_if_null;
use super::goal::Goal;
use super::meal::Meal;

/// Nutrition totals, including the minerals the backend tracks per meal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotal {
    #[serde(default, deserialize_with = "zero_if_null")]
    pub kcal: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub protein: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub fat: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub sodium: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub potassium: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub phosphorus: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub goal: Option<Goal>,
    #[serde(default)]
    pub nutrition_total: Option<NutritionTotal>,
    #[serde(default)]
    pub remaining_kcal: Option<f64>,
    /// Every stored meal, in backend order. Delete indices refer to this list.
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub today_meals: Vec<Meal>,
    #[serde(default)]
    pub message: Option<String>,
}
