//! # Weight goal
//!
//! [`Goal`] is both the body of `POST /goal` and the shape the backend echoes back
//! inside [`GoalResponse`] and [`crate::Summary`]. The client never edits a goal in
//! place; a new goal replaces the old one on the server.

use serde::{Deserialize, Serialize};

/// How active the user is, used by the backend to pick a calorie factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] = [ActivityLevel::Low, ActivityLevel::Medium, ActivityLevel::High];

    /// Value sent over the wire and used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Medium => "medium",
            ActivityLevel::High => "high",
        }
    }

    /// Label shown in the select box.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "낮음 (좌식 생활)",
            ActivityLevel::Medium => "보통 (주 1-3회 가벼운 운동)",
            ActivityLevel::High => "높음 (주 3-5회 중강도 운동)",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value)
    }
}

/// A weight-change target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Kilograms.
    pub current_weight: f64,
    /// Kilograms.
    pub target_weight: f64,
    pub period_days: i64,
    pub activity_level: ActivityLevel,
}

/// Body returned by `POST /goal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub goal: Goal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_wire_shape() {
        let goal = Goal {
            current_weight: 70.0,
            target_weight: 65.0,
            period_days: 30,
            activity_level: ActivityLevel::Medium,
        };
        let value = serde_json::to_value(&goal).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "current_weight": 70.0,
                "target_weight": 65.0,
                "period_days": 30,
                "activity_level": "medium",
            })
        );
    }

    #[test]
    fn test_activity_level_from_value() {
        assert_eq!(ActivityLevel::from_value("high"), Some(ActivityLevel::High));
        assert_eq!(ActivityLevel::from_value("extreme"), None);
        assert_eq!(ActivityLevel::default(), ActivityLevel::Medium);
    }
}
