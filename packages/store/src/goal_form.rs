//! # Goal form state
//!
//! Holds the raw text of the goal inputs and turns it into a [`Goal`] for
//! `POST /goal`. Validation runs before dispatch; an invalid form never reaches
//! the backend.
//!
//! Submission is split into [`GoalForm::start`] and [`GoalForm::finish`] so a UI can
//! keep the form in a signal without holding a write guard across the request.

use api::{ActivityLevel, ApiError, Goal, GoalResponse};

use crate::feedback::Feedback;
use crate::messages;

#[derive(Clone, Debug, PartialEq)]
pub struct GoalForm {
    pub current_weight: String,
    pub target_weight: String,
    pub period_days: String,
    pub activity_level: ActivityLevel,
    pub feedback: Feedback,
}

impl Default for GoalForm {
    fn default() -> Self {
        Self {
            current_weight: String::new(),
            target_weight: String::new(),
            period_days: "30".to_string(),
            activity_level: ActivityLevel::default(),
            feedback: Feedback::default(),
        }
    }
}

impl GoalForm {
    /// Parse the inputs. Weights are kilograms (`f64`), the period whole days.
    pub fn validate(&self) -> Result<Goal, &'static str> {
        let current = self.current_weight.trim();
        let target = self.target_weight.trim();
        let period = self.period_days.trim();

        if current.is_empty() || target.is_empty() || period.is_empty() {
            return Err(messages::GOAL_REQUIRED);
        }

        let parsed = (
            current.parse::<f64>(),
            target.parse::<f64>(),
            period.parse::<i64>(),
        );
        match parsed {
            (Ok(current_weight), Ok(target_weight), Ok(period_days))
                if current_weight.is_finite() && target_weight.is_finite() =>
            {
                Ok(Goal {
                    current_weight,
                    target_weight,
                    period_days,
                    activity_level: self.activity_level,
                })
            }
            _ => Err(messages::GOAL_INVALID_NUMBER),
        }
    }

    /// Begin a submission. Returns the goal to send, or `None` if validation failed
    /// (the error is already recorded and no request must be made).
    pub fn start(&mut self) -> Option<Goal> {
        self.feedback.begin();
        match self.validate() {
            Ok(goal) => Some(goal),
            Err(message) => {
                self.feedback.fail(message);
                None
            }
        }
    }

    /// Record the backend's answer. Returns the goal the server stored.
    pub fn finish(&mut self, result: Result<GoalResponse, ApiError>) -> Option<Goal> {
        match result {
            Ok(response) => {
                self.feedback
                    .succeed(response.message.unwrap_or_else(|| messages::GOAL_SAVED.to_string()));
                Some(response.goal)
            }
            Err(e) => {
                tracing::error!("Error setting goal: {e}");
                self.feedback.fail(e.user_message(messages::GOAL_FAILED));
                None
            }
        }
    }
}
