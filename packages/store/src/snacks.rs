use api::{ApiError, Goal, Snack, SnackResponse};

use crate::feedback::Feedback;
use crate::messages;

/// State of the snack recommendation card. Recommendations are fetched on demand only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnackPanel {
    pub snacks: Vec<Snack>,
    /// Remaining calories the backend used to pick the snacks.
    pub remaining_kcal: Option<f64>,
    pub feedback: Feedback,
    /// Set once a request has completed, to tell "not asked yet" from "nothing found".
    pub fetched: bool,
}

impl SnackPanel {
    /// Begin a fetch. Without a known goal nothing is requested and a hint is shown.
    pub fn start(&mut self, goal: Option<&Goal>) -> bool {
        if goal.is_none() {
            self.snacks.clear();
            self.remaining_kcal = None;
            self.feedback.fail(messages::SNACKS_NEED_GOAL);
            return false;
        }
        self.feedback.begin();
        true
    }

    pub fn finish(&mut self, result: Result<SnackResponse, ApiError>) {
        self.fetched = true;
        match result {
            Ok(response) => {
                self.snacks = response.snacks;
                self.remaining_kcal = response.remaining_kcal;
                self.feedback.idle();
            }
            Err(e) => {
                tracing::error!("Error fetching snacks: {e}");
                self.snacks.clear();
                self.remaining_kcal = None;
                self.feedback.fail(e.user_message(messages::SNACKS_FAILED));
            }
        }
    }

    /// Whether to show the "nothing to recommend" text.
    pub fn is_empty_result(&self) -> bool {
        self.fetched && !self.feedback.busy && self.feedback.error.is_none() && self.snacks.is_empty()
    }
}
