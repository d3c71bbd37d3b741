//! # Dashboard: owner of the shared goal and summary
//!
//! [`Dashboard`] is the single writer of the state several cards read: the current
//! goal and the last fetched [`Summary`]. Forms never touch it directly; they report
//! success through a callback and the owner calls into this type.
//!
//! Consistency is fire-and-refetch: after any mutation (goal set, meal uploaded,
//! meal deleted) the whole summary is fetched again and replaces the old copy.
//! Nothing is merged locally.
//!
//! ## Meal deletion by position
//!
//! The backend addresses meals by their position in `Summary::meals`, not by id.
//! The index sent is the one the user clicked, captured when the click happened.
//! If the server-side list changed in between (another tab, another client), the
//! request removes whatever meal now sits at that position. The backend contract
//! offers no stable identifier to guard against this.

use api::{ApiError, DeleteResponse, Goal, Meal, Summary};

use crate::messages;

/// Result of a delete request, as shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed,
}

/// A delete the user clicked but has not confirmed yet.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingDelete {
    pub index: usize,
    /// The meal as listed when the click happened, for the confirmation text.
    pub meal: Meal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    summary: Option<Summary>,
    goal: Option<Goal>,
    loading: bool,
    error: Option<String>,
    notice: Option<String>,
    pending_delete: Option<PendingDelete>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            summary: None,
            goal: None,
            loading: true,
            error: None,
            notice: None,
            pending_delete: None,
        }
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Outcome of the last delete.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// The goal in effect: the last one set or fetched, else the summary's.
    pub fn goal(&self) -> Option<&Goal> {
        self.goal
            .as_ref()
            .or_else(|| self.summary.as_ref().and_then(|s| s.goal.as_ref()))
    }

    /// The summary card is shown once a summary loaded without error.
    pub fn show_summary(&self) -> bool {
        !self.loading && self.error.is_none() && self.summary.is_some()
    }

    /// The snack card is shown whenever the page is not loading or failed.
    pub fn show_snacks(&self) -> bool {
        !self.loading && self.error.is_none()
    }

    // ---- summary ----

    pub fn start_refresh(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_refresh(&mut self, result: Result<Summary, ApiError>) {
        self.loading = false;
        match result {
            Ok(summary) => {
                if let Some(goal) = &summary.goal {
                    self.goal = Some(goal.clone());
                }
                self.summary = Some(summary);
            }
            Err(e) => {
                tracing::error!("Error fetching summary: {e}");
                self.error = Some(e.user_message(messages::SUMMARY_FAILED));
            }
        }
    }

    // ---- goal / meal notifications ----

    /// Adopt the goal the backend returned from `POST /goal`. Follow with a refresh.
    pub fn goal_set(&mut self, goal: Goal) {
        self.goal = Some(goal);
    }

    // ---- deletion ----

    /// The meal listed at `index` in the current summary.
    pub fn meal_at(&self, index: usize) -> Option<&Meal> {
        self.summary.as_ref()?.meals.get(index)
    }

    /// Remember a click on the delete button of the meal at `index`.
    pub fn request_delete(&mut self, index: usize) -> bool {
        match self.meal_at(index).cloned() {
            Some(meal) => {
                self.pending_delete = Some(PendingDelete { index, meal });
                true
            }
            None => false,
        }
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete. Returns the index captured at click time.
    pub fn confirm_delete(&mut self) -> Option<usize> {
        self.pending_delete.take().map(|pending| pending.index)
    }

    /// Record the result of `DELETE /meal/{index}` as a notice. The caller refetches
    /// the summary whatever the outcome.
    pub fn finish_delete(&mut self, result: Result<DeleteResponse, ApiError>) -> DeleteOutcome {
        match result {
            Ok(_) => {
                self.notice = Some(messages::DELETE_DONE.to_string());
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::error!("Error deleting meal: {e}");
                self.notice = Some(e.user_message(messages::DELETE_FAILED));
                DeleteOutcome::Failed
            }
        }
    }
}
