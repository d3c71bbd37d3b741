/// Status of one user action: the in-flight flag plus the last outcome text.
///
/// The busy flag is the only guard against duplicate submissions; the control that
/// triggers the action is disabled while it is set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feedback {
    pub busy: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl Feedback {
    /// Clear the previous outcome and mark the action in flight.
    pub fn begin(&mut self) {
        self.busy = true;
        self.message = None;
        self.error = None;
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.message = Some(message.into());
        self.error = None;
    }

    pub fn fail(&mut self, error: impl Into<String>) {
        self.busy = false;
        self.message = None;
        self.error = Some(error.into());
    }

    /// Finish without a visible outcome.
    pub fn idle(&mut self) {
        self.busy = false;
    }
}
