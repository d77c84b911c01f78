//! Submission lifecycle state

pub const SUCCESS_MESSAGE: &str =
    "Thank you for sharing your journey with us. We will be in touch soon!";
pub const ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

pub const SUBMIT_LABEL: &str = "Submit & Begin Your Journey";
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Where the current (or last) submission attempt stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn success() -> Self {
        Self::Success(SUCCESS_MESSAGE.to_string())
    }

    pub fn error() -> Self {
        Self::Error(ERROR_MESSAGE.to_string())
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether a new submission may start from this state
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    /// Feedback message for the user, if the last attempt finished
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(msg) | Self::Error(msg) => Some(msg),
            Self::Idle | Self::Submitting => None,
        }
    }

    /// Label for the submit control
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }
}
