//! Error types for the lead-capture flow

use crate::state::FieldId;
use thiserror::Error;

/// Why a submit request did not start a submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in progress")]
    InFlight,

    #[error("required fields are empty: {}", join_labels(.missing))]
    Incomplete { missing: Vec<FieldId> },

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("{field} has an unknown selection")]
    UnknownOption { field: FieldId },
}

/// Faults from the lead-intake collaborator.
///
/// Every variant ends up as the same user-facing error status; the detail is
/// only written to the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("lead intake timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("lead intake transport error: {0}")]
    Transport(String),

    #[error("lead intake rejected the submission with status {status}")]
    Rejected { status: u16 },
}

fn join_labels(fields: &[FieldId]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_lists_labels() {
        let err = SubmitBlocked::Incomplete {
            missing: vec![FieldId::FullName, FieldId::Goals],
        };
        assert_eq!(
            err.to_string(),
            "required fields are empty: Full Name, Your Goals and Challenges"
        );
    }

    #[test]
    fn test_unknown_option_names_field() {
        let err = SubmitBlocked::UnknownOption {
            field: FieldId::ContactMethod,
        };
        assert_eq!(
            err.to_string(),
            "Preferred Contact Method has an unknown selection"
        );
    }

    #[test]
    fn test_intake_error_messages() {
        assert_eq!(
            IntakeError::Timeout { secs: 15 }.to_string(),
            "lead intake timed out after 15s"
        );
        assert_eq!(
            IntakeError::Rejected { status: 503 }.to_string(),
            "lead intake rejected the submission with status 503"
        );
    }
}
