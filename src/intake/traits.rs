//! Trait abstractions for the collaborators of the journey form, enabling mocking in tests

use crate::error::IntakeError;
use crate::state::LeadPayload;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Acknowledgement returned by lead intake
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeReceipt {
    /// Server-side reference for the stored lead, when the service returns one
    #[serde(default)]
    pub reference: Option<String>,
}

/// Records a submitted lead
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadIntake: Send + Sync {
    /// Submit one lead. `submission_id` is unique per attempt.
    async fn submit(
        &self,
        submission_id: &str,
        lead: &LeadPayload,
    ) -> Result<IntakeReceipt, IntakeError>;
}

/// A single analytics event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub category: String,
    pub label: String,
    pub occurred_at: DateTime<Utc>,
}

impl AnalyticsEvent {
    /// The event recorded after a successful journey form submission
    pub fn journey_submission() -> Self {
        Self {
            name: "journey_form_submission".to_string(),
            category: "form".to_string(),
            label: "Begin Journey Form".to_string(),
            occurred_at: Utc::now(),
        }
    }
}

/// Receives analytics events. Delivery is fire-and-forget: implementations
/// must not block and callers never learn whether delivery succeeded.
#[cfg_attr(test, mockall::automock)]
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: AnalyticsEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journey_submission_event_tags() {
        let event = AnalyticsEvent::journey_submission();
        assert_eq!(event.name, "journey_form_submission");
        assert_eq!(event.category, "form");
        assert_eq!(event.label, "Begin Journey Form");
    }

    #[test]
    fn test_receipt_without_reference() {
        let receipt: IntakeReceipt = serde_json::from_str("{}").unwrap();
        assert_eq!(receipt, IntakeReceipt::default());
    }
}
