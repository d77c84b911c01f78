//! HTTP clients for lead intake and analytics delivery

use super::traits::{AnalyticsEvent, AnalyticsSink, IntakeReceipt, LeadIntake};
use crate::error::IntakeError;
use crate::state::LeadPayload;
use async_trait::async_trait;
use reqwest::Client;

/// Header carrying the per-attempt submission id
pub const SUBMISSION_ID_HEADER: &str = "X-Submission-Id";

/// Posts leads as JSON to the intake endpoint
pub struct HttpLeadIntake {
    client: Client,
    url: String,
}

impl HttpLeadIntake {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl LeadIntake for HttpLeadIntake {
    async fn submit(
        &self,
        submission_id: &str,
        lead: &LeadPayload,
    ) -> Result<IntakeReceipt, IntakeError> {
        let response = self
            .client
            .post(&self.url)
            .header(SUBMISSION_ID_HEADER, submission_id)
            .json(lead)
            .send()
            .await
            .map_err(|e| IntakeError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IntakeError::Rejected {
                status: status.as_u16(),
            });
        }

        // Any 2xx counts; a JSON body with a reference is a bonus.
        let receipt = response.json::<IntakeReceipt>().await.unwrap_or_default();
        Ok(receipt)
    }
}

/// Sends analytics events to an HTTP collector on a background task
pub struct HttpAnalyticsSink {
    client: Client,
    url: String,
}

impl HttpAnalyticsSink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

impl AnalyticsSink for HttpAnalyticsSink {
    fn track(&self, event: AnalyticsEvent) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("No async runtime, dropping analytics event {}", event.name);
            return;
        };

        let request = self.client.post(&self.url).json(&event);
        handle.spawn(async move {
            match request.send().await {
                Ok(response) if response.status().is_success() => {
                    tracing::debug!("Delivered analytics event {}", event.name);
                }
                Ok(response) => {
                    tracing::warn!(
                        "Analytics collector returned {} for {}",
                        response.status(),
                        event.name
                    );
                }
                Err(e) => {
                    tracing::warn!("Failed to deliver analytics event {}: {e}", event.name);
                }
            }
        });
    }
}

/// Records analytics events in the log only. Used when no collector is configured.
#[derive(Debug, Default)]
pub struct LogAnalyticsSink;

impl AnalyticsSink for LogAnalyticsSink {
    fn track(&self, event: AnalyticsEvent) {
        tracing::info!(
            category = %event.category,
            label = %event.label,
            "Analytics event {}",
            event.name
        );
    }
}
