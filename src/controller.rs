//! Lead capture form controller
//!
//! Owns the journey [`FormState`] and its [`SubmissionStatus`], and drives at
//! most one submission at a time through the injected [`LeadIntake`].
//!
//! A submission runs in three steps so the event loop can keep drawing while
//! the intake call is pending: [`LeadCaptureController::begin_submit`] moves to
//! `submitting` and hands out an [`InFlightSubmission`], whose
//! [`run`](InFlightSubmission::run) performs the time-bounded call, and
//! [`LeadCaptureController::complete`] applies the outcome.

use crate::error::{IntakeError, SubmitBlocked};
use crate::intake::{AnalyticsEvent, AnalyticsSink, IntakeReceipt, LeadIntake};
use crate::state::{FieldId, FormState, LeadPayload, SubmissionStatus};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Default bound on a single intake call
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);

/// A submission that has left the controller and is waiting on lead intake
pub struct InFlightSubmission {
    id: Uuid,
    payload: LeadPayload,
    intake: Arc<dyn LeadIntake>,
    timeout: Duration,
}

impl InFlightSubmission {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Call lead intake, treating an overrun of the timeout as a failure
    pub async fn run(self) -> SubmissionResult {
        let submission_id = self.id.to_string();
        let outcome =
            match tokio::time::timeout(self.timeout, self.intake.submit(&submission_id, &self.payload))
                .await
            {
                Ok(result) => result,
                Err(_) => Err(IntakeError::Timeout {
                    secs: self.timeout.as_secs(),
                }),
            };
        SubmissionResult {
            id: self.id,
            outcome,
        }
    }
}

/// Outcome of one intake call, tagged with the submission it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub id: Uuid,
    pub outcome: Result<IntakeReceipt, IntakeError>,
}

pub struct LeadCaptureController {
    form: FormState,
    status: SubmissionStatus,
    in_flight: Option<Uuid>,
    intake: Arc<dyn LeadIntake>,
    analytics: Arc<dyn AnalyticsSink>,
    timeout: Duration,
}

impl LeadCaptureController {
    pub fn new(intake: Arc<dyn LeadIntake>, analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self {
            form: FormState::new(),
            status: SubmissionStatus::Idle,
            in_flight: None,
            intake,
            analytics,
            timeout: DEFAULT_SUBMIT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Replace one field value. No validation happens until submit.
    pub fn update_field(&mut self, field: FieldId, value: impl Into<String>) {
        self.form.update_field(field, value);
        tracing::debug!("Updated field {}", field.key());
    }

    /// Validate the form and move to `submitting`.
    ///
    /// Nothing changes when this returns an error: a request made while a
    /// submission is pending, or with incomplete fields, is dropped.
    pub fn begin_submit(&mut self) -> Result<InFlightSubmission, SubmitBlocked> {
        if !self.status.can_submit() {
            tracing::debug!("Ignoring submit while a submission is in flight");
            return Err(SubmitBlocked::InFlight);
        }

        let payload = self.form.validate().inspect_err(|e| {
            tracing::info!("Submit blocked: {e}");
        })?;

        let id = Uuid::new_v4();
        self.in_flight = Some(id);
        self.status = SubmissionStatus::Submitting;
        tracing::info!(%id, "Submitting journey form");

        Ok(InFlightSubmission {
            id,
            payload,
            intake: Arc::clone(&self.intake),
            timeout: self.timeout,
        })
    }

    /// Apply the result of an intake call. Results for anything other than
    /// the submission currently in flight are discarded.
    pub fn complete(&mut self, result: SubmissionResult) {
        if self.in_flight != Some(result.id) {
            tracing::warn!(id = %result.id, "Discarding result for unknown submission");
            return;
        }
        self.in_flight = None;

        match result.outcome {
            Ok(receipt) => {
                tracing::info!(
                    id = %result.id,
                    reference = receipt.reference.as_deref().unwrap_or("-"),
                    "Journey form submitted"
                );
                self.analytics.track(AnalyticsEvent::journey_submission());
                self.status = SubmissionStatus::success();
                self.form.reset();
            }
            Err(e) => {
                tracing::warn!(id = %result.id, "Journey form submission failed: {e}");
                self.status = SubmissionStatus::error();
            }
        }
    }

    /// Run a whole submission: begin, await intake, complete.
    /// The terminal event loop uses the split steps instead.
    #[allow(dead_code)]
    pub async fn submit(&mut self) -> Result<&SubmissionStatus, SubmitBlocked> {
        let submission = self.begin_submit()?;
        let result = submission.run().await;
        self.complete(result);
        Ok(&self.status)
    }
}
