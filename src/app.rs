//! Application state and core logic

use crate::config::JourneyConfig;
use crate::controller::{LeadCaptureController, SubmissionResult};
use crate::error::{IntakeError, SubmitBlocked};
use crate::intake::{AnalyticsSink, HttpAnalyticsSink, HttpLeadIntake, LeadIntake, LogAnalyticsSink};
use crate::state::{AppState, FieldId, FieldKind, Focus, FormState, SubmissionStatus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};
use uuid::Uuid;

/// Submission waiting on its background task
struct PendingSubmission {
    id: Uuid,
    receiver: oneshot::Receiver<SubmissionResult>,
}

/// Main application struct
pub struct App {
    /// Rendering-surface state (focus, notices)
    pub state: AppState,
    /// Owner of the journey form and its submission lifecycle
    pub controller: LeadCaptureController,
    pending: Option<PendingSubmission>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create an App wired to the HTTP collaborators named in `config`
    pub fn new(config: &JourneyConfig) -> Self {
        let intake: Arc<dyn LeadIntake> = Arc::new(HttpLeadIntake::new(config.intake_url()));
        let analytics: Arc<dyn AnalyticsSink> = match config.analytics_url() {
            Some(url) => Arc::new(HttpAnalyticsSink::new(url)),
            None => Arc::new(LogAnalyticsSink),
        };
        tracing::info!("Lead intake endpoint: {}", config.intake_url());

        Self::with_collaborators(intake, analytics, config.submit_timeout())
    }

    pub fn with_collaborators(
        intake: Arc<dyn LeadIntake>,
        analytics: Arc<dyn AnalyticsSink>,
        timeout: Duration,
    ) -> Self {
        Self {
            state: AppState::default(),
            controller: LeadCaptureController::new(intake, analytics).with_timeout(timeout),
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn form(&self) -> &FormState {
        self.controller.form()
    }

    pub fn status(&self) -> &SubmissionStatus {
        self.controller.status()
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.status().is_submitting()
    }

    fn request_quit(&mut self) {
        if self.is_submitting() {
            tracing::warn!("Quitting while a submission is in flight");
        } else if !self.form().is_empty() {
            tracing::info!("Quitting with unsent form input");
        }
        self.quit = true;
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.request_quit();
            }
            KeyCode::Esc => self.request_quit(),
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.request_submit();
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.request_submit();
            }
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            _ => match self.state.focus {
                Focus::SubmitButton => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.request_submit();
                    }
                }
                Focus::Field(field) => self.edit_field(field, key),
            },
        }
    }

    /// Apply a key to the focused field through the controller
    fn edit_field(&mut self, field: FieldId, key: KeyEvent) {
        let current = self.controller.form().get(field);

        let next = match (field.kind(), key.code) {
            (FieldKind::Choice(_), KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter) => {
                Some(field.next_option(current).to_string())
            }
            (FieldKind::Choice(_), KeyCode::Left) => Some(field.prev_option(current).to_string()),
            (FieldKind::Choice(_), KeyCode::Backspace | KeyCode::Delete) => Some(String::new()),
            (FieldKind::Multiline, KeyCode::Enter) => Some(format!("{current}\n")),
            (FieldKind::Text, KeyCode::Enter) => {
                self.state.next_focus();
                None
            }
            (FieldKind::Text | FieldKind::Multiline, KeyCode::Char(c))
                if !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(format!("{current}{c}"))
            }
            (FieldKind::Text | FieldKind::Multiline, KeyCode::Backspace) => {
                let mut value = current.to_string();
                value.pop();
                Some(value)
            }
            _ => None,
        };

        if let Some(value) = next {
            self.controller.update_field(field, value);
        }
    }

    /// Submit the form unless it is already in flight or incomplete
    fn request_submit(&mut self) {
        // The submit control is disabled while submitting
        if self.is_submitting() {
            return;
        }

        let missing = self.controller.form().missing_required();
        if let Some(first) = missing.first() {
            let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
            self.state
                .set_notice(format!("Please fill in: {}", labels.join(", ")));
            self.state.focus = Focus::Field(*first);
            return;
        }

        match self.controller.begin_submit() {
            Ok(submission) => {
                self.state.clear_notice();
                let (sender, receiver) = oneshot::channel();
                self.pending = Some(PendingSubmission {
                    id: submission.id(),
                    receiver,
                });
                tokio::spawn(async move {
                    let result = submission.run().await;
                    // The receiver is gone if the app quit mid-submission
                    let _ = sender.send(result);
                });
            }
            Err(SubmitBlocked::InvalidEmail) => {
                self.state.set_notice("Please enter a valid email address");
                self.state.focus = Focus::Field(FieldId::Email);
            }
            Err(SubmitBlocked::UnknownOption { field }) => {
                self.state
                    .set_notice(format!("Please choose an option for {field}"));
                self.state.focus = Focus::Field(field);
            }
            Err(e) => self.state.set_notice(e.to_string()),
        }
    }

    /// Apply a finished submission, if any. Returns true when the status changed.
    pub fn poll_submission(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };

        let result = match pending.receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => {
                tracing::warn!(id = %pending.id, "Submission task ended without a result");
                SubmissionResult {
                    id: pending.id,
                    outcome: Err(IntakeError::Transport(
                        "submission task ended without a result".to_string(),
                    )),
                }
            }
        };

        self.pending = None;
        self.controller.complete(result);
        true
    }
}
