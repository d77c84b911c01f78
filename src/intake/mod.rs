//! Collaborators of the journey form: lead intake and analytics

mod client;
mod traits;

pub use client::{HttpAnalyticsSink, HttpLeadIntake, LogAnalyticsSink};
pub use traits::{AnalyticsEvent, AnalyticsSink, IntakeReceipt, LeadIntake};

#[cfg(test)]
pub use traits::{MockAnalyticsSink, MockLeadIntake};
