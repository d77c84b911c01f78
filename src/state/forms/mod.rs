//! Form domain layer
//!
//! Typed journey form fields, the in-progress form values and the validated
//! payload handed to lead intake.

mod field;
mod form_state;

pub use field::{FieldId, FieldKind};
pub use form_state::{FormState, LeadPayload};
