//! Journey form state and the validated lead payload

use super::field::FieldId;
use crate::error::SubmitBlocked;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Where the lead currently stands in their pageant career
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    Aspiring,
    Current,
    Professional,
    Other,
}

impl LeadStatus {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "aspiring" => Some(Self::Aspiring),
            "current" => Some(Self::Current),
            "professional" => Some(Self::Professional),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// How the lead prefers to be contacted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Email,
    Phone,
    Text,
}

impl ContactMethod {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "text" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Current values of every journey form field, as entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    pub goals: String,
    pub contact_method: String,
    pub additional_comments: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value of one field
    pub fn update_field(&mut self, field: FieldId, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Status => &self.status,
            FieldId::Goals => &self.goals,
            FieldId::ContactMethod => &self.contact_method,
            FieldId::AdditionalComments => &self.additional_comments,
        }
    }

    pub fn field_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::FullName => &mut self.full_name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Status => &mut self.status,
            FieldId::Goals => &mut self.goals,
            FieldId::ContactMethod => &mut self.contact_method,
            FieldId::AdditionalComments => &mut self.additional_comments,
        }
    }

    /// Clear every field in place
    pub fn reset(&mut self) {
        for field in FieldId::ALL {
            self.field_mut(field).clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        FieldId::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Required fields that are still blank, in display order
    pub fn missing_required(&self) -> Vec<FieldId> {
        FieldId::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }

    /// Check completeness and shape, producing the payload sent to lead intake
    pub fn validate(&self) -> Result<LeadPayload, SubmitBlocked> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(SubmitBlocked::Incomplete { missing });
        }

        if !is_valid_email(&self.email) {
            return Err(SubmitBlocked::InvalidEmail);
        }

        let status = LeadStatus::parse(&self.status).ok_or(SubmitBlocked::UnknownOption {
            field: FieldId::Status,
        })?;
        let contact_method =
            ContactMethod::parse(&self.contact_method).ok_or(SubmitBlocked::UnknownOption {
                field: FieldId::ContactMethod,
            })?;

        Ok(LeadPayload {
            full_name: self.full_name.clone(),
            email: self.email.trim().to_string(),
            phone: self.phone.clone(),
            status,
            goals: self.goals.clone(),
            contact_method,
            additional_comments: self.additional_comments.clone(),
        })
    }
}

/// Validated lead, serialized as the request body for lead intake
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub status: LeadStatus,
    pub goals: String,
    pub contact_method: ContactMethod,
    pub additional_comments: String,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane_doe() -> FormState {
        let mut form = FormState::new();
        form.update_field(FieldId::FullName, "Jane Doe");
        form.update_field(FieldId::Email, "jane@example.com");
        form.update_field(FieldId::Status, "aspiring");
        form.update_field(FieldId::Goals, "Win nationals");
        form.update_field(FieldId::ContactMethod, "email");
        form
    }

    mod update_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_empty() {
            assert!(FormState::new().is_empty());
        }

        #[test]
        fn test_last_write_wins_per_field() {
            let mut form = FormState::new();
            form.update_field(FieldId::FullName, "J");
            form.update_field(FieldId::Email, "a@b.co");
            form.update_field(FieldId::FullName, "Jane");
            form.update_field(FieldId::Goals, "first");
            form.update_field(FieldId::Email, "jane@example.com");
            form.update_field(FieldId::Goals, "second");

            assert_eq!(form.get(FieldId::FullName), "Jane");
            assert_eq!(form.get(FieldId::Email), "jane@example.com");
            assert_eq!(form.get(FieldId::Goals), "second");
            assert_eq!(form.get(FieldId::Phone), "");
        }

        #[test]
        fn test_order_across_fields_does_not_matter() {
            let mut a = FormState::new();
            a.update_field(FieldId::Phone, "555");
            a.update_field(FieldId::Status, "other");

            let mut b = FormState::new();
            b.update_field(FieldId::Status, "other");
            b.update_field(FieldId::Phone, "555");

            assert_eq!(a, b);
        }

        #[test]
        fn test_update_accepts_any_length() {
            let mut form = FormState::new();
            let long = "x".repeat(10_000);
            form.update_field(FieldId::AdditionalComments, long.clone());
            assert_eq!(form.get(FieldId::AdditionalComments), long);
        }

        #[test]
        fn test_reset_clears_everything() {
            let mut form = jane_doe();
            form.update_field(FieldId::Phone, "555-0100");
            form.reset();
            assert!(form.is_empty());
            assert_eq!(form, FormState::default());
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_missing_required_on_empty_form() {
            assert_eq!(
                FormState::new().missing_required(),
                vec![
                    FieldId::FullName,
                    FieldId::Email,
                    FieldId::Status,
                    FieldId::Goals,
                    FieldId::ContactMethod,
                ]
            );
        }

        #[test]
        fn test_optional_fields_never_missing() {
            let form = jane_doe();
            assert!(form.missing_required().is_empty());
            assert!(form.phone.is_empty());
            assert!(form.additional_comments.is_empty());
        }

        #[test]
        fn test_empty_goals_blocks() {
            let mut form = jane_doe();
            form.update_field(FieldId::Goals, "");
            assert_eq!(
                form.validate(),
                Err(SubmitBlocked::Incomplete {
                    missing: vec![FieldId::Goals]
                })
            );
        }

        #[test]
        fn test_whitespace_only_counts_as_empty() {
            let mut form = jane_doe();
            form.update_field(FieldId::FullName, "   ");
            assert_eq!(form.missing_required(), vec![FieldId::FullName]);
        }

        #[test]
        fn test_whitespace_only_goals_block_submit() {
            let mut form = jane_doe();
            form.update_field(FieldId::Goals, "  ");
            assert_eq!(
                form.validate(),
                Err(SubmitBlocked::Incomplete {
                    missing: vec![FieldId::Goals]
                })
            );
        }

        #[test]
        fn test_email_pattern_compiles() {
            assert!(EMAIL_SHAPE.is_match("a@b.co"));
        }

        #[test]
        fn test_bad_email_shape_blocks() {
            let mut form = jane_doe();
            form.update_field(FieldId::Email, "jane.example.com");
            assert_eq!(form.validate(), Err(SubmitBlocked::InvalidEmail));
        }

        #[test]
        fn test_unknown_choice_blocks() {
            let mut form = jane_doe();
            form.update_field(FieldId::ContactMethod, "pigeon");
            assert_eq!(
                form.validate(),
                Err(SubmitBlocked::UnknownOption {
                    field: FieldId::ContactMethod
                })
            );
        }

        #[test]
        fn test_valid_form_yields_typed_payload() {
            let payload = jane_doe().validate().unwrap();
            assert_eq!(
                payload,
                LeadPayload {
                    full_name: "Jane Doe".to_string(),
                    email: "jane@example.com".to_string(),
                    phone: String::new(),
                    status: LeadStatus::Aspiring,
                    goals: "Win nationals".to_string(),
                    contact_method: ContactMethod::Email,
                    additional_comments: String::new(),
                }
            );
        }

        #[test]
        fn test_email_shapes() {
            assert!(is_valid_email("jane@example.com"));
            assert!(is_valid_email(" jane@example.co.uk "));
            assert!(!is_valid_email("jane@example"));
            assert!(!is_valid_email("jane doe@example.com"));
            assert!(!is_valid_email("@example.com"));
            assert!(!is_valid_email(""));
        }
    }

    mod payload {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_payload_uses_camel_case_keys() {
            let payload = jane_doe().validate().unwrap();
            let json = serde_json::to_value(&payload).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "fullName": "Jane Doe",
                    "email": "jane@example.com",
                    "phone": "",
                    "status": "aspiring",
                    "goals": "Win nationals",
                    "contactMethod": "email",
                    "additionalComments": "",
                })
            );
        }

        #[test]
        fn test_enum_values_are_lowercase() {
            assert_eq!(
                serde_json::to_string(&LeadStatus::Professional).unwrap(),
                "\"professional\""
            );
            assert_eq!(
                serde_json::to_string(&ContactMethod::Text).unwrap(),
                "\"text\""
            );
        }
    }
}
