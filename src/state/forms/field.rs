//! Journey form field catalogue

use std::fmt;

/// How a field is edited on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Free text that accepts newlines
    Multiline,
    /// One selection out of a fixed option list
    Choice(&'static [ChoiceOption]),
}

/// A selectable option: the submitted value and its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

const STATUS_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        value: "aspiring",
        label: "Aspiring Contestant",
    },
    ChoiceOption {
        value: "current",
        label: "Current Competitor",
    },
    ChoiceOption {
        value: "professional",
        label: "Professional/Industry",
    },
    ChoiceOption {
        value: "other",
        label: "Other",
    },
];

const CONTACT_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        value: "email",
        label: "Email",
    },
    ChoiceOption {
        value: "phone",
        label: "Phone",
    },
    ChoiceOption {
        value: "text",
        label: "Text Message",
    },
];

/// Identifies one field of the journey form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    Status,
    Goals,
    ContactMethod,
    AdditionalComments,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 7] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Status,
        FieldId::Goals,
        FieldId::ContactMethod,
        FieldId::AdditionalComments,
    ];

    /// Wire name of the field (matches the payload key)
    pub fn key(self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Status => "status",
            FieldId::Goals => "goals",
            FieldId::ContactMethod => "contactMethod",
            FieldId::AdditionalComments => "additionalComments",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::FullName => "Full Name",
            FieldId::Email => "Email Address",
            FieldId::Phone => "Phone Number",
            FieldId::Status => "Current Status",
            FieldId::Goals => "Your Goals and Challenges",
            FieldId::ContactMethod => "Preferred Contact Method",
            FieldId::AdditionalComments => "Additional Comments or Questions",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldId::FullName => "Enter your full name",
            FieldId::Email => "Enter your email address",
            FieldId::Phone => "Enter your phone number",
            FieldId::Status => "Select your current status",
            FieldId::Goals => {
                "Tell us about your pageant journey, goals, and any specific challenges you'd like to overcome..."
            }
            FieldId::ContactMethod => "Select preferred contact method",
            FieldId::AdditionalComments => "Any additional information you'd like to share...",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FieldId::Phone | FieldId::AdditionalComments)
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Status => FieldKind::Choice(STATUS_OPTIONS),
            FieldId::ContactMethod => FieldKind::Choice(CONTACT_OPTIONS),
            FieldId::Goals | FieldId::AdditionalComments => FieldKind::Multiline,
            FieldId::FullName | FieldId::Email | FieldId::Phone => FieldKind::Text,
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self.kind(), FieldKind::Multiline)
    }

    /// Options for choice fields, empty for text fields
    pub fn options(self) -> &'static [ChoiceOption] {
        match self.kind() {
            FieldKind::Choice(options) => options,
            FieldKind::Text | FieldKind::Multiline => &[],
        }
    }

    /// Label shown for a stored value. Choice values map to their option label.
    pub fn display_value(self, value: &str) -> String {
        match self.kind() {
            FieldKind::Choice(options) => options
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.label.to_string())
                .unwrap_or_else(|| value.to_string()),
            FieldKind::Text | FieldKind::Multiline => value.to_string(),
        }
    }

    /// Next option value after `current`, wrapping through the empty selection
    pub fn next_option(self, current: &str) -> &'static str {
        let options = self.options();
        match options.iter().position(|o| o.value == current) {
            None => options.first().map_or("", |o| o.value),
            Some(i) => options.get(i + 1).map_or("", |o| o.value),
        }
    }

    /// Previous option value before `current`, wrapping through the empty selection
    pub fn prev_option(self, current: &str) -> &'static str {
        let options = self.options();
        match options.iter().position(|o| o.value == current) {
            None => options.last().map_or("", |o| o.value),
            Some(0) => "",
            Some(i) => options.get(i - 1).map_or("", |o| o.value),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
