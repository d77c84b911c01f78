//! Application state definitions

use super::forms::FieldId;

/// Focusable element of the journey form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    SubmitButton,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldId::FullName)
    }
}

impl Focus {
    /// Number of focus stops: every field plus the submit button
    const COUNT: usize = FieldId::ALL.len() + 1;

    fn index(self) -> usize {
        match self {
            Focus::Field(field) => FieldId::ALL
                .iter()
                .position(|f| *f == field)
                .unwrap_or_default(),
            Focus::SubmitButton => FieldId::ALL.len(),
        }
    }

    fn from_index(index: usize) -> Self {
        FieldId::ALL
            .get(index)
            .map_or(Focus::SubmitButton, |f| Focus::Field(*f))
    }
}

/// Rendering-surface state that lives outside the form controller
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Currently focused field or button
    pub focus: Focus,
    /// Surface-level notice, e.g. which required fields are still empty
    pub notice: Option<String>,
}

impl AppState {
    /// Move to next form field
    pub fn next_focus(&mut self) {
        self.focus = Focus::from_index((self.focus.index() + 1) % Focus::COUNT);
    }

    /// Move to previous form field
    pub fn prev_focus(&mut self) {
        let index = self.focus.index();
        self.focus = if index == 0 {
            Focus::from_index(Focus::COUNT - 1)
        } else {
            Focus::from_index(index - 1)
        };
    }

    pub fn focused_field(&self) -> Option<FieldId> {
        match self.focus {
            Focus::Field(field) => Some(field),
            Focus::SubmitButton => None,
        }
    }

    pub fn is_submit_focused(&self) -> bool {
        matches!(self.focus, Focus::SubmitButton)
    }

    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}
