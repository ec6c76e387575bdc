use crossterm::event::{Event, KeyEvent};
use serde::{Deserialize, Serialize};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ORDER: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn is_last(self) -> bool {
        self == Self::Message
    }

    fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("email address looks invalid")]
    InvalidEmail,
}

/// Message handed to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub recipient: String,
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: Input,
    email: Input,
    message: Input,
    focused: Option<ContactField>,
    submitting: bool,
}

impl ContactForm {
    pub fn focus(&mut self, field: ContactField) {
        self.focused = Some(field);
    }

    pub fn focused(&self) -> ContactField {
        self.focused.unwrap_or(ContactField::Name)
    }

    pub fn focus_next(&mut self) {
        self.focused = Some(self.focused().next());
    }

    pub fn focus_prev(&mut self) {
        self.focused = Some(self.focused().prev());
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.input(field).value()
    }

    pub fn cursor(&self, field: ContactField) -> usize {
        self.input(field).visual_cursor()
    }

    pub fn set_value(&mut self, field: ContactField, value: impl Into<String>) {
        *self.input_mut(field) = Input::new(value.into());
    }

    /// Feeds a key to the focused field. Returns `true` when the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let field = self.focused();
        let before = self.value(field).to_string();
        self.input_mut(field).handle_event(&Event::Key(key));
        self.value(field) != before
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<(), FormError> {
        for field in ContactField::ORDER {
            if self.value(field).trim().is_empty() {
                return Err(FormError::Missing(field.label()));
            }
        }
        if !looks_like_email(self.value(ContactField::Email).trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    pub fn payload(&self, recipient: &str) -> Result<ContactPayload, FormError> {
        self.validate()?;
        let sender_name = self.value(ContactField::Name).trim().to_string();
        Ok(ContactPayload {
            recipient: recipient.to_string(),
            subject: format!("Portfolio Contact from {sender_name}"),
            sender_email: self.value(ContactField::Email).trim().to_string(),
            body: self.value(ContactField::Message).trim().to_string(),
            sender_name,
        })
    }

    fn input(&self, field: ContactField) -> &Input {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn input_mut(&mut self, field: ContactField) -> &mut Input {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !value.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{ContactField, ContactForm, FormError};

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_value(ContactField::Name, " Ada ");
        form.set_value(ContactField::Email, "ada@example.com");
        form.set_value(ContactField::Message, "Hello there");
        form
    }

    #[test]
    fn payload_uses_trimmed_fields_and_subject() {
        let payload = filled().payload("me@example.com").expect("valid form");
        assert_eq!(payload.sender_name, "Ada");
        assert_eq!(payload.subject, "Portfolio Contact from Ada");
        assert_eq!(payload.recipient, "me@example.com");

        let json = serde_json::to_value(&payload).expect("payload serializes");
        assert_eq!(json["senderEmail"], "ada@example.com");
        assert_eq!(json["body"], "Hello there");
    }

    #[test]
    fn validation_reports_first_missing_field_then_email() {
        let mut form = ContactForm::default();
        assert_eq!(form.validate(), Err(FormError::Missing("Name")));

        form = filled();
        form.set_value(ContactField::Email, "not-an-email");
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));
        form.set_value(ContactField::Email, "@example.com");
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn typing_goes_to_focused_field_and_focus_cycles() {
        let mut form = ContactForm::default();
        assert_eq!(form.focused(), ContactField::Name);
        assert!(form.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
        assert_eq!(form.value(ContactField::Name), "x");

        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused(), ContactField::Message);
        form.focus_next();
        assert_eq!(form.focused(), ContactField::Name);
        form.focus_prev();
        assert_eq!(form.focused(), ContactField::Message);

        form.reset();
        assert_eq!(form.value(ContactField::Name), "");
    }
}
