use crate::domain::analytics::TrackedEvent;
use std::collections::BTreeMap;
use thiserror::Error;

/// Form field names, in display order.
pub const FORM_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "message"];

/// Simulated round-trip before the form reports success.
pub const SUBMIT_DELAY_MS: u32 = 2000;

pub const MISSING_FIELDS_MESSAGE: &str = "Por favor, preencha todos os campos obrigatórios.";
pub const SUBMITTED_MESSAGE: &str = "Mensagem enviada com sucesso! Responderemos em breve.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// A contact form that passed client-side validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    fields: BTreeMap<String, String>,
}

impl ContactSubmission {
    /// Required fields must be present and non-empty. Whitespace counts as
    /// content, same as the browser's own form data.
    pub fn validate(fields: BTreeMap<String, String>) -> Result<Self, ContactFormError> {
        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|key| fields.get(*key).map_or(true, |v| v.is_empty()))
            .collect();

        if missing.is_empty() {
            Ok(Self { fields })
        } else {
            Err(ContactFormError::MissingFields(missing))
        }
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn tracked_event(&self) -> TrackedEvent {
        TrackedEvent::ContactFormSubmit {
            fields: self.fields.clone(),
        }
    }
}

/// Values typed into the contact form plus its in-flight flag.
///
/// A rejected submit leaves every value as typed. An accepted one keeps
/// the values until `complete` clears them after the simulated delay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    fields: BTreeMap<String, String>,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, key: &str) -> &str {
        self.fields.get(key).map_or("", String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.fields.insert(key.to_string(), value.into());
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate the current values. On success the form is marked as
    /// submitting and the tracking event for the submission is returned.
    pub fn submit(&mut self) -> Result<TrackedEvent, ContactFormError> {
        let fields = FORM_FIELDS
            .iter()
            .map(|key| (key.to_string(), self.value(key).to_string()))
            .collect();
        let submission = ContactSubmission::validate(fields)?;
        self.submitting = true;
        Ok(submission.tracked_event())
    }

    /// The simulated send finished: clear every field.
    pub fn complete(&mut self) {
        self.fields.clear();
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("name".to_string(), name.to_string()),
            ("email".to_string(), email.to_string()),
            ("subject".to_string(), String::new()),
            ("message".to_string(), message.to_string()),
        ])
    }

    #[test]
    fn test_complete_form_is_accepted() {
        let submission = ContactSubmission::validate(form("Ana", "ana@x.com", "Olá")).unwrap();
        assert_eq!(submission.field("email"), Some("ana@x.com"));
        assert_eq!(submission.fields().len(), 4);
        assert_eq!(submission.tracked_event().name(), "contact_form_submit");
    }

    #[test]
    fn test_each_required_field_is_checked() {
        assert_eq!(
            ContactSubmission::validate(form("", "a@b.c", "m")),
            Err(ContactFormError::MissingFields(vec!["name"]))
        );
        assert_eq!(
            ContactSubmission::validate(form("n", "", "m")),
            Err(ContactFormError::MissingFields(vec!["email"]))
        );
        assert_eq!(
            ContactSubmission::validate(form("", "", "")),
            Err(ContactFormError::MissingFields(vec!["name", "email", "message"]))
        );
    }

    #[test]
    fn test_absent_key_counts_as_missing() {
        let fields = BTreeMap::from([("name".to_string(), "Ana".to_string())]);
        let err = ContactSubmission::validate(fields).unwrap_err();
        assert_eq!(err.to_string(), "missing required fields: email, message");
    }

    #[test]
    fn test_optional_subject_may_be_empty() {
        assert!(ContactSubmission::validate(form("n", "e", "m")).is_ok());
    }

    fn filled_form(message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set("name", "Ana");
        form.set("email", "ana@x.com");
        form.set("subject", "Preset");
        form.set("message", message);
        form
    }

    #[test]
    fn test_rejected_submit_keeps_values() {
        let mut form = filled_form("");
        let before = form.clone();
        assert_eq!(
            form.submit(),
            Err(ContactFormError::MissingFields(vec!["message"]))
        );
        assert_eq!(form, before);
        assert!(!form.is_submitting());
        assert_eq!(form.value("name"), "Ana");
    }

    #[test]
    fn test_accepted_submit_clears_on_complete() {
        let mut form = filled_form("Olá");
        let event = form.submit().unwrap();
        assert_eq!(event.name(), "contact_form_submit");
        // Values stay visible while the send is in flight.
        assert!(form.is_submitting());
        assert_eq!(form.value("subject"), "Preset");

        form.complete();
        assert!(!form.is_submitting());
        for key in FORM_FIELDS {
            assert_eq!(form.value(key), "");
        }
    }
}
