use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{} is required", .0.as_str())]
    Missing(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("A message is already being sent")]
    AlreadySubmitting,
    #[error("Couldn't send message: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Where a finished contact message goes.
pub trait Outbox {
    fn deliver(&mut self, message: &ContactFields) -> Result<(), FormError>;
}

/// Accepts every message without sending it anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedOutbox;

impl Outbox for SimulatedOutbox {
    fn deliver(&mut self, message: &ContactFields) -> Result<(), FormError> {
        log::info!(
            "contact message from {} <{}> accepted locally ({} chars)",
            message.name,
            message.email,
            message.message.chars().count()
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    phase: FormPhase,
    last_error: Option<FormError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn last_error(&self) -> Option<&FormError> {
        self.last_error.as_ref()
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.fields.name,
            Field::Email => &self.fields.email,
            Field::Message => &self.fields.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.fields.name,
            Field::Email => &mut self.fields.email,
            Field::Message => &mut self.fields.message,
        };
        *slot = value.into();
    }

    pub fn button_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Idle => "SEND MESSAGE",
            FormPhase::Submitting => "SENDING...",
        }
    }

    /// Same bar as the inputs' `required` attribute: whitespace counts as
    /// content.
    fn validate(&self) -> Result<(), FormError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.field(field).is_empty() {
                return Err(FormError::Missing(field));
            }
        }
        if !self.fields.email.contains('@') {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Idle -> Submitting. Hands back the message to deliver.
    pub fn begin_submit(&mut self) -> Result<ContactFields, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        if let Err(e) = self.validate() {
            self.last_error = Some(e.clone());
            return Err(e);
        }
        self.phase = FormPhase::Submitting;
        self.last_error = None;
        Ok(self.fields.clone())
    }

    /// Submitting -> Idle. A delivered message clears the form; a failed one
    /// keeps the input so it can be retried.
    pub fn finish_submit(&mut self, outcome: Result<(), FormError>) {
        if !self.is_submitting() {
            return;
        }
        self.phase = FormPhase::Idle;
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Ann");
        form.set_field(Field::Email, "a@x.com");
        form.set_field(Field::Message, "hi");
        form
    }

    #[test]
    fn test_submit_scenario() {
        let mut form = filled();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.button_label(), "SEND MESSAGE");

        let message = form.begin_submit().expect("form is complete");
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert_eq!(form.button_label(), "SENDING...");
        assert_eq!(message.name, "Ann");

        let outcome = SimulatedOutbox.deliver(&message);
        form.finish_submit(outcome);
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(form.last_error().is_none());
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.set_field(Field::Message, "");
        assert_eq!(form.begin_submit(), Err(FormError::Missing(Field::Message)));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.last_error(), Some(&FormError::Missing(Field::Message)));

        let mut form = filled();
        form.set_field(Field::Email, "not-an-email");
        assert_eq!(form.begin_submit(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = filled();
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_failed_delivery_keeps_fields() {
        let mut form = filled();
        form.begin_submit().expect("form is complete");
        form.finish_submit(Err(FormError::Delivery("offline".to_string())));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.field(Field::Name), "Ann");
        assert_eq!(
            form.last_error().map(|e| e.to_string()),
            Some("Couldn't send message: offline".to_string())
        );
    }

    #[test]
    fn test_finish_without_submit_is_ignored() {
        let mut form = filled();
        form.finish_submit(Ok(()));
        assert_eq!(form.field(Field::Email), "a@x.com");
    }

    #[test]
    fn test_whitespace_counts_as_content() {
        let mut form = filled();
        form.set_field(Field::Message, "   ");
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.phase(), FormPhase::Submitting);
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::Email.as_str(), "email");
        assert_eq!(FormError::Missing(Field::Name).to_string(), "name is required");
    }
}
