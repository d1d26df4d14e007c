use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// DOM id of the input bound to this field.
    pub fn element_id(self) -> &'static str {
        match self {
            Field::Name => "contact-name",
            Field::Email => "contact-email",
            Field::Message => "contact-message",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.element_id() == id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    AlreadyPending,
    #[error("no submission is in flight")]
    NotPending,
    #[error("delivery failed: {0}")]
    Transport(String),
}

/// Snapshot of the fields handed to whatever delivers the message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact form fields plus the submit state machine.
///
/// `idle -> pending` on submit, `pending -> success` (fields cleared) or
/// `pending -> error` (fields kept) when delivery completes. Any edit after a
/// finished submission returns the form to `idle`.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmitStatus::Pending
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        slot.clear();
        slot.push_str(value);
        if matches!(self.status, SubmitStatus::Success | SubmitStatus::Error(_)) {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Move to `pending` and return what should be delivered.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitError> {
        if self.is_pending() {
            return Err(SubmitError::AlreadyPending);
        }
        self.status = SubmitStatus::Pending;
        Ok(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Resolve the in-flight submission with the delivery outcome.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) -> Result<(), SubmitError> {
        if !self.is_pending() {
            return Err(SubmitError::NotPending);
        }
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = SubmitStatus::Success;
            }
            Err(e) => {
                self.status = SubmitStatus::Error(e.to_string());
            }
        }
        Ok(())
    }

    /// Label for the submit button in the current state.
    pub fn button_label(&self) -> &'static str {
        if self.is_pending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// User-facing notice for the current state, if any.
    pub fn notice(&self) -> Option<String> {
        match &self.status {
            SubmitStatus::Success => Some("Thanks! Your message has been sent.".to_string()),
            SubmitStatus::Error(reason) => Some(format!("Message not sent: {}", reason)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_submit_is_rejected() {
        let mut f = ContactForm::default();
        f.begin_submit().unwrap();
        assert_eq!(f.begin_submit(), Err(SubmitError::AlreadyPending));
    }

    #[test]
    fn finish_without_submit_is_rejected() {
        let mut f = ContactForm::default();
        assert_eq!(f.finish_submit(Ok(())), Err(SubmitError::NotPending));
        assert_eq!(f.status(), &SubmitStatus::Idle);
    }
}
