//! Contact form state: three text fields and the submission phase.

use serde::Serialize;

use super::mailer::DeliveryError;

pub const SUCCESS_MESSAGE: &str = "メッセージが正常に送信されました！";
pub const FAILURE_MESSAGE: &str = "エラーが発生しました。もう一度お試しください。";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRefused {
    /// A request is already in flight.
    InFlight,
    /// The previous message was just delivered and the form is closing.
    Closing,
}

/// `Idle → Submitting → Succeeded | Failed → Idle`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    fields: ContactFields,
    phase: Phase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }
    }

    /// Clears a failure so a retry starts from `Idle`. Returns whether the
    /// phase changed.
    pub fn reset_failure(&mut self) -> bool {
        if self.phase == Phase::Failed {
            self.phase = Phase::Idle;
            return true;
        }
        false
    }

    /// Enter `Submitting` and hand out the fields to send.
    pub fn begin_submit(&mut self) -> Result<ContactFields, SubmitRefused> {
        match self.phase {
            Phase::Submitting => Err(SubmitRefused::InFlight),
            Phase::Succeeded => Err(SubmitRefused::Closing),
            Phase::Idle | Phase::Failed => {
                self.phase = Phase::Submitting;
                Ok(self.fields.clone())
            }
        }
    }

    /// Apply the delivery outcome. Fields survive a failure for retry.
    pub fn finish(&mut self, outcome: &Result<(), DeliveryError>) -> Phase {
        if self.phase != Phase::Submitting {
            return self.phase;
        }
        self.phase = match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                Phase::Succeeded
            }
            Err(_) => Phase::Failed,
        };
        self.phase
    }

    /// The success message has been shown long enough.
    pub fn settle(&mut self) {
        if self.phase == Phase::Succeeded {
            self.phase = Phase::Idle;
        }
    }

    /// The submit control is disabled while a request is in flight.
    pub fn is_locked(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn status_message(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Succeeded => Some(SUCCESS_MESSAGE),
            Phase::Failed => Some(FAILURE_MESSAGE),
            _ => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_locked() {
            "送信中..."
        } else {
            "メッセージを送信"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Jane".into());
        form.edit(Field::Email, "jane@x.com".into());
        form.edit(Field::Message, "hi".into());
        form
    }

    #[test]
    fn success_clears_fields() {
        let mut form = filled();
        let sent = form.begin_submit().unwrap();
        assert_eq!(sent, ContactFields::new("Jane", "jane@x.com", "hi"));
        assert!(form.is_locked());
        assert_eq!(form.submit_label(), "送信中...");
        assert_eq!(form.finish(&Ok(())), Phase::Succeeded);
        assert!(form.fields().is_empty());
        assert_eq!(form.status_message(), Some(SUCCESS_MESSAGE));
        assert_eq!(form.begin_submit(), Err(SubmitRefused::Closing));
        form.settle();
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn failure_keeps_fields_and_unlocks() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.finish(&Err(DeliveryError::NotConfigured)), Phase::Failed);
        assert!(!form.is_locked());
        assert_eq!(form.fields(), &ContactFields::new("Jane", "jane@x.com", "hi"));
        assert_eq!(form.status_message(), Some(FAILURE_MESSAGE));
        assert!(form.reset_failure());
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitRefused::InFlight));
    }

    #[test]
    fn late_outcome_without_submission_is_ignored() {
        let mut form = filled();
        assert_eq!(form.finish(&Ok(())), Phase::Idle);
        assert!(!form.fields().is_empty());
    }
}
