use gloo_timers::future::TimeoutFuture;
use log::debug;
use thiserror::Error;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "phone" => Some(ContactField::Phone),
            "subject" => Some(ContactField::Subject),
            "message" => Some(ContactField::Message),
            _ => None,
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, ContactField::Phone)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Required fields still blank. The browser's `required` attribute
    /// normally stops the submit before this matters.
    pub fn missing_required(&self) -> Vec<ContactField> {
        [
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ]
        .into_iter()
        .filter(|f| self.get(*f).trim().is_empty())
        .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Submitted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub phase: SubmissionPhase,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            phase: SubmissionPhase::Idle,
        }
    }
}

impl ContactFormState {
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmissionPhase::Submitted
    }

    /// Moves to `Submitting`. Returns false, leaving the state alone, when a
    /// submission is already under way or required fields are blank.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase != SubmissionPhase::Idle || !self.form.missing_required().is_empty() {
            return false;
        }
        self.phase = SubmissionPhase::Submitting;
        true
    }

    pub fn finish_submit(&mut self, result: &Result<(), SubmitError>) {
        if self.phase != SubmissionPhase::Submitting {
            return;
        }
        self.phase = match result {
            Ok(()) => SubmissionPhase::Submitted,
            Err(_) => SubmissionPhase::Idle,
        };
    }

    /// End of the confirmation window: blank fields, ready for another message.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("message could not be sent: {0}")]
    Failed(String),
}

/// Where a contact message goes once the visitor presses send.
#[allow(async_fn_in_trait)]
pub trait SubmissionHandler {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

/// Stand-in for a real endpoint: waits, then reports success. Nothing leaves
/// the browser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatedSubmission {
    pub delay_ms: u32,
}

impl Default for SimulatedSubmission {
    fn default() -> Self {
        Self {
            delay_ms: config::SUBMIT_DELAY_MS,
        }
    }
}

/// Sends a form that `begin_submit` already accepted through `handler` and
/// records the outcome on `state`.
pub async fn submit_with<H: SubmissionHandler>(
    handler: &H,
    state: &mut ContactFormState,
) -> Result<(), SubmitError> {
    let result = handler.submit(&state.form).await;
    state.finish_submit(&result);
    result
}

impl SubmissionHandler for SimulatedSubmission {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError> {
        debug!("Simulating contact submission for subject {:?}", form.subject);
        TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Endpoint that refuses everything.
    struct Rejecting;

    impl SubmissionHandler for Rejecting {
        async fn submit(&self, _form: &ContactForm) -> Result<(), SubmitError> {
            Err(SubmitError::Failed("service unavailable".into()))
        }
    }

    /// Endpoint that accepts and keeps what it was sent.
    #[derive(Default)]
    struct Recording {
        sent: RefCell<Vec<ContactForm>>,
    }

    impl SubmissionHandler for Recording {
        async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError> {
            self.sent.borrow_mut().push(form.clone());
            Ok(())
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "Asha Rao".into(),
            email: "asha@example.in".into(),
            phone: String::new(),
            subject: "Suspicious call".into(),
            message: "Caller asked for my OTP".into(),
        }
    }

    #[test]
    fn phone_is_optional() {
        assert!(filled().missing_required().is_empty());
        assert!(!ContactField::Phone.is_required());
        assert!(ContactField::Email.is_required());
    }

    #[test]
    fn blank_required_fields_are_reported() {
        let mut form = filled();
        form.set(ContactField::Subject, "   ".into());
        form.set(ContactField::Email, String::new());
        assert_eq!(form.missing_required(), [ContactField::Email, ContactField::Subject]);
    }

    #[test]
    fn full_submission_cycle_resets_the_form() {
        let mut state = ContactFormState {
            form: filled(),
            phase: SubmissionPhase::Idle,
        };
        assert!(!state.is_submitting());

        assert!(state.begin_submit());
        assert!(state.is_submitting());

        state.finish_submit(&Ok(()));
        assert!(!state.is_submitting());
        assert!(state.is_submitted());
        assert_eq!(state.form, filled());

        state.reset();
        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert_eq!(state.form, ContactForm::default());

        // and it can go round again
        state.form = filled();
        assert!(state.begin_submit());
    }

    #[test]
    fn incomplete_form_does_not_start() {
        let mut state = ContactFormState::default();
        state.form.set(ContactField::Name, "Asha".into());
        assert!(!state.begin_submit());
        assert_eq!(state.phase, SubmissionPhase::Idle);
    }

    #[test]
    fn double_submit_is_ignored() {
        let mut state = ContactFormState {
            form: filled(),
            phase: SubmissionPhase::Idle,
        };
        assert!(state.begin_submit());
        assert!(!state.begin_submit());
    }

    #[test]
    fn failed_submission_keeps_the_fields() {
        let mut state = ContactFormState {
            form: filled(),
            phase: SubmissionPhase::Idle,
        };
        state.begin_submit();
        state.finish_submit(&Err(SubmitError::Failed("offline".into())));
        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert_eq!(state.form, filled());
    }

    #[test]
    fn rejected_message_returns_to_idle_with_fields_kept() {
        let mut state = ContactFormState {
            form: filled(),
            phase: SubmissionPhase::Idle,
        };
        assert!(state.begin_submit());

        let result = block_on(submit_with(&Rejecting, &mut state));
        assert_eq!(result, Err(SubmitError::Failed("service unavailable".into())));
        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert_eq!(state.form, filled());
        // the visitor can try again straight away
        assert!(state.begin_submit());
    }

    #[test]
    fn accepted_message_reaches_the_handler() {
        let handler = Recording::default();
        let mut state = ContactFormState {
            form: filled(),
            phase: SubmissionPhase::Idle,
        };
        assert!(state.begin_submit());

        assert!(block_on(submit_with(&handler, &mut state)).is_ok());
        assert!(state.is_submitted());
        assert_eq!(*handler.sent.borrow(), [filled()]);
    }

    #[test]
    fn field_names_map_to_fields() {
        assert_eq!(ContactField::from_name("subject"), Some(ContactField::Subject));
        assert_eq!(ContactField::from_name("fax"), None);
    }
}
