mod controller;
mod transport;
mod validate;

pub use controller::{ContactFormController, Submission, SubmitOutcome};
pub use transport::{ContactTransport, SendError, SimulatedTransport};
pub use validate::{is_valid_email, validate, FieldError, FieldErrors};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown when the transport reports a failure. The record is kept so the
/// visitor can retry without retyping.
pub const FAILURE_BANNER: &str = "Something went wrong sending your message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "your.email@example.com",
            Field::Subject => "What's this about?",
            Field::Message => "Your message...",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a message is already being sent")]
    InFlight,
    #[error("{0} field(s) failed validation")]
    Invalid(usize),
    #[error("the contact form is no longer mounted")]
    TornDown,
}

/// Everything the contact section renders from: the record being typed, the
/// inline field errors, and where the current send attempt stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    record: ContactRecord,
    errors: FieldErrors,
    status: SubmissionStatus,
    failure: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &ContactRecord {
        &self.record
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Stores the edit and drops any stale error for that field without
    /// re-validating it.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value.into());
        self.errors.remove(&field);
    }

    /// Validates and, if the record is clean, moves to `Submitting` and hands
    /// back the record to send.
    pub fn begin_submit(&mut self) -> Result<ContactRecord, SubmitRejected> {
        if self.status == SubmissionStatus::Submitting {
            return Err(SubmitRejected::InFlight);
        }
        let errors = validate(&self.record);
        if !errors.is_empty() {
            let count = errors.len();
            self.errors = errors;
            debug!("contact: rejected submit with {count} invalid field(s)");
            return Err(SubmitRejected::Invalid(count));
        }
        self.errors.clear();
        self.failure = None;
        self.status = SubmissionStatus::Submitting;
        Ok(self.record.clone())
    }

    /// Applies the transport result. Ignored unless a send is in flight.
    pub fn finish_submit(&mut self, result: &Result<(), SendError>) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                self.record.clear();
                self.status = SubmissionStatus::Succeeded;
            }
            Err(_) => {
                self.failure = Some(FAILURE_BANNER.to_string());
                self.status = SubmissionStatus::Failed;
            }
        }
    }

    /// Ends the success display. Returns whether anything changed.
    pub fn revert_success(&mut self) -> bool {
        if self.status == SubmissionStatus::Succeeded {
            self.status = SubmissionStatus::Idle;
            true
        } else {
            false
        }
    }
}
