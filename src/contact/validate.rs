use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use super::{ContactRecord, Field};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    EmailInvalid,
    #[error("Subject is required")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
}

/// Field name to the message shown under it. Empty means submittable.
pub type FieldErrors = BTreeMap<Field, FieldError>;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks every field and reports all failures at once.
pub fn validate(record: &ContactRecord) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if record.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::NameRequired);
    }

    // the pattern runs on the raw value, so surrounding spaces are invalid
    if record.email.trim().is_empty() {
        errors.insert(Field::Email, FieldError::EmailRequired);
    } else if !is_valid_email(&record.email) {
        errors.insert(Field::Email, FieldError::EmailInvalid);
    }

    if record.subject.trim().is_empty() {
        errors.insert(Field::Subject, FieldError::SubjectRequired);
    }

    if record.message.trim().is_empty() {
        errors.insert(Field::Message, FieldError::MessageRequired);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, email: &str, subject: &str, message: &str) -> ContactRecord {
        ContactRecord {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_record_has_no_errors() {
        let r = record("Jay", "jay@example.com", "Internship", "Hi there");
        assert!(validate(&r).is_empty());
    }

    #[test]
    fn test_all_failures_reported_together() {
        let errors = validate(&record("", "", "ok", "ok"));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[&Field::Name].to_string(), "Name is required");
        assert_eq!(errors[&Field::Email].to_string(), "Email is required");

        let errors = validate(&record(" ", "\t", "\n", "  "));
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            Field::ALL.to_vec()
        );
        assert_eq!(errors[&Field::Subject].to_string(), "Subject is required");
        assert_eq!(errors[&Field::Message].to_string(), "Message is required");
    }

    #[test]
    fn test_email_format() {
        let errors = validate(&record("a", "not-an-email", "s", "m"));
        assert_eq!(
            errors.get(&Field::Email).map(|e| e.to_string()),
            Some("Please enter a valid email".to_string())
        );
        assert!(validate(&record("a", "a@b.c", "s", "m")).is_empty());
    }

    #[test]
    fn test_email_pattern_edges() {
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(is_valid_email("a@b.c.d"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email(" a@b.c"));
    }
}
