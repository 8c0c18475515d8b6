//! Contact form validation and submission
//!
//! Pure client-side glue: validates the four fields, collects every violation
//! rather than stopping at the first, and on success reports the submission to
//! the log sink instead of any network call.

use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Minimum username length
pub const USERNAME_MIN_LEN: usize = 8;

/// Email-shape check: something@something.something, no whitespace
static EMAIL_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A contact form submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender username, at least 8 characters
    pub username: String,
    /// Sender email address
    pub email: String,
    /// Message subject, non-empty
    pub subject: String,
    /// Message body, non-empty
    pub message: String,
}

/// A single field validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Username shorter than [`USERNAME_MIN_LEN`] characters
    UsernameTooShort,
    /// Email does not match the expected shape
    EmailInvalid,
    /// Subject empty after trimming
    SubjectEmpty,
    /// Message empty after trimming
    MessageEmpty,
}

impl FieldError {
    /// Message shown next to the offending field
    pub fn message(&self) -> &'static str {
        match self {
            Self::UsernameTooShort => "Username must be at least 8 characters",
            Self::EmailInvalid => "Enter a valid e-mail address",
            Self::SubjectEmpty => "Subject must not be empty",
            Self::MessageEmpty => "Message must not be empty",
        }
    }
}

impl ContactForm {
    /// Validate all fields, collecting every violation
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.username.chars().count() < USERNAME_MIN_LEN {
            errors.push(FieldError::UsernameTooShort);
        }
        if !EMAIL_PATTERN.is_match(&self.email) {
            errors.push(FieldError::EmailInvalid);
        }
        if self.subject.trim().is_empty() {
            errors.push(FieldError::SubjectEmpty);
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::MessageEmpty);
        }

        errors
    }

    /// Validate and, on success, report the submission to the log sink
    ///
    /// Returns the collected field errors when validation fails. There is no
    /// network call; the log record is the submission's destination.
    pub fn submit(&self) -> Result<(), Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let submitted_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        info!(
            username = %self.username,
            email = %self.email,
            subject = %self.subject,
            message = %self.message,
            submitted_at,
            "Contact form submitted"
        );
        Ok(())
    }
}
