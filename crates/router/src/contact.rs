//! Local-only contact form handling.
//!
//! Submissions are validated and acknowledged in the page; nothing is
//! sent over the network.

use thiserror::Error;

/// Validation failures for a contact submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name.")]
    MissingName,

    #[error("Please enter a message.")]
    MissingMessage,

    #[error("\"{0}\" is not a valid email address.")]
    InvalidEmail(String),
}

/// Result type for contact form handling.
pub type Result<T> = std::result::Result<T, ContactError>;

/// Field values read from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What the visitor is shown after a valid submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    name: String,
}

impl Acknowledgment {
    /// Text of the acknowledgment.
    pub fn message(&self) -> String {
        format!(
            "Thank you for your message, {}! I'll get back to you soon.",
            self.name
        )
    }
}

impl ContactSubmission {
    /// Create a submission from raw field values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validate the fields and build the acknowledgment.
    pub fn acknowledge(&self) -> Result<Acknowledgment> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }

        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }

        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }

        Ok(Acknowledgment {
            name: name.to_string(),
        })
    }
}

/// `local@domain.tld` with no whitespace; deliberately loose.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
