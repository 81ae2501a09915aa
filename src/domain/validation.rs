//! Required-field validation shared by every form
//!
//! Forms describe their required inputs as [`RequiredField`]s; a single check
//! decides whether the submit may proceed.

use thiserror::Error;

/// Shown when the sign-in email step is submitted empty
pub const EMAIL_REQUIRED: &str = "Please enter your email address";
/// Shown when the sign-in password step is submitted incomplete
pub const PASSWORD_REQUIRED: &str = "Please enter your password";
/// Shown when the sign-up form is incomplete
pub const SIGN_UP_INCOMPLETE: &str = "Please fill in all fields and agree to terms";
/// Shown when a project is created without a name
pub const PROJECT_NAME_REQUIRED: &str = "Please enter a project name";
/// Shown when an invitee is missing a name or email
pub const INVITE_INCOMPLETE: &str = "Please enter a full name and email address for every person";

/// A blocking, user-visible validation failure
///
/// Nothing changes when this is returned; the user can correct the input and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Message shown to the user
    pub message: String,

    /// Names of the fields that failed
    pub missing: Vec<&'static str>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, missing: Vec<&'static str>) -> Self {
        ValidationError {
            message: message.into(),
            missing,
        }
    }
}

/// A single required input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredField {
    pub name: &'static str,
    pub present: bool,
}

impl RequiredField {
    /// A text input that must not be empty
    pub fn text(name: &'static str, value: &str) -> Self {
        RequiredField {
            name,
            present: !value.is_empty(),
        }
    }

    /// A text input that must contain something other than whitespace
    pub fn trimmed(name: &'static str, value: &str) -> Self {
        RequiredField {
            name,
            present: !value.trim().is_empty(),
        }
    }

    /// A checkbox that must be ticked
    pub fn checked(name: &'static str, checked: bool) -> Self {
        RequiredField {
            name,
            present: checked,
        }
    }
}

/// Result of a validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Fields that were missing (empty when valid)
    pub missing: Vec<&'static str>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            missing: Vec::new(),
        }
    }

    /// Create a failed validation result
    pub fn failure(missing: Vec<&'static str>) -> Self {
        ValidationResult {
            valid: false,
            missing,
        }
    }

    /// Turn a failure into a [`ValidationError`] carrying `message`
    pub fn into_result(self, message: &str) -> Result<(), ValidationError> {
        if self.valid {
            Ok(())
        } else {
            Err(ValidationError::new(message, self.missing))
        }
    }
}

/// Check that every required field is present
pub fn validate_required(fields: &[RequiredField]) -> ValidationResult {
    let missing: Vec<&'static str> =
        fields.iter().filter(|f| !f.present).map(|f| f.name).collect();
    if missing.is_empty() {
        ValidationResult::success()
    } else {
        ValidationResult::failure(missing)
    }
}
