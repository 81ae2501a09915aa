//! Two-step sign-in state machine
//!
//! The form follows a linear progression: email → password → (redirect).
//! Transitions are pure: they never mutate the input form.

use serde::{Deserialize, Serialize};

use super::validation::{
    validate_required, RequiredField, ValidationError, EMAIL_REQUIRED, PASSWORD_REQUIRED,
};

/// Step of the sign-in form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SignInStep {
    /// Only the email field is shown
    #[default]
    Email,
    /// Email is locked in and the password field is revealed
    Password,
}

/// The canonical ordering of sign-in steps.
pub const SIGN_IN_STEPS: &[SignInStep] = &[SignInStep::Email, SignInStep::Password];

impl SignInStep {
    /// Label of the advance button while in this step
    pub fn advance_label(self) -> &'static str {
        match self {
            SignInStep::Email => "Next",
            SignInStep::Password => "Sign In",
        }
    }
}

/// Label shown on the advance button once credentials are submitted
pub const SIGNING_IN_LABEL: &str = "Signing in...";

/// Input fields of the sign-in form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignInField {
    Email,
    Password,
}

/// Sign-in form state for one page view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignInForm {
    pub step: SignInStep,
    pub email: String,
    pub password: String,
    /// Password is shown in plain text
    pub password_visible: bool,
    /// Credentials were accepted and the redirect is scheduled
    pub navigation_pending: bool,
}

impl SignInForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The email field is disabled once the password step is reached
    pub fn email_locked(&self) -> bool {
        self.step == SignInStep::Password
    }

    /// Update the email field. Ignored while the field is disabled.
    pub fn set_email(&mut self, value: impl Into<String>) -> bool {
        if self.email_locked() {
            return false;
        }
        self.email = value.into();
        true
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    /// Whether the Enter key in `field` counts as an advance action.
    ///
    /// Enter in the email field only advances during the email step, and
    /// Enter in the password field only during the password step.
    pub fn accepts_enter_from(&self, field: SignInField) -> bool {
        matches!(
            (self.step, field),
            (SignInStep::Email, SignInField::Email) | (SignInStep::Password, SignInField::Password)
        )
    }
}

/// What an accepted advance action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInOutcome {
    /// Email accepted; the password field is now shown
    PasswordRevealed,
    /// Credentials accepted; the redirect should be scheduled
    Submitted,
    /// A redirect is already pending; nothing happens
    AlreadySubmitted,
}

/// Result of a sign-in transition attempt
#[derive(Debug)]
pub enum TransitionResult {
    /// Successful transition with the new form state
    Success {
        /// The form after the transition
        next_form: SignInForm,
        /// What the transition did
        outcome: SignInOutcome,
    },
    /// Failed transition; the form is unchanged
    Error {
        /// Why the transition failed
        error: ValidationError,
    },
}

impl TransitionResult {
    /// Check if the transition was successful
    pub fn is_success(&self) -> bool {
        matches!(self, TransitionResult::Success { .. })
    }

    /// Check if the transition failed
    pub fn is_error(&self) -> bool {
        matches!(self, TransitionResult::Error { .. })
    }

    /// Get the next form if the transition was successful
    pub fn form(self) -> Option<SignInForm> {
        match self {
            TransitionResult::Success { next_form, .. } => Some(next_form),
            TransitionResult::Error { .. } => None,
        }
    }

    /// Get the validation error if the transition failed
    pub fn error(self) -> Option<ValidationError> {
        match self {
            TransitionResult::Success { .. } => None,
            TransitionResult::Error { error } => Some(error),
        }
    }
}

/// Pure function that applies an advance action to the sign-in form.
///
/// - In the email step, a non-blank (trimmed) email moves to the password step.
/// - In the password step, a non-empty email and password submit the form.
/// - Once submitted, further advances are no-ops.
pub fn advance_sign_in(form: &SignInForm) -> TransitionResult {
    if form.navigation_pending {
        return TransitionResult::Success {
            next_form: form.clone(),
            outcome: SignInOutcome::AlreadySubmitted,
        };
    }

    match form.step {
        SignInStep::Email => {
            if let Err(error) = validate_required(&[RequiredField::trimmed("email", &form.email)])
                .into_result(EMAIL_REQUIRED)
            {
                return TransitionResult::Error { error };
            }
            let next_form = SignInForm {
                step: SignInStep::Password,
                ..form.clone()
            };
            TransitionResult::Success {
                next_form,
                outcome: SignInOutcome::PasswordRevealed,
            }
        }
        SignInStep::Password => {
            if let Err(error) = validate_required(&[
                RequiredField::text("email", &form.email),
                RequiredField::text("password", &form.password),
            ])
            .into_result(PASSWORD_REQUIRED)
            {
                return TransitionResult::Error { error };
            }
            let next_form = SignInForm {
                navigation_pending: true,
                ..form.clone()
            };
            TransitionResult::Success {
                next_form,
                outcome: SignInOutcome::Submitted,
            }
        }
    }
}
