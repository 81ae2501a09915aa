//! Sign-up form

use super::validation::{validate_required, RequiredField, ValidationResult};

/// Label shown on the submit button while the account is "created"
pub const CREATING_ACCOUNT_LABEL: &str = "Creating account...";

/// Sign-up form state for one page view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub organization: String,
    pub terms_accepted: bool,
    /// Submission accepted and the redirect is scheduled
    pub navigation_pending: bool,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// All four inputs are required
    pub fn required_fields(&self) -> [RequiredField; 4] {
        [
            RequiredField::text("full name", &self.full_name),
            RequiredField::text("email", &self.email),
            RequiredField::text("organization", &self.organization),
            RequiredField::checked("terms", self.terms_accepted),
        ]
    }

    pub fn validate(&self) -> ValidationResult {
        validate_required(&self.required_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_form_is_valid() {
        let form = SignUpForm {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            organization: "Analytical Engines".into(),
            terms_accepted: true,
            ..Default::default()
        };
        assert!(form.validate().valid);
    }

    #[test]
    fn test_terms_are_required() {
        let form = SignUpForm {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            organization: "Analytical Engines".into(),
            terms_accepted: false,
            ..Default::default()
        };
        let result = form.validate();
        assert!(!result.valid);
        assert_eq!(result.missing, vec!["terms"]);
    }

    #[test]
    fn test_blank_form_reports_every_field() {
        assert_eq!(
            SignUpForm::new().validate().missing,
            vec!["full name", "email", "organization", "terms"]
        );
    }
}
