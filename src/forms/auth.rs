//! Login form and its field-level validation.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::domain::auth::Credentials;
use crate::domain::types::AdminEmail;

/// Field-level message rendered inline next to an input.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_login_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(invalid("required", "Email is required."));
    }
    if !email.validate_email() {
        return Err(invalid("email", "Enter a valid email address."));
    }
    Ok(())
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data posted by the sign-in page.
pub struct LoginForm {
    #[serde(default)]
    #[validate(custom(function = "validate_login_email"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

/// Flattens validator output into one message per field, sorted by field name.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut flattened = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errors)| {
            errors.first().map(|error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid."));
                FieldError::new(field.to_string(), message)
            })
        })
        .collect::<Vec<_>>();
    flattened.sort_by(|a, b| a.field.cmp(&b.field));
    flattened
}

impl TryFrom<LoginForm> for Credentials {
    type Error = Vec<FieldError>;

    fn try_from(form: LoginForm) -> Result<Self, Self::Error> {
        form.validate().map_err(|errors| field_errors(&errors))?;

        let email = AdminEmail::new(form.email)
            .map_err(|_| vec![FieldError::new("email", "Enter a valid email address.")])?;

        Ok(Credentials::new(email, form.password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn empty_email_is_required() {
        let errors = Credentials::try_from(form("", "secret")).unwrap_err();

        assert_eq!(errors, vec![FieldError::new("email", "Email is required.")]);
    }

    #[test]
    fn whitespace_email_is_required() {
        let errors = Credentials::try_from(form("   ", "secret")).unwrap_err();

        assert_eq!(errors[0].message, "Email is required.");
    }

    #[test]
    fn malformed_email_is_reported() {
        let errors = Credentials::try_from(form("ops-at-example", "secret")).unwrap_err();

        assert_eq!(
            errors,
            vec![FieldError::new("email", "Enter a valid email address.")]
        );
    }

    #[test]
    fn both_fields_are_reported_together() {
        let errors = Credentials::try_from(form("", "")).unwrap_err();

        assert_eq!(
            errors,
            vec![
                FieldError::new("email", "Email is required."),
                FieldError::new("password", "Password is required."),
            ]
        );
    }

    #[test]
    fn valid_form_yields_normalized_credentials() {
        let credentials = Credentials::try_from(form(" Ops@Example.com ", "secret")).unwrap();

        assert_eq!(credentials.email.as_str(), "ops@example.com");
        assert_eq!(credentials.password, "secret");
    }
}
