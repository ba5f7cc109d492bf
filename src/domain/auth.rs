//! Credentials and tokens exchanged with the authentication service.

use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::{AdminEmail, NonEmptyString, TypeConstraintError};

/// Login credentials as sent to the authentication service.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: AdminEmail,
    pub password: String,
}

impl Credentials {
    pub fn new(email: AdminEmail, password: impl Into<String>) -> Self {
        Self {
            email,
            password: password.into(),
        }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque bearer token issued on successful login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        Ok(Self(NonEmptyString::new(value)?.into_inner()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Debug for AuthToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_secrets() {
        let credentials = Credentials::new(AdminEmail::new("ops@example.com").unwrap(), "hunter2");
        let token = AuthToken::new("abc.def.ghi").unwrap();

        assert!(!format!("{credentials:?}").contains("hunter2"));
        assert!(!format!("{token:?}").contains("abc"));
    }

    #[cfg(feature = "server")]
    #[test]
    fn credentials_serialize_as_login_body() {
        let credentials = Credentials::new(AdminEmail::new("Ops@Example.com").unwrap(), "pw");

        let body = serde_json::to_value(&credentials).unwrap();

        assert_eq!(
            body,
            serde_json::json!({"email": "ops@example.com", "password": "pw"})
        );
    }

    #[test]
    fn blank_token_is_rejected() {
        assert!(AuthToken::new("  ").is_err());
    }
}
