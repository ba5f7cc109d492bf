//! Sign-in against the remote authentication service.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::auth::{AuthToken, Credentials};
use crate::forms::auth::{FieldError, LoginForm};

/// Shown when the auth service gives no usable reason.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";

const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Debug, Error)]
pub enum LoginError {
    /// The form was rejected locally; no request was sent.
    #[error("login form is invalid")]
    Validation(Vec<FieldError>),

    /// The auth service refused the credentials or could not be reached.
    #[error("{0}")]
    Request(String),
}

impl LoginError {
    fn generic() -> Self {
        LoginError::Request(LOGIN_FAILED_MESSAGE.to_string())
    }
}

/// Exchanges credentials for a token.
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, LoginError>;
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct LoginFailure {
    message: Option<String>,
}

/// [`AuthClient`] posting JSON to `{base_url}/api/auth/login`.
///
/// One attempt per call; no retries and no client-side timeout.
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    base_url: String,
    client: Client,
}

impl HttpAuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn login_url(&self) -> String {
        format!("{}{LOGIN_PATH}", self.base_url)
    }
}

impl AuthClient for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, LoginError> {
        let response = self
            .client
            .post(self.login_url())
            .json(credentials)
            .send()
            .await
            .map_err(|err| {
                log::error!("Auth service request failed: {err}");
                LoginError::generic()
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            log::error!("Failed to read auth service response: {err}");
            LoginError::generic()
        })?;

        if !status.is_success() {
            log::warn!("Auth service rejected login for {} with {status}", credentials.email);
            let message = serde_json::from_slice::<LoginFailure>(&body)
                .ok()
                .and_then(|failure| failure.message)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string());
            return Err(LoginError::Request(message));
        }

        let parsed: LoginResponse = serde_json::from_slice(&body).map_err(|err| {
            log::error!("Auth service returned an unexpected body: {err}");
            LoginError::generic()
        })?;

        AuthToken::new(parsed.token).map_err(|_| {
            log::error!("Auth service returned an empty token");
            LoginError::generic()
        })
    }
}

/// Validates the form and, only when it is valid, asks the auth service for a token.
pub async fn login<C>(client: &C, form: LoginForm) -> Result<AuthToken, LoginError>
where
    C: AuthClient + ?Sized,
{
    let credentials = Credentials::try_from(form).map_err(LoginError::Validation)?;

    let token = client.login(&credentials).await?;
    log::info!("Admin {} signed in", credentials.email);
    Ok(token)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct FakeClient {
        calls: Cell<usize>,
        answer: Result<&'static str, &'static str>,
    }

    impl FakeClient {
        fn answering(answer: Result<&'static str, &'static str>) -> Self {
            Self {
                calls: Cell::new(0),
                answer,
            }
        }
    }

    impl AuthClient for FakeClient {
        async fn login(&self, _credentials: &Credentials) -> Result<AuthToken, LoginError> {
            self.calls.set(self.calls.get() + 1);
            match self.answer {
                Ok(token) => Ok(AuthToken::new(token).unwrap()),
                Err(message) => Err(LoginError::Request(message.to_string())),
            }
        }
    }

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn empty_email_sends_nothing() {
        let client = FakeClient::answering(Ok("token"));

        let result = login(&client, form("", "secret")).await;

        match result {
            Err(LoginError::Validation(errors)) => {
                assert_eq!(errors, vec![FieldError::new("email", "Email is required.")]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(client.calls.get(), 0);
    }

    #[actix_web::test]
    async fn every_invalid_field_is_reported() {
        let client = FakeClient::answering(Ok("token"));

        let result = login(&client, form("not-an-email", "")).await;

        match result {
            Err(LoginError::Validation(errors)) => {
                assert_eq!(
                    errors,
                    vec![
                        FieldError::new("email", "Enter a valid email address."),
                        FieldError::new("password", "Password is required."),
                    ]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(client.calls.get(), 0);
    }

    #[actix_web::test]
    async fn valid_form_returns_token() {
        let client = FakeClient::answering(Ok("opaque-token"));

        let token = login(&client, form("ops@example.com", "secret")).await.unwrap();

        assert_eq!(token.as_str(), "opaque-token");
        assert_eq!(client.calls.get(), 1);
    }

    #[actix_web::test]
    async fn request_errors_pass_through() {
        let client = FakeClient::answering(Err("Invalid credentials"));

        let result = login(&client, form("ops@example.com", "wrong")).await;

        assert!(matches!(result, Err(LoginError::Request(m)) if m == "Invalid credentials"));
    }

    #[test]
    fn login_url_ignores_trailing_slash() {
        let client = HttpAuthClient::new("http://auth.local/");

        assert_eq!(client.login_url(), "http://auth.local/api/auth/login");
    }
}
