//! Signed-in operator extracted from the identity cookie.

use std::future::{Ready, ready};

use actix_identity::error::LoginError as IdentityLoginError;
use actix_identity::{Identity, IdentityExt};
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::domain::auth::AuthToken;

/// Token of the operator behind the current request.
///
/// Extraction fails with `401 Unauthorized` when no identity is attached,
/// which [`crate::middleware::RedirectUnauthorized`] turns into a redirect.
#[derive(Debug, Clone)]
pub struct AdminSession {
    token: AuthToken,
}

impl AdminSession {
    /// Binds the token to the identity cookie of the response.
    pub fn begin(req: &HttpRequest, token: AuthToken) -> Result<Self, IdentityLoginError> {
        Identity::login(&req.extensions(), token.as_str().to_string())?;
        Ok(Self { token })
    }

    /// Drops the identity cookie.
    pub fn end(identity: Identity) {
        identity.logout();
    }

    pub fn token(&self) -> &AuthToken {
        &self.token
    }
}

impl FromRequest for AdminSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req
            .get_identity()
            .ok()
            .and_then(|identity| identity.id().ok())
            .and_then(|token| AuthToken::new(token).ok())
            .map(|token| AdminSession { token })
            .ok_or_else(|| ErrorUnauthorized("sign in required"));

        ready(session)
    }
}
