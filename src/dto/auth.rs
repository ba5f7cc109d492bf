//! DTOs used by the sign-in page.

use serde::Serialize;

use crate::forms::auth::FieldError;

/// Values echoed back into the login template after a failed attempt.
#[derive(Debug, Default, Serialize)]
pub struct LoginPageData {
    pub email: String,
    pub errors: Vec<FieldError>,
}
