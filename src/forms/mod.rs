//! Form definitions backing the admin routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod auth;
pub mod bank;
pub mod country;
pub mod product_variant;
pub mod seller_fields;
pub mod state;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid name")]
    InvalidName,

    #[error("invalid country")]
    InvalidCountry,

    #[error("invalid country code")]
    InvalidCountryCode,

    #[error("invalid icon url")]
    InvalidIconUrl,

    #[error("invalid sku")]
    InvalidSku,

    #[error("invalid variant option")]
    InvalidOption,

    #[error("invalid price")]
    InvalidPrice,

    #[error("invalid stock")]
    InvalidStock,

    #[error("invalid field id")]
    InvalidFieldId,

    #[error("malformed form body")]
    Malformed,
}

impl FormError {
    /// Message shown to the operator in a flash notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            FormError::Validation(_) | FormError::Malformed => "Please check the form and try again.",
            FormError::InvalidName => "Name is required.",
            FormError::InvalidCountry => "Country is required.",
            FormError::InvalidCountryCode => "Country code must be two or three letters.",
            FormError::InvalidIconUrl => "Icon must be a valid URL.",
            FormError::InvalidSku => "SKU is required.",
            FormError::InvalidOption => "Variant options cannot be blank.",
            FormError::InvalidPrice => "Price must be a non-negative amount with at most two decimals.",
            FormError::InvalidStock => "Stock must be a whole number of zero or more.",
            FormError::InvalidFieldId => "Unknown form field.",
        }
    }
}

/// HTML checkboxes submit a value only when ticked.
pub(crate) fn checkbox(value: &Option<String>) -> bool {
    value.is_some()
}

/// Treats an empty text input as absent.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
