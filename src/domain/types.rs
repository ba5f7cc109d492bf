//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers,
//! normalized/validated email, well-formed country codes) so that once a value
//! reaches the domain layer it can be treated as trusted.
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::{ValidateEmail, ValidateUrl};

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
    /// Country code is not two or three ASCII letters.
    #[error("invalid country code")]
    InvalidCountryCode,
    /// Rating outside of the 1..=5 scale.
    #[error("rating must be between 1 and 5")]
    InvalidRating,
    /// Price is negative or not a decimal with at most two fraction digits.
    #[error("invalid price")]
    InvalidPrice,
    /// Stock level below zero.
    #[error("stock cannot be negative")]
    NegativeStock,
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(BankId, "Unique identifier for a bank.");
id_newtype!(CountryId, "Unique identifier for a country.");
id_newtype!(StateId, "Unique identifier for a state or province.");
id_newtype!(SellerFieldId, "Unique identifier for a seller form field.");
id_newtype!(ProductVariantId, "Unique identifier for a product variant.");
id_newtype!(ReviewId, "Unique identifier for a product review.");

/// Lower-cased and validated operator email used to sign in.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AdminEmail(String);

impl AdminEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for AdminEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for AdminEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(BankName, "Bank display name enforcing non-empty values.");
non_empty_string_newtype!(
    CountryName,
    "Country display name enforcing non-empty values."
);
non_empty_string_newtype!(StateName, "State or province name enforcing non-empty values.");
non_empty_string_newtype!(
    FieldLabel,
    "Seller form field label enforcing trimmed, non-empty values."
);
non_empty_string_newtype!(ProductName, "Product name enforcing non-empty values.");
non_empty_string_newtype!(Sku, "Stock keeping unit enforcing trimmed, non-empty values.");
non_empty_string_newtype!(
    VariantOption,
    "Variant attribute value (color, size) enforcing non-empty values."
);
non_empty_string_newtype!(AuthorName, "Review author name enforcing non-empty values.");

/// Review body sanitized of markup, trimmed and non-empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ReviewComment(String);

impl ReviewComment {
    /// Constructs a sanitized, trimmed, non-empty value.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let sanitized = ammonia::clean(&value.into());
        let inner = NonEmptyString::new(sanitized)?;
        Ok(Self(inner.into_inner()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ReviewComment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Upper-cased ISO 3166 alpha-2 or alpha-3 country code.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let code = value.into().trim().to_ascii_uppercase();
        let well_formed =
            (2..=3).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphabetic());
        if well_formed {
            Ok(Self(code))
        } else {
            Err(TypeConstraintError::InvalidCountryCode)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CountryCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Non-empty, trimmed icon URL.
pub struct IconUrl(String);

impl IconUrl {
    /// Ensures a trimmed icon URL is non-empty and well-formed before wrapping.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let url = NonEmptyString::new(value)?;

        if !url.as_str().validate_url() {
            Err(TypeConstraintError::InvalidUrl)
        } else {
            Ok(Self(url.into_inner()))
        }
    }

    /// Borrow the icon URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the owned icon URL.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for IconUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Star rating on a one-to-five scale.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        match u8::try_from(value) {
            Ok(stars @ 1..=5) => Ok(Self(stars)),
            _ => Err(TypeConstraintError::InvalidRating),
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<Rating> for i32 {
    fn from(value: Rating) -> Self {
        i32::from(value.0)
    }
}

/// Non-negative price expressed in minor currency units.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    pub fn from_minor_units(value: i64) -> Result<Self, TypeConstraintError> {
        if value < 0 {
            return Err(TypeConstraintError::InvalidPrice);
        }
        Ok(Self(value))
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }
}

impl FromStr for Price {
    type Err = TypeConstraintError;

    /// Parses `"12"`, `"12.5"` or `"12.50"` into minor units.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || fraction.len() > 2 || !all_digits(whole) || !all_digits(fraction) {
            return Err(TypeConstraintError::InvalidPrice);
        }

        let whole: i64 = whole.parse().map_err(|_| TypeConstraintError::InvalidPrice)?;
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| TypeConstraintError::InvalidPrice)? * 10,
            _ => fraction.parse().map_err(|_| TypeConstraintError::InvalidPrice)?,
        };

        whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or(TypeConstraintError::InvalidPrice)
            .and_then(Self::from_minor_units)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Units on hand; never negative.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StockLevel(i32);

impl StockLevel {
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value < 0 {
            Err(TypeConstraintError::NegativeStock)
        } else {
            Ok(Self(value))
        }
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    pub const fn in_stock(self) -> bool {
        self.0 > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_reject_non_positive_values() {
        assert_eq!(BankId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(StateId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(CountryId::new(7).map(CountryId::get), Ok(7));
    }

    #[test]
    fn names_are_trimmed_and_non_empty() {
        assert_eq!(BankName::new("  State Bank ").unwrap().as_str(), "State Bank");
        assert_eq!(StateName::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn admin_email_is_normalized() {
        let email = AdminEmail::new("  Admin@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "admin@example.com");
        assert_eq!(
            AdminEmail::new("not-an-email"),
            Err(TypeConstraintError::InvalidEmail)
        );
    }

    #[test]
    fn country_code_is_upper_cased_letters() {
        assert_eq!(CountryCode::new(" in ").unwrap().as_str(), "IN");
        assert_eq!(CountryCode::new("usa").unwrap().as_str(), "USA");
        assert!(CountryCode::new("I").is_err());
        assert!(CountryCode::new("1N").is_err());
        assert!(CountryCode::new("INDIA").is_err());
    }

    #[test]
    fn icon_url_must_be_valid() {
        assert!(IconUrl::new("https://cdn.example.com/flags/in.svg").is_ok());
        assert_eq!(IconUrl::new("flag"), Err(TypeConstraintError::InvalidUrl));
        assert_eq!(IconUrl::new(""), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn rating_is_one_to_five() {
        assert_eq!(Rating::new(5).map(Rating::get), Ok(5));
        assert_eq!(Rating::new(0), Err(TypeConstraintError::InvalidRating));
        assert_eq!(Rating::new(6), Err(TypeConstraintError::InvalidRating));
    }

    #[test]
    fn price_parses_decimal_strings() {
        assert_eq!("12".parse::<Price>().unwrap().minor_units(), 1200);
        assert_eq!("12.5".parse::<Price>().unwrap().minor_units(), 1250);
        assert_eq!("0.07".parse::<Price>().unwrap().minor_units(), 7);
        assert_eq!("19.99".parse::<Price>().unwrap().to_string(), "19.99");
        assert!("-1".parse::<Price>().is_err());
        assert!("1.234".parse::<Price>().is_err());
        assert!(".5".parse::<Price>().is_err());
        assert!("abc".parse::<Price>().is_err());
    }

    #[test]
    fn review_comment_strips_markup() {
        let comment = ReviewComment::new("Great <script>alert(1)</script>fit").unwrap();
        assert_eq!(comment.as_str(), "Great fit");
        assert!(ReviewComment::new("<script>x</script>").is_err());
    }

    #[test]
    fn stock_level_rejects_negative() {
        assert!(StockLevel::new(0).is_ok_and(|s| !s.in_stock()));
        assert_eq!(StockLevel::new(-1), Err(TypeConstraintError::NegativeStock));
    }
}
