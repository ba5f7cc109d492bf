//! Database models backing the admin panel repository.

pub mod bank;
#[cfg(feature = "server")]
pub mod config;
pub mod country;
pub mod product_variant;
pub mod review;
pub mod seller_field;
pub mod state;
