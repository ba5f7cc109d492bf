//! Domain records managed through the admin panel.

pub mod auth;
pub mod bank;
pub mod country;
pub mod product_variant;
pub mod review;
pub mod seller_field;
pub mod state;
pub mod types;
