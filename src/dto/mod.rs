//! DTO modules that bridge services with templates.

pub mod auth;
pub mod listing;
pub mod product_variants;
pub mod seller_fields;
