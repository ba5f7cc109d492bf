//! DTOs used by the seller form settings page.

use serde::Serialize;

use crate::domain::seller_field::SellerField;
use crate::dto::listing::ListPageData;

/// Table of fields plus the total number shown on the form.
#[derive(Debug, Serialize)]
pub struct SellerFieldsPageData {
    pub list: ListPageData<SellerField>,
    pub visible_count: usize,
    pub required_count: usize,
}
