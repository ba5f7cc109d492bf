//! Seller registration form configuration.

use crate::dto::listing::ListQuery;
use crate::dto::seller_fields::SellerFieldsPageData;
use crate::forms::seller_fields::{SellerFieldsForm, SellerFieldsPayload};
use crate::repository::{SellerFieldReader, SellerFieldWriter};
use crate::services::ServiceResult;
use crate::services::listing::build_list_page;

/// Loads the configured fields together with the visible/required totals.
pub fn load_seller_fields_page<R>(
    repo: &R,
    query: ListQuery,
    page_size: usize,
) -> ServiceResult<SellerFieldsPageData>
where
    R: SellerFieldReader + ?Sized,
{
    let fields = repo.list_seller_fields().map_err(|err| {
        log::error!("Failed to list seller fields: {err}");
        err
    })?;

    let visible_count = fields.iter().filter(|f| f.visible).count();
    let required_count = fields.iter().filter(|f| f.required).count();

    Ok(SellerFieldsPageData {
        list: build_list_page(fields, query, page_size),
        visible_count,
        required_count,
    })
}

/// Stores the checkbox state of every field rendered on the form at once.
///
/// Returns the number of rows written.
pub fn save_seller_fields<R>(repo: &R, body: &[u8]) -> ServiceResult<usize>
where
    R: SellerFieldReader + SellerFieldWriter + ?Sized,
{
    let form = SellerFieldsForm::from_body(body)?;
    let payload = SellerFieldsPayload::try_from(form)?;

    let fields = repo.list_seller_fields().map_err(|err| {
        log::error!("Failed to list seller fields: {err}");
        err
    })?;

    let settings = payload.into_settings(&fields)?;

    let updated = repo.update_seller_fields(&settings).map_err(|err| {
        log::error!("Failed to save seller fields: {err}");
        err
    })?;

    log::info!("Saved settings for {updated} seller fields");
    Ok(updated)
}
