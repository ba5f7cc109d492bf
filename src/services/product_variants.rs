//! Product-variant entry and listing.

use crate::domain::product_variant::{NewProductVariant, ProductVariant};
use crate::dto::listing::{ListPageData, ListQuery};
use crate::dto::product_variants::ProductVariantRow;
use crate::forms::product_variant::AddProductVariantForm;
use crate::repository::{ProductVariantReader, ProductVariantWriter};
use crate::services::listing::build_list_page;
use crate::services::{ServiceError, ServiceResult};

/// Variants whose stock is above zero count as active.
pub fn load_product_variants_page<R>(
    repo: &R,
    query: ListQuery,
    page_size: usize,
) -> ServiceResult<ListPageData<ProductVariantRow>>
where
    R: ProductVariantReader + ?Sized,
{
    let variants = repo.list_product_variants().map_err(|err| {
        log::error!("Failed to list product variants: {err}");
        err
    })?;

    Ok(build_list_page(variants, query, page_size).map(ProductVariantRow::from))
}

/// Stores a new variant; a reused SKU is reported as a form error.
pub fn add_product_variant<R>(repo: &R, form: AddProductVariantForm) -> ServiceResult<ProductVariant>
where
    R: ProductVariantWriter + ?Sized,
{
    let new_variant = NewProductVariant::try_from(form)?;

    repo.create_product_variant(&new_variant)
        .map_err(|err| match ServiceError::from(err) {
            ServiceError::Conflict(message) => {
                log::warn!("Rejected duplicate SKU {}: {message}", new_variant.sku);
                ServiceError::Form(format!("SKU {} is already in use.", new_variant.sku))
            }
            other => {
                log::error!("Failed to create product variant: {other}");
                other
            }
        })
}
