//! DTOs used by the product-variant page.

use serde::Serialize;

use crate::domain::product_variant::ProductVariant;

/// Variant row with the price already formatted for display.
#[derive(Debug, Serialize)]
pub struct ProductVariantRow {
    pub id: i32,
    pub product: String,
    pub sku: String,
    pub color: Option<String>,
    pub size: Option<String>,
    pub price: String,
    pub stock: i32,
    pub in_stock: bool,
}

impl From<ProductVariant> for ProductVariantRow {
    fn from(variant: ProductVariant) -> Self {
        Self {
            id: variant.id.get(),
            product: variant.product.into_inner(),
            sku: variant.sku.into_inner(),
            color: variant.color.map(|c| c.into_inner()),
            size: variant.size.map(|s| s.into_inner()),
            price: variant.price.to_string(),
            stock: variant.stock.get(),
            in_stock: variant.stock.in_stock(),
        }
    }
}
