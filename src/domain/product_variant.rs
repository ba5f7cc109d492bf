use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Price, ProductName, ProductVariantId, Sku, StockLevel, VariantOption};
use crate::listing::Listable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    pub id: ProductVariantId,
    pub product: ProductName,
    pub sku: Sku,
    pub color: Option<VariantOption>,
    pub size: Option<VariantOption>,
    pub price: Price,
    pub stock: StockLevel,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewProductVariant {
    pub product: ProductName,
    pub sku: Sku,
    pub color: Option<VariantOption>,
    pub size: Option<VariantOption>,
    pub price: Price,
    pub stock: StockLevel,
}

impl Listable for ProductVariant {
    fn name(&self) -> &str {
        self.product.as_str()
    }

    /// Variants with units on hand count as active.
    fn is_active(&self) -> bool {
        self.stock.in_stock()
    }
}
