//! Diesel models for product variants.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product_variant::{
    NewProductVariant as DomainNewProductVariant, ProductVariant as DomainProductVariant,
};
use crate::domain::types::{
    Price, ProductName, ProductVariantId, Sku, StockLevel, TypeConstraintError, VariantOption,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_variants)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductVariant {
    pub id: i32,
    pub product: String,
    pub sku: String,
    pub color: Option<String>,
    pub size: Option<String>,
    pub price_cents: i64,
    pub stock: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_variants)]
pub struct NewProductVariant<'a> {
    pub product: &'a str,
    pub sku: &'a str,
    pub color: Option<&'a str>,
    pub size: Option<&'a str>,
    pub price_cents: i64,
    pub stock: i32,
}

impl TryFrom<ProductVariant> for DomainProductVariant {
    type Error = TypeConstraintError;

    fn try_from(variant: ProductVariant) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductVariantId::try_from(variant.id)?,
            product: ProductName::new(variant.product)?,
            sku: Sku::new(variant.sku)?,
            color: variant.color.map(VariantOption::new).transpose()?,
            size: variant.size.map(VariantOption::new).transpose()?,
            price: Price::from_minor_units(variant.price_cents)?,
            stock: StockLevel::new(variant.stock)?,
            created_at: variant.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewProductVariant> for NewProductVariant<'a> {
    fn from(variant: &'a DomainNewProductVariant) -> Self {
        Self {
            product: variant.product.as_str(),
            sku: variant.sku.as_str(),
            color: variant.color.as_ref().map(VariantOption::as_str),
            size: variant.size.as_ref().map(VariantOption::as_str),
            price_cents: variant.price.minor_units(),
            stock: variant.stock.get(),
        }
    }
}
