//! Product-variant entry form.

use serde::Deserialize;
use validator::Validate;

use crate::domain::product_variant::NewProductVariant;
use crate::domain::types::{Price, ProductName, Sku, StockLevel, VariantOption};
use crate::forms::{FormError, optional_text};

#[derive(Debug, Deserialize, Validate)]
pub struct AddProductVariantForm {
    #[validate(length(max = 256))]
    pub product: String,
    #[validate(length(max = 64))]
    pub sku: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    /// Decimal amount such as `499.00`.
    pub price: String,
    pub stock: String,
}

impl TryFrom<AddProductVariantForm> for NewProductVariant {
    type Error = FormError;

    fn try_from(form: AddProductVariantForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let option = |value: Option<String>| {
            optional_text(value)
                .map(VariantOption::new)
                .transpose()
                .map_err(|_| FormError::InvalidOption)
        };

        let stock = form
            .stock
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::InvalidStock)
            .and_then(|s| StockLevel::new(s).map_err(|_| FormError::InvalidStock))?;

        Ok(NewProductVariant {
            product: ProductName::new(form.product).map_err(|_| FormError::InvalidName)?,
            sku: Sku::new(form.sku).map_err(|_| FormError::InvalidSku)?,
            color: option(form.color)?,
            size: option(form.size)?,
            price: form.price.parse::<Price>().map_err(|_| FormError::InvalidPrice)?,
            stock,
        })
    }
}
