//! Repository implementation for product variants.

use diesel::prelude::*;

use crate::domain::product_variant::{NewProductVariant, ProductVariant};
use crate::models::product_variant::{
    NewProductVariant as DbNewProductVariant, ProductVariant as DbProductVariant,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductVariantReader, ProductVariantWriter};

impl ProductVariantReader for DieselRepository {
    fn list_product_variants(&self) -> RepositoryResult<Vec<ProductVariant>> {
        use crate::schema::product_variants;

        let mut conn = self.conn()?;
        product_variants::table
            .order((
                product_variants::created_at.desc(),
                product_variants::id.desc(),
            ))
            .load::<DbProductVariant>(&mut conn)?
            .into_iter()
            .map(|db_variant| ProductVariant::try_from(db_variant).map_err(RepositoryError::from))
            .collect()
    }
}

impl ProductVariantWriter for DieselRepository {
    fn create_product_variant(
        &self,
        new_variant: &NewProductVariant,
    ) -> RepositoryResult<ProductVariant> {
        use crate::schema::product_variants;

        let mut conn = self.conn()?;
        let db_new_variant: DbNewProductVariant = new_variant.into();

        let db_variant = diesel::insert_into(product_variants::table)
            .values(&db_new_variant)
            .get_result::<DbProductVariant>(&mut conn)?;

        ProductVariant::try_from(db_variant).map_err(RepositoryError::from)
    }
}
