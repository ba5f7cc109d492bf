//! Repository implementation for the seller form configuration.

use diesel::Connection;
use diesel::prelude::*;

use crate::domain::seller_field::{SellerField, SellerFieldSettings};
use crate::models::seller_field::{SellerField as DbSellerField, UpdateSellerField};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, SellerFieldReader, SellerFieldWriter};

impl SellerFieldReader for DieselRepository {
    fn list_seller_fields(&self) -> RepositoryResult<Vec<SellerField>> {
        use crate::schema::seller_fields;

        let mut conn = self.conn()?;
        seller_fields::table
            .order((seller_fields::position.asc(), seller_fields::id.asc()))
            .load::<DbSellerField>(&mut conn)?
            .into_iter()
            .map(|db_field| SellerField::try_from(db_field).map_err(RepositoryError::from))
            .collect()
    }
}

impl SellerFieldWriter for DieselRepository {
    fn update_seller_fields(&self, settings: &[SellerFieldSettings]) -> RepositoryResult<usize> {
        use crate::schema::seller_fields;

        let mut conn = self.conn()?;

        conn.transaction::<usize, diesel::result::Error, _>(|conn| {
            let mut updated = 0;
            for setting in settings {
                let changes: UpdateSellerField = setting.into();
                updated += diesel::update(seller_fields::table.find(setting.id.get()))
                    .set(&changes)
                    .execute(conn)?;
            }
            Ok(updated)
        })
        .map_err(RepositoryError::from)
    }
}
