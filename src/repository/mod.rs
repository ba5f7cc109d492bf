//! Persistence traits and their Diesel-backed implementation.
//!
//! Readers hand back complete, ordered collections; filtering and paging is
//! done in memory by [`crate::listing::FilterableList`].

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::bank::{Bank, NewBank};
use crate::domain::country::{Country, NewCountry};
use crate::domain::product_variant::{NewProductVariant, ProductVariant};
use crate::domain::review::{NewReview, Review};
use crate::domain::seller_field::{SellerField, SellerFieldSettings};
use crate::domain::state::{NewState, State};
use crate::domain::types::{BankId, CountryId, ReviewId, StateId};
use crate::repository::errors::RepositoryResult;

pub mod bank;
pub mod country;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod product_variant;
pub mod review;
pub mod seller_field;
pub mod state;

/// Diesel repository sharing one SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait BankReader {
    fn get_bank_by_id(&self, id: BankId) -> RepositoryResult<Option<Bank>>;
    /// All banks ordered by name.
    fn list_banks(&self) -> RepositoryResult<Vec<Bank>>;
}

pub trait BankWriter {
    fn create_bank(&self, new_bank: &NewBank) -> RepositoryResult<Bank>;
    fn set_bank_active(&self, id: BankId, is_active: bool) -> RepositoryResult<Bank>;
}

pub trait CountryReader {
    fn get_country_by_id(&self, id: CountryId) -> RepositoryResult<Option<Country>>;
    /// All countries ordered by name.
    fn list_countries(&self) -> RepositoryResult<Vec<Country>>;
}

pub trait CountryWriter {
    fn create_country(&self, new_country: &NewCountry) -> RepositoryResult<Country>;
    fn set_country_active(&self, id: CountryId, is_active: bool) -> RepositoryResult<Country>;
}

pub trait StateReader {
    fn get_state_by_id(&self, id: StateId) -> RepositoryResult<Option<State>>;
    /// All states ordered by country, then name.
    fn list_states(&self) -> RepositoryResult<Vec<State>>;
}

pub trait StateWriter {
    fn create_state(&self, new_state: &NewState) -> RepositoryResult<State>;
    fn set_state_active(&self, id: StateId, is_active: bool) -> RepositoryResult<State>;
}

pub trait SellerFieldReader {
    /// All fields in form order.
    fn list_seller_fields(&self) -> RepositoryResult<Vec<SellerField>>;
}

pub trait SellerFieldWriter {
    /// Applies every setting in one transaction, returning the rows touched.
    fn update_seller_fields(&self, settings: &[SellerFieldSettings]) -> RepositoryResult<usize>;
}

pub trait ProductVariantReader {
    /// All variants, newest first.
    fn list_product_variants(&self) -> RepositoryResult<Vec<ProductVariant>>;
}

pub trait ProductVariantWriter {
    fn create_product_variant(
        &self,
        new_variant: &NewProductVariant,
    ) -> RepositoryResult<ProductVariant>;
}

pub trait ReviewReader {
    fn get_review_by_id(&self, id: ReviewId) -> RepositoryResult<Option<Review>>;
    /// All reviews, newest first.
    fn list_reviews(&self) -> RepositoryResult<Vec<Review>>;
}

pub trait ReviewWriter {
    fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review>;
    fn set_review_published(&self, id: ReviewId, is_published: bool) -> RepositoryResult<Review>;
}
