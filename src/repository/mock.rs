//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::bank::{Bank, NewBank};
use crate::domain::country::{Country, NewCountry};
use crate::domain::product_variant::{NewProductVariant, ProductVariant};
use crate::domain::review::{NewReview, Review};
use crate::domain::seller_field::{SellerField, SellerFieldSettings};
use crate::domain::state::{NewState, State};
use crate::domain::types::{BankId, CountryId, ReviewId, StateId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    BankReader, BankWriter, CountryReader, CountryWriter, ProductVariantReader,
    ProductVariantWriter, ReviewReader, ReviewWriter, SellerFieldReader, SellerFieldWriter,
    StateReader, StateWriter,
};

mock! {
    pub Repository {}

    impl BankReader for Repository {
        fn get_bank_by_id(&self, id: BankId) -> RepositoryResult<Option<Bank>>;
        fn list_banks(&self) -> RepositoryResult<Vec<Bank>>;
    }

    impl BankWriter for Repository {
        fn create_bank(&self, new_bank: &NewBank) -> RepositoryResult<Bank>;
        fn set_bank_active(&self, id: BankId, is_active: bool) -> RepositoryResult<Bank>;
    }

    impl CountryReader for Repository {
        fn get_country_by_id(&self, id: CountryId) -> RepositoryResult<Option<Country>>;
        fn list_countries(&self) -> RepositoryResult<Vec<Country>>;
    }

    impl CountryWriter for Repository {
        fn create_country(&self, new_country: &NewCountry) -> RepositoryResult<Country>;
        fn set_country_active(&self, id: CountryId, is_active: bool) -> RepositoryResult<Country>;
    }

    impl StateReader for Repository {
        fn get_state_by_id(&self, id: StateId) -> RepositoryResult<Option<State>>;
        fn list_states(&self) -> RepositoryResult<Vec<State>>;
    }

    impl StateWriter for Repository {
        fn create_state(&self, new_state: &NewState) -> RepositoryResult<State>;
        fn set_state_active(&self, id: StateId, is_active: bool) -> RepositoryResult<State>;
    }

    impl SellerFieldReader for Repository {
        fn list_seller_fields(&self) -> RepositoryResult<Vec<SellerField>>;
    }

    impl SellerFieldWriter for Repository {
        fn update_seller_fields(&self, settings: &[SellerFieldSettings]) -> RepositoryResult<usize>;
    }

    impl ProductVariantReader for Repository {
        fn list_product_variants(&self) -> RepositoryResult<Vec<ProductVariant>>;
    }

    impl ProductVariantWriter for Repository {
        fn create_product_variant(
            &self,
            new_variant: &NewProductVariant,
        ) -> RepositoryResult<ProductVariant>;
    }

    impl ReviewReader for Repository {
        fn get_review_by_id(&self, id: ReviewId) -> RepositoryResult<Option<Review>>;
        fn list_reviews(&self) -> RepositoryResult<Vec<Review>>;
    }

    impl ReviewWriter for Repository {
        fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review>;
        fn set_review_published(&self, id: ReviewId, is_published: bool) -> RepositoryResult<Review>;
    }
}
