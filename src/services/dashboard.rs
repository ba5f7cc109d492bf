//! Overview numbers shown on the landing page.

use serde::Serialize;

use crate::listing::Listable;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    BankReader, CountryReader, ProductVariantReader, ReviewReader, StateReader,
};
use crate::services::ServiceResult;

/// Active and total record counts for one collection.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct CollectionSummary {
    pub active: usize,
    pub total: usize,
}

impl CollectionSummary {
    fn of<T: Listable>(records: &[T]) -> Self {
        Self {
            active: records.iter().filter(|r| r.is_active()).count(),
            total: records.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub banks: CollectionSummary,
    pub countries: CollectionSummary,
    pub states: CollectionSummary,
    /// Active means in stock.
    pub product_variants: CollectionSummary,
    /// Active means published.
    pub reviews: CollectionSummary,
}

fn summarize<T: Listable>(
    what: &str,
    records: RepositoryResult<Vec<T>>,
) -> ServiceResult<CollectionSummary> {
    let records = records.map_err(|err| {
        log::error!("Failed to load {what} for the dashboard: {err}");
        err
    })?;
    Ok(CollectionSummary::of(&records))
}

pub fn load_dashboard<R>(repo: &R) -> ServiceResult<DashboardData>
where
    R: BankReader + CountryReader + StateReader + ProductVariantReader + ReviewReader + ?Sized,
{
    Ok(DashboardData {
        banks: summarize("banks", repo.list_banks())?,
        countries: summarize("countries", repo.list_countries())?,
        states: summarize("states", repo.list_states())?,
        product_variants: summarize("product variants", repo.list_product_variants())?,
        reviews: summarize("reviews", repo.list_reviews())?,
    })
}
