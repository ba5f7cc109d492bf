//! Country list page and its writes.

use crate::domain::country::{Country, NewCountry};
use crate::domain::types::CountryId;
use crate::dto::listing::{ListPageData, ListQuery};
use crate::forms::country::AddCountryForm;
use crate::repository::{CountryReader, CountryWriter};
use crate::services::listing::build_list_page;
use crate::services::{ServiceError, ServiceResult};

pub fn load_countries_page<R>(
    repo: &R,
    query: ListQuery,
    page_size: usize,
) -> ServiceResult<ListPageData<Country>>
where
    R: CountryReader + ?Sized,
{
    let countries = repo.list_countries().map_err(|err| {
        log::error!("Failed to list countries: {err}");
        err
    })?;

    Ok(build_list_page(countries, query, page_size))
}

/// Validates the form and stores a new country. Duplicate codes surface as
/// [`ServiceError::Conflict`].
pub fn add_country<R>(repo: &R, form: AddCountryForm) -> ServiceResult<Country>
where
    R: CountryWriter + ?Sized,
{
    let new_country = NewCountry::try_from(form)?;

    repo.create_country(&new_country).map_err(|err| {
        log::error!("Failed to create country: {err}");
        ServiceError::from(err)
    })
}

pub fn toggle_country<R>(repo: &R, country_id: i32) -> ServiceResult<Country>
where
    R: CountryReader + CountryWriter + ?Sized,
{
    let country_id = CountryId::new(country_id)?;

    let country = repo
        .get_country_by_id(country_id)
        .map_err(|err| {
            log::error!("Failed to load country {country_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    repo.set_country_active(country.id, !country.is_active)
        .map_err(|err| {
            log::error!("Failed to update country {country_id}: {err}");
            ServiceError::from(err)
        })
}
