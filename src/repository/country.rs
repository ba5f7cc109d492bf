//! Repository implementation for countries.

use diesel::prelude::*;

use crate::domain::country::{Country, NewCountry};
use crate::domain::types::CountryId;
use crate::models::country::{Country as DbCountry, NewCountry as DbNewCountry};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CountryReader, CountryWriter, DieselRepository};

impl CountryReader for DieselRepository {
    fn get_country_by_id(&self, id: CountryId) -> RepositoryResult<Option<Country>> {
        use crate::schema::countries;

        let mut conn = self.conn()?;
        let db_country = countries::table
            .find(id.get())
            .first::<DbCountry>(&mut conn)
            .optional()?;

        db_country
            .map(Country::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_countries(&self) -> RepositoryResult<Vec<Country>> {
        use crate::schema::countries;

        let mut conn = self.conn()?;
        countries::table
            .order(countries::name.asc())
            .load::<DbCountry>(&mut conn)?
            .into_iter()
            .map(|db_country| Country::try_from(db_country).map_err(RepositoryError::from))
            .collect()
    }
}

impl CountryWriter for DieselRepository {
    fn create_country(&self, new_country: &NewCountry) -> RepositoryResult<Country> {
        use crate::schema::countries;

        let mut conn = self.conn()?;
        let db_new_country: DbNewCountry = new_country.into();

        let db_country = diesel::insert_into(countries::table)
            .values(&db_new_country)
            .get_result::<DbCountry>(&mut conn)?;

        Country::try_from(db_country).map_err(RepositoryError::from)
    }

    fn set_country_active(&self, id: CountryId, is_active: bool) -> RepositoryResult<Country> {
        use crate::schema::countries;

        let mut conn = self.conn()?;
        let db_country = diesel::update(countries::table.find(id.get()))
            .set(countries::is_active.eq(is_active))
            .get_result::<DbCountry>(&mut conn)?;

        Country::try_from(db_country).map_err(RepositoryError::from)
    }
}
