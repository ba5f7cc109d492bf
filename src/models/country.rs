//! Diesel models for country records.

use diesel::prelude::*;

use crate::domain::country::{Country as DomainCountry, NewCountry as DomainNewCountry};
use crate::domain::types::{CountryCode, CountryId, CountryName, IconUrl, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::countries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Country {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub icon: Option<String>,
    pub is_active: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::countries)]
pub struct NewCountry<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub icon: Option<&'a str>,
    pub is_active: bool,
}

impl TryFrom<Country> for DomainCountry {
    type Error = TypeConstraintError;

    fn try_from(country: Country) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CountryId::try_from(country.id)?,
            name: CountryName::new(country.name)?,
            code: CountryCode::new(country.code)?,
            icon: country.icon.map(IconUrl::new).transpose()?,
            is_active: country.is_active,
        })
    }
}

impl<'a> From<&'a DomainNewCountry> for NewCountry<'a> {
    fn from(country: &'a DomainNewCountry) -> Self {
        Self {
            name: country.name.as_str(),
            code: country.code.as_str(),
            icon: country.icon.as_ref().map(IconUrl::as_str),
            is_active: country.is_active,
        }
    }
}
