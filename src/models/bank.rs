//! Diesel models for bank records.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::bank::{Bank as DomainBank, NewBank as DomainNewBank};
use crate::domain::types::{BankId, BankName, CountryName, IconUrl, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::banks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::bank::Bank`].
pub struct Bank {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub icon: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::banks)]
/// Insertable form of [`Bank`].
pub struct NewBank<'a> {
    pub name: &'a str,
    pub country: &'a str,
    pub icon: Option<&'a str>,
    pub is_active: bool,
}

impl TryFrom<Bank> for DomainBank {
    type Error = TypeConstraintError;

    fn try_from(bank: Bank) -> Result<Self, Self::Error> {
        Ok(Self {
            id: BankId::try_from(bank.id)?,
            name: BankName::new(bank.name)?,
            country: CountryName::new(bank.country)?,
            icon: bank.icon.map(IconUrl::new).transpose()?,
            is_active: bank.is_active,
            created_at: bank.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewBank> for NewBank<'a> {
    fn from(bank: &'a DomainNewBank) -> Self {
        Self {
            name: bank.name.as_str(),
            country: bank.country.as_str(),
            icon: bank.icon.as_ref().map(IconUrl::as_str),
            is_active: bank.is_active,
        }
    }
}
