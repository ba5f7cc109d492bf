//! Diesel models for state records.

use diesel::prelude::*;

use crate::domain::state::{NewState as DomainNewState, State as DomainState};
use crate::domain::types::{CountryName, StateId, StateName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::states)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct State {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub is_active: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::states)]
pub struct NewState<'a> {
    pub name: &'a str,
    pub country: &'a str,
    pub is_active: bool,
}

impl TryFrom<State> for DomainState {
    type Error = TypeConstraintError;

    fn try_from(state: State) -> Result<Self, Self::Error> {
        Ok(Self {
            id: StateId::try_from(state.id)?,
            name: StateName::new(state.name)?,
            country: CountryName::new(state.country)?,
            is_active: state.is_active,
        })
    }
}

impl<'a> From<&'a DomainNewState> for NewState<'a> {
    fn from(state: &'a DomainNewState) -> Self {
        Self {
            name: state.name.as_str(),
            country: state.country.as_str(),
            is_active: state.is_active,
        }
    }
}
