use serde::{Deserialize, Serialize};

use crate::domain::types::{CountryName, StateId, StateName};
use crate::listing::Listable;

/// State or province a seller can register in.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct State {
    pub id: StateId,
    pub name: StateName,
    pub country: CountryName,
    pub is_active: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewState {
    pub name: StateName,
    pub country: CountryName,
    pub is_active: bool,
}

impl NewState {
    #[must_use]
    pub fn new(name: StateName, country: CountryName, is_active: bool) -> Self {
        Self {
            name,
            country,
            is_active,
        }
    }
}

impl Listable for State {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
