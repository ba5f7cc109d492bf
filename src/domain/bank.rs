use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BankId, BankName, CountryName, IconUrl};
use crate::listing::Listable;

/// Bank offered to sellers for payouts.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bank {
    pub id: BankId,
    pub name: BankName,
    pub country: CountryName,
    pub icon: Option<IconUrl>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewBank {
    pub name: BankName,
    pub country: CountryName,
    pub icon: Option<IconUrl>,
    pub is_active: bool,
}

impl NewBank {
    #[must_use]
    pub fn new(
        name: BankName,
        country: CountryName,
        icon: Option<IconUrl>,
        is_active: bool,
    ) -> Self {
        Self {
            name,
            country,
            icon,
            is_active,
        }
    }
}

impl Listable for Bank {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
