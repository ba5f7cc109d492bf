use serde::{Deserialize, Serialize};

use crate::domain::types::{CountryCode, CountryId, CountryName, IconUrl};
use crate::listing::Listable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Country {
    pub id: CountryId,
    pub name: CountryName,
    pub code: CountryCode,
    /// Flag icon shown next to the name.
    pub icon: Option<IconUrl>,
    pub is_active: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCountry {
    pub name: CountryName,
    pub code: CountryCode,
    pub icon: Option<IconUrl>,
    pub is_active: bool,
}

impl NewCountry {
    #[must_use]
    pub fn new(
        name: CountryName,
        code: CountryCode,
        icon: Option<IconUrl>,
        is_active: bool,
    ) -> Self {
        Self {
            name,
            code,
            icon,
            is_active,
        }
    }
}

impl Listable for Country {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
