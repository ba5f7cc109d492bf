//! Forms for adding countries.

use serde::Deserialize;
use validator::Validate;

use crate::domain::country::NewCountry;
use crate::domain::types::{CountryCode, CountryName, IconUrl};
use crate::forms::{FormError, checkbox, optional_text};

#[derive(Debug, Deserialize, Validate)]
pub struct AddCountryForm {
    #[validate(length(max = 128))]
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub is_active: Option<String>,
}

impl TryFrom<AddCountryForm> for NewCountry {
    type Error = FormError;

    fn try_from(form: AddCountryForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let is_active = checkbox(&form.is_active);
        let name = CountryName::new(form.name).map_err(|_| FormError::InvalidName)?;
        let code = CountryCode::new(form.code).map_err(|_| FormError::InvalidCountryCode)?;
        let icon = optional_text(form.icon)
            .map(IconUrl::new)
            .transpose()
            .map_err(|_| FormError::InvalidIconUrl)?;

        Ok(NewCountry::new(name, code, icon, is_active))
    }
}
