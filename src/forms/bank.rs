//! Forms for adding banks.

use serde::Deserialize;
use validator::Validate;

use crate::domain::bank::NewBank;
use crate::domain::types::{BankName, CountryName, IconUrl};
use crate::forms::{FormError, checkbox, optional_text};

#[derive(Debug, Deserialize, Validate)]
/// Form data posted by the "add bank" modal.
pub struct AddBankForm {
    #[validate(length(max = 128))]
    pub name: String,
    #[validate(length(max = 128))]
    pub country: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// Checkbox; present when ticked.
    #[serde(default)]
    pub is_active: Option<String>,
}

impl TryFrom<AddBankForm> for NewBank {
    type Error = FormError;

    fn try_from(form: AddBankForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let is_active = checkbox(&form.is_active);
        let name = BankName::new(form.name).map_err(|_| FormError::InvalidName)?;
        let country = CountryName::new(form.country).map_err(|_| FormError::InvalidCountry)?;
        let icon = optional_text(form.icon)
            .map(IconUrl::new)
            .transpose()
            .map_err(|_| FormError::InvalidIconUrl)?;

        Ok(NewBank::new(name, country, icon, is_active))
    }
}
