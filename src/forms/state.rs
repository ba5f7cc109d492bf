//! Forms for adding states.

use serde::Deserialize;
use validator::Validate;

use crate::domain::state::NewState;
use crate::domain::types::{CountryName, StateName};
use crate::forms::{FormError, checkbox};

#[derive(Debug, Deserialize, Validate)]
pub struct AddStateForm {
    #[validate(length(max = 128))]
    pub name: String,
    #[validate(length(max = 128))]
    pub country: String,
    #[serde(default)]
    pub is_active: Option<String>,
}

impl TryFrom<AddStateForm> for NewState {
    type Error = FormError;

    fn try_from(form: AddStateForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let is_active = checkbox(&form.is_active);
        let name = StateName::new(form.name).map_err(|_| FormError::InvalidName)?;
        let country = CountryName::new(form.country).map_err(|_| FormError::InvalidCountry)?;

        Ok(NewState::new(name, country, is_active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_country() {
        let result = NewState::try_from(AddStateForm {
            name: "Kerala".to_string(),
            country: String::new(),
            is_active: Some("on".to_string()),
        });

        assert!(matches!(result, Err(FormError::InvalidCountry)));
    }

    #[test]
    fn rejects_overlong_name() {
        let result = NewState::try_from(AddStateForm {
            name: "x".repeat(200),
            country: "India".to_string(),
            is_active: None,
        });

        assert!(matches!(result, Err(FormError::Validation(_))));
    }
}
