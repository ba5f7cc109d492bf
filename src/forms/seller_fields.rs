//! Seller form settings: one checkbox pair per configured field.

use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::seller_field::{SellerField, SellerFieldSettings};
use crate::domain::types::SellerFieldId;
use crate::forms::FormError;

/// One `field=<id>` per row rendered on the page, plus one `visible=<id>` /
/// `required=<id>` per ticked checkbox.
#[derive(Debug, Default, Deserialize)]
pub struct SellerFieldsForm {
    #[serde(default)]
    pub field: Vec<i32>,
    #[serde(default)]
    pub visible: Vec<i32>,
    #[serde(default)]
    pub required: Vec<i32>,
}

impl SellerFieldsForm {
    /// Parses a urlencoded body where keys may repeat.
    pub fn from_body(body: &[u8]) -> Result<Self, FormError> {
        serde_html_form::from_bytes(body).map_err(|_| FormError::Malformed)
    }
}

/// Checked ids after validation.
#[derive(Debug)]
pub struct SellerFieldsPayload {
    shown: HashSet<SellerFieldId>,
    visible: HashSet<SellerFieldId>,
    required: HashSet<SellerFieldId>,
}

impl TryFrom<SellerFieldsForm> for SellerFieldsPayload {
    type Error = FormError;

    fn try_from(form: SellerFieldsForm) -> Result<Self, Self::Error> {
        let ids = |raw: Vec<i32>| {
            raw.into_iter()
                .map(|id| SellerFieldId::new(id).map_err(|_| FormError::InvalidFieldId))
                .collect::<Result<HashSet<_>, _>>()
        };

        Ok(Self {
            shown: ids(form.field)?,
            visible: ids(form.visible)?,
            required: ids(form.required)?,
        })
    }
}

impl SellerFieldsPayload {
    /// Settings for every field rendered on the form; unknown ids are rejected.
    ///
    /// A rendered field left unticked is hidden and optional. Fields that
    /// were not on the page keep their stored state.
    pub fn into_settings(
        self,
        fields: &[SellerField],
    ) -> Result<Vec<SellerFieldSettings>, FormError> {
        let known: HashSet<SellerFieldId> = fields.iter().map(|f| f.id).collect();
        if !self.shown.is_subset(&known)
            || !self.visible.is_subset(&self.shown)
            || !self.required.is_subset(&self.shown)
        {
            return Err(FormError::InvalidFieldId);
        }

        Ok(fields
            .iter()
            .filter(|field| self.shown.contains(&field.id))
            .map(|field| {
                SellerFieldSettings::new(
                    field.id,
                    self.visible.contains(&field.id),
                    self.required.contains(&field.id),
                )
            })
            .collect())
    }
}
