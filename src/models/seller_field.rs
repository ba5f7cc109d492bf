//! Diesel models for seller form fields.

use diesel::prelude::*;

use crate::domain::seller_field::{
    SellerField as DomainSellerField, SellerFieldSettings as DomainSellerFieldSettings,
};
use crate::domain::types::{FieldLabel, SellerFieldId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::seller_fields)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SellerField {
    pub id: i32,
    pub label: String,
    pub visible: bool,
    pub required: bool,
    pub position: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::seller_fields)]
/// Flags written when the settings form is saved.
pub struct UpdateSellerField {
    pub visible: bool,
    pub required: bool,
}

impl TryFrom<SellerField> for DomainSellerField {
    type Error = TypeConstraintError;

    fn try_from(field: SellerField) -> Result<Self, Self::Error> {
        Ok(Self {
            id: SellerFieldId::try_from(field.id)?,
            label: FieldLabel::new(field.label)?,
            visible: field.visible,
            required: field.visible && field.required,
            position: field.position,
        })
    }
}

impl From<&DomainSellerFieldSettings> for UpdateSellerField {
    fn from(settings: &DomainSellerFieldSettings) -> Self {
        Self {
            visible: settings.visible,
            required: settings.required,
        }
    }
}
