//! Seller registration form configuration.

use serde::{Deserialize, Serialize};

use crate::domain::types::{FieldLabel, SellerFieldId};
use crate::listing::Listable;

/// One input on the seller registration form.
///
/// A hidden field is never required; [`SellerFieldSettings::new`] enforces it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SellerField {
    pub id: SellerFieldId,
    pub label: FieldLabel,
    pub visible: bool,
    pub required: bool,
    pub position: i32,
}

/// Visibility and requirement flags for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SellerFieldSettings {
    pub id: SellerFieldId,
    pub visible: bool,
    pub required: bool,
}

impl SellerFieldSettings {
    #[must_use]
    pub fn new(id: SellerFieldId, visible: bool, required: bool) -> Self {
        Self {
            id,
            visible,
            required: visible && required,
        }
    }
}

impl Listable for SellerField {
    fn name(&self) -> &str {
        self.label.as_str()
    }

    /// Visible fields count as active.
    fn is_active(&self) -> bool {
        self.visible
    }
}
