use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A set of related addons offered together, for example "Milk options".
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AddonGroup {
    /// Stable identifier issued by the backend.
    pub id: String,
    /// Display name of the group.
    pub name: String,
    /// Whether the customer must pick at least one addon from the group.
    pub is_required: bool,
    /// Caps the selection at one addon regardless of `max_selection`.
    pub is_single_selection: bool,
    /// Minimum number of addons that must be selected.
    pub min_selection: Option<i32>,
    /// Maximum number of addons that may be selected.
    pub max_selection: Option<i32>,
    /// Position of the group in listings, ascending.
    pub sort_order: i32,
    /// Whether the group is currently offered.
    pub is_active: bool,
    /// Identifier of the account owning the catalog.
    pub owner_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload used to cache an addon group row pulled from the backend.
#[derive(Debug, Clone)]
pub struct NewAddonGroup {
    pub id: String,
    pub name: String,
    pub is_required: bool,
    pub is_single_selection: bool,
    pub min_selection: Option<i32>,
    pub max_selection: Option<i32>,
    pub sort_order: i32,
    pub is_active: bool,
    pub owner_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// An optional paid customization attachable to a product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Addon {
    /// Stable identifier issued by the backend.
    pub id: String,
    /// Display name of the addon.
    pub name: String,
    /// Price added per unit when the addon is selected.
    pub price: f64,
    /// Position of the addon within its group, ascending.
    pub sort_order: i32,
    /// Whether the addon is currently offered.
    pub is_active: bool,
    /// Identifier of the account owning the catalog.
    pub owner_id: i32,
    /// Canonical owning group, decided at sync time; addons also listed
    /// standalone keep the group attribution from the nested copy.
    pub addon_group_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload used to cache an addon row pulled from the backend.
#[derive(Debug, Clone)]
pub struct NewAddon {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub sort_order: i32,
    pub is_active: bool,
    pub owner_id: i32,
    pub addon_group_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
