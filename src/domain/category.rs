use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a product category mirrored from the backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    /// Stable identifier issued by the backend.
    pub id: String,
    /// Display name of the category.
    pub name: String,
    /// Position of the category in menu listings, ascending.
    pub sort_order: i32,
    /// Whether the category is currently offered.
    pub is_active: bool,
    /// Identifier of the account owning the catalog.
    pub owner_id: i32,
    /// Number of products in the category, computed server-side.
    pub product_count: Option<i32>,
    /// Timestamp for when the record was created on the backend.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last backend update to the record.
    pub updated_at: NaiveDateTime,
}

/// Payload used to cache a category row pulled from the backend.
#[derive(Debug, Clone)]
pub struct NewCategory {
    /// Stable identifier issued by the backend.
    pub id: String,
    /// Display name of the category.
    pub name: String,
    /// Position of the category in menu listings, ascending.
    pub sort_order: i32,
    /// Whether the category is currently offered.
    pub is_active: bool,
    /// Identifier of the account owning the catalog.
    pub owner_id: i32,
    /// Number of products in the category, computed server-side.
    pub product_count: Option<i32>,
    /// Timestamp for when the record was created on the backend.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last backend update to the record.
    pub updated_at: NaiveDateTime,
}
