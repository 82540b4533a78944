use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a sellable product mirrored from the backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Stable identifier issued by the backend. Survives a wholesale cache
    /// replace, which is what makes cart relinking possible.
    pub id: String,
    /// Display name of the product.
    pub name: String,
    /// Optional longer description shown on the detail screen.
    pub description: Option<String>,
    /// Sale price per unit.
    pub price: f64,
    /// Optional acquisition cost per unit.
    pub cost_price: Option<f64>,
    /// Optional URL of the product image.
    pub image_url: Option<String>,
    /// Owning category; nulled when the category row is deleted.
    pub category_id: Option<String>,
    /// Identifier of the account owning the catalog.
    pub owner_id: i32,
    /// Drives the default sort of product listings, ascending.
    pub popularity_rank: Option<i32>,
    /// Optional short code printed on receipts.
    pub product_code: Option<String>,
    /// Optional unit of sale, for example "cup".
    pub unit: Option<String>,
    /// Optional stock keeping unit identifier.
    pub sku_code: Option<String>,
    /// Optional stock on hand.
    pub stock_quantity: Option<i32>,
    /// Optional low-stock threshold.
    pub min_stock_quantity: Option<i32>,
    /// Optional display color used when the product has no image.
    pub color_hex: Option<String>,
    /// Whether SKU tracking is enabled for the product.
    pub is_sku_enabled: Option<bool>,
    /// Whether stock tracking is enabled for the product.
    pub is_stock_enabled: Option<bool>,
    /// Gates whether addon groups are offered when adding to cart.
    pub has_additional_options: Option<bool>,
    /// Whether the product is currently offered.
    pub is_active: bool,
    /// Timestamp for when the record was created on the backend.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last backend update to the record.
    pub updated_at: NaiveDateTime,
}

/// Payload used to cache a product row pulled from the backend.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub cost_price: Option<f64>,
    pub image_url: Option<String>,
    pub category_id: Option<String>,
    pub owner_id: i32,
    pub popularity_rank: Option<i32>,
    pub product_code: Option<String>,
    pub unit: Option<String>,
    pub sku_code: Option<String>,
    pub stock_quantity: Option<i32>,
    pub min_stock_quantity: Option<i32>,
    pub color_hex: Option<String>,
    pub is_sku_enabled: Option<bool>,
    pub is_stock_enabled: Option<bool>,
    pub has_additional_options: Option<bool>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Query definition used to list cached products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Restrict the listing to a single category.
    pub category_id: Option<String>,
    /// Whether inactive products should be included in the results.
    pub include_inactive: bool,
}

impl ProductListQuery {
    /// Construct a query over all active products.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results to products belonging to `category_id`.
    pub fn category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Include inactive products in the results.
    pub fn include_inactive(mut self) -> Self {
        self.include_inactive = true;
        self
    }
}
