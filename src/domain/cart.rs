use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A line in the local shopping cart.
///
/// Display fields are snapshots captured when the line was added: a later
/// catalog sync never changes the name or price quoted to the customer.
/// `product_id` is an enrichment only — it goes null while the product table
/// is mid-replace and may be repaired afterwards by name matching.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartItem {
    /// Local auto-increment identifier.
    pub id: i32,
    /// Link back to the cached product, when one matches.
    pub product_id: Option<String>,
    /// Product name at add time; also the key used for relinking.
    pub product_name: String,
    /// Product image at add time.
    pub product_image_url: Option<String>,
    /// Display color at add time.
    pub product_color_hex: Option<String>,
    /// Price per unit at add time.
    pub unit_price: f64,
    /// Number of units, at least 1.
    pub quantity: i32,
    /// Free-form customer request attached to the line.
    pub special_request: Option<String>,
    /// Timestamp for when the line was added.
    pub created_at: NaiveDateTime,
}

/// An addon snapshot attached to a cart line.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartAddon {
    /// Local auto-increment identifier.
    pub id: i32,
    /// Owning cart line; rows are removed with it.
    pub cart_item_id: i32,
    pub addon_id: String,
    pub addon_name: String,
    pub addon_price: f64,
    pub addon_group_id: String,
    pub addon_group_name: String,
}

/// Payload for a new cart line.
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub product_id: Option<String>,
    pub product_name: String,
    pub product_image_url: Option<String>,
    pub product_color_hex: Option<String>,
    pub unit_price: f64,
    pub quantity: i32,
    pub special_request: Option<String>,
    pub created_at: NaiveDateTime,
}

impl NewCartItem {
    /// Build a cart line payload with the supplied snapshot details and the
    /// current timestamp.
    pub fn new(product_name: impl Into<String>, unit_price: f64, quantity: i32) -> Self {
        Self {
            product_id: None,
            product_name: product_name.into(),
            product_image_url: None,
            product_color_hex: None,
            unit_price,
            quantity,
            special_request: None,
            created_at: chrono::Local::now().naive_local(),
        }
    }

    /// Link the line to a cached product.
    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    /// Attach an image snapshot to the line.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.product_image_url = Some(image_url.into());
        self
    }

    /// Attach a display color snapshot to the line.
    pub fn with_color_hex(mut self, color_hex: impl Into<String>) -> Self {
        self.product_color_hex = Some(color_hex.into());
        self
    }

    /// Attach a customer request to the line.
    pub fn with_special_request(mut self, request: impl Into<String>) -> Self {
        self.special_request = Some(request.into());
        self
    }
}

/// Payload for an addon snapshot inserted together with its cart line.
#[derive(Debug, Clone)]
pub struct NewCartAddon {
    pub addon_id: String,
    pub addon_name: String,
    pub addon_price: f64,
    pub addon_group_id: String,
    pub addon_group_name: String,
}

impl NewCartAddon {
    pub fn new(
        addon_id: impl Into<String>,
        addon_name: impl Into<String>,
        addon_price: f64,
        addon_group_id: impl Into<String>,
        addon_group_name: impl Into<String>,
    ) -> Self {
        Self {
            addon_id: addon_id.into(),
            addon_name: addon_name.into(),
            addon_price,
            addon_group_id: addon_group_id.into(),
            addon_group_name: addon_group_name.into(),
        }
    }
}
