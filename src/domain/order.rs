use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A settled order mirrored from the backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Order {
    /// Identifier issued by the backend.
    pub id: String,
    /// Identifier of the account owning the order.
    pub owner_id: i32,
    /// Human-friendly order number shown on receipts.
    pub order_number: String,
    /// When the order was placed.
    pub order_date: NaiveDateTime,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub discount_percentage: f64,
    pub tax_amount: f64,
    pub tax_percentage: f64,
    pub total: f64,
    /// Backend payment method code.
    pub payment_type: i32,
    /// Backend payment state code.
    pub payment_status: i32,
    /// Backend order lifecycle code.
    pub order_status: i32,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A line within an order, flattened from the nested wire shape.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub product_id: Option<String>,
    pub product_name: String,
    pub product_code: Option<String>,
    pub unit_price: f64,
    pub unit_cost: f64,
    pub quantity: i32,
    pub total_price: f64,
    pub special_request: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// An addon snapshot attached to an order line.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderAddon {
    /// Local auto-increment identifier.
    pub id: i32,
    pub order_item_id: String,
    pub addon_id: String,
    pub addon_name: String,
    pub addon_price: f64,
    pub quantity: i32,
}

/// Payload used to cache an order row pulled from the backend.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub id: String,
    pub owner_id: i32,
    pub order_number: String,
    pub order_date: NaiveDateTime,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub discount_percentage: f64,
    pub tax_amount: f64,
    pub tax_percentage: f64,
    pub total: f64,
    pub payment_type: i32,
    pub payment_status: i32,
    pub order_status: i32,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload used to cache an order line pulled from the backend.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub id: String,
    pub order_id: String,
    pub product_id: Option<String>,
    pub product_name: String,
    pub product_code: Option<String>,
    pub unit_price: f64,
    pub unit_cost: f64,
    pub quantity: i32,
    pub total_price: f64,
    pub special_request: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Payload used to cache an order addon pulled from the backend.
#[derive(Debug, Clone)]
pub struct NewOrderAddon {
    pub order_item_id: String,
    pub addon_id: String,
    pub addon_name: String,
    pub addon_price: f64,
    pub quantity: i32,
}
