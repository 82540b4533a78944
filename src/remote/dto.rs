//! Wire shapes returned by the backend, plus their mapping into local cache
//! payloads. Field names follow the backend's snake_case JSON.

use serde::Deserialize;

use crate::domain::addon::{NewAddon, NewAddonGroup};
use crate::domain::category::NewCategory;
use crate::domain::order::{NewOrder, NewOrderAddon, NewOrderItem};
use crate::domain::product::NewProduct;
use crate::remote::parse_remote_timestamp;

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub user_id: i32,
    #[serde(default)]
    pub product_count: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub cost_price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    pub user_id: i32,
    #[serde(default)]
    pub popularity_rank: Option<i32>,
    #[serde(default)]
    pub product_code: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub sku_code: Option<String>,
    #[serde(default)]
    pub stock_quantity: Option<i32>,
    #[serde(default)]
    pub min_stock_quantity: Option<i32>,
    #[serde(default)]
    pub selected_color_hex: Option<String>,
    #[serde(default)]
    pub is_sku_enabled: Option<bool>,
    #[serde(default)]
    pub is_stock_enabled: Option<bool>,
    #[serde(default)]
    pub has_additional_options: Option<bool>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
    /// Category embedded in the product payload; used by the products-only
    /// refresh to keep the category cache warm.
    #[serde(default)]
    pub category: Option<CategoryDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddonGroupDto {
    pub id: String,
    pub name: String,
    pub is_required: bool,
    pub is_single_selection: bool,
    #[serde(default)]
    pub min_selection: Option<i32>,
    #[serde(default)]
    pub max_selection: Option<i32>,
    pub sort_order: i32,
    pub is_active: bool,
    pub user_id: i32,
    pub created_at: String,
    pub updated_at: String,
    /// Addons nested under the group; these take priority over standalone
    /// copies during sync.
    #[serde(default)]
    pub addons: Option<Vec<AddonDto>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddonDto {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub sort_order: i32,
    pub is_active: bool,
    pub user_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrdersData {
    pub orders: Vec<OrderDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderDto {
    pub id: String,
    pub user_id: i32,
    pub order_number: String,
    pub order_date: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
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
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub items: Option<Vec<OrderItemDto>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemDto {
    pub id: String,
    #[serde(default)]
    pub product_id: Option<String>,
    pub product_name: String,
    #[serde(default)]
    pub product_code: Option<String>,
    pub unit_price: f64,
    pub unit_cost: f64,
    pub quantity: i32,
    pub total_price: f64,
    #[serde(default)]
    pub special_request: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub addons: Option<Vec<OrderAddonDto>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderAddonDto {
    pub addon_id: String,
    pub addon_name: String,
    pub addon_price: f64,
    pub quantity: i32,
}

impl CategoryDto {
    pub fn into_new_category(self) -> NewCategory {
        NewCategory {
            id: self.id,
            name: self.name,
            sort_order: self.sort_order,
            is_active: self.is_active,
            owner_id: self.user_id,
            product_count: self.product_count,
            created_at: parse_remote_timestamp(&self.created_at),
            updated_at: parse_remote_timestamp(&self.updated_at),
        }
    }
}

impl ProductDto {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            cost_price: self.cost_price,
            image_url: self.image_url,
            category_id: self.category_id,
            owner_id: self.user_id,
            popularity_rank: self.popularity_rank,
            product_code: self.product_code,
            unit: self.unit,
            sku_code: self.sku_code,
            stock_quantity: self.stock_quantity,
            min_stock_quantity: self.min_stock_quantity,
            color_hex: self.selected_color_hex,
            is_sku_enabled: self.is_sku_enabled,
            is_stock_enabled: self.is_stock_enabled,
            has_additional_options: self.has_additional_options,
            is_active: self.is_active,
            created_at: parse_remote_timestamp(&self.created_at),
            updated_at: parse_remote_timestamp(&self.updated_at),
        }
    }
}

impl AddonGroupDto {
    pub fn into_new_addon_group(self) -> NewAddonGroup {
        NewAddonGroup {
            id: self.id,
            name: self.name,
            is_required: self.is_required,
            is_single_selection: self.is_single_selection,
            min_selection: self.min_selection,
            max_selection: self.max_selection,
            sort_order: self.sort_order,
            is_active: self.is_active,
            owner_id: self.user_id,
            created_at: parse_remote_timestamp(&self.created_at),
            updated_at: parse_remote_timestamp(&self.updated_at),
        }
    }
}

impl AddonDto {
    /// Map to a cache payload, attributing the addon to `addon_group_id`.
    /// Group-nested copies pass their group's id; standalone copies pass
    /// `None`.
    pub fn into_new_addon(self, addon_group_id: Option<String>) -> NewAddon {
        NewAddon {
            id: self.id,
            name: self.name,
            price: self.price,
            sort_order: self.sort_order,
            is_active: self.is_active,
            owner_id: self.user_id,
            addon_group_id,
            created_at: parse_remote_timestamp(&self.created_at),
            updated_at: parse_remote_timestamp(&self.updated_at),
        }
    }
}

impl OrderDto {
    /// Map the order header, leaving nested items for [`OrderItemDto`].
    pub fn to_new_order(&self) -> NewOrder {
        NewOrder {
            id: self.id.clone(),
            owner_id: self.user_id,
            order_number: self.order_number.clone(),
            order_date: parse_remote_timestamp(&self.order_date),
            customer_name: self.customer_name.clone(),
            customer_phone: self.customer_phone.clone(),
            customer_email: self.customer_email.clone(),
            subtotal: self.subtotal,
            discount_amount: self.discount_amount,
            discount_percentage: self.discount_percentage,
            tax_amount: self.tax_amount,
            tax_percentage: self.tax_percentage,
            total: self.total,
            payment_type: self.payment_type,
            payment_status: self.payment_status,
            order_status: self.order_status,
            notes: self.notes.clone(),
            created_at: parse_remote_timestamp(&self.created_at),
            updated_at: parse_remote_timestamp(&self.updated_at),
        }
    }
}

impl OrderItemDto {
    pub fn to_new_order_item(&self, order_id: &str) -> NewOrderItem {
        NewOrderItem {
            id: self.id.clone(),
            order_id: order_id.to_string(),
            product_id: self.product_id.clone(),
            product_name: self.product_name.clone(),
            product_code: self.product_code.clone(),
            unit_price: self.unit_price,
            unit_cost: self.unit_cost,
            quantity: self.quantity,
            total_price: self.total_price,
            special_request: self.special_request.clone(),
            notes: self.notes.clone(),
            created_at: parse_remote_timestamp(&self.created_at),
        }
    }
}

impl OrderAddonDto {
    pub fn to_new_order_addon(&self, order_item_id: &str) -> NewOrderAddon {
        NewOrderAddon {
            order_item_id: order_item_id.to_string(),
            addon_id: self.addon_id.clone(),
            addon_name: self.addon_name.clone(),
            addon_price: self.addon_price,
            quantity: self.quantity,
        }
    }
}
