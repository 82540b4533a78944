use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::cart::{
    CartAddon as DomainCartAddon, CartItem as DomainCartItem, NewCartAddon as DomainNewCartAddon,
    NewCartItem as DomainNewCartItem,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::cart_items)]
pub struct CartItem {
    pub id: i32,
    pub product_id: Option<String>,
    pub product_name: String,
    pub product_image_url: Option<String>,
    pub product_color_hex: Option<String>,
    pub unit_price: f64,
    pub quantity: i32,
    pub special_request: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::cart_items)]
pub struct NewCartItem<'a> {
    pub product_id: Option<&'a str>,
    pub product_name: &'a str,
    pub product_image_url: Option<&'a str>,
    pub product_color_hex: Option<&'a str>,
    pub unit_price: f64,
    pub quantity: i32,
    pub special_request: Option<&'a str>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::cart_addons)]
#[diesel(belongs_to(CartItem, foreign_key = cart_item_id))]
pub struct CartAddon {
    pub id: i32,
    pub cart_item_id: i32,
    pub addon_id: String,
    pub addon_name: String,
    pub addon_price: f64,
    pub addon_group_id: String,
    pub addon_group_name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::cart_addons)]
pub struct NewCartAddon<'a> {
    pub cart_item_id: i32,
    pub addon_id: &'a str,
    pub addon_name: &'a str,
    pub addon_price: f64,
    pub addon_group_id: &'a str,
    pub addon_group_name: &'a str,
}

impl From<CartItem> for DomainCartItem {
    fn from(value: CartItem) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            product_name: value.product_name,
            product_image_url: value.product_image_url,
            product_color_hex: value.product_color_hex,
            unit_price: value.unit_price,
            quantity: value.quantity,
            special_request: value.special_request,
            created_at: value.created_at,
        }
    }
}

impl From<CartAddon> for DomainCartAddon {
    fn from(value: CartAddon) -> Self {
        Self {
            id: value.id,
            cart_item_id: value.cart_item_id,
            addon_id: value.addon_id,
            addon_name: value.addon_name,
            addon_price: value.addon_price,
            addon_group_id: value.addon_group_id,
            addon_group_name: value.addon_group_name,
        }
    }
}

impl<'a> From<&'a DomainNewCartItem> for NewCartItem<'a> {
    fn from(value: &'a DomainNewCartItem) -> Self {
        Self {
            product_id: value.product_id.as_deref(),
            product_name: value.product_name.as_str(),
            product_image_url: value.product_image_url.as_deref(),
            product_color_hex: value.product_color_hex.as_deref(),
            unit_price: value.unit_price,
            quantity: value.quantity,
            special_request: value.special_request.as_deref(),
            created_at: value.created_at,
        }
    }
}

impl<'a> NewCartAddon<'a> {
    /// Pair an addon payload with the id of its freshly inserted parent line.
    pub fn for_cart_item(cart_item_id: i32, value: &'a DomainNewCartAddon) -> Self {
        Self {
            cart_item_id,
            addon_id: value.addon_id.as_str(),
            addon_name: value.addon_name.as_str(),
            addon_price: value.addon_price,
            addon_group_id: value.addon_group_id.as_str(),
            addon_group_name: value.addon_group_name.as_str(),
        }
    }
}
