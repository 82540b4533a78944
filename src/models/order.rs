use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, NewOrderAddon as DomainNewOrderAddon,
    NewOrderItem as DomainNewOrderItem, Order as DomainOrder, OrderAddon as DomainOrderAddon,
    OrderItem as DomainOrderItem,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
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

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
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

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_addons)]
#[diesel(belongs_to(OrderItem, foreign_key = order_item_id))]
pub struct OrderAddon {
    pub id: i32,
    pub order_item_id: String,
    pub addon_id: String,
    pub addon_name: String,
    pub addon_price: f64,
    pub quantity: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub id: &'a str,
    pub owner_id: i32,
    pub order_number: &'a str,
    pub order_date: NaiveDateTime,
    pub customer_name: Option<&'a str>,
    pub customer_phone: Option<&'a str>,
    pub customer_email: Option<&'a str>,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub discount_percentage: f64,
    pub tax_amount: f64,
    pub tax_percentage: f64,
    pub total: f64,
    pub payment_type: i32,
    pub payment_status: i32,
    pub order_status: i32,
    pub notes: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem<'a> {
    pub id: &'a str,
    pub order_id: &'a str,
    pub product_id: Option<&'a str>,
    pub product_name: &'a str,
    pub product_code: Option<&'a str>,
    pub unit_price: f64,
    pub unit_cost: f64,
    pub quantity: i32,
    pub total_price: f64,
    pub special_request: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_addons)]
pub struct NewOrderAddon<'a> {
    pub order_item_id: &'a str,
    pub addon_id: &'a str,
    pub addon_name: &'a str,
    pub addon_price: f64,
    pub quantity: i32,
}

impl From<Order> for DomainOrder {
    fn from(value: Order) -> Self {
        Self {
            id: value.id,
            owner_id: value.owner_id,
            order_number: value.order_number,
            order_date: value.order_date,
            customer_name: value.customer_name,
            customer_phone: value.customer_phone,
            customer_email: value.customer_email,
            subtotal: value.subtotal,
            discount_amount: value.discount_amount,
            discount_percentage: value.discount_percentage,
            tax_amount: value.tax_amount,
            tax_percentage: value.tax_percentage,
            total: value.total,
            payment_type: value.payment_type,
            payment_status: value.payment_status,
            order_status: value.order_status,
            notes: value.notes,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<OrderItem> for DomainOrderItem {
    fn from(value: OrderItem) -> Self {
        Self {
            id: value.id,
            order_id: value.order_id,
            product_id: value.product_id,
            product_name: value.product_name,
            product_code: value.product_code,
            unit_price: value.unit_price,
            unit_cost: value.unit_cost,
            quantity: value.quantity,
            total_price: value.total_price,
            special_request: value.special_request,
            notes: value.notes,
            created_at: value.created_at,
        }
    }
}

impl From<OrderAddon> for DomainOrderAddon {
    fn from(value: OrderAddon) -> Self {
        Self {
            id: value.id,
            order_item_id: value.order_item_id,
            addon_id: value.addon_id,
            addon_name: value.addon_name,
            addon_price: value.addon_price,
            quantity: value.quantity,
        }
    }
}

impl<'a> From<&'a DomainNewOrder> for NewOrder<'a> {
    fn from(value: &'a DomainNewOrder) -> Self {
        Self {
            id: value.id.as_str(),
            owner_id: value.owner_id,
            order_number: value.order_number.as_str(),
            order_date: value.order_date,
            customer_name: value.customer_name.as_deref(),
            customer_phone: value.customer_phone.as_deref(),
            customer_email: value.customer_email.as_deref(),
            subtotal: value.subtotal,
            discount_amount: value.discount_amount,
            discount_percentage: value.discount_percentage,
            tax_amount: value.tax_amount,
            tax_percentage: value.tax_percentage,
            total: value.total,
            payment_type: value.payment_type,
            payment_status: value.payment_status,
            order_status: value.order_status,
            notes: value.notes.as_deref(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewOrderItem> for NewOrderItem<'a> {
    fn from(value: &'a DomainNewOrderItem) -> Self {
        Self {
            id: value.id.as_str(),
            order_id: value.order_id.as_str(),
            product_id: value.product_id.as_deref(),
            product_name: value.product_name.as_str(),
            product_code: value.product_code.as_deref(),
            unit_price: value.unit_price,
            unit_cost: value.unit_cost,
            quantity: value.quantity,
            total_price: value.total_price,
            special_request: value.special_request.as_deref(),
            notes: value.notes.as_deref(),
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewOrderAddon> for NewOrderAddon<'a> {
    fn from(value: &'a DomainNewOrderAddon) -> Self {
        Self {
            order_item_id: value.order_item_id.as_str(),
            addon_id: value.addon_id.as_str(),
            addon_name: value.addon_name.as_str(),
            addon_price: value.addon_price,
            quantity: value.quantity,
        }
    }
}
