use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: f64,
    pub cost_price: Option<f64>,
    pub image_url: Option<&'a str>,
    pub category_id: Option<&'a str>,
    pub owner_id: i32,
    pub popularity_rank: Option<i32>,
    pub product_code: Option<&'a str>,
    pub unit: Option<&'a str>,
    pub sku_code: Option<&'a str>,
    pub stock_quantity: Option<i32>,
    pub min_stock_quantity: Option<i32>,
    pub color_hex: Option<&'a str>,
    pub is_sku_enabled: Option<bool>,
    pub is_stock_enabled: Option<bool>,
    pub has_additional_options: Option<bool>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            cost_price: value.cost_price,
            image_url: value.image_url,
            category_id: value.category_id,
            owner_id: value.owner_id,
            popularity_rank: value.popularity_rank,
            product_code: value.product_code,
            unit: value.unit,
            sku_code: value.sku_code,
            stock_quantity: value.stock_quantity,
            min_stock_quantity: value.min_stock_quantity,
            color_hex: value.color_hex,
            is_sku_enabled: value.is_sku_enabled,
            is_stock_enabled: value.is_stock_enabled,
            has_additional_options: value.has_additional_options,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            id: value.id.as_str(),
            name: value.name.as_str(),
            description: value.description.as_deref(),
            price: value.price,
            cost_price: value.cost_price,
            image_url: value.image_url.as_deref(),
            category_id: value.category_id.as_deref(),
            owner_id: value.owner_id,
            popularity_rank: value.popularity_rank,
            product_code: value.product_code.as_deref(),
            unit: value.unit.as_deref(),
            sku_code: value.sku_code.as_deref(),
            stock_quantity: value.stock_quantity,
            min_stock_quantity: value.min_stock_quantity,
            color_hex: value.color_hex.as_deref(),
            is_sku_enabled: value.is_sku_enabled,
            is_stock_enabled: value.is_stock_enabled,
            has_additional_options: value.has_additional_options,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
