use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, NewCategory as DomainNewCategory};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub owner_id: i32,
    pub product_count: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub sort_order: i32,
    pub is_active: bool,
    pub owner_id: i32,
    pub product_count: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Category> for DomainCategory {
    fn from(value: Category) -> Self {
        Self {
            id: value.id,
            name: value.name,
            sort_order: value.sort_order,
            is_active: value.is_active,
            owner_id: value.owner_id,
            product_count: value.product_count,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCategory> for NewCategory<'a> {
    fn from(value: &'a DomainNewCategory) -> Self {
        Self {
            id: value.id.as_str(),
            name: value.name.as_str(),
            sort_order: value.sort_order,
            is_active: value.is_active,
            owner_id: value.owner_id,
            product_count: value.product_count,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
