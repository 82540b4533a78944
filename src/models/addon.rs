use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::addon::{
    Addon as DomainAddon, AddonGroup as DomainAddonGroup, NewAddon as DomainNewAddon,
    NewAddonGroup as DomainNewAddonGroup,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::addon_groups)]
pub struct AddonGroup {
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::addon_groups)]
pub struct NewAddonGroup<'a> {
    pub id: &'a str,
    pub name: &'a str,
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

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::addons)]
#[diesel(belongs_to(AddonGroup, foreign_key = addon_group_id))]
pub struct Addon {
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::addons)]
pub struct NewAddon<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub price: f64,
    pub sort_order: i32,
    pub is_active: bool,
    pub owner_id: i32,
    pub addon_group_id: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<AddonGroup> for DomainAddonGroup {
    fn from(value: AddonGroup) -> Self {
        Self {
            id: value.id,
            name: value.name,
            is_required: value.is_required,
            is_single_selection: value.is_single_selection,
            min_selection: value.min_selection,
            max_selection: value.max_selection,
            sort_order: value.sort_order,
            is_active: value.is_active,
            owner_id: value.owner_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewAddonGroup> for NewAddonGroup<'a> {
    fn from(value: &'a DomainNewAddonGroup) -> Self {
        Self {
            id: value.id.as_str(),
            name: value.name.as_str(),
            is_required: value.is_required,
            is_single_selection: value.is_single_selection,
            min_selection: value.min_selection,
            max_selection: value.max_selection,
            sort_order: value.sort_order,
            is_active: value.is_active,
            owner_id: value.owner_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<Addon> for DomainAddon {
    fn from(value: Addon) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
            sort_order: value.sort_order,
            is_active: value.is_active,
            owner_id: value.owner_id,
            addon_group_id: value.addon_group_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewAddon> for NewAddon<'a> {
    fn from(value: &'a DomainNewAddon) -> Self {
        Self {
            id: value.id.as_str(),
            name: value.name.as_str(),
            price: value.price,
            sort_order: value.sort_order,
            is_active: value.is_active,
            owner_id: value.owner_id,
            addon_group_id: value.addon_group_id.as_deref(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
