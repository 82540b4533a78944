use diesel::prelude::*;

use crate::domain::addon::{
    Addon as DomainAddon, AddonGroup as DomainAddonGroup, NewAddon as DomainNewAddon,
    NewAddonGroup as DomainNewAddonGroup,
};
use crate::domain::category::{Category as DomainCategory, NewCategory as DomainNewCategory};
use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery,
};
use crate::models::addon::{
    Addon as DbAddon, AddonGroup as DbAddonGroup, NewAddon as DbNewAddon,
    NewAddonGroup as DbNewAddonGroup,
};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::{CatalogReader, CatalogWriter, DieselRepository, RepositoryResult};

impl CatalogReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let rows = categories::table
            .filter(categories::is_active.eq(true))
            .order(categories::sort_order.asc())
            .load::<DbCategory>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if !query.include_inactive {
            items = items.filter(products::is_active.eq(true));
        }

        if let Some(category_id) = query.category_id.as_ref() {
            items = items.filter(products::category_id.eq(category_id));
        }

        let rows = items
            .order(products::popularity_rank.asc())
            .load::<DbProduct>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_addon_groups(&self) -> RepositoryResult<Vec<DomainAddonGroup>> {
        use crate::schema::addon_groups;

        let mut conn = self.conn()?;
        let rows = addon_groups::table
            .filter(addon_groups::is_active.eq(true))
            .order(addon_groups::sort_order.asc())
            .load::<DbAddonGroup>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_addons(&self) -> RepositoryResult<Vec<DomainAddon>> {
        use crate::schema::addons;

        let mut conn = self.conn()?;
        let rows = addons::table
            .filter(addons::is_active.eq(true))
            .order(addons::sort_order.asc())
            .load::<DbAddon>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_addons_for_group(&self, addon_group_id: &str) -> RepositoryResult<Vec<DomainAddon>> {
        use crate::schema::addons;

        let mut conn = self.conn()?;
        let rows = addons::table
            .filter(addons::addon_group_id.eq(addon_group_id))
            .filter(addons::is_active.eq(true))
            .order(addons::sort_order.asc())
            .load::<DbAddon>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl CatalogWriter for DieselRepository {
    fn replace_categories(&self, rows: &[DomainNewCategory]) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let inserted = conn.immediate_transaction(|conn| {
            diesel::delete(categories::table).execute(conn)?;
            let db_rows: Vec<DbNewCategory> = rows.iter().map(Into::into).collect();
            diesel::insert_into(categories::table)
                .values(&db_rows)
                .execute(conn)
        })?;

        Ok(inserted)
    }

    fn replace_products(&self, rows: &[DomainNewProduct]) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let inserted = conn.immediate_transaction(|conn| {
            diesel::delete(products::table).execute(conn)?;
            let db_rows: Vec<DbNewProduct> = rows.iter().map(Into::into).collect();
            diesel::insert_into(products::table)
                .values(&db_rows)
                .execute(conn)
        })?;

        Ok(inserted)
    }

    fn replace_addon_groups(&self, rows: &[DomainNewAddonGroup]) -> RepositoryResult<usize> {
        use crate::schema::addon_groups;

        let mut conn = self.conn()?;
        let inserted = conn.immediate_transaction(|conn| {
            diesel::delete(addon_groups::table).execute(conn)?;
            let db_rows: Vec<DbNewAddonGroup> = rows.iter().map(Into::into).collect();
            diesel::insert_into(addon_groups::table)
                .values(&db_rows)
                .execute(conn)
        })?;

        Ok(inserted)
    }

    fn replace_addons(&self, rows: &[DomainNewAddon]) -> RepositoryResult<usize> {
        use crate::schema::addons;

        let mut conn = self.conn()?;
        let inserted = conn.immediate_transaction(|conn| {
            diesel::delete(addons::table).execute(conn)?;
            let db_rows: Vec<DbNewAddon> = rows.iter().map(Into::into).collect();
            diesel::insert_into(addons::table)
                .values(&db_rows)
                .execute(conn)
        })?;

        Ok(inserted)
    }

    fn upsert_categories(&self, rows: &[DomainNewCategory]) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let inserted = conn.immediate_transaction(|conn| {
            let db_rows: Vec<DbNewCategory> = rows.iter().map(Into::into).collect();
            diesel::replace_into(categories::table)
                .values(&db_rows)
                .execute(conn)
        })?;

        Ok(inserted)
    }
}
