use diesel::prelude::*;

use crate::domain::cart::{
    CartAddon as DomainCartAddon, CartItem as DomainCartItem, NewCartAddon as DomainNewCartAddon,
    NewCartItem as DomainNewCartItem,
};
use crate::models::cart::{
    CartAddon as DbCartAddon, CartItem as DbCartItem, NewCartAddon as DbNewCartAddon,
    NewCartItem as DbNewCartItem,
};
use crate::repository::{
    CartReader, CartWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl CartReader for DieselRepository {
    fn list_cart_items(&self) -> RepositoryResult<Vec<DomainCartItem>> {
        use crate::schema::cart_items;

        let mut conn = self.conn()?;
        let rows = cart_items::table
            .order(cart_items::created_at.desc())
            .load::<DbCartItem>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn cart_item_count(&self) -> RepositoryResult<i64> {
        use crate::schema::cart_items;

        let mut conn = self.conn()?;
        Ok(cart_items::table.count().get_result::<i64>(&mut conn)?)
    }

    fn list_cart_addons(&self, cart_item_id: i32) -> RepositoryResult<Vec<DomainCartAddon>> {
        use crate::schema::cart_addons;

        let mut conn = self.conn()?;
        let rows = cart_addons::table
            .filter(cart_addons::cart_item_id.eq(cart_item_id))
            .load::<DbCartAddon>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn orphaned_cart_items(&self) -> RepositoryResult<Vec<DomainCartItem>> {
        use crate::schema::cart_items;

        let mut conn = self.conn()?;
        let rows = cart_items::table
            .filter(cart_items::product_id.is_null())
            .load::<DbCartItem>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl CartWriter for DieselRepository {
    fn create_cart_item(
        &self,
        item: &DomainNewCartItem,
        addons: &[DomainNewCartAddon],
    ) -> RepositoryResult<DomainCartItem> {
        use crate::schema::{cart_addons, cart_items};

        let mut conn = self.conn()?;
        let created = conn.immediate_transaction(|conn| {
            let created = diesel::insert_into(cart_items::table)
                .values(DbNewCartItem::from(item))
                .get_result::<DbCartItem>(conn)?;

            if !addons.is_empty() {
                let addon_rows: Vec<DbNewCartAddon> = addons
                    .iter()
                    .map(|addon| DbNewCartAddon::for_cart_item(created.id, addon))
                    .collect();
                diesel::insert_into(cart_addons::table)
                    .values(&addon_rows)
                    .execute(conn)?;
            }

            Ok::<_, diesel::result::Error>(created)
        })?;

        Ok(created.into())
    }

    fn delete_cart_item(&self, cart_item_id: i32) -> RepositoryResult<()> {
        use crate::schema::cart_items;

        let mut conn = self.conn()?;

        // Addon rows go with the line via the CASCADE rule.
        let deleted = diesel::delete(cart_items::table.filter(cart_items::id.eq(cart_item_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn clear_cart(&self) -> RepositoryResult<()> {
        use crate::schema::{cart_addons, cart_items};

        let mut conn = self.conn()?;
        conn.immediate_transaction(|conn| {
            diesel::delete(cart_items::table).execute(conn)?;
            diesel::delete(cart_addons::table).execute(conn)?;
            Ok::<_, diesel::result::Error>(())
        })?;

        Ok(())
    }

    fn relink_cart_item(&self, cart_item_id: i32, product_id: &str) -> RepositoryResult<()> {
        use crate::schema::cart_items;

        let mut conn = self.conn()?;
        let updated = diesel::update(cart_items::table.filter(cart_items::id.eq(cart_item_id)))
            .set(cart_items::product_id.eq(product_id))
            .execute(&mut conn)?;
        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
