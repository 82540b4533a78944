use chrono::{Duration, NaiveDateTime, NaiveTime};
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, NewOrderAddon as DomainNewOrderAddon,
    NewOrderItem as DomainNewOrderItem, Order as DomainOrder, OrderAddon as DomainOrderAddon,
    OrderItem as DomainOrderItem,
};
use crate::models::order::{
    NewOrder as DbNewOrder, NewOrderAddon as DbNewOrderAddon, NewOrderItem as DbNewOrderItem,
    Order as DbOrder, OrderAddon as DbOrderAddon, OrderItem as DbOrderItem,
};
use crate::repository::{DieselRepository, OrderReader, OrderWriter, RepositoryResult};

/// Bounds of the current calendar day in local time.
fn today_bounds() -> (NaiveDateTime, NaiveDateTime) {
    let start = chrono::Local::now()
        .date_naive()
        .and_time(NaiveTime::MIN);
    (start, start + Duration::days(1))
}

impl OrderReader for DieselRepository {
    fn list_orders(&self) -> RepositoryResult<Vec<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let rows = orders::table
            .order(orders::order_date.desc())
            .load::<DbOrder>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn get_order_by_id(&self, order_id: &str) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let row = orders::table
            .filter(orders::id.eq(order_id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        Ok(row.map(Into::into))
    }

    fn list_order_items(&self, order_id: &str) -> RepositoryResult<Vec<DomainOrderItem>> {
        use crate::schema::order_items;

        let mut conn = self.conn()?;
        let rows = order_items::table
            .filter(order_items::order_id.eq(order_id))
            .order(order_items::created_at.asc())
            .load::<DbOrderItem>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_order_addons(&self, order_item_id: &str) -> RepositoryResult<Vec<DomainOrderAddon>> {
        use crate::schema::order_addons;

        let mut conn = self.conn()?;
        let rows = order_addons::table
            .filter(order_addons::order_item_id.eq(order_item_id))
            .load::<DbOrderAddon>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn today_sales(&self) -> RepositoryResult<f64> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let (start, end) = today_bounds();
        let total: Option<f64> = orders::table
            .filter(orders::order_date.ge(start))
            .filter(orders::order_date.lt(end))
            .select(diesel::dsl::sum(orders::total))
            .first(&mut conn)?;

        Ok(total.unwrap_or(0.0))
    }

    fn today_order_count(&self) -> RepositoryResult<i64> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let (start, end) = today_bounds();
        let count = orders::table
            .filter(orders::order_date.ge(start))
            .filter(orders::order_date.lt(end))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(count)
    }
}

impl OrderWriter for DieselRepository {
    fn replace_orders(
        &self,
        orders: &[DomainNewOrder],
        items: &[DomainNewOrderItem],
        addons: &[DomainNewOrderAddon],
    ) -> RepositoryResult<usize> {
        use crate::schema::{order_addons, order_items, orders as orders_table};

        let mut conn = self.conn()?;
        let inserted = conn.immediate_transaction(|conn| {
            // Children first; the CASCADE rules would cover this, but the
            // explicit order keeps the statements independent of them.
            diesel::delete(order_addons::table).execute(conn)?;
            diesel::delete(order_items::table).execute(conn)?;
            diesel::delete(orders_table::table).execute(conn)?;

            let order_rows: Vec<DbNewOrder> = orders.iter().map(Into::into).collect();
            let inserted = diesel::insert_into(orders_table::table)
                .values(&order_rows)
                .execute(conn)?;

            let item_rows: Vec<DbNewOrderItem> = items.iter().map(Into::into).collect();
            diesel::insert_into(order_items::table)
                .values(&item_rows)
                .execute(conn)?;

            let addon_rows: Vec<DbNewOrderAddon> = addons.iter().map(Into::into).collect();
            diesel::insert_into(order_addons::table)
                .values(&addon_rows)
                .execute(conn)?;

            Ok::<_, diesel::result::Error>(inserted)
        })?;

        Ok(inserted)
    }
}
