//! Order sync engine.
//!
//! Best-effort mirror of the backend's order history: a refresh that cannot
//! complete leaves the cached orders in place and is only logged, never
//! surfaced as a blocking error. Aggregates are recomputed from the cache on
//! each read.

use tokio::sync::{Mutex, watch};

use crate::domain::order::{NewOrder, NewOrderAddon, NewOrderItem, Order, OrderAddon, OrderItem};
use crate::remote::{Connectivity, OrdersApi, OrdersQuery};
use crate::repository::{OrderReader, OrderWriter};
use crate::services::{ServiceResult, expect_payload};

/// Order sync engine over a backend client, the local cache and a
/// connectivity probe.
pub struct OrderSync<A, R, C> {
    api: A,
    repo: R,
    connectivity: C,
    page_size: u32,
    gate: Mutex<()>,
    orders_tx: watch::Sender<Vec<Order>>,
}

impl<A, R, C> OrderSync<A, R, C>
where
    A: OrdersApi,
    R: OrderReader + OrderWriter,
    C: Connectivity,
{
    /// Build the engine, seeding the live order view from the cache.
    pub fn new(api: A, repo: R, connectivity: C, page_size: u32) -> ServiceResult<Self> {
        let initial = repo.list_orders()?;
        let (orders_tx, _) = watch::channel(initial);
        Ok(Self {
            api,
            repo,
            connectivity,
            page_size,
            gate: Mutex::new(()),
            orders_tx,
        })
    }

    /// Refresh the order cache from the backend.
    ///
    /// Skipped entirely when offline. Any failure is logged and swallowed;
    /// readers keep working from the cached rows either way.
    pub async fn refresh(&self) {
        if !self.connectivity.is_connected() {
            log::debug!("offline, keeping cached orders");
            return;
        }

        let _in_flight = self.gate.lock().await;
        match self.try_refresh().await {
            Ok(count) => log::info!("order cache refreshed: {count} orders"),
            Err(err) => log::warn!("order refresh failed, keeping cached orders: {err}"),
        }
    }

    async fn try_refresh(&self) -> ServiceResult<usize> {
        let query = OrdersQuery::first_page(self.page_size);
        let data = expect_payload(self.api.get_orders(query).await?, "orders")?;

        // Flatten the nested wire shape into the three cache tables.
        let mut order_rows: Vec<NewOrder> = Vec::with_capacity(data.orders.len());
        let mut item_rows: Vec<NewOrderItem> = Vec::new();
        let mut addon_rows: Vec<NewOrderAddon> = Vec::new();
        for order in &data.orders {
            order_rows.push(order.to_new_order());
            for item in order.items.iter().flatten() {
                item_rows.push(item.to_new_order_item(&order.id));
                for addon in item.addons.iter().flatten() {
                    addon_rows.push(addon.to_new_order_addon(&item.id));
                }
            }
        }

        let count = self.repo.replace_orders(&order_rows, &item_rows, &addon_rows)?;
        self.orders_tx.send_replace(self.repo.list_orders()?);
        Ok(count)
    }

    /// Live view of the cached orders, newest first. Republished after each
    /// successful refresh.
    pub fn orders(&self) -> watch::Receiver<Vec<Order>> {
        self.orders_tx.subscribe()
    }

    /// Current cached orders, newest first.
    pub fn list_orders(&self) -> ServiceResult<Vec<Order>> {
        Ok(self.repo.list_orders()?)
    }

    /// Lines of one cached order.
    pub fn order_items(&self, order_id: &str) -> ServiceResult<Vec<OrderItem>> {
        Ok(self.repo.list_order_items(order_id)?)
    }

    /// Addon snapshots of one cached order line.
    pub fn order_addons(&self, order_item_id: &str) -> ServiceResult<Vec<OrderAddon>> {
        Ok(self.repo.list_order_addons(order_item_id)?)
    }

    /// Sum of order totals for the current calendar day, recomputed from
    /// the cache.
    pub fn today_sales(&self) -> ServiceResult<f64> {
        Ok(self.repo.today_sales()?)
    }

    /// Number of orders placed on the current calendar day.
    pub fn today_order_count(&self) -> ServiceResult<i64> {
        Ok(self.repo.today_order_count()?)
    }
}
