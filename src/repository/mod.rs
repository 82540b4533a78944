use crate::db::{DbConnection, DbPool};
use crate::domain::addon::{Addon, AddonGroup, NewAddon, NewAddonGroup};
use crate::domain::cart::{CartAddon, CartItem, NewCartAddon, NewCartItem};
use crate::domain::category::{Category, NewCategory};
use crate::domain::order::{NewOrder, NewOrderAddon, NewOrderItem, Order, OrderAddon, OrderItem};
use crate::domain::product::{NewProduct, Product, ProductListQuery};

pub mod cart;
pub mod catalog;
pub mod errors;
pub mod order;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over the cached catalog tables.
pub trait CatalogReader {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    fn list_addon_groups(&self) -> RepositoryResult<Vec<AddonGroup>>;
    fn list_addons(&self) -> RepositoryResult<Vec<Addon>>;
    fn list_addons_for_group(&self, addon_group_id: &str) -> RepositoryResult<Vec<Addon>>;
}

/// Write operations over the cached catalog tables.
///
/// Each `replace_*` call is one wholesale replace: all existing rows are
/// deleted and the supplied set is inserted within a single transaction, so
/// a concurrent reader never observes a half-written table.
pub trait CatalogWriter {
    fn replace_categories(&self, rows: &[NewCategory]) -> RepositoryResult<usize>;
    fn replace_products(&self, rows: &[NewProduct]) -> RepositoryResult<usize>;
    fn replace_addon_groups(&self, rows: &[NewAddonGroup]) -> RepositoryResult<usize>;
    fn replace_addons(&self, rows: &[NewAddon]) -> RepositoryResult<usize>;
    /// Insert-or-replace categories by id without clearing the table. Used
    /// by the products-only refresh, which harvests categories from nested
    /// product payloads and must not drop categories it did not see.
    fn upsert_categories(&self, rows: &[NewCategory]) -> RepositoryResult<usize>;
}

/// Read-only operations over the local cart tables.
pub trait CartReader {
    fn list_cart_items(&self) -> RepositoryResult<Vec<CartItem>>;
    fn cart_item_count(&self) -> RepositoryResult<i64>;
    fn list_cart_addons(&self, cart_item_id: i32) -> RepositoryResult<Vec<CartAddon>>;
    /// Cart lines whose product link was nulled by a catalog replace.
    fn orphaned_cart_items(&self) -> RepositoryResult<Vec<CartItem>>;
}

/// Write operations over the local cart tables.
pub trait CartWriter {
    /// Insert a cart line and its addon snapshots as one transaction.
    fn create_cart_item(
        &self,
        item: &NewCartItem,
        addons: &[NewCartAddon],
    ) -> RepositoryResult<CartItem>;
    fn delete_cart_item(&self, cart_item_id: i32) -> RepositoryResult<()>;
    fn clear_cart(&self) -> RepositoryResult<()>;
    /// Point an orphaned cart line back at a cached product.
    fn relink_cart_item(&self, cart_item_id: i32, product_id: &str) -> RepositoryResult<()>;
}

/// Read-only operations over the cached order tables.
pub trait OrderReader {
    fn list_orders(&self) -> RepositoryResult<Vec<Order>>;
    fn get_order_by_id(&self, order_id: &str) -> RepositoryResult<Option<Order>>;
    fn list_order_items(&self, order_id: &str) -> RepositoryResult<Vec<OrderItem>>;
    fn list_order_addons(&self, order_item_id: &str) -> RepositoryResult<Vec<OrderAddon>>;
    /// Sum of order totals for the current calendar day.
    fn today_sales(&self) -> RepositoryResult<f64>;
    /// Number of orders placed on the current calendar day.
    fn today_order_count(&self) -> RepositoryResult<i64>;
}

/// Write operations over the cached order tables.
pub trait OrderWriter {
    /// Wholesale replace of the order cache: all three tables are cleared
    /// (children first) and the flattened sets inserted in one transaction.
    fn replace_orders(
        &self,
        orders: &[NewOrder],
        items: &[NewOrderItem],
        addons: &[NewOrderAddon],
    ) -> RepositoryResult<usize>;
}
