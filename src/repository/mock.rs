use mockall::mock;

use super::{
    CartReader, CartWriter, CatalogReader, CatalogWriter, OrderReader, OrderWriter,
    RepositoryResult,
};
use crate::domain::{
    addon::{Addon, AddonGroup, NewAddon, NewAddonGroup},
    cart::{CartAddon, CartItem, NewCartAddon, NewCartItem},
    category::{Category, NewCategory},
    order::{NewOrder, NewOrderAddon, NewOrderItem, Order, OrderAddon, OrderItem},
    product::{NewProduct, Product, ProductListQuery},
};

mock! {
    pub CatalogRepo {}

    impl CatalogReader for CatalogRepo {
        fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
        fn list_addon_groups(&self) -> RepositoryResult<Vec<AddonGroup>>;
        fn list_addons(&self) -> RepositoryResult<Vec<Addon>>;
        fn list_addons_for_group(&self, addon_group_id: &str) -> RepositoryResult<Vec<Addon>>;
    }

    impl CatalogWriter for CatalogRepo {
        fn replace_categories(&self, rows: &[NewCategory]) -> RepositoryResult<usize>;
        fn replace_products(&self, rows: &[NewProduct]) -> RepositoryResult<usize>;
        fn replace_addon_groups(&self, rows: &[NewAddonGroup]) -> RepositoryResult<usize>;
        fn replace_addons(&self, rows: &[NewAddon]) -> RepositoryResult<usize>;
        fn upsert_categories(&self, rows: &[NewCategory]) -> RepositoryResult<usize>;
    }
}

mock! {
    pub CartRepo {}

    impl CartReader for CartRepo {
        fn list_cart_items(&self) -> RepositoryResult<Vec<CartItem>>;
        fn cart_item_count(&self) -> RepositoryResult<i64>;
        fn list_cart_addons(&self, cart_item_id: i32) -> RepositoryResult<Vec<CartAddon>>;
        fn orphaned_cart_items(&self) -> RepositoryResult<Vec<CartItem>>;
    }

    impl CartWriter for CartRepo {
        fn create_cart_item(
            &self,
            item: &NewCartItem,
            addons: &[NewCartAddon],
        ) -> RepositoryResult<CartItem>;
        fn delete_cart_item(&self, cart_item_id: i32) -> RepositoryResult<()>;
        fn clear_cart(&self) -> RepositoryResult<()>;
        fn relink_cart_item(&self, cart_item_id: i32, product_id: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub OrderRepo {}

    impl OrderReader for OrderRepo {
        fn list_orders(&self) -> RepositoryResult<Vec<Order>>;
        fn get_order_by_id(&self, order_id: &str) -> RepositoryResult<Option<Order>>;
        fn list_order_items(&self, order_id: &str) -> RepositoryResult<Vec<OrderItem>>;
        fn list_order_addons(&self, order_item_id: &str) -> RepositoryResult<Vec<OrderAddon>>;
        fn today_sales(&self) -> RepositoryResult<f64>;
        fn today_order_count(&self) -> RepositoryResult<i64>;
    }

    impl OrderWriter for OrderRepo {
        fn replace_orders(
            &self,
            orders: &[NewOrder],
            items: &[NewOrderItem],
            addons: &[NewOrderAddon],
        ) -> RepositoryResult<usize>;
    }
}
