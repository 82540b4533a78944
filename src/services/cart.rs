//! Cart service and reconciliation engine.
//!
//! The cart is the only locally-originated state; every display field on a
//! line is a snapshot taken when the line was added. After a catalog sync
//! wipes and reloads the product table, lines whose product link was nulled
//! by the SET NULL rule are relinked by product name.

use std::collections::HashMap;

use tokio::sync::watch;

use crate::domain::cart::{CartAddon, CartItem, NewCartAddon, NewCartItem};
use crate::domain::product::Product;
use crate::repository::{CartReader, CartWriter};
use crate::services::{ServiceError, ServiceResult};

/// Cart operations over the local cache.
pub struct CartService<R> {
    repo: R,
    items_tx: watch::Sender<Vec<CartItem>>,
}

impl<R> CartService<R>
where
    R: CartReader + CartWriter,
{
    /// Build the service, seeding the live cart view from the cache.
    pub fn new(repo: R) -> ServiceResult<Self> {
        let initial = repo.list_cart_items()?;
        let (items_tx, _) = watch::channel(initial);
        Ok(Self { repo, items_tx })
    }

    /// Add a line to the cart together with its addon snapshots.
    ///
    /// The parent row and the addon rows are inserted in one transaction so
    /// a line can never exist with half its addons.
    pub fn add_to_cart(
        &self,
        item: NewCartItem,
        addons: Vec<NewCartAddon>,
    ) -> ServiceResult<CartItem> {
        if item.quantity < 1 {
            return Err(ServiceError::Validation(
                "cart quantity must be at least 1".to_string(),
            ));
        }

        let created = self.repo.create_cart_item(&item, &addons)?;
        self.publish()?;
        Ok(created)
    }

    /// Remove one line; its addon snapshots go with it.
    pub fn delete_cart_item(&self, cart_item_id: i32) -> ServiceResult<()> {
        self.repo.delete_cart_item(cart_item_id)?;
        self.publish()
    }

    /// Empty the cart.
    pub fn clear_cart(&self) -> ServiceResult<()> {
        self.repo.clear_cart()?;
        self.publish()
    }

    /// Live view of the cart lines, newest first.
    pub fn items(&self) -> watch::Receiver<Vec<CartItem>> {
        self.items_tx.subscribe()
    }

    /// Current number of cart lines.
    pub fn item_count(&self) -> ServiceResult<i64> {
        Ok(self.repo.cart_item_count()?)
    }

    /// Addon snapshots of one cart line.
    pub fn cart_addons(&self, cart_item_id: i32) -> ServiceResult<Vec<CartAddon>> {
        Ok(self.repo.list_cart_addons(cart_item_id)?)
    }

    /// Repair product links nulled by a catalog replace.
    ///
    /// Orphaned lines are matched against `products` by name; on duplicate
    /// names the later product in the slice wins. Lines without a match stay
    /// orphaned and remain fully usable through their snapshots. Returns the
    /// number of relinked lines.
    pub fn restore_product_ids(&self, products: &[Product]) -> ServiceResult<usize> {
        let orphans = self.repo.orphaned_cart_items()?;
        if orphans.is_empty() {
            return Ok(0);
        }

        let mut by_name: HashMap<&str, &str> = HashMap::new();
        for product in products {
            by_name.insert(product.name.as_str(), product.id.as_str());
        }

        let mut relinked = 0;
        for orphan in &orphans {
            if let Some(product_id) = by_name.get(orphan.product_name.as_str()) {
                self.repo.relink_cart_item(orphan.id, product_id)?;
                relinked += 1;
            }
        }

        if relinked > 0 {
            self.publish()?;
        }
        Ok(relinked)
    }

    fn publish(&self) -> ServiceResult<()> {
        self.items_tx.send_replace(self.repo.list_cart_items()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::repository::mock::MockCartRepo;

    fn fixed_datetime() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap_or_default()
            .and_hms_opt(9, 0, 0)
            .unwrap_or_default()
    }

    fn orphan(id: i32, product_name: &str) -> CartItem {
        CartItem {
            id,
            product_id: None,
            product_name: product_name.to_string(),
            product_image_url: None,
            product_color_hex: None,
            unit_price: 55.0,
            quantity: 1,
            special_request: None,
            created_at: fixed_datetime(),
        }
    }

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            price: 55.0,
            cost_price: None,
            image_url: None,
            category_id: None,
            owner_id: 1,
            popularity_rank: None,
            product_code: None,
            unit: None,
            sku_code: None,
            stock_quantity: None,
            min_stock_quantity: None,
            color_hex: None,
            is_sku_enabled: None,
            is_stock_enabled: None,
            has_additional_options: None,
            is_active: true,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    #[test]
    fn add_to_cart_rejects_non_positive_quantity() {
        let mut repo = MockCartRepo::new();
        repo.expect_list_cart_items().returning(|| Ok(vec![]));

        let service = CartService::new(repo).unwrap();
        let result = service.add_to_cart(NewCartItem::new("Latte", 55.0, 0), vec![]);
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn restore_matches_orphans_by_name() {
        let mut repo = MockCartRepo::new();
        repo.expect_list_cart_items().returning(|| Ok(vec![]));
        repo.expect_orphaned_cart_items()
            .returning(|| Ok(vec![orphan(1, "Latte"), orphan(2, "Flat White")]));
        repo.expect_relink_cart_item()
            .withf(|cart_item_id, product_id| *cart_item_id == 1 && product_id == "p42")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = CartService::new(repo).unwrap();
        let relinked = service
            .restore_product_ids(&[product("p42", "Latte")])
            .unwrap();
        assert_eq!(relinked, 1);
    }

    #[test]
    fn restore_prefers_the_later_duplicate() {
        let mut repo = MockCartRepo::new();
        repo.expect_list_cart_items().returning(|| Ok(vec![]));
        repo.expect_orphaned_cart_items()
            .returning(|| Ok(vec![orphan(1, "Latte")]));
        repo.expect_relink_cart_item()
            .withf(|cart_item_id, product_id| *cart_item_id == 1 && product_id == "p2")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = CartService::new(repo).unwrap();
        let relinked = service
            .restore_product_ids(&[product("p1", "Latte"), product("p2", "Latte")])
            .unwrap();
        assert_eq!(relinked, 1);
    }

    #[test]
    fn restore_without_orphans_touches_nothing() {
        let mut repo = MockCartRepo::new();
        repo.expect_list_cart_items().returning(|| Ok(vec![]));
        repo.expect_orphaned_cart_items().returning(|| Ok(vec![]));

        let service = CartService::new(repo).unwrap();
        let relinked = service
            .restore_product_ids(&[product("p1", "Latte")])
            .unwrap();
        assert_eq!(relinked, 0);
    }
}
