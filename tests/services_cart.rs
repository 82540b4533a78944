use tillsync::domain::cart::{NewCartAddon, NewCartItem};
use tillsync::domain::product::{NewProduct, ProductListQuery};
use tillsync::repository::{CatalogReader, CatalogWriter, DieselRepository};
use tillsync::services::cart::CartService;

mod common;

fn product(id: &str, name: &str, price: f64) -> NewProduct {
    let now = chrono::Local::now().naive_local();
    NewProduct {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        price,
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
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn added_line_carries_its_addon_snapshots() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let cart = CartService::new(repo).unwrap();

    let created = cart
        .add_to_cart(
            NewCartItem::new("Latte", 55.0, 2).with_special_request("extra hot"),
            vec![
                NewCartAddon::new("a1", "Oat milk", 10.0, "g1", "Milk"),
                NewCartAddon::new("a2", "Vanilla", 5.0, "g2", "Syrup"),
            ],
        )
        .unwrap();

    assert_eq!(created.quantity, 2);
    assert_eq!(cart.item_count().unwrap(), 1);
    let addons = cart.cart_addons(created.id).unwrap();
    assert_eq!(addons.len(), 2);

    let view = cart.items();
    assert_eq!(view.borrow().len(), 1);

    cart.delete_cart_item(created.id).unwrap();
    assert_eq!(cart.item_count().unwrap(), 0);
    assert!(view.borrow().is_empty());
}

#[test]
fn line_snapshots_survive_a_catalog_price_change() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.replace_products(&[product("p1", "Latte", 100.0)])
        .unwrap();
    let cart = CartService::new(repo.clone()).unwrap();
    let created = cart
        .add_to_cart(
            NewCartItem::new("Latte", 100.0, 1).with_product_id("p1"),
            vec![],
        )
        .unwrap();

    // A sync arrives with a new price. The quoted line keeps the price it
    // was added at.
    repo.replace_products(&[product("p1", "Latte", 150.0)])
        .unwrap();

    let lines = cart.items().borrow().clone();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].id, created.id);
    assert_eq!(lines[0].unit_price, 100.0);
    assert_eq!(lines[0].product_name, "Latte");
}

#[test]
fn relink_repairs_links_nulled_by_a_product_replace() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.replace_products(&[product("p1", "Latte", 55.0)])
        .unwrap();
    let cart = CartService::new(repo.clone()).unwrap();
    cart.add_to_cart(
        NewCartItem::new("Latte", 55.0, 1).with_product_id("p1"),
        vec![],
    )
    .unwrap();
    cart.add_to_cart(NewCartItem::new("Discontinued", 20.0, 1), vec![])
        .unwrap();

    // Sync assigns the product a fresh id; the old link goes null via the
    // SET NULL rule during the wholesale replace.
    repo.replace_products(&[product("p42", "Latte", 55.0)])
        .unwrap();

    let products = repo.list_products(ProductListQuery::new()).unwrap();
    let relinked = cart.restore_product_ids(&products).unwrap();
    assert_eq!(relinked, 1);

    let lines = cart.items().borrow().clone();
    let latte = lines
        .iter()
        .find(|line| line.product_name == "Latte")
        .unwrap();
    assert_eq!(latte.product_id.as_deref(), Some("p42"));

    // The line with no catalog match stays orphaned but present.
    let discontinued = lines
        .iter()
        .find(|line| line.product_name == "Discontinued")
        .unwrap();
    assert!(discontinued.product_id.is_none());
}

#[test]
fn clear_cart_empties_the_live_view() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let cart = CartService::new(repo).unwrap();

    cart.add_to_cart(NewCartItem::new("Latte", 55.0, 1), vec![])
        .unwrap();
    cart.add_to_cart(NewCartItem::new("Americano", 45.0, 1), vec![])
        .unwrap();
    assert_eq!(cart.item_count().unwrap(), 2);

    cart.clear_cart().unwrap();
    assert_eq!(cart.item_count().unwrap(), 0);
    assert!(cart.items().borrow().is_empty());
}
