use async_trait::async_trait;
use chrono::Duration;

use tillsync::domain::order::NewOrder;
use tillsync::remote::dto::{OrderAddonDto, OrderDto, OrderItemDto, OrdersData};
use tillsync::remote::{ApiEnvelope, ApiError, Connectivity, OrdersApi, OrdersQuery};
use tillsync::repository::{DieselRepository, OrderWriter};
use tillsync::services::orders::OrderSync;

mod common;

struct Online;

impl Connectivity for Online {
    fn is_connected(&self) -> bool {
        true
    }
}

fn order_dto(id: &str, total: f64, order_date: &str, items: Vec<OrderItemDto>) -> OrderDto {
    OrderDto {
        id: id.to_string(),
        user_id: 7,
        order_number: format!("N-{id}"),
        order_date: order_date.to_string(),
        customer_name: None,
        customer_phone: None,
        customer_email: None,
        subtotal: total,
        discount_amount: 0.0,
        discount_percentage: 0.0,
        tax_amount: 0.0,
        tax_percentage: 0.0,
        total,
        payment_type: 1,
        payment_status: 1,
        order_status: 1,
        notes: None,
        created_at: order_date.to_string(),
        updated_at: order_date.to_string(),
        items: Some(items),
    }
}

fn order_item_dto(id: &str, product_name: &str, addons: Vec<OrderAddonDto>) -> OrderItemDto {
    OrderItemDto {
        id: id.to_string(),
        product_id: None,
        product_name: product_name.to_string(),
        product_code: None,
        unit_price: 50.0,
        unit_cost: 20.0,
        quantity: 1,
        total_price: 50.0,
        special_request: None,
        notes: None,
        created_at: "2026-01-15T08:00:00Z".to_string(),
        addons: Some(addons),
    }
}

fn order_addon_dto(addon_id: &str) -> OrderAddonDto {
    OrderAddonDto {
        addon_id: addon_id.to_string(),
        addon_name: "Oat milk".to_string(),
        addon_price: 10.0,
        quantity: 1,
    }
}

struct StubApi {
    orders: Vec<OrderDto>,
    fail: bool,
}

#[async_trait]
impl OrdersApi for StubApi {
    async fn get_orders(&self, _query: OrdersQuery) -> Result<ApiEnvelope<OrdersData>, ApiError> {
        if self.fail {
            return Err(ApiError::Http { status: 500 });
        }
        Ok(ApiEnvelope {
            status: 200,
            message: None,
            data: Some(OrdersData {
                orders: self.orders.clone(),
            }),
            error: None,
            timestamp: None,
        })
    }
}

fn cached_order(id: &str, total: f64) -> NewOrder {
    let now = chrono::Local::now().naive_local();
    NewOrder {
        id: id.to_string(),
        owner_id: 1,
        order_number: format!("N-{id}"),
        order_date: now,
        customer_name: None,
        customer_phone: None,
        customer_email: None,
        subtotal: total,
        discount_amount: 0.0,
        discount_percentage: 0.0,
        tax_amount: 0.0,
        tax_percentage: 0.0,
        total,
        payment_type: 1,
        payment_status: 1,
        order_status: 1,
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn refresh_mirrors_the_nested_payload_into_the_cache() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let api = StubApi {
        orders: vec![order_dto(
            "o1",
            60.0,
            "2026-01-15T08:00:00Z",
            vec![order_item_dto("i1", "Latte", vec![order_addon_dto("a1")])],
        )],
        fail: false,
    };

    let sync = OrderSync::new(api, repo.clone(), Online, 100).unwrap();
    sync.refresh().await;

    let orders = sync.list_orders().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, "o1");
    assert_eq!(sync.order_items("o1").unwrap().len(), 1);
    assert_eq!(sync.order_addons("i1").unwrap().len(), 1);

    // The live view carries the refreshed rows as well.
    let view = sync.orders();
    assert_eq!(view.borrow().len(), 1);
}

#[tokio::test]
async fn failed_refresh_keeps_cached_orders() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    repo.replace_orders(&[cached_order("old", 42.0)], &[], &[])
        .unwrap();

    let api = StubApi {
        orders: vec![],
        fail: true,
    };

    let sync = OrderSync::new(api, repo, Online, 100).unwrap();
    // Soft failure: refresh never panics or errors outward.
    sync.refresh().await;

    let orders = sync.list_orders().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, "old");
}

#[tokio::test]
async fn refresh_replaces_the_previous_snapshot() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    repo.replace_orders(&[cached_order("old", 42.0)], &[], &[])
        .unwrap();

    let api = StubApi {
        orders: vec![order_dto("new", 80.0, "2026-01-15T08:00:00Z", vec![])],
        fail: false,
    };

    let sync = OrderSync::new(api, repo, Online, 100).unwrap();
    sync.refresh().await;

    let orders = sync.list_orders().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, "new");
}

#[tokio::test]
async fn today_figures_come_from_the_cache() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let mut yesterday = cached_order("o2", 999.0);
    yesterday.order_date = yesterday.order_date - Duration::days(1);
    repo.replace_orders(&[cached_order("o1", 50.0), yesterday], &[], &[])
        .unwrap();

    let api = StubApi {
        orders: vec![],
        fail: false,
    };
    let sync = OrderSync::new(api, repo, Online, 100).unwrap();

    assert_eq!(sync.today_sales().unwrap(), 50.0);
    assert_eq!(sync.today_order_count().unwrap(), 1);
}
