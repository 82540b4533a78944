use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use dotenvy::dotenv;

use tillsync::config::AppConfig;
use tillsync::db::establish_connection_pool;
use tillsync::domain::product::ProductListQuery;
use tillsync::remote::{HttpClient, TcpProbe};
use tillsync::repository::{CatalogReader, DieselRepository};
use tillsync::services::cart::CartService;
use tillsync::services::catalog::CatalogSync;
use tillsync::services::orders::OrderSync;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// One-shot sync cycle: catalog sync, cart relink, order refresh, then
/// today's figures.
#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                log::error!("Failed to get database connection: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = conn.run_pending_migrations(MIGRATIONS) {
            log::error!("Failed to run migrations: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);
    let client = HttpClient::new(&config);
    let probe = TcpProbe::from_base_url(&config.api_base_url);

    let catalog_sync = CatalogSync::new(client.clone(), repo.clone());
    let cart = match CartService::new(repo.clone()) {
        Ok(cart) => cart,
        Err(e) => {
            log::error!("Failed to read cart cache: {e}");
            std::process::exit(1);
        }
    };

    match catalog_sync.sync_all().await {
        Ok(_) => {
            // The product wipe above nulled cart product links; repair them
            // from the fresh catalog.
            match repo.list_products(ProductListQuery::new()) {
                Ok(products) => match cart.restore_product_ids(&products) {
                    Ok(relinked) if relinked > 0 => {
                        log::info!("relinked {relinked} cart lines to the fresh catalog");
                    }
                    Ok(_) => {}
                    Err(e) => log::warn!("cart relink failed: {e}"),
                },
                Err(e) => log::warn!("could not load fresh products for relinking: {e}"),
            }
        }
        Err(e) => log::error!("catalog sync failed: {}", e.user_message()),
    }

    let order_sync = match OrderSync::new(client, repo, probe, config.order_page_size) {
        Ok(order_sync) => order_sync,
        Err(e) => {
            log::error!("Failed to read order cache: {e}");
            std::process::exit(1);
        }
    };
    order_sync.refresh().await;

    match (order_sync.today_sales(), order_sync.today_order_count()) {
        (Ok(sales), Ok(count)) => log::info!("today: {count} orders, {sales:.2} total"),
        (Err(e), _) | (_, Err(e)) => log::warn!("could not compute today's figures: {e}"),
    }

    Ok(())
}
