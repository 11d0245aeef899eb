//! Catalog View - Headless Driver
//!
//! Loads the catalog, optionally filters it by the query given as the first
//! argument, scrolls until every page is visible and prints the final
//! snapshot as JSON.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use catalog_view::constants::PUMP_INTERVAL_MS;
use catalog_view::domain::config::CatalogConfig;
use catalog_view::domain::scroll::ScrollMetrics;
use catalog_view::features::catalog::CatalogController;
use catalog_view::logging;
use catalog_view::services::{ProductSource, block_on, source_from_config};
use catalog_view::state::catalog_state::CatalogSnapshot;
use catalog_view::utils::config_store::{default_config_path, load_or_init};
use catalog_view::utils::format::product_row;

/// Height of one rendered table row, used to fake scroll metrics
const ROW_HEIGHT_PX: f64 = 32.0;
const VIEWPORT_HEIGHT_PX: f64 = 480.0;

fn main() -> anyhow::Result<()> {
    let config_path = match std::env::var_os("CATALOG_VIEW_CONFIG") {
        Some(path) => PathBuf::from(path),
        None => default_config_path()?,
    };
    let config = load_or_init(&config_path)?;
    let _log_guard = logging::init(&config.log);

    tracing::info!("Starting catalog view with {}", config_path.display());

    let query = std::env::args().nth(1);
    let source: Arc<dyn ProductSource> = Arc::from(source_from_config(&config.data));
    let snapshot = block_on(browse(config.catalog, source, query))??;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

async fn browse(
    config: CatalogConfig,
    source: Arc<dyn ProductSource>,
    query: Option<String>,
) -> anyhow::Result<CatalogSnapshot> {
    let tick = Duration::from_millis(PUMP_INTERVAL_MS);
    let mut catalog = CatalogController::new(config, source)?;

    catalog.load_products();
    catalog.run_until_idle(tick).await;
    tracing::info!(
        "Catalog ready: {} products in {} categories",
        catalog.filtered_len(),
        catalog.categories().len()
    );

    if let Some(query) = query {
        catalog.set_query(query);
        catalog.run_until_idle(tick).await;
        tracing::info!("{} products match {:?}", catalog.filtered_len(), catalog.form().query);
    }

    // Scroll to the bottom of whatever is rendered until nothing is left
    loop {
        let content_height = catalog.visible_products().len() as f64 * ROW_HEIGHT_PX;
        let metrics = ScrollMetrics::new(
            (content_height - VIEWPORT_HEIGHT_PX).max(0.0),
            content_height,
            VIEWPORT_HEIGHT_PX,
        );
        if !catalog.on_scroll(metrics) {
            break;
        }
        catalog.run_until_idle(tick).await;
        tracing::info!(
            "Showing {}/{} products",
            catalog.visible_products().len(),
            catalog.filtered_len()
        );
    }

    for product in catalog.visible_products() {
        tracing::debug!("{}", product_row(product));
    }

    Ok(catalog.snapshot())
}
