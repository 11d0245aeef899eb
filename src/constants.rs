//! Catalog Constants
//!
//! Defaults for paging, timing and scrolling. All of them can be overridden
//! through [`crate::domain::config::CatalogConfig`].

/// Products revealed per page
pub const PAGE_SIZE: usize = 20;

/// Quiet period after the last filter edit before re-filtering
pub const FILTER_DEBOUNCE_MS: u64 = 400;

/// Simulated latency of a single page fetch
pub const PAGE_LOAD_DELAY_MS: u64 = 1000;

/// Simulated latency of the initial product load
pub const INITIAL_LOAD_DELAY_MS: u64 = 1000;

/// Distance from the bottom (in pixels) that counts as "near bottom"
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Interval at which the headless driver drains timer events
pub const PUMP_INTERVAL_MS: u64 = 50;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "catalog-view.toml";

/// Bundled seed dataset path (relative to the assets folder)
pub const SEED_ASSET_PATH: &str = "seed/products.json";
