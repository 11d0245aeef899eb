//! Config - Application Configuration

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    FILTER_DEBOUNCE_MS, INITIAL_LOAD_DELAY_MS, PAGE_LOAD_DELAY_MS, PAGE_SIZE, SCROLL_THRESHOLD_PX,
};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Paging and timing
    pub catalog: CatalogConfig,
    /// Where products come from
    pub data: DataConfig,
    /// Log output
    pub log: LogConfig,
}

/// Paging and timing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Products per page
    pub page_size: usize,
    /// Debounce window for filter edits (ms)
    pub debounce_ms: u64,
    /// Simulated page fetch latency (ms)
    pub page_delay_ms: u64,
    /// Simulated initial load latency (ms)
    pub initial_load_delay_ms: u64,
    /// Near-bottom threshold (px)
    pub scroll_threshold_px: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            debounce_ms: FILTER_DEBOUNCE_MS,
            page_delay_ms: PAGE_LOAD_DELAY_MS,
            initial_load_delay_ms: INITIAL_LOAD_DELAY_MS,
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
        }
    }
}

impl CatalogConfig {
    /// Page size, never zero
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    pub fn initial_load_delay(&self) -> Duration {
        Duration::from_millis(self.initial_load_delay_ms)
    }
}

/// Product data configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// JSON file with products; the bundled seed is used when unset
    pub products_path: Option<PathBuf>,
}

/// Log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is not set
    pub level: String,
    /// Directory for daily rolling log files; stdout only when unset
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [catalog]
            page_size = 5
            "#,
        )
        .expect("parse config");
        assert_eq!(config.catalog.page_size, 5);
        assert_eq!(config.catalog.debounce_ms, FILTER_DEBOUNCE_MS);
        assert!(config.data.products_path.is_none());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let config = CatalogConfig {
            page_size: 0,
            ..Default::default()
        };
        assert_eq!(config.page_size(), 1);
    }
}
