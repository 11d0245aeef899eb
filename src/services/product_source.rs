//! Product Sources
//!
//! The catalog treats its data provider as an opaque, synchronous handoff:
//! `load()` either returns the whole ordered product list or fails.

use std::path::PathBuf;

use crate::assets::Assets;
use crate::constants::SEED_ASSET_PATH;
use crate::domain::config::DataConfig;
use crate::domain::product::Product;
use crate::error::{Error, Result};

/// Provider of the product store contents
pub trait ProductSource: Send + Sync + 'static {
    /// Load every product, in display order
    fn load(&self) -> Result<Vec<Product>>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// Seed dataset bundled into the binary
#[derive(Debug, Clone, Default)]
pub struct EmbeddedSeed;

impl ProductSource for EmbeddedSeed {
    fn load(&self) -> Result<Vec<Product>> {
        let bytes = Assets::load(SEED_ASSET_PATH)?;
        parse_products(&bytes)
    }

    fn describe(&self) -> String {
        format!("embedded:{SEED_ASSET_PATH}")
    }
}

/// JSON array of products on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProductSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Product>> {
        let bytes = std::fs::read(&self.path).map_err(|e| Error::DataLoad {
            message: format!("{}: {e}", self.path.display()),
        })?;
        parse_products(&bytes)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Products held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    products: Vec<Product>,
}

impl StaticSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl ProductSource for StaticSource {
    fn load(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn describe(&self) -> String {
        format!("static:{} products", self.products.len())
    }
}

/// Pick the source named by the data config
pub fn source_from_config(config: &DataConfig) -> Box<dyn ProductSource> {
    match &config.products_path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(EmbeddedSeed),
    }
}

fn parse_products(bytes: &[u8]) -> Result<Vec<Product>> {
    serde_json::from_slice(bytes).map_err(|e| Error::DataLoad {
        message: format!("invalid product data: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ensure_unique_codes;
    use std::io::Write;

    #[test]
    fn embedded_seed_parses_with_unique_codes() {
        let products = EmbeddedSeed.load().expect("seed loads");
        assert!(products.len() > crate::constants::PAGE_SIZE);
        ensure_unique_codes(&products).expect("unique codes");
    }

    #[test]
    fn json_file_source_reads_products() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"code":"A1","name":"Widget","category":"Tools","basePrice":10,"active":true}}]"#
        )
        .expect("write");

        let source = JsonFileSource::new(file.path());
        let products = source.load().expect("load");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].code, "A1");
        assert!(source.describe().starts_with("file:"));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let source = JsonFileSource::new("/definitely/not/here/products.json");
        assert!(matches!(source.load(), Err(Error::DataLoad { .. })));
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{ not json").expect("write");
        assert!(matches!(
            JsonFileSource::new(file.path()).load(),
            Err(Error::DataLoad { .. })
        ));
    }

    #[test]
    fn config_without_path_uses_seed() {
        let source = source_from_config(&DataConfig::default());
        assert!(source.describe().starts_with("embedded:"));
    }
}
