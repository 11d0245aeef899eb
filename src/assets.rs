//! Embedded assets for the catalog view
//!
//! Uses rust-embed to bundle the seed product dataset at compile time.

use std::borrow::Cow;

use rust_embed::RustEmbed;

use crate::error::{Error, Result};

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct Assets;

impl Assets {
    /// Raw bytes of an embedded file
    pub fn load(path: &str) -> Result<Cow<'static, [u8]>> {
        Self::get(path).map(|f| f.data).ok_or_else(|| Error::DataLoad {
            message: format!(r#"could not find asset at path "{path}""#),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SEED_ASSET_PATH;

    #[test]
    fn seed_dataset_is_embedded() {
        let data = Assets::load(SEED_ASSET_PATH).expect("seed");
        assert!(data.starts_with(b"["));
    }

    #[test]
    fn missing_asset_is_a_load_error() {
        assert!(matches!(Assets::load("seed/nope.json"), Err(Error::DataLoad { .. })));
    }
}
