//! ConfigStore - Local Configuration Storage
//!
//! The configuration lives in a TOML file in the platform config directory:
//! - **Linux**: `~/.config/catalog-view/`
//! - **macOS**: `~/Library/Application Support/com.catalog.catalog-view/`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\catalog\catalog-view\config\`

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::constants::CONFIG_FILE_NAME;
use crate::domain::config::AppConfig;
use crate::error::{Error, Result};

/// Get or create the application's configuration directory
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "catalog", "catalog-view") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Path of the config file in the platform config directory
pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the config at `path`, writing defaults there if it does not exist
pub fn load_or_init(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let config = AppConfig::default();
        save_config(path, &config)?;
        tracing::info!("Wrote default config to {}", path.display());
        return Ok(config);
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save the config as TOML
pub fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let config = load_or_init(&path).expect("load");
        assert!(path.exists());
        assert_eq!(config.catalog, Default::default());
    }

    #[test]
    fn saved_config_is_read_back() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut config = AppConfig::default();
        config.catalog.page_size = 7;
        config.data.products_path = Some(PathBuf::from("/tmp/products.json"));
        save_config(&path, &config).expect("save");

        let loaded = load_or_init(&path).expect("load");
        assert_eq!(loaded.catalog.page_size, 7);
        assert_eq!(loaded.data.products_path, config.data.products_path);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "catalog = [").expect("write");
        assert!(matches!(load_or_init(&path), Err(Error::TomlDe { .. })));
    }
}
