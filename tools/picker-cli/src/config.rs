//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use picker_catalog::{FetchPolicy, RetryPolicy};
use picker_commerce::PickerConfig;
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["picker.toml", ".picker.toml", "picker.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Engine configuration.
    #[serde(default)]
    pub picker: PickerConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Problems that make the config unusable.
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if let Err(e) = self.picker.validate() {
            errors.push(e.to_string());
        }
        if self.catalog.fixture.trim().is_empty() {
            errors.push("catalog.fixture is required".to_string());
        }
        if self.catalog.timeout_ms == 0 {
            errors.push("catalog.timeout_ms must be at least 1".to_string());
        }

        errors
    }
}

/// Where catalog pages come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON fixture path, relative to the config file.
    #[serde(default = "default_fixture")]
    pub fixture: String,

    /// Retries after a failed page fetch.
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,

    /// Per-attempt timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_fixture() -> String {
    "catalog.json".to_string()
}

fn default_retry_attempts() -> u32 {
    1
}

fn default_timeout_ms() -> u64 {
    5000
}

impl CatalogConfig {
    /// Fetch policy for this catalog.
    pub fn fetch_policy(&self) -> FetchPolicy {
        FetchPolicy::new(
            Duration::from_millis(self.timeout_ms),
            RetryPolicy::new(self.retry_attempts),
        )
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            fixture: default_fixture(),
            retry_attempts: default_retry_attempts(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Generate a default picker.toml config file.
pub fn generate_default_config(fixture: &str) -> String {
    format!(
        r#"# Product picker configuration

[catalog]
fixture = "{fixture}"
retry_attempts = 1
timeout_ms = 5000

[picker]
page_size = 10
show_variants_on_commit = true

[picker.toggle]
# Refuse whole-product ticks when a variant is oversold
block_negative_inventory_products = true
# Refuse ticking variants with no stock on hand
block_unavailable_variants = true

[picker.discount]
default_type = "percent_off"

[picker.discount.labels]
percent_off = "% Off"
amount_off = "Amount Off"
"#,
        fixture = fixture
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_commerce::discount::DiscountType;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config("fixtures/catalog.json")).unwrap();
        assert_eq!(config.catalog.fixture, "fixtures/catalog.json");
        assert_eq!(config.picker, PickerConfig::default());
        assert!(config.errors().is_empty());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.catalog.fixture, "catalog.json");
        assert_eq!(config.catalog.fetch_policy().timeout, Duration::from_secs(5));
        assert_eq!(config.catalog.fetch_policy().retry.max_retries, 1);
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picker.json");
        std::fs::write(
            &path,
            r#"{"catalog": {"fixture": "shop.json"}, "picker": {"discount": {"default_type": "amount_off"}}}"#,
        )
        .unwrap();

        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.catalog.fixture, "shop.json");
        assert_eq!(config.picker.discount.default_type, DiscountType::AmountOff);
    }

    #[test]
    fn test_errors() {
        let mut config = CliConfig::default();
        config.picker.page_size = 0;
        config.catalog.timeout_ms = 0;
        assert_eq!(config.errors().len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(CliConfig::load("/nonexistent/picker.toml").is_err());
    }
}
