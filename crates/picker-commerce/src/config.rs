//! Picker configuration.

use crate::catalog::DEFAULT_PAGE_SIZE;
use crate::discount::{DiscountConfig, DiscountType};
use crate::error::PickerError;
use crate::reconcile::CommitDefaults;
use crate::staging::TogglePolicy;
use serde::{Deserialize, Serialize};

/// Engine configuration. Every field has a default, so an empty table is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Products per catalog page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// What the toggle engine refuses to stage.
    #[serde(default)]
    pub toggle: TogglePolicy,

    /// Discount labels and defaults.
    #[serde(default)]
    pub discount: DiscountConfig,

    /// Whether committed products start with variants expanded.
    #[serde(default = "default_true")]
    pub show_variants_on_commit: bool,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

impl PickerConfig {
    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> Result<(), PickerError> {
        if self.page_size == 0 {
            return Err(PickerError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }

        let labels = &self.discount.labels;
        for kind in DiscountType::ALL {
            if labels.label(kind).trim().is_empty() {
                return Err(PickerError::InvalidConfig(format!(
                    "discount label for {} is empty",
                    kind.as_str()
                )));
            }
        }

        if labels.percent_off.trim().eq_ignore_ascii_case(labels.amount_off.trim()) {
            return Err(PickerError::InvalidConfig(format!(
                "discount labels must differ, both are '{}'",
                labels.percent_off
            )));
        }

        Ok(())
    }

    /// Defaults applied to committed entries.
    pub fn commit_defaults(&self) -> CommitDefaults {
        CommitDefaults {
            discount_type: self.discount.default_type,
            show_variants: self.show_variants_on_commit,
        }
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            toggle: TogglePolicy::default(),
            discount: DiscountConfig::default(),
            show_variants_on_commit: true,
        }
    }
}
