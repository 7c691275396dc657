//! Discount annotations attached to committed products and variants.
//!
//! The core never interprets the discount value: it is raw text owned by the
//! presentation layer. Only the discount type is a closed enumeration.

use crate::error::PickerError;
use serde::{Deserialize, Serialize};

/// Type of discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// Percentage off.
    #[default]
    PercentOff,
    /// Flat amount off.
    AmountOff,
}

impl DiscountType {
    /// Every discount type, in display order.
    pub const ALL: [DiscountType; 2] = [DiscountType::PercentOff, DiscountType::AmountOff];

    /// Machine name, as used in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::PercentOff => "percent_off",
            DiscountType::AmountOff => "amount_off",
        }
    }

    /// Parse a machine name. Accepts the older `percentage`/`fixed_amount` spellings.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "percent_off" | "percentage" => Some(DiscountType::PercentOff),
            "amount_off" | "fixed_amount" => Some(DiscountType::AmountOff),
            _ => None,
        }
    }
}

/// Display labels for discount types.
///
/// Storefronts disagree on the wording ("% Off", "Percent Off", "Flat Off"),
/// so labels are configuration rather than literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountLabels {
    /// Label for [`DiscountType::PercentOff`].
    #[serde(default = "default_percent_off_label")]
    pub percent_off: String,
    /// Label for [`DiscountType::AmountOff`].
    #[serde(default = "default_amount_off_label")]
    pub amount_off: String,
}

fn default_percent_off_label() -> String {
    "% Off".to_string()
}

fn default_amount_off_label() -> String {
    "Amount Off".to_string()
}

impl DiscountLabels {
    /// Get the label for a discount type.
    pub fn label(&self, kind: DiscountType) -> &str {
        match kind {
            DiscountType::PercentOff => &self.percent_off,
            DiscountType::AmountOff => &self.amount_off,
        }
    }

    /// Resolve a label (or a machine name) to a discount type.
    ///
    /// Labels match case-insensitively after trimming.
    pub fn parse(&self, text: &str) -> Result<DiscountType, PickerError> {
        let wanted = text.trim();
        DiscountType::ALL
            .into_iter()
            .find(|kind| self.label(*kind).eq_ignore_ascii_case(wanted))
            .or_else(|| DiscountType::from_str(wanted))
            .ok_or_else(|| PickerError::UnknownDiscountType(text.to_string()))
    }

    /// Labels in display order, as offered by a type selector.
    pub fn options(&self) -> Vec<&str> {
        DiscountType::ALL.iter().map(|kind| self.label(*kind)).collect()
    }
}

impl Default for DiscountLabels {
    fn default() -> Self {
        Self {
            percent_off: default_percent_off_label(),
            amount_off: default_amount_off_label(),
        }
    }
}

/// Discount settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountConfig {
    /// Display labels.
    #[serde(default)]
    pub labels: DiscountLabels,
    /// Type given to freshly committed entries.
    #[serde(default)]
    pub default_type: DiscountType,
}

/// A discount annotation on a product or variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountAnnotation {
    /// Whether the discount inputs are shown.
    pub visible: bool,
    /// Raw discount text, exactly as entered.
    pub value: String,
    /// Discount type.
    pub kind: DiscountType,
}

impl DiscountAnnotation {
    /// A hidden, empty annotation of the given type.
    pub fn hidden(kind: DiscountType) -> Self {
        Self {
            visible: false,
            value: String::new(),
            kind,
        }
    }

    /// Flip visibility, leaving value and type alone.
    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    /// Store a raw value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Set the discount type.
    pub fn set_kind(&mut self, kind: DiscountType) {
        self.kind = kind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = DiscountLabels::default();
        assert_eq!(labels.label(DiscountType::PercentOff), "% Off");
        assert_eq!(labels.label(DiscountType::AmountOff), "Amount Off");
        assert_eq!(labels.options(), vec!["% Off", "Amount Off"]);
    }

    #[test]
    fn test_parse_label() {
        let labels = DiscountLabels::default();
        assert_eq!(labels.parse("% Off").unwrap(), DiscountType::PercentOff);
        assert_eq!(labels.parse(" amount off ").unwrap(), DiscountType::AmountOff);
        assert_eq!(labels.parse("amount_off").unwrap(), DiscountType::AmountOff);
    }

    #[test]
    fn test_parse_custom_label() {
        let labels = DiscountLabels {
            percent_off: "Percent Off".to_string(),
            amount_off: "Flat Off".to_string(),
        };
        assert_eq!(labels.parse("Flat Off").unwrap(), DiscountType::AmountOff);
        assert!(labels.parse("% Off").is_err());
    }

    #[test]
    fn test_parse_unknown_label() {
        let labels = DiscountLabels::default();
        let err = labels.parse("BOGO").unwrap_err();
        assert!(matches!(err, PickerError::UnknownDiscountType(ref s) if s == "BOGO"));
    }

    #[test]
    fn test_value_is_stored_verbatim() {
        let mut discount = DiscountAnnotation::hidden(DiscountType::PercentOff);
        discount.set_value("  -12.5abc ");
        assert_eq!(discount.value, "  -12.5abc ");
    }

    #[test]
    fn test_toggle_keeps_value_and_kind() {
        let mut discount = DiscountAnnotation::hidden(DiscountType::AmountOff);
        discount.set_value("5");
        discount.toggle_visible();
        assert!(discount.visible);
        discount.toggle_visible();
        assert!(!discount.visible);
        assert_eq!(discount.value, "5");
        assert_eq!(discount.kind, DiscountType::AmountOff);
    }
}
