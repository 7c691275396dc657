//! Scenario files: scripted picker sessions replayed against a catalog.
//!
//! A scenario is a list of steps, each one user action:
//!
//! ```toml
//! name = "build a bundle"
//!
//! [[steps]]
//! action = "open_picker"
//!
//! [[steps]]
//! action = "toggle"
//! product = 77
//!
//! [[steps]]
//! action = "confirm"
//! ```
//!
//! Picker steps that need catalog pages (`open_picker`, `search`,
//! `load_more`) fetch them from the provider before the next step runs.

use anyhow::{Context, Result};
use picker_catalog::{fetch_page_with_policy, CatalogProvider, FetchPolicy};
use picker_commerce::prelude::*;
use picker_commerce::reorder::{apply_product_hovers, apply_variant_hovers, MoveIntent};
use serde::{Deserialize, Serialize};

/// A scripted session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name.
    #[serde(default)]
    pub name: Option<String>,

    /// Steps, in order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Load a scenario from a TOML or JSON file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON scenario: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML scenario: {}", path))
        }
    }
}

/// One user action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// "Add Product": append an empty slot.
    AddPlaceholder,
    /// Open the picker, optionally to replace the product at `slot`.
    OpenPicker {
        #[serde(default)]
        slot: Option<usize>,
    },
    /// Type into the picker's search box.
    Search { query: String },
    /// Scroll to the end of the picker's list.
    LoadMore,
    /// Tick or untick a product, or one of its variants.
    Toggle {
        product: ProductId,
        #[serde(default)]
        variant: Option<VariantId>,
    },
    /// Press "Add".
    Confirm,
    /// Press "Cancel".
    Cancel,
    /// Move a product.
    MoveProduct { from: usize, to: usize },
    /// Drag a product across several positions.
    DragProduct { from: usize, hovers: Vec<usize> },
    /// Move a variant within its product.
    MoveVariant { product: ProductId, from: usize, to: usize },
    /// Drag a variant across several positions.
    DragVariant {
        product: ProductId,
        from: usize,
        hovers: Vec<usize>,
    },
    /// Expand or collapse a product's variants.
    ToggleVariants { product: ProductId },
    /// Show or hide discount inputs.
    ToggleDiscount {
        product: ProductId,
        #[serde(default)]
        variant: Option<VariantId>,
    },
    /// Type a discount value.
    SetDiscountValue {
        product: ProductId,
        #[serde(default)]
        variant: Option<VariantId>,
        value: String,
    },
    /// Pick a discount type by its label.
    SetDiscountType {
        product: ProductId,
        #[serde(default)]
        variant: Option<VariantId>,
        label: String,
    },
    /// Remove a product.
    RemoveProduct { product: ProductId },
    /// Remove a variant.
    RemoveVariant { product: ProductId, variant: VariantId },
}

impl Step {
    /// Short name for messages.
    pub fn action(&self) -> &'static str {
        match self {
            Step::AddPlaceholder => "add_placeholder",
            Step::OpenPicker { .. } => "open_picker",
            Step::Search { .. } => "search",
            Step::LoadMore => "load_more",
            Step::Toggle { .. } => "toggle",
            Step::Confirm => "confirm",
            Step::Cancel => "cancel",
            Step::MoveProduct { .. } => "move_product",
            Step::DragProduct { .. } => "drag_product",
            Step::MoveVariant { .. } => "move_variant",
            Step::DragVariant { .. } => "drag_variant",
            Step::ToggleVariants { .. } => "toggle_variants",
            Step::ToggleDiscount { .. } => "toggle_discount",
            Step::SetDiscountValue { .. } => "set_discount_value",
            Step::SetDiscountType { .. } => "set_discount_type",
            Step::RemoveProduct { .. } => "remove_product",
            Step::RemoveVariant { .. } => "remove_variant",
        }
    }
}

/// What a replay did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Steps executed.
    pub steps: usize,
    /// 1-based numbers of steps that changed nothing.
    pub noops: Vec<usize>,
}

/// Replays steps against an editor, fetching pages from a provider.
pub struct ScenarioRunner<'a, P: ?Sized> {
    editor: ProductListEditor,
    provider: &'a P,
    policy: FetchPolicy,
}

impl<'a, P> ScenarioRunner<'a, P>
where
    P: CatalogProvider + ?Sized,
{
    /// Create a runner with an empty product list.
    pub fn new(config: PickerConfig, provider: &'a P, policy: FetchPolicy) -> Self {
        Self {
            editor: ProductListEditor::new(config),
            provider,
            policy,
        }
    }

    /// The editor being driven.
    pub fn editor(&self) -> &ProductListEditor {
        &self.editor
    }

    /// Run every step in order.
    pub async fn run(&mut self, scenario: &Scenario) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        for (i, step) in scenario.steps.iter().enumerate() {
            let changed = self
                .apply(step)
                .await
                .with_context(|| format!("Step {} ({}) failed", i + 1, step.action()))?;
            summary.steps += 1;
            if !changed {
                summary.noops.push(i + 1);
            }
        }
        Ok(summary)
    }

    /// Apply one step. Returns `false` if it changed nothing.
    pub async fn apply(&mut self, step: &Step) -> Result<bool> {
        tracing::debug!(action = step.action(), "applying step");

        let editor = &mut self.editor;
        let changed = match step {
            Step::AddPlaceholder => {
                editor.add_placeholder();
                true
            }
            Step::OpenPicker { slot } => {
                let request = editor.open_picker(*slot);
                self.serve(Some(request)).await;
                true
            }
            Step::Search { query } => {
                let request = editor.search(query);
                self.serve(request).await
            }
            Step::LoadMore => {
                let request = editor.load_more();
                self.serve(request).await
            }
            Step::Toggle { product, variant } => editor.toggle(product, variant.as_ref()),
            Step::Confirm => {
                let was_open = editor.is_picker_open();
                editor.confirm_picker().is_merged() || was_open
            }
            Step::Cancel => editor.cancel_picker(),
            Step::MoveProduct { from, to } => editor.store_mut().move_product(*from, *to),
            Step::DragProduct { from, hovers } => {
                let intents = hovers.iter().map(|to| MoveIntent::new(*from, *to));
                apply_product_hovers(editor.store_mut(), intents) > 0
            }
            Step::MoveVariant { product, from, to } => {
                editor.store_mut().move_variant(*from, *to, product)
            }
            Step::DragVariant { product, from, hovers } => {
                let intents = hovers.iter().map(|to| MoveIntent::new(*from, *to));
                apply_variant_hovers(editor.store_mut(), product, intents) > 0
            }
            Step::ToggleVariants { product } => editor.store_mut().toggle_show_variants(product),
            Step::ToggleDiscount { product, variant } => match variant {
                Some(variant) => editor.store_mut().toggle_variant_discount(product, variant),
                None => editor.store_mut().toggle_product_discount(product),
            },
            Step::SetDiscountValue {
                product,
                variant,
                value,
            } => match variant {
                Some(variant) => editor
                    .store_mut()
                    .set_variant_discount_value(product, variant, value.as_str()),
                None => editor.store_mut().set_product_discount_value(product, value.as_str()),
            },
            Step::SetDiscountType {
                product,
                variant,
                label,
            } => {
                let kind = editor.config().discount.labels.parse(label)?;
                match variant {
                    Some(variant) => editor.store_mut().set_variant_discount_type(product, variant, kind),
                    None => editor.store_mut().set_product_discount_type(product, kind),
                }
            }
            Step::RemoveProduct { product } => editor.store_mut().remove_product(product),
            Step::RemoveVariant { product, variant } => {
                editor.store_mut().remove_variant(product, variant)
            }
        };

        Ok(changed)
    }

    /// Fetch and apply the page a request asks for.
    async fn serve(&mut self, request: Option<PageRequest>) -> bool {
        let Some(request) = request else {
            return false;
        };
        let page = fetch_page_with_policy(self.provider, &request, &self.policy).await;
        self.editor.receive_page(&request, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_catalog::InMemoryCatalog;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            CatalogProduct::new(1u64, "Fog Linen Chambray Towel")
                .with_variant(CatalogVariant::new(11u64, "S / White", "49", 5))
                .with_variant(CatalogVariant::new(12u64, "M / White", "49", 5)),
            CatalogProduct::new(2u64, "Orbit Terrarium")
                .with_variant(CatalogVariant::new(21u64, "Large", "109", 8)),
            CatalogProduct::new(3u64, "Oversold Lamp")
                .with_variant(CatalogVariant::new(31u64, "Brass", "89", -2)),
        ])
    }

    fn titles(runner: &ScenarioRunner<'_, InMemoryCatalog>) -> Vec<String> {
        runner
            .editor()
            .store()
            .products()
            .iter()
            .map(|p| p.title.clone())
            .collect()
    }

    const SCENARIO: &str = r#"
name = "bundle"

[[steps]]
action = "open_picker"

[[steps]]
action = "toggle"
product = 1

[[steps]]
action = "toggle"
product = 3

[[steps]]
action = "search"
query = "terra"

[[steps]]
action = "toggle"
product = 2

[[steps]]
action = "confirm"

[[steps]]
action = "drag_product"
from = 1
hovers = [0, 0, 0]

[[steps]]
action = "toggle_discount"
product = 1

[[steps]]
action = "set_discount_value"
product = 1
value = "15"

[[steps]]
action = "set_discount_type"
product = 1
label = "amount off"
"#;

    #[tokio::test]
    async fn test_run_toml_scenario() {
        let scenario: Scenario = toml::from_str(SCENARIO).unwrap();
        let catalog = catalog();
        let mut runner = ScenarioRunner::new(PickerConfig::default(), &catalog, FetchPolicy::default());

        let summary = runner.run(&scenario).await.unwrap();

        assert_eq!(summary.steps, 10);
        // Oversold product refused by the default policy.
        assert_eq!(summary.noops, vec![3]);
        assert_eq!(titles(&runner), vec!["Orbit Terrarium", "Fog Linen Chambray Towel"]);

        let towel = runner.editor().store().get(&ProductId::new("1")).unwrap();
        assert!(towel.discount.visible);
        assert_eq!(towel.discount.value, "15");
        assert_eq!(towel.discount.kind, DiscountType::AmountOff);
    }

    #[tokio::test]
    async fn test_placeholder_slot_and_variant_steps() {
        let scenario: Scenario = serde_json::from_str(
            r#"{"steps": [
                {"action": "add_placeholder"},
                {"action": "open_picker", "slot": 0},
                {"action": "toggle", "product": "1", "variant": "12"},
                {"action": "confirm"},
                {"action": "remove_variant", "product": "1", "variant": "12"}
            ]}"#,
        )
        .unwrap();
        let catalog = catalog();
        let mut runner = ScenarioRunner::new(PickerConfig::default(), &catalog, FetchPolicy::default());

        runner.run(&scenario).await.unwrap();
        assert!(runner.editor().store().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_discount_label_fails() {
        let scenario: Scenario = serde_json::from_str(
            r#"{"steps": [
                {"action": "open_picker"},
                {"action": "toggle", "product": 1},
                {"action": "confirm"},
                {"action": "set_discount_type", "product": 1, "label": "BOGO"}
            ]}"#,
        )
        .unwrap();
        let catalog = catalog();
        let mut runner = ScenarioRunner::new(PickerConfig::default(), &catalog, FetchPolicy::default());

        let err = runner.run(&scenario).await.unwrap_err();
        assert!(format!("{:#}", err).contains("Step 4 (set_discount_type)"));
    }

    #[tokio::test]
    async fn test_load_more_without_more_pages_is_noop() {
        let mut config = PickerConfig::default();
        config.page_size = 2;
        let catalog = catalog();
        let mut runner = ScenarioRunner::new(config, &catalog, FetchPolicy::default());

        assert!(runner.apply(&Step::OpenPicker { slot: None }).await.unwrap());
        assert!(runner.apply(&Step::LoadMore).await.unwrap());
        assert!(!runner.apply(&Step::LoadMore).await.unwrap());
        assert_eq!(runner.editor().session().unwrap().feed().products().len(), 3);
    }

    #[tokio::test]
    async fn test_bundled_demos() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
        let catalog = InMemoryCatalog::from_json_file(root.join("fixtures/catalog.json"))
            .await
            .unwrap();

        let bundle = Scenario::load(root.join("demos/bundle.toml").to_str().unwrap()).unwrap();
        let mut runner = ScenarioRunner::new(PickerConfig::default(), &catalog, FetchPolicy::default());
        let summary = runner.run(&bundle).await.unwrap();
        let ids: Vec<String> = runner.editor().store().ids().iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["80", "83", "85"]);
        assert_eq!(summary.noops, vec![4]);

        let replace = Scenario::load(root.join("demos/replace-slot.toml").to_str().unwrap()).unwrap();
        let mut runner = ScenarioRunner::new(PickerConfig::default(), &catalog, FetchPolicy::default());
        let summary = runner.run(&replace).await.unwrap();
        let store = runner.editor().store();
        let ids: Vec<String> = store.ids().iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["77", "87", "88", "86"]);
        assert!(summary.noops.is_empty());

        let towel: Vec<String> = store
            .get(&ProductId::new("77"))
            .unwrap()
            .variants
            .iter()
            .map(|v| v.id.to_string())
            .collect();
        assert_eq!(towel, vec!["1003", "1001"]);
        assert!(!store.get(&ProductId::new("87")).unwrap().show_variants);
    }

    #[test]
    fn test_load_scenario_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bundle.toml");
        std::fs::write(&path, SCENARIO).unwrap();

        let scenario = Scenario::load(path.to_str().unwrap()).unwrap();
        assert_eq!(scenario.name.as_deref(), Some("bundle"));
        assert_eq!(scenario.steps.len(), 10);
    }
}
