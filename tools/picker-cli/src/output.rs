//! Output formatting for the CLI.

use console::style;
use picker_commerce::discount::{DiscountAnnotation, DiscountLabels};
use picker_commerce::selection::SelectionStore;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print the committed product list.
    pub fn selection(&self, store: &SelectionStore, labels: &DiscountLabels) {
        if self.json {
            self.json(store);
            return;
        }
        if store.is_empty() {
            println!("  {}", style("(no products)").dim());
            return;
        }

        for (i, product) in store.products().iter().enumerate() {
            let title = if product.placeholder {
                style("Select Product").dim().to_string()
            } else {
                style(&product.title).bold().to_string()
            };
            println!(
                "  {} {}{}",
                style(format!("{}.", i + 1)).dim(),
                title,
                discount_suffix(&product.discount, labels)
            );

            if !product.show_variants {
                if !product.variants.is_empty() {
                    println!("     {}", style(format!("({} variants hidden)", product.variants.len())).dim());
                }
                continue;
            }
            for variant in &product.variants {
                println!(
                    "     {} {} {}{}",
                    style("-").dim(),
                    variant.title,
                    style(format!("${}", variant.price)).dim(),
                    discount_suffix(&variant.discount, labels)
                );
            }
        }
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn discount_suffix(discount: &DiscountAnnotation, labels: &DiscountLabels) -> String {
    if !discount.visible {
        return String::new();
    }
    let text = format!("{} {}", discount.value, labels.label(discount.kind));
    format!("  {}", style(text.trim()).cyan())
}

/// Format an inventory count, highlighting what the picker refuses.
pub fn inventory_badge(quantity: i64) -> String {
    let text = format!("{} available", quantity);
    match quantity {
        q if q < 0 => style(text).red().to_string(),
        0 => style(text).yellow().to_string(),
        _ => style(text).dim().to_string(),
    }
}
