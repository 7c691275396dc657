//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use picker_commerce::discount::DiscountType;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match ctx.config_file {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let catalog = &ctx.config.catalog;
    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv("fixture", &catalog.fixture);
    ctx.output.kv("retry_attempts", &catalog.retry_attempts.to_string());
    ctx.output.kv("timeout_ms", &catalog.timeout_ms.to_string());

    let picker = &ctx.config.picker;
    ctx.output.info("");
    ctx.output.info("[picker]");
    ctx.output.kv("page_size", &picker.page_size.to_string());
    ctx.output.kv("show_variants_on_commit", &picker.show_variants_on_commit.to_string());
    ctx.output.kv(
        "block_negative_inventory_products",
        &picker.toggle.block_negative_inventory_products.to_string(),
    );
    ctx.output.kv(
        "block_unavailable_variants",
        &picker.toggle.block_unavailable_variants.to_string(),
    );

    ctx.output.info("");
    ctx.output.info("[picker.discount]");
    ctx.output.kv("default_type", picker.discount.default_type.as_str());
    for kind in DiscountType::ALL {
        ctx.output.list_item(&format!(
            "{} = \"{}\"",
            kind.as_str(),
            picker.discount.labels.label(kind)
        ));
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("picker.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let content = generate_default_config("catalog.json");
    fs::write(&config_path, content)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = ctx.config.errors();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config_file.is_none() {
        warnings.push("no config file found, using defaults".to_string());
    }

    if !ctx.config.picker.toggle.block_negative_inventory_products {
        warnings.push("oversold products can be added to the list".to_string());
    }

    if errors.is_empty() {
        if let Err(e) = ctx.catalog().await {
            warnings.push(format!("{:#}", e));
        }
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
