//! Catalog browsing command.

use anyhow::{bail, Result};
use console::style;
use picker_catalog::fetch_page;
use picker_commerce::catalog::PageRequest;
use picker_commerce::ids::SessionId;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::inventory_badge;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    if args.page == 0 {
        bail!("Pages start at 1");
    }

    let catalog = ctx.catalog().await?;
    let request = PageRequest {
        session_id: SessionId::generate(),
        generation: 1,
        query: args.query.trim().to_string(),
        page: args.page,
        page_size: ctx.config.picker.page_size,
    };

    let products = fetch_page(&catalog, &request, &ctx.config.catalog.fetch_policy()).await?;

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    let title = if request.query.is_empty() {
        format!("Catalog (page {})", request.page)
    } else {
        format!("Catalog matching '{}' (page {})", request.query, request.page)
    };
    ctx.output.header(&title);

    if products.is_empty() {
        if request.query.is_empty() {
            ctx.output.info("No products");
        } else {
            ctx.output.info(&format!("No products found for '{}'", request.query));
        }
        return Ok(());
    }

    let policy = &ctx.config.picker.toggle;
    for product in &products {
        let blocked = if policy.allows_product(product) {
            String::new()
        } else {
            format!(" {}", style("(oversold)").red())
        };
        println!("  {} {}{}", style(&product.id).dim(), style(&product.title).bold(), blocked);
        for variant in &product.variants {
            println!(
                "     {} {} {} {}",
                style(&variant.id).dim(),
                variant.title,
                style(format!("${}", variant.price)).dim(),
                inventory_badge(variant.inventory_quantity)
            );
        }
    }

    if products.len() >= request.page_size {
        ctx.output.info(&format!("More results: --page {}", request.page + 1));
    }

    Ok(())
}
