//! Scenario replay command.

use anyhow::Result;

use super::RunArgs;
use crate::context::Context;
use crate::scenario::{Scenario, ScenarioRunner};

/// Run the run command.
pub async fn run(args: RunArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.scenario);
    let scenario = Scenario::load(&path.to_string_lossy())?;
    let catalog = ctx.catalog().await?;

    ctx.output.debug(&format!(
        "Replaying {} step(s) against {} catalog product(s)",
        scenario.steps.len(),
        catalog.len()
    ));

    let mut runner = ScenarioRunner::new(
        ctx.config.picker.clone(),
        &catalog,
        ctx.config.catalog.fetch_policy(),
    );
    let summary = runner.run(&scenario).await?;
    let editor = runner.editor();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "scenario": scenario.name,
            "summary": summary,
            "products": editor.store(),
        }));
        return Ok(());
    }

    let name = scenario.name.as_deref().unwrap_or("scenario");
    ctx.output.header(&format!("Products after '{}'", name));
    ctx.output.selection(editor.store(), &editor.config().discount.labels);

    if editor.is_picker_open() {
        ctx.output.warn("Picker was left open; its selection was not added");
    }
    if ctx.output.is_verbose() {
        for step in &summary.noops {
            ctx.output.debug(&format!("Step {} changed nothing", step));
        }
    }
    ctx.output.success(&format!("Replayed {} step(s)", summary.steps));

    Ok(())
}
