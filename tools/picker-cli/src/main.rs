//! Picker CLI - Command line tool for the product picker engine.
//!
//! Commands:
//! - `picker catalog` - Browse one page of the catalog
//! - `picker run` - Replay a scenario of picker actions
//! - `picker config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod scenario;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, ConfigArgs, RunArgs};

/// Picker CLI - Browse a product catalog and replay picker sessions
#[derive(Parser)]
#[command(name = "picker")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of the catalog
    Catalog(CatalogArgs),

    /// Replay a scenario and print the resulting product list
    Run(RunArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "picker_cli=debug,picker_commerce=debug,picker_catalog=debug"
    } else {
        "picker_cli=info,picker_commerce=info,picker_catalog=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Run(args) => commands::run::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
