//! Command-line interface for sku-config
//!
//! Provides `list`, `summarize`, `diff`, `apply` and `completions` subcommands.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sku_config::config::OutputFormat;

mod apply;
mod completions;
mod diff;
mod list;
mod summarize;
mod utils;

/// Apply sku/tier-specific overrides onto a master configuration document
#[derive(Parser)]
#[command(name = "sku-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Master configuration document (.json, .toml, .yaml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub document: Option<PathBuf>,

    /// Path to settings file (sku-config.toml or .sku-config.yaml)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Which sku override to use. Unset parts fall back to settings, then to the
/// registry's declared default.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectArgs {
    /// Sku name (case-insensitive)
    #[arg(long, value_name = "SKU")]
    pub sku: Option<String>,

    /// Sku tier (case-insensitive)
    #[arg(long, value_name = "TIER")]
    pub tier: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sku configurations declared by the document
    List,

    /// Count explicitly set fields per settings group
    Summarize(summarize::SummarizeArgs),

    /// Show what an override would change, without applying it
    Diff(diff::DiffArgs),

    /// Apply an override and emit the effective configuration
    Apply(apply::ApplyArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::List => list::run(&cli.global),
        Commands::Summarize(args) => summarize::run(&cli.global, args),
        Commands::Diff(args) => diff::run(&cli.global, args),
        Commands::Apply(args) => apply::run(&cli.global, args),
        Commands::Completions(args) => completions::run(args),
    }
}
