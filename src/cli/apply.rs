//! `apply` command: merge an override and emit the effective configuration

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{apply_selected, parse_csv, Session};
use super::{GlobalArgs, SelectArgs};
use sku_config::config::OutputFormat;
use sku_config::render::{build_report, render_changes, write_report, ReportOptions};

#[derive(Args)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Restrict to these settings groups (comma-separated)
    #[arg(short, long, value_name = "GROUPS")]
    pub group: Option<String>,

    /// Write the result here instead of stdout.
    /// Text format writes the effective master; JSON writes the full report.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Omit the generation timestamp (for deterministic reports)
    #[arg(long)]
    pub no_timestamp: bool,
}

pub fn run(global: &GlobalArgs, args: ApplyArgs) -> Result<()> {
    let timestamp = args.no_timestamp.then_some(false);
    let mut session = Session::load(global, &args.select, timestamp)?;
    let sku = session.selected_sku()?;
    let report = apply_selected(&sku, parse_csv(&args.group), &mut session)?;

    tracing::debug!(
        "applied {} with {} changes, {} skipped",
        sku.label(),
        report.changes.len(),
        report.skipped.len()
    );

    match session.settings.format {
        OutputFormat::Json => {
            let options =
                ReportOptions { include_timestamp: session.settings.timestamp, include_effective: true };
            let value = build_report(&session.document, &sku, &report, &session.document.master, options)?;
            match &args.output {
                Some(path) => {
                    write_report(path, &value)?;
                    eprintln!("Report written to {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&value)?),
            }
        }
        OutputFormat::Text => {
            print!("{}", render_changes(&report));
            if let Some(path) = &args.output {
                write_report(path, &serde_json::to_value(&session.document.master)?)?;
                eprintln!("Effective configuration written to {}", path.display());
            }
        }
    }
    Ok(())
}
