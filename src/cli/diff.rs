//! `diff` command: preview an override without writing anything

use anyhow::Result;
use clap::Args;
use serde_json::json;

use super::utils::{parse_csv, preview_selected, Session};
use super::{GlobalArgs, SelectArgs};
use sku_config::config::OutputFormat;
use sku_config::render::render_changes;

#[derive(Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Restrict to these settings groups (comma-separated)
    #[arg(short, long, value_name = "GROUPS")]
    pub group: Option<String>,
}

pub fn run(global: &GlobalArgs, args: DiffArgs) -> Result<()> {
    let session = Session::load(global, &args.select, None)?;
    let sku = session.selected_sku()?;
    let report = preview_selected(&sku, parse_csv(&args.group), &session)?;

    match session.settings.format {
        OutputFormat::Json => {
            let out = json!({
                "sku": { "name": sku.sku_name, "tier": sku.sku_tier },
                "changes": report.changes,
                "skipped": report.skipped,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            println!("Config {}", sku.label());
            print!("{}", render_changes(&report));
        }
    }
    Ok(())
}
