//! `summarize` command: per-group counts of explicitly set override fields

use anyhow::Result;
use clap::Args;

use super::utils::Session;
use super::{GlobalArgs, SelectArgs};
use sku_config::config::OutputFormat;
use sku_config::render::{render_summary, SkuSummary};

#[derive(Args)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub select: SelectArgs,
}

pub fn run(global: &GlobalArgs, args: SummarizeArgs) -> Result<()> {
    let session = Session::load(global, &args.select, None)?;

    // Without a selection, every declared override is summarized.
    let summaries: Vec<SkuSummary> = if session.has_selection() {
        vec![SkuSummary::from_sku(&session.selected_sku()?)]
    } else {
        session.document.master.sku_definitions.entries().map(SkuSummary::from_sku).collect()
    };

    match session.settings.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Text => print!("{}", render_summary(&summaries)),
    }
    Ok(())
}
