//! CLI flag precedence over loaded settings

use super::settings::{OutputFormat, Settings};
use std::path::PathBuf;

/// Values given on the command line; `None` leaves the loaded setting alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub document: Option<PathBuf>,
    pub sku: Option<String>,
    pub tier: Option<String>,
    pub format: Option<OutputFormat>,
    pub timestamp: Option<bool>,
}

pub fn merge_cli_with_config(mut settings: Settings, cli: CliOverrides) -> Settings {
    if let Some(document) = cli.document {
        settings.document = document;
    }
    if cli.sku.is_some() {
        settings.sku = cli.sku;
    }
    if cli.tier.is_some() {
        settings.tier = cli.tier;
    }
    if let Some(format) = cli.format {
        settings.format = format;
    }
    if let Some(timestamp) = cli.timestamp {
        settings.timestamp = timestamp;
    }
    settings
}
