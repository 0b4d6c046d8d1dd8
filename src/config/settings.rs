//! Settings of the `sku-config` tool itself

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix of environment variables read into [`Settings`].
pub const ENV_PREFIX: &str = "SKU_CONFIG_";

/// Document path used when nothing else names one.
pub const DEFAULT_DOCUMENT: &str = "master_config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master configuration document to load.
    pub document: PathBuf,
    /// Sku to select; the registry default applies when unset.
    pub sku: Option<String>,
    /// Tier to select; the registry default applies when unset.
    pub tier: Option<String>,
    pub format: OutputFormat,
    /// Include a generation timestamp in JSON reports.
    pub timestamp: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            document: PathBuf::from(DEFAULT_DOCUMENT),
            sku: None,
            tier: None,
            format: OutputFormat::Text,
            timestamp: true,
        }
    }
}
