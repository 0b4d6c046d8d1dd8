//! Shared CLI utilities.

use anyhow::{Context, Result};

use super::{GlobalArgs, SelectArgs};
use sku_config::config::{load_settings, merge_cli_with_config, CliOverrides, Settings};
use sku_config::{load_document, LoadedDocument, MergeReport, SkuConfiguration};

/// Parse a comma-separated string into a `Vec<String>`, trimming whitespace and
/// discarding empty segments.  Returns `None` when `value` is `None`.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
    })
}

/// Resolved settings plus the loaded master document.
pub struct Session {
    pub settings: Settings,
    pub document: LoadedDocument,
}

impl Session {
    pub fn load(global: &GlobalArgs, select: &SelectArgs, timestamp: Option<bool>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let file_settings = load_settings(&cwd, global.config.as_deref())?;
        let settings = merge_cli_with_config(
            file_settings,
            CliOverrides {
                document: global.document.clone(),
                sku: select.sku.clone(),
                tier: select.tier.clone(),
                format: global.format,
                timestamp,
            },
        );

        let document = load_document(&settings.document)
            .with_context(|| format!("Failed loading {}", settings.document.display()))?;

        Ok(Self { settings, document })
    }

    /// Whether the caller (CLI or settings) named a sku or tier.
    pub fn has_selection(&self) -> bool {
        self.settings.sku.is_some() || self.settings.tier.is_some()
    }

    /// The selected override, cloned so the master can be mutated afterwards.
    pub fn selected_sku(&self) -> Result<SkuConfiguration> {
        let found = self
            .document
            .master
            .sku_definitions
            .resolve(self.settings.sku.as_deref(), self.settings.tier.as_deref())?;
        Ok(found.clone())
    }
}

/// Apply `sku` onto the session's master, restricted to `groups` when given.
pub fn apply_selected(
    sku: &SkuConfiguration,
    groups: Option<Vec<String>>,
    session: &mut Session,
) -> Result<MergeReport> {
    let target = &mut session.document.master;
    match groups {
        None => Ok(sku.update_all_settings(target)?),
        Some(groups) => {
            let mut report = MergeReport::new();
            for group in groups {
                report.absorb(sku.update_group(&group, target)?);
            }
            Ok(report)
        }
    }
}

/// Like [`apply_selected`] but computed without modifying the master.
pub fn preview_selected(
    sku: &SkuConfiguration,
    groups: Option<Vec<String>>,
    session: &Session,
) -> Result<MergeReport> {
    let target = &session.document.master;
    match groups {
        None => Ok(sku.preview_all_settings(target)?),
        Some(groups) => {
            let mut report = MergeReport::new();
            for group in groups {
                report.absorb(sku.preview_update_group(&group, target)?);
            }
            Ok(report)
        }
    }
}
