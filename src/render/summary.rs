//! Plain-text summaries of overrides and applied changes

use serde::Serialize;

use crate::domain::SkuConfiguration;
use crate::merge::{MergeReport, Skip};

/// Per-group change counts of one sku override.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkuSummary {
    pub sku: Option<String>,
    pub tier: Option<String>,
    pub groups: Vec<GroupCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupCount {
    pub group: &'static str,
    pub updates: usize,
}

impl SkuSummary {
    pub fn from_sku(sku: &SkuConfiguration) -> Self {
        let groups = sku
            .changes_by_group()
            .into_iter()
            .map(|(group, changed)| GroupCount { group, updates: changed.len() })
            .collect();
        Self { sku: sku.sku_name.clone(), tier: sku.sku_tier.clone(), groups }
    }
}

/// One `Config <sku>: <Group> updates - <n>` line per sku and group.
pub fn render_summary(summaries: &[SkuSummary]) -> String {
    let mut out = String::new();
    for summary in summaries {
        let sku = summary.sku.as_deref().unwrap_or("?");
        for count in &summary.groups {
            out.push_str(&format!("Config {}: {} updates - {}\n", sku, count.group, count.updates));
        }
    }
    out
}

/// Changes and skips of a merge, one line each.
pub fn render_changes(report: &MergeReport) -> String {
    if report.is_empty() {
        return "No changes\n".to_string();
    }

    let mut out = String::new();
    for change in &report.changes {
        out.push_str(&format!(
            "{}.{}: {} -> {}\n",
            change.group, change.field, change.previous, change.value
        ));
    }
    for skip in &report.skipped {
        let line = match skip {
            Skip::GroupAbsent { group } => format!("{}: not present in master, skipped", group),
            Skip::UnknownField { group, field } => {
                format!("{}.{}: no such field in master, skipped", group, field)
            }
            Skip::KindMismatch { group, field, expected, found } => {
                format!("{}.{}: expected {} but override holds {}, skipped", group, field, expected, found)
            }
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}
