//! Report JSON generation.

use anyhow::Result;
use chrono::Utc;
use serde_json::{json, Map, Value};
use std::path::Path;

use crate::document::LoadedDocument;
use crate::domain::{MasterConfig, SkuConfiguration};
use crate::merge::MergeReport;

pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub include_timestamp: bool,
    /// Embed the merged master configuration under `effective`.
    pub include_effective: bool,
}

pub fn build_report(
    document: &LoadedDocument,
    sku: &SkuConfiguration,
    merge: &MergeReport,
    effective: &MasterConfig,
    options: ReportOptions,
) -> Result<Value> {
    let mut report = Map::new();
    report.insert("schema_version".to_string(), Value::String(REPORT_SCHEMA_VERSION.to_string()));
    if options.include_timestamp {
        report.insert(
            "generated_at".to_string(),
            Value::String(Utc::now().format("%Y-%m-%dT%H:%M:%S+00:00").to_string()),
        );
    }
    report.insert(
        "document".to_string(),
        json!({
            "path": document.path.display().to_string(),
            "sha256": document.digest,
        }),
    );
    report.insert("sku".to_string(), json!({ "name": sku.sku_name, "tier": sku.sku_tier }));
    report.insert("changes".to_string(), serde_json::to_value(&merge.changes)?);
    report.insert("skipped".to_string(), serde_json::to_value(&merge.skipped)?);
    if options.include_effective {
        report.insert("effective".to_string(), serde_json::to_value(effective)?);
    }
    Ok(Value::Object(report))
}

pub fn write_report(report_path: &Path, report: &Value) -> Result<()> {
    if let Some(parent) = report_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(report_path, serde_json::to_string_pretty(report)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DataPartitionDeploymentConfig;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture() -> (LoadedDocument, SkuConfiguration) {
        let mut master = MasterConfig {
            data_partition_deployment_config: Some(DataPartitionDeploymentConfig {
                max_data_partition_count: 10,
                ..Default::default()
            }),
            ..Default::default()
        };
        let mut sku = SkuConfiguration::new("developer", "developer");
        sku.data_partition_deployment_config.max_data_partition_count = Some(1);
        sku.example_settings.int_value = Some(2);
        master.sku_definitions.sku_configurations.push(sku.clone());
        let document =
            LoadedDocument { path: PathBuf::from("master_config.json"), digest: "ab".repeat(32), master };
        (document, sku)
    }

    #[test]
    fn report_lists_changes_and_document() {
        let (mut document, sku) = fixture();
        let merge = sku.update_all_settings(&mut document.master).expect("merge");
        let options = ReportOptions { include_timestamp: false, include_effective: true };

        let report = build_report(&document, &sku, &merge, &document.master, options).expect("report");

        assert_eq!(report["schema_version"], json!("1.0.0"));
        assert!(report.get("generated_at").is_none());
        assert_eq!(report["document"]["path"], json!("master_config.json"));
        assert_eq!(report["sku"]["name"], json!("developer"));
        assert_eq!(report["changes"][0]["field"], json!("MaxDataPartitionCount"));
        assert_eq!(report["changes"][0]["previous"], json!(10));
        assert_eq!(report["changes"][0]["value"], json!(1));
        assert_eq!(report["effective"]["DataPartitionDeploymentConfig"]["MaxDataPartitionCount"], json!(1));
        assert_eq!(report["skipped"][0]["reason"], json!("group_absent"));
    }

    #[test]
    fn report_includes_timestamp_when_enabled() {
        let (document, sku) = fixture();
        let options = ReportOptions { include_timestamp: true, include_effective: false };
        let report =
            build_report(&document, &sku, &MergeReport::new(), &document.master, options).expect("report");
        assert!(report["generated_at"].is_string());
        assert!(report.get("effective").is_none());
    }

    #[test]
    fn write_report_creates_parent_dirs() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("out").join("report.json");
        write_report(&path, &json!({"schema_version": REPORT_SCHEMA_VERSION})).expect("write");
        let written: Value = serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(written["schema_version"], json!("1.0.0"));
    }
}
