//! Output rendering (text summaries, JSON reports)

pub mod report;
pub mod summary;

pub use report::{build_report, write_report, ReportOptions, REPORT_SCHEMA_VERSION};
pub use summary::{render_changes, render_summary, SkuSummary};
