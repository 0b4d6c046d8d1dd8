//! sku-config: apply sku/tier-specific overrides onto a master configuration
//!
//! A master document holds the effective settings groups plus a registry of
//! per-sku overrides. Only the fields an override explicitly sets are copied
//! onto the master, and each override group finds its target by type.

pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod merge;
pub mod render;

pub use document::{load_document, LoadedDocument};
pub use domain::{MasterConfig, SkuConfiguration, SkuDefinitions};
pub use error::{ConfigError, Result};
pub use merge::{Container, GroupOverride, MergeReport, SettingsGroup};
