//! Sku registry: the overrides declared by a document, keyed by sku and tier

use serde::{Deserialize, Serialize};

use super::sku::SkuConfiguration;
use crate::error::{ConfigError, Result};

/// Ordered sku overrides plus the declared default sku/tier.
///
/// Lookups that find no entry always fail with [`ConfigError::SkuNotFound`];
/// there is no fallback to a defaulted override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkuDefinitions {
    /// Sku used when the caller does not name one.
    #[serde(rename = "DefaultSkuConfiguration", skip_serializing_if = "Option::is_none")]
    pub default_sku: Option<String>,

    /// Tier used when the caller does not name one.
    #[serde(rename = "DefaultTierConfiguration", skip_serializing_if = "Option::is_none")]
    pub default_tier: Option<String>,

    #[serde(rename = "SkuConfigurations")]
    pub sku_configurations: Vec<SkuConfiguration>,
}

impl SkuDefinitions {
    /// First entry, in insertion order, whose sku and tier match ignoring case.
    pub fn lookup(&self, sku: &str, tier: &str) -> Result<&SkuConfiguration> {
        let found = self.sku_configurations.iter().find(|entry| entry.matches(sku, tier));
        match found {
            Some(entry) => {
                tracing::debug!("resolved sku {}/{} to {}", sku, tier, entry.label());
                Ok(entry)
            }
            None => Err(ConfigError::SkuNotFound { sku: sku.to_string(), tier: tier.to_string() }),
        }
    }

    /// Entry for the declared default sku and tier.
    pub fn default_configuration(&self) -> Result<&SkuConfiguration> {
        let sku = self.default_sku.as_deref().unwrap_or_default();
        let tier = self.default_tier.as_deref().unwrap_or_default();
        self.lookup(sku, tier)
    }

    /// `lookup` when both parts are given, `default_configuration` when neither is.
    pub fn resolve(&self, sku: Option<&str>, tier: Option<&str>) -> Result<&SkuConfiguration> {
        match (sku, tier) {
            (Some(sku), Some(tier)) => self.lookup(sku, tier),
            (None, None) => self.default_configuration(),
            (Some(sku), None) => self.lookup(sku, self.default_tier.as_deref().unwrap_or_default()),
            (None, Some(tier)) => self.lookup(self.default_sku.as_deref().unwrap_or_default(), tier),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &SkuConfiguration> {
        self.sku_configurations.iter()
    }

    /// `<sku>/<tier>` labels of every entry, in declaration order.
    pub fn identities(&self) -> Vec<String> {
        self.sku_configurations.iter().map(SkuConfiguration::label).collect()
    }

    pub fn len(&self) -> usize {
        self.sku_configurations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sku_configurations.is_empty()
    }
}
