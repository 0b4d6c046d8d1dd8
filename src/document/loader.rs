//! Read a master configuration document from disk
//!
//! JSON is the native format; TOML and YAML documents with the same shape are
//! accepted by extension. Any parse failure is fatal for the whole document.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::MasterConfig;
use crate::error::{ConfigError, Result};
use crate::merge::validate_container;

/// Serialization formats a master document may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from the file extension. A missing extension means JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
        match ext.as_str() {
            "" | "json" => Ok(DocumentFormat::Json),
            "toml" => Ok(DocumentFormat::Toml),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            other => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: other.to_string(),
            }),
        }
    }
}

/// A parsed master document and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub path: PathBuf,
    /// SHA-256 of the raw file bytes, hex encoded.
    pub digest: String,
    pub master: MasterConfig,
}

pub fn load_document(path: &Path) -> Result<LoadedDocument> {
    let format = DocumentFormat::from_path(path)?;
    let bytes =
        fs::read(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    let digest = format!("{:x}", Sha256::digest(&bytes));

    let content = String::from_utf8(bytes).map_err(|e| ConfigError::MalformedDocument {
        path: path.to_path_buf(),
        message: format!("invalid UTF-8: {}", e),
    })?;

    let master = parse_document(&content, format, path)?;
    tracing::debug!(
        "loaded {} with {} sku configurations (sha256 {})",
        path.display(),
        master.sku_definitions.len(),
        digest
    );

    Ok(LoadedDocument { path: path.to_path_buf(), digest, master })
}

/// Parse document text and check every container's schema.
///
/// `path` is only used in error messages.
pub fn parse_document(content: &str, format: DocumentFormat, path: &Path) -> Result<MasterConfig> {
    let malformed = |message: String| ConfigError::MalformedDocument { path: path.to_path_buf(), message };

    let master: MasterConfig = match format {
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| malformed(e.to_string()))?,
        DocumentFormat::Toml => toml::from_str(content).map_err(|e| malformed(e.to_string()))?,
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| malformed(e.to_string()))?,
    };

    validate_container(&master)?;
    for sku in master.sku_definitions.entries() {
        validate_container(sku)?;
    }

    Ok(master)
}
