//! Error types for document loading, lookup and merging

use std::path::PathBuf;

/// Errors raised by the override-merge engine and its collaborators.
///
/// Missing target groups and missing target fields are not errors: the
/// applicator skips them and records the skip in its report.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A container declares more than one member of the requested type.
    #[error("ambiguous schema: {container} declares more than one member of type {type_name} ({})", .fields.join(", "))]
    AmbiguousSchema { container: &'static str, type_name: &'static str, fields: Vec<&'static str> },

    /// No registry entry matches the requested sku/tier pair.
    #[error("no sku configuration matches sku '{sku}' and tier '{tier}'")]
    SkuNotFound { sku: String, tier: String },

    /// The configuration document could not be parsed into the expected shape.
    #[error("malformed configuration document {}: {message}", .path.display())]
    MalformedDocument { path: PathBuf, message: String },

    #[error("failed reading configuration document {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported document extension '.{extension}' for {}", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// A settings group name that no override defines.
    #[error("unknown settings group '{name}' (expected one of: {})", .known.join(", "))]
    UnknownGroup { name: String, known: Vec<&'static str> },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
