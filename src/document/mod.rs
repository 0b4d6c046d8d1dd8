//! Master document loading

pub mod loader;

pub use loader::{load_document, parse_document, DocumentFormat, LoadedDocument};
