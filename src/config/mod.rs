//! Tool settings loading and merging
//!
//! Handles loading from a settings file, environment variables, and CLI arguments
//! with proper precedence (CLI > Env > File > Defaults).

pub mod loader;
pub mod merge;
pub mod settings;

pub use loader::load_settings;
pub use merge::{merge_cli_with_config, CliOverrides};
pub use settings::{OutputFormat, Settings, ENV_PREFIX};
