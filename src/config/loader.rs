//! Settings file loading

use super::settings::{Settings, ENV_PREFIX};
use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};

/// Load tool settings: defaults, then a settings file, then `SKU_CONFIG_*` variables.
///
/// An explicitly named settings file must exist and parse. An auto-discovered
/// file that fails to parse is reported with a warning and ignored.
pub fn load_settings(anchor: &Path, config_path: Option<&Path>) -> Result<Settings> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Settings file not found: {}", path.display());
            }
            Some(path.to_path_buf())
        }
        None => discover_settings(anchor),
    };

    let defaults = Figment::from(Serialized::defaults(Settings::default()));
    let env = Env::prefixed(ENV_PREFIX);

    let Some(settings_file) = discovered else {
        return defaults.merge(env).extract().context("Invalid SKU_CONFIG_* environment settings");
    };

    let ext = settings_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let with_file = match ext.as_str() {
        "toml" => defaults.clone().merge(Toml::file(&settings_file)),
        "yaml" | "yml" => defaults.clone().merge(Yaml::file(&settings_file)),
        other => {
            let err = anyhow::anyhow!(
                "Unsupported settings extension '.{}' for file {}",
                other,
                settings_file.display()
            );
            if config_path_provided {
                return Err(err);
            }
            tracing::warn!("{}", err);
            defaults.clone()
        }
    };

    match with_file.merge(env.clone()).extract::<Settings>() {
        Ok(settings) => {
            tracing::debug!("loaded settings from {}", settings_file.display());
            Ok(settings)
        }
        Err(e) => {
            if config_path_provided {
                return Err(e)
                    .with_context(|| format!("Invalid settings file: {}", settings_file.display()));
            }
            tracing::warn!(
                "Failed to parse auto-discovered settings {}: {}",
                settings_file.display(),
                e
            );
            defaults.merge(env).extract().context("Invalid SKU_CONFIG_* environment settings")
        }
    }
}

fn discover_settings(anchor: &Path) -> Option<PathBuf> {
    let candidates =
        ["sku-config.toml", ".sku-config.toml", "sku-config.yaml", ".sku-config.yaml", "sku-config.yml"];

    candidates.iter().map(|candidate| anchor.join(candidate)).find(|path| path.exists())
}
