//! `list` command: show the sku configurations a document declares

use anyhow::Result;
use serde_json::json;

use super::utils::Session;
use super::{GlobalArgs, SelectArgs};
use sku_config::config::OutputFormat;

pub fn run(global: &GlobalArgs) -> Result<()> {
    let session = Session::load(global, &SelectArgs::default(), None)?;
    let registry = &session.document.master.sku_definitions;
    let default = registry.default_configuration().ok();

    match session.settings.format {
        OutputFormat::Json => {
            let entries: Vec<_> = registry
                .entries()
                .map(|entry| {
                    json!({
                        "sku": entry.sku_name,
                        "tier": entry.sku_tier,
                        "default": default.is_some_and(|d| std::ptr::eq(d, entry)),
                    })
                })
                .collect();
            let out = json!({
                "default": { "sku": registry.default_sku, "tier": registry.default_tier },
                "entries": entries,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            if registry.is_empty() {
                println!("No sku configurations in {}", session.document.path.display());
                return Ok(());
            }
            for (entry, label) in registry.entries().zip(registry.identities()) {
                if default.is_some_and(|d| std::ptr::eq(d, entry)) {
                    println!("{} (default)", label);
                } else {
                    println!("{}", label);
                }
            }
            if default.is_none() {
                eprintln!(
                    "Declared default {}/{} has no matching entry",
                    registry.default_sku.as_deref().unwrap_or("?"),
                    registry.default_tier.as_deref().unwrap_or("?")
                );
            }
        }
    }
    Ok(())
}
