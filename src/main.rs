//! sku-config: apply sku/tier-specific overrides onto a master configuration
//!
//! Loads a master document, selects an override from its sku registry and
//! reports or applies the fields that override explicitly sets.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
