//! `cudarch catalog` — print the static architecture catalog.

use anyhow::Result;
use cudarch_core::catalog::{baseline_tiers, ACCELERATED_CAPABLE_IDS, KNOWN_KERNEL_IDS};

/// Print the catalog: known kernel ids, accelerated-capable ids, and the
/// curated default tiers with their version thresholds.
pub fn run() -> Result<()> {
    println!("Known kernel ids:        {}", join(KNOWN_KERNEL_IDS));
    println!("Accelerated-capable ids: {}", join(ACCELERATED_CAPABLE_IDS));
    println!();
    println!("Curated default tiers:");
    for tier in baseline_tiers() {
        println!("  >= {}: {}", tier.min_version, join(tier.ids));
    }
    Ok(())
}

fn join(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
