//! Static architecture catalog.
//!
//! The catalog is maintainer-curated and immutable: which architectures
//! support the accelerated build variant, which ones the project ships
//! optimized kernels for, and which curated default tiers unlock at which
//! toolchain versions.

use crate::version::{version, ToolchainVersion};

/// Architectures that support the accelerated (`a`) build variant.
pub const ACCELERATED_CAPABLE_IDS: &[u32] = &[90, 100, 120];

/// All architectures the project ships optimized kernels for.
///
/// Resolved sets may contain ids outside this list; the exclusion set is
/// always computed against it.
pub const KNOWN_KERNEL_IDS: &[u32] = &[80, 86, 89, 90, 100, 120];

/// One curated default tier: an id set unlocked at a minimum toolchain version.
#[derive(Debug, Clone)]
pub struct BaselineTier {
    /// Toolchain version at which this tier becomes available.
    pub min_version: ToolchainVersion,
    /// Ids added by this tier.
    pub ids: &'static [u32],
}

/// Curated default tiers, ascending by version threshold.
///
/// The first tier is the baseline and is always included in the defaults.
pub fn baseline_tiers() -> Vec<BaselineTier> {
    vec![
        BaselineTier {
            min_version: version(11, 2, 0),
            ids: &[80, 86],
        },
        BaselineTier {
            min_version: version(11, 8, 0),
            ids: &[89, 90],
        },
        BaselineTier {
            min_version: version(12, 7, 0),
            ids: &[100, 120],
        },
    ]
}

/// Whether an architecture supports the accelerated build variant.
pub fn is_accelerated_capable(id: u32) -> bool {
    ACCELERATED_CAPABLE_IDS.contains(&id)
}
