//! Curated, version-conditioned default architecture sets.

use crate::catalog::baseline_tiers;
use crate::version::ToolchainVersion;

/// Return the curated default ids for a detected toolchain version.
///
/// The baseline tier is always included; each later tier is layered on when
/// its version threshold is met, in ascending threshold order. Depends only
/// on the version, never on the requested specifier.
pub fn default_architectures(detected: &ToolchainVersion) -> Vec<u32> {
    let mut ids = Vec::new();
    for (index, tier) in baseline_tiers().iter().enumerate() {
        if index == 0 || *detected >= tier.min_version {
            ids.extend_from_slice(tier.ids);
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::version;

    #[test]
    fn baseline_only_below_first_threshold() {
        assert_eq!(default_architectures(&version(11, 5, 0)), vec![80, 86]);
    }

    #[test]
    fn second_tier_at_11_8() {
        assert_eq!(
            default_architectures(&version(11, 8, 0)),
            vec![80, 86, 89, 90]
        );
        assert_eq!(
            default_architectures(&version(11, 9, 0)),
            vec![80, 86, 89, 90]
        );
    }

    #[test]
    fn all_tiers_at_12_8() {
        assert_eq!(
            default_architectures(&version(12, 8, 0)),
            vec![80, 86, 89, 90, 100, 120]
        );
    }

    #[test]
    fn third_tier_boundary() {
        assert_eq!(
            default_architectures(&version(12, 6, 3)),
            vec![80, 86, 89, 90]
        );
        assert_eq!(
            default_architectures(&version(12, 7, 0)),
            vec![80, 86, 89, 90, 100, 120]
        );
    }
}
