//! Toolchain version helpers.
//!
//! Wraps the `semver` crate for the narrow slice this project needs:
//! ordering `major.minor.patch` release triples to gate architecture sets.
//! This is deliberately not a general versioning layer.

/// A parsed compiler release triple.
pub type ToolchainVersion = semver::Version;

/// Construct a release triple.
pub fn version(major: u64, minor: u64, patch: u64) -> ToolchainVersion {
    semver::Version::new(major, minor, patch)
}

/// Parse a `major.minor.patch` string.
pub fn parse_version(s: &str) -> Result<ToolchainVersion, semver::Error> {
    semver::Version::parse(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_compare() {
        let v1 = parse_version("11.2.0").unwrap();
        let v2 = parse_version("11.8.0").unwrap();
        let v3 = parse_version("12.7.1").unwrap();
        assert!(v1 < v2);
        assert!(v2 < v3);
        assert_eq!(v1, version(11, 2, 0));
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(version(11, 9, 0) < version(12, 0, 0));
        assert!(version(12, 0, 0) < version(12, 0, 1));
    }

    #[test]
    fn two_part_string_is_rejected() {
        assert!(parse_version("11.8").is_err());
    }
}
