//! Architecture specifier parsing.
//!
//! The raw configuration value is either one of the reserved words
//! (`native`, `all`, `all-major`) or an explicit token list. Each list token
//! is a numeric id with an optional trailing accelerated marker (`a`) and an
//! optional `-real`/`-virtual` variant suffix. Only the numeric id survives
//! parsing: the accelerated marker is recomputed from the catalog during
//! normalization, never taken from user intent.

use crate::error::{ArchError, Result};

/// How the requested architecture set was specified in configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchSpec {
    /// Probe the locally installed device(s).
    Native,
    /// Use the curated default set for the detected toolchain version.
    All,
    /// Every major architecture — rejected by policy at resolution time.
    AllMajor,
    /// An explicit token list (comma, semicolon, or whitespace separated).
    List(String),
}

/// Classify a raw specifier string. Empty or missing input means `All`.
pub fn parse_spec(raw: Option<&str>) -> ArchSpec {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => ArchSpec::All,
        Some("native") => ArchSpec::Native,
        Some("all-major") => ArchSpec::AllMajor,
        Some(list) => ArchSpec::List(list.to_string()),
    }
}

/// Parse one architecture token down to its numeric id.
///
/// Grammar: digits with a leading 1-9, an optional trailing `a` marker, an
/// optional `-real`/`-virtual` variant suffix. Virtual-only targets are
/// rejected outright.
pub fn parse_arch_token(token: &str) -> Result<u32> {
    let token = token.trim();

    let base = match token.split_once('-') {
        None => token,
        Some((base, "real")) => base,
        Some((_, "virtual")) => {
            return Err(ArchError::VirtualTargetDisallowed {
                token: token.to_string(),
            })
        }
        Some(_) => {
            return Err(ArchError::InvalidToken {
                token: token.to_string(),
            })
        }
    };

    let digits = base.strip_suffix('a').unwrap_or(base);
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ArchError::InvalidToken {
            token: token.to_string(),
        });
    }

    digits.parse().map_err(|_| ArchError::InvalidToken {
        token: token.to_string(),
    })
}

/// Parse a separated token list into numeric ids, deduplicated while
/// preserving the order of first occurrence.
pub fn parse_arch_list(list: &str) -> Result<Vec<u32>> {
    let mut ids = Vec::new();
    let tokens = list
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|t| !t.is_empty());
    for token in tokens {
        let id = parse_arch_token(token)?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}
