//! Normalized architecture targets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{is_accelerated_capable, KNOWN_KERNEL_IDS};

/// One resolved compile target.
///
/// Always hardware-final: the rendered flag fragment carries the mandatory
/// `-real` marker, so no intermediate representation is ever embedded in the
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedArchitecture {
    /// Numeric compute-capability id.
    pub id: u32,
    /// Whether the architecture-specific extended instruction set is used.
    /// True iff the id is catalog-listed as accelerated-capable.
    pub accelerated: bool,
}

impl NormalizedArchitecture {
    /// Compiler flag fragment for this target, e.g. `90a-real` or `86-real`.
    pub fn flag_fragment(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NormalizedArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.accelerated {
            write!(f, "{}a-real", self.id)
        } else {
            write!(f, "{}-real", self.id)
        }
    }
}

/// Mark each resolved id with its catalog-derived accelerated flag,
/// preserving order.
pub fn normalize(ids: &[u32]) -> Vec<NormalizedArchitecture> {
    ids.iter()
        .map(|&id| NormalizedArchitecture {
            id,
            accelerated: is_accelerated_capable(id),
        })
        .collect()
}

/// Known-kernel ids not present in the resolved set, in catalog order.
///
/// The caller turns each entry into one preprocessor gate that skips the
/// matching optional source units.
pub fn excluded_ids(resolved: &[u32]) -> Vec<u32> {
    KNOWN_KERNEL_IDS
        .iter()
        .copied()
        .filter(|id| !resolved.contains(id))
        .collect()
}
