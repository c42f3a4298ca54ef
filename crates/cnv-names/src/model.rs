use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical metadata for one recognized instrument channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedVariable {
    /// Standardized quantity name, independent of sensor model or firmware.
    pub variable: String,
    /// Unit string for human-facing output, including any annotation after a
    /// semicolon (calibration standard, instrument model).
    pub display_unit: String,
    /// Unit token alone, for unit-aware computation.
    pub bare_unit: String,
}

impl fmt::Display for ResolvedVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.variable, self.display_unit)
    }
}

/// Outcome of resolving one raw channel label. `Unresolved` is an expected
/// result for channels outside the known vocabulary, not a failure; callers
/// decide whether to pass the raw label through or flag it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    Resolved(ResolvedVariable),
    Unresolved { label: String },
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn resolved(&self) -> Option<&ResolvedVariable> {
        match self {
            Resolution::Resolved(variable) => Some(variable),
            Resolution::Unresolved { .. } => None,
        }
    }

    pub fn into_resolved(self) -> Option<ResolvedVariable> {
        match self {
            Resolution::Resolved(variable) => Some(variable),
            Resolution::Unresolved { .. } => None,
        }
    }
}
