//! Path lengths that may be unbounded.

use std::fmt;

use serde::{Serialize, Serializer};

use super::Weight;

/// Length of a shortest path, or `Infinite` when no path exists.
///
/// The derived ordering places every `Finite` value below `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    /// A reachable vertex and its path length.
    Finite(u64),
    /// No path from the source.
    Infinite,
}

impl Distance {
    /// Zero-length path.
    pub const ZERO: Distance = Distance::Finite(0);

    /// The finite value, if any.
    pub fn finite(self) -> Option<u64> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Infinite => None,
        }
    }

    /// Whether this distance is finite.
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Extend the path by one edge. `Infinite` stays `Infinite`.
    pub fn extend(self, weight: Weight) -> Distance {
        match self {
            Self::Finite(d) => Self::Finite(d.saturating_add(u64::from(weight))),
            Self::Infinite => Self::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{}", d),
            Self::Infinite => write!(f, "inf"),
        }
    }
}

// JSON output uses `null` for unreachable vertices.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(d) => serializer.serialize_some(d),
            Self::Infinite => serializer.serialize_none(),
        }
    }
}
