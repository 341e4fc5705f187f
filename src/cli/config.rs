//! Runtime settings resolved from CLI flags and the environment.

use crate::types::DEFAULT_MAX_ISO_VERTICES;

/// Environment variable overriding the isomorphism vertex ceiling.
pub const MAX_ISO_VERTICES_ENV: &str = "CGRAPH_MAX_ISO_VERTICES";

/// Resolve the isomorphism ceiling using priority order:
/// 1. Explicit value (CLI arg)
/// 2. CGRAPH_MAX_ISO_VERTICES environment variable
/// 3. DEFAULT_MAX_ISO_VERTICES
pub fn resolve_iso_ceiling(explicit: Option<usize>) -> usize {
    ceiling_from(explicit, std::env::var(MAX_ISO_VERTICES_ENV).ok())
}

/// Same as [`resolve_iso_ceiling`] with the environment value passed in.
pub fn ceiling_from(explicit: Option<usize>, env_value: Option<String>) -> usize {
    if let Some(max) = explicit {
        return max;
    }

    if let Some(raw) = env_value {
        match raw.trim().parse() {
            Ok(max) => return max,
            Err(_) => log::warn!(
                "ignoring {}={:?}: not a vertex count",
                MAX_ISO_VERTICES_ENV,
                raw
            ),
        }
    }

    DEFAULT_MAX_ISO_VERTICES
}
