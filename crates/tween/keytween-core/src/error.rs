//! Error types for curve access.

use serde::{Deserialize, Serialize};

use crate::ids::CurveId;

/// Failures surfaced by the curve collaborator traits.
///
/// Both variants are recoverable at the batch level: the builder and the
/// blend engine skip the offending curve and continue with the rest of the
/// session. An empty selection is not an error at all; it yields an empty
/// snapshot set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CurveError {
    /// The curve no longer exists in the host scene (deleted mid-session).
    #[error("curve {curve:?} no longer exists")]
    StaleCurve { curve: CurveId },

    /// A key index fell outside the curve's current key count.
    #[error("key index {index} out of range for curve {curve:?} ({num_keys} keys)")]
    KeyIndexOutOfRange {
        curve: CurveId,
        index: usize,
        num_keys: usize,
    },
}

impl CurveError {
    /// True when the whole curve should be dropped from the session rather
    /// than retried.
    #[inline]
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::StaleCurve { .. })
    }
}
