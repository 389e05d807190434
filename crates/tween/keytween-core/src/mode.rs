//! Blending mode selection.

use serde::{Deserialize, Serialize};

/// The five blending algorithms, selected externally (toolbar / option box)
/// and applied uniformly to every affected key.
///
/// The integer ids are round-tripped through external option storage, so the
/// assignment is stable and must never be reordered.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// Interpolate between the previous and next neighbor values.
    Between,
    /// Nudge the current value toward the previous or next neighbor.
    Towards,
    /// Pull keys toward the mean of the affected keys on their curve.
    Average,
    /// Follow the cubic-bezier shape of the adjacent curve segments.
    #[serde(rename = "curve")]
    CurveTangent,
    /// Pull keys toward (or mirror away from) the attribute's rest value.
    Default,
}

impl BlendMode {
    pub const ALL: [BlendMode; 5] = [
        BlendMode::Between,
        BlendMode::Towards,
        BlendMode::Average,
        BlendMode::CurveTangent,
        BlendMode::Default,
    ];

    /// Stable id used by external option storage.
    #[inline]
    pub fn id(self) -> i32 {
        match self {
            BlendMode::Between => 0,
            BlendMode::Towards => 1,
            BlendMode::Average => 2,
            BlendMode::CurveTangent => 3,
            BlendMode::Default => 4,
        }
    }

    /// Look up a mode by stored id, falling back to `Between` for unknown
    /// ids so stale option values never break the tool.
    #[inline]
    pub fn from_id(id: i32) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.id() == id)
            .unwrap_or(BlendMode::Between)
    }

    /// Whether snapshots for this mode need bezier tangent segments.
    #[inline]
    pub fn uses_tangents(self) -> bool {
        matches!(self, BlendMode::CurveTangent)
    }

    /// Whether snapshots for this mode need the attribute default value.
    #[inline]
    pub fn uses_default(self) -> bool {
        matches!(self, BlendMode::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable() {
        let ids: Vec<i32> = BlendMode::ALL.iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn from_id_round_trips_and_falls_back() {
        for mode in BlendMode::ALL {
            assert_eq!(BlendMode::from_id(mode.id()), mode);
        }
        assert_eq!(BlendMode::from_id(99), BlendMode::Between);
        assert_eq!(BlendMode::from_id(-1), BlendMode::Between);
    }
}
