//! Frozen per-interaction record of the keys being blended.
//!
//! A snapshot is taken once when the user presses the slider or tool, then
//! serves as the fixed reference frame for every recomputation during the
//! drag. It caches current values, the neighbor values just outside the
//! affected span, and (for tangent blending) the bezier segments around each
//! key, so the blend engine never touches the source curve again.

use hashbrown::HashMap;

use crate::geometry::CubicBezier;
use crate::ids::CurveId;

/// Bezier context captured around one affected key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TangentSpan {
    /// The affected key did not exist at snapshot time (it was inserted at
    /// the scrub position); one segment spans its synthesized neighbors.
    Single(CubicBezier),
    /// A key sat exactly at the scrub position, splitting the span into a
    /// left and a right segment that meet at the key itself.
    Split {
        left: CubicBezier,
        right: CubicBezier,
    },
}

/// One affected key with its frozen neighborhood.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyState {
    /// Key index on the source curve.
    pub index: usize,
    /// Value at snapshot time; the neutral center for all blending.
    pub value: f64,
    /// Value at the guard index just before the affected span (clamped to
    /// the first key at curve start).
    pub prev_value: f64,
    /// Value at the guard index just after the affected span (clamped to the
    /// last key at curve end).
    pub next_value: f64,
    /// Present only when the snapshot was built for tangent blending.
    pub tangents: Option<TangentSpan>,
}

/// All affected keys of one curve.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeySnapshot {
    /// Affected keys in discovery order.
    pub keys: Vec<KeyState>,
    /// Rest value of the driven attribute, resolved once per curve when the
    /// session blends toward defaults. `None` marks the curve as skipped in
    /// that mode.
    pub default_value: Option<f64>,
}

impl KeySnapshot {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Mean of the affected keys' snapshot values, available once a real
    /// group exists (two or more keys).
    pub fn group_average(&self) -> Option<f64> {
        if self.keys.len() < 2 {
            return None;
        }
        let sum: f64 = self.keys.iter().map(|k| k.value).sum();
        Some(sum / self.keys.len() as f64)
    }
}

/// Snapshots for every curve taking part in one interaction.
pub type SnapshotSet = HashMap<CurveId, KeySnapshot>;
