//! The blend engine: recompute every affected key value from one scalar
//! parameter.
//!
//! `blend` nominally ranges over [-1, 1] (twice that under overshoot) and is
//! never clamped here; bounding is the control layer's job. Each call works
//! entirely from the snapshot and writes through the sink, so it stays cheap
//! enough to run on every mouse-move.

use log::warn;

use crate::curves::{ChangeRecorder, CurveSink};
use crate::mode::BlendMode;
use crate::snapshot::{KeySnapshot, KeyState, SnapshotSet, TangentSpan};

/// Linear interpolation between `a` and `b` with `t` in [-1, 1]:
/// -1 yields `a`, 1 yields `b`, 0 the midpoint. Unclamped.
#[inline]
pub fn lerp_between(a: f64, b: f64, t: f64) -> f64 {
    let t = t * 0.5 + 0.5;
    a + (b - a) * t
}

/// Two-sided nudge from `current`: negative `t` moves toward `a`, positive
/// toward `b`, zero returns `current` exactly.
#[inline]
pub fn lerp_towards(a: f64, b: f64, t: f64, current: f64) -> f64 {
    if t < 0.0 {
        lerp_between(a, current, t * 2.0 + 1.0)
    } else if t > 0.0 {
        lerp_between(current, b, t * 2.0 - 1.0)
    } else {
        current
    }
}

/// Write a new value for every affected key of every snapshot, returning the
/// number of keys written.
///
/// A curve that has gone stale since the snapshot was taken is skipped with
/// a warning; the rest of the batch continues.
pub fn interpolate(
    snapshots: &SnapshotSet,
    blend: f64,
    mode: BlendMode,
    sink: &mut dyn CurveSink,
    recorder: &mut dyn ChangeRecorder,
) -> usize {
    let mut written = 0;

    for (&curve, snap) in snapshots {
        let group_average = match mode {
            BlendMode::Average => snap.group_average(),
            _ => None,
        };

        for key in &snap.keys {
            let Some(new_value) = blend_key(key, snap, group_average, blend, mode) else {
                continue;
            };
            match sink.set_key_value(curve, key.index, new_value, recorder) {
                Ok(()) => written += 1,
                Err(err) if err.is_stale() => {
                    warn!("skipping curve {curve:?} during blend: {err}");
                    break;
                }
                Err(err) => warn!("skipping key {} of curve {curve:?}: {err}", key.index),
            }
        }
    }

    written
}

/// New value for one key, or `None` when this key is a no-op under the given
/// mode (unresolvable default, missing tangent data).
fn blend_key(
    key: &KeyState,
    snap: &KeySnapshot,
    group_average: Option<f64>,
    blend: f64,
    mode: BlendMode,
) -> Option<f64> {
    match mode {
        BlendMode::Between => Some(lerp_between(key.prev_value, key.next_value, blend)),
        BlendMode::Towards => Some(lerp_towards(
            key.prev_value,
            key.next_value,
            blend,
            key.value,
        )),
        BlendMode::Average => {
            // A lone key has no group to average with; fall back to the
            // midpoint of its own neighbors.
            let average =
                group_average.unwrap_or_else(|| (key.prev_value + key.next_value) * 0.5);
            let mirrored = 2.0 * key.value - average;
            Some(lerp_towards(mirrored, average, blend, key.value))
        }
        BlendMode::CurveTangent => {
            let u = (blend + 1.0) * 0.5;
            match key.tangents? {
                TangentSpan::Single(bezier) => Some(bezier.value_at(u)),
                TangentSpan::Split { left, right } => {
                    if u < 0.5 {
                        Some(left.value_at(u * 2.0))
                    } else {
                        Some(right.value_at(u * 2.0 - 1.0))
                    }
                }
            }
        }
        BlendMode::Default => {
            let default = snap.default_value?;
            let mirrored = 2.0 * key.value - default;
            Some(lerp_towards(mirrored, default, blend, key.value))
        }
    }
}
