//! Snapshot construction.
//!
//! Resolution policy per curve, in priority order:
//! 1. time-slider range: every key inside the range, one guard pair for the
//!    whole span; curves with no keys in the range contribute nothing.
//! 2. explicit key selection: maximal runs of consecutive indices, each run
//!    blending against its own local guard pair.
//! 3. nothing selected: the key at the scrub position, inserting one (seeded
//!    from the evaluated curve) when it does not exist yet.
//!
//! Building is the only potentially curve-mutating step of a session; the
//! blend engine afterwards works purely from the snapshot.

use log::{debug, warn};

use crate::curves::{ChangeRecorder, CurveHost};
use crate::error::CurveError;
use crate::geometry::CubicBezier;
use crate::ids::CurveId;
use crate::mode::BlendMode;
use crate::select::{CurveSelection, SelectionContext};
use crate::snapshot::{KeySnapshot, KeyState, SnapshotSet, TangentSpan};

/// Build one snapshot per affected curve.
///
/// Curves that resolve to no keys are left out of the result; an empty
/// selection therefore yields an empty set, which callers treat as "nothing
/// to do" rather than an error. Curves that fail mid-build (deleted under
/// us) are skipped with a warning.
pub fn build_snapshots(
    host: &mut dyn CurveHost,
    ctx: &SelectionContext,
    mode: BlendMode,
    recorder: &mut dyn ChangeRecorder,
) -> SnapshotSet {
    let mut snapshots = SnapshotSet::new();

    for sel in &ctx.curves {
        match build_curve_snapshot(host, sel, ctx, mode, recorder) {
            Ok(Some(snap)) => {
                snapshots.insert(sel.curve, snap);
            }
            Ok(None) => {}
            Err(err) => warn!("skipping curve {:?} during snapshot: {err}", sel.curve),
        }
    }

    debug!(
        "snapshot built: {} curve(s), {} key(s)",
        snapshots.len(),
        snapshots.values().map(|s| s.keys.len()).sum::<usize>()
    );
    snapshots
}

fn build_curve_snapshot(
    host: &mut dyn CurveHost,
    sel: &CurveSelection,
    ctx: &SelectionContext,
    mode: BlendMode,
    recorder: &mut dyn ChangeRecorder,
) -> Result<Option<KeySnapshot>, CurveError> {
    let curve = sel.curve;
    let num_keys = host.num_keys(curve)?;

    let mut snap = KeySnapshot {
        keys: Vec::new(),
        default_value: if mode.uses_default() {
            host.resolve_default(curve)
        } else {
            None
        },
    };

    let selected_keys = sel
        .selected_keys
        .as_deref()
        .filter(|keys| !keys.is_empty());

    if let Some(range) = ctx.effective_range() {
        if num_keys == 0 {
            return Ok(None);
        }
        let mut indices = Vec::new();
        for index in 0..num_keys {
            if range.contains(host.key_time(curve, index)?) {
                indices.push(index);
            }
        }
        let (Some(&first), Some(&last)) = (indices.first(), indices.last()) else {
            return Ok(None);
        };
        let prev = first.saturating_sub(1);
        let next = (last + 1).min(num_keys - 1);
        for index in indices {
            push_existing_key(host, curve, index, prev, next, mode, &mut snap)?;
        }
    } else if let Some(selected) = selected_keys {
        if num_keys == 0 {
            return Ok(None);
        }
        for run in consecutive_runs(selected) {
            let prev = run[0].saturating_sub(1);
            let next = (run[run.len() - 1] + 1).min(num_keys - 1);
            for &index in run {
                push_existing_key(host, curve, index, prev, next, mode, &mut snap)?;
            }
        }
    } else {
        push_scrub_key(host, curve, num_keys, ctx.scrub_time, mode, recorder, &mut snap)?;
    }

    Ok((!snap.is_empty()).then_some(snap))
}

/// Record one already-existing key with its guards; in tangent mode the span
/// splits at the key into a left and right segment.
fn push_existing_key(
    source: &dyn CurveHost,
    curve: CurveId,
    index: usize,
    prev: usize,
    next: usize,
    mode: BlendMode,
    snap: &mut KeySnapshot,
) -> Result<(), CurveError> {
    let tangents = if mode.uses_tangents() {
        Some(TangentSpan::Split {
            left: CubicBezier::from_tangents(source, curve, prev, index)?,
            right: CubicBezier::from_tangents(source, curve, index, next)?,
        })
    } else {
        None
    };

    snap.keys.push(KeyState {
        index,
        value: source.key_value(curve, index)?,
        prev_value: source.key_value(curve, prev)?,
        next_value: source.key_value(curve, next)?,
        tangents,
    });
    Ok(())
}

/// Scrub-time resolution: use the key exactly at the scrub position, or
/// insert one there and treat it as the sole affected key.
fn push_scrub_key(
    host: &mut dyn CurveHost,
    curve: CurveId,
    num_keys: usize,
    scrub_time: f64,
    mode: BlendMode,
    recorder: &mut dyn ChangeRecorder,
    snap: &mut KeySnapshot,
) -> Result<(), CurveError> {
    if num_keys == 0 {
        // Bare curve: the inserted key is its own neighborhood.
        let value = host.evaluate(curve, scrub_time)?;
        let index = host.insert_key(curve, scrub_time, value, recorder)?;
        let tangents = mode
            .uses_tangents()
            .then(|| CubicBezier::from_tangents(host, curve, index, index))
            .transpose()?
            .map(TangentSpan::Single);
        snap.keys.push(KeyState {
            index,
            value,
            prev_value: value,
            next_value: value,
            tangents,
        });
        return Ok(());
    }

    if let Some(current) = host.find_key(curve, scrub_time)? {
        let closest = host.find_closest_key(curve, scrub_time)?;
        let prev = closest.saturating_sub(1);
        let next = (closest + 1).min(num_keys - 1);
        return push_existing_key(host, curve, current, prev, next, mode, snap);
    }

    // No key at the scrub position: pick guards around it, then insert.
    let closest = host.find_closest_key(curve, scrub_time)?;
    let closest_time = host.key_time(curve, closest)?;
    let (prev, next) = if closest_time <= scrub_time {
        (closest, closest + 1)
    } else {
        (closest.saturating_sub(1), closest)
    };

    let value = host.evaluate(curve, scrub_time)?;
    let index = host.insert_key(curve, scrub_time, value, recorder)?;

    // The insertion shifted everything at and after the new key up by one.
    let next = (next + 1).min(num_keys);

    let tangents = mode
        .uses_tangents()
        .then(|| CubicBezier::from_tangents(host, curve, prev, next))
        .transpose()?
        .map(TangentSpan::Single);

    snap.keys.push(KeyState {
        index,
        value,
        prev_value: host.key_value(curve, prev)?,
        next_value: host.key_value(curve, next)?,
        tangents,
    });
    Ok(())
}

/// Partition selected key indices into maximal runs of consecutive indices
/// (a gap of at least 2 starts a new run). Well-separated clusters then
/// blend against their own local neighbors instead of one global pair.
fn consecutive_runs(indices: &[usize]) -> Vec<&[usize]> {
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..indices.len() {
        if indices[i] > indices[i - 1] + 1 {
            runs.push(&indices[start..i]);
            start = i;
        }
    }
    if !indices.is_empty() {
        runs.push(&indices[start..]);
    }
    runs
}
