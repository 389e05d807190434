//! Key hammer: give every curve a key at every keyed time.
//!
//! Collects the union of key times across the given curves (optionally
//! restricted to a time-slider range) and fills the holes, seeding each new
//! key from the curve's evaluated value. Animators use this to line up
//! whole-pose keys before blending.

use log::warn;

use crate::curves::{ChangeRecorder, CurveHost};
use crate::error::CurveError;
use crate::ids::CurveId;
use crate::select::TimeRange;

/// Insert missing keys so every curve is keyed at the union of key times.
/// Returns the number of keys inserted. Stale curves are skipped with a
/// warning in both the gather and insert passes.
pub fn hammer_keys(
    host: &mut dyn CurveHost,
    curves: &[CurveId],
    time_range: Option<TimeRange>,
    recorder: &mut dyn ChangeRecorder,
) -> usize {
    let range = time_range.filter(|r| !r.is_empty());

    let mut times = Vec::new();
    for &curve in curves {
        if let Err(err) = gather_key_times(host, curve, range, &mut times) {
            warn!("skipping curve {curve:?} while gathering key times: {err}");
        }
    }
    times.sort_by(|a, b| a.total_cmp(b));
    times.dedup();
    if let Some(range) = range {
        times.retain(|&t| range.contains(t));
    }

    let mut inserted = 0;
    for &curve in curves {
        match fill_curve(host, curve, &times, recorder) {
            Ok(count) => inserted += count,
            Err(err) => warn!("skipping curve {curve:?} while inserting keys: {err}"),
        }
    }
    inserted
}

fn gather_key_times(
    source: &dyn CurveHost,
    curve: CurveId,
    range: Option<TimeRange>,
    times: &mut Vec<f64>,
) -> Result<(), CurveError> {
    let num_keys = source.num_keys(curve)?;
    if num_keys == 0 {
        return Ok(());
    }

    // With a range, widen the index window by one key on each side; the
    // collected times are filtered back down to the range afterwards.
    let (start, end) = match range {
        Some(range) => {
            let start = source.find_closest_key(curve, range.start)?.saturating_sub(1);
            let end = (source.find_closest_key(curve, range.end)? + 1).min(num_keys);
            (start, end)
        }
        None => (0, num_keys),
    };

    for index in start..end {
        times.push(source.key_time(curve, index)?);
    }
    Ok(())
}

fn fill_curve(
    host: &mut dyn CurveHost,
    curve: CurveId,
    times: &[f64],
    recorder: &mut dyn ChangeRecorder,
) -> Result<usize, CurveError> {
    // Evaluate all missing samples before the first insert so later
    // insertions don't shift what we read.
    let mut missing = Vec::new();
    for &time in times {
        if host.find_key(curve, time)?.is_none() {
            missing.push((time, host.evaluate(curve, time)?));
        }
    }

    for &(time, value) in &missing {
        host.insert_key(curve, time, value, recorder)?;
    }
    Ok(missing.len())
}
