//! Shared test support: an in-memory curve bank implementing the keytween
//! collaborator traits, plus a recorder that can revert a whole interaction.
//!
//! The bank stands in for a host scene in integration tests and benches.
//! Curve evaluation is piecewise linear, which keeps expected values easy to
//! compute by hand; tangent handles are stored per key and default to
//! vectors pointing at the neighboring keys, so bezier segments built from
//! them reproduce straight lines.

use hashbrown::HashMap;

use keytween_core::{
    ChangeRecorder, CurveError, CurveId, CurveIdAllocator, CurveSink, CurveSource, DefaultResolver,
};

/// One stored key with authored tangent handles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Key {
    pub time: f64,
    pub value: f64,
    /// Arriving handle as (time-delta, value-delta).
    pub tan_in: (f64, f64),
    /// Departing handle as (time-delta, value-delta).
    pub tan_out: (f64, f64),
}

#[derive(Clone, Debug, Default)]
struct Curve {
    keys: Vec<Key>,
    default_value: Option<f64>,
}

/// In-memory stand-in for a host scene's animation curves.
#[derive(Debug, Default)]
pub struct CurveBank {
    curves: HashMap<CurveId, Curve>,
    ids: CurveIdAllocator,
}

impl CurveBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a curve from (time, value) pairs, sorted by time, with tangent
    /// handles pointing at the neighboring keys (linear shape).
    pub fn add_curve(&mut self, keys: &[(f64, f64)]) -> CurveId {
        let mut stored: Vec<Key> = keys
            .iter()
            .map(|&(time, value)| Key {
                time,
                value,
                tan_in: (1.0, 0.0),
                tan_out: (1.0, 0.0),
            })
            .collect();
        stored.sort_by(|a, b| a.time.total_cmp(&b.time));
        for i in 0..stored.len() {
            if i > 0 {
                stored[i].tan_in = (
                    stored[i].time - stored[i - 1].time,
                    stored[i].value - stored[i - 1].value,
                );
            }
            if i + 1 < stored.len() {
                stored[i].tan_out = (
                    stored[i + 1].time - stored[i].time,
                    stored[i + 1].value - stored[i].value,
                );
            }
        }
        self.add_curve_raw(stored)
    }

    /// Add a curve with fully authored keys (explicit tangents).
    pub fn add_curve_raw(&mut self, keys: Vec<Key>) -> CurveId {
        let id = self.ids.alloc();
        self.curves.insert(
            id,
            Curve {
                keys,
                default_value: None,
            },
        );
        id
    }

    /// Attach an attribute rest value to a curve for Default-mode sessions.
    pub fn set_default_value(&mut self, curve: CurveId, value: f64) {
        if let Some(c) = self.curves.get_mut(&curve) {
            c.default_value = Some(value);
        }
    }

    /// Remove a curve, turning its handle stale.
    pub fn delete_curve(&mut self, curve: CurveId) {
        self.curves.remove(&curve);
    }

    /// Panicking value accessor for test assertions.
    pub fn value(&self, curve: CurveId, index: usize) -> f64 {
        self.curves[&curve].keys[index].value
    }

    /// Panicking time accessor for test assertions.
    pub fn time(&self, curve: CurveId, index: usize) -> f64 {
        self.curves[&curve].keys[index].time
    }

    pub fn key_count(&self, curve: CurveId) -> usize {
        self.curves[&curve].keys.len()
    }

    pub fn times(&self, curve: CurveId) -> Vec<f64> {
        self.curves[&curve].keys.iter().map(|k| k.time).collect()
    }

    pub fn values(&self, curve: CurveId) -> Vec<f64> {
        self.curves[&curve].keys.iter().map(|k| k.value).collect()
    }

    /// Undo every edit captured by the recorder, newest first.
    pub fn revert(&mut self, recorder: &UndoRecorder) {
        for edit in recorder.edits().iter().rev() {
            match *edit {
                Edit::ValueChange {
                    curve,
                    index,
                    old_value,
                    ..
                } => {
                    if let Some(c) = self.curves.get_mut(&curve) {
                        if let Some(key) = c.keys.get_mut(index) {
                            key.value = old_value;
                        }
                    }
                }
                Edit::KeyInsert { curve, index, .. } => {
                    if let Some(c) = self.curves.get_mut(&curve) {
                        if index < c.keys.len() {
                            c.keys.remove(index);
                        }
                    }
                }
            }
        }
    }

    fn curve(&self, curve: CurveId) -> Result<&Curve, CurveError> {
        self.curves
            .get(&curve)
            .ok_or(CurveError::StaleCurve { curve })
    }

    fn curve_mut(&mut self, curve: CurveId) -> Result<&mut Curve, CurveError> {
        self.curves
            .get_mut(&curve)
            .ok_or(CurveError::StaleCurve { curve })
    }

    fn key(&self, curve: CurveId, index: usize) -> Result<&Key, CurveError> {
        let c = self.curve(curve)?;
        c.keys.get(index).ok_or(CurveError::KeyIndexOutOfRange {
            curve,
            index,
            num_keys: c.keys.len(),
        })
    }
}

impl CurveSource for CurveBank {
    fn num_keys(&self, curve: CurveId) -> Result<usize, CurveError> {
        Ok(self.curve(curve)?.keys.len())
    }

    fn key_time(&self, curve: CurveId, index: usize) -> Result<f64, CurveError> {
        Ok(self.key(curve, index)?.time)
    }

    fn key_value(&self, curve: CurveId, index: usize) -> Result<f64, CurveError> {
        Ok(self.key(curve, index)?.value)
    }

    fn tangent(
        &self,
        curve: CurveId,
        index: usize,
        outgoing: bool,
    ) -> Result<(f64, f64), CurveError> {
        let key = self.key(curve, index)?;
        Ok(if outgoing { key.tan_out } else { key.tan_in })
    }

    fn find_key(&self, curve: CurveId, time: f64) -> Result<Option<usize>, CurveError> {
        Ok(self
            .curve(curve)?
            .keys
            .iter()
            .position(|k| k.time == time))
    }

    fn find_closest_key(&self, curve: CurveId, time: f64) -> Result<usize, CurveError> {
        let keys = &self.curve(curve)?.keys;
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (i, key) in keys.iter().enumerate() {
            let dist = (key.time - time).abs();
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        Ok(best)
    }

    fn evaluate(&self, curve: CurveId, time: f64) -> Result<f64, CurveError> {
        let keys = &self.curve(curve)?.keys;
        let Some(first) = keys.first() else {
            return Ok(0.0);
        };
        if time <= first.time {
            return Ok(first.value);
        }
        for pair in keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if time <= b.time {
                let t = (time - a.time) / (b.time - a.time);
                return Ok(a.value + (b.value - a.value) * t);
            }
        }
        Ok(keys[keys.len() - 1].value)
    }
}

impl CurveSink for CurveBank {
    fn set_key_value(
        &mut self,
        curve: CurveId,
        index: usize,
        value: f64,
        recorder: &mut dyn ChangeRecorder,
    ) -> Result<(), CurveError> {
        let c = self.curve_mut(curve)?;
        let num_keys = c.keys.len();
        let key = c.keys.get_mut(index).ok_or(CurveError::KeyIndexOutOfRange {
            curve,
            index,
            num_keys,
        })?;
        let old_value = key.value;
        key.value = value;
        recorder.record_value_change(curve, index, old_value, value);
        Ok(())
    }

    fn insert_key(
        &mut self,
        curve: CurveId,
        time: f64,
        value: f64,
        recorder: &mut dyn ChangeRecorder,
    ) -> Result<usize, CurveError> {
        let c = self.curve_mut(curve)?;
        let index = c.keys.partition_point(|k| k.time < time);
        c.keys.insert(
            index,
            Key {
                time,
                value,
                tan_in: (1.0, 0.0),
                tan_out: (1.0, 0.0),
            },
        );
        recorder.record_key_insert(curve, index, time);
        Ok(index)
    }
}

impl DefaultResolver for CurveBank {
    fn resolve_default(&self, curve: CurveId) -> Option<f64> {
        self.curves.get(&curve).and_then(|c| c.default_value)
    }
}

/// One recorded mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edit {
    ValueChange {
        curve: CurveId,
        index: usize,
        old_value: f64,
        new_value: f64,
    },
    KeyInsert {
        curve: CurveId,
        index: usize,
        time: f64,
    },
}

/// Recorder that keeps every edit of a session so tests can assert on the
/// batch or roll it back via [`CurveBank::revert`].
#[derive(Debug, Default)]
pub struct UndoRecorder {
    edits: Vec<Edit>,
}

impl UndoRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn clear(&mut self) {
        self.edits.clear();
    }
}

impl ChangeRecorder for UndoRecorder {
    fn record_value_change(&mut self, curve: CurveId, index: usize, old_value: f64, new_value: f64) {
        self.edits.push(Edit::ValueChange {
            curve,
            index,
            old_value,
            new_value,
        });
    }

    fn record_key_insert(&mut self, curve: CurveId, index: usize, time: f64) {
        self.edits.push(Edit::KeyInsert {
            curve,
            index,
            time,
        });
    }
}
