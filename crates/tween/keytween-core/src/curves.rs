//! Collaborator traits for host curve access.
//!
//! The engine never owns animation curves. It reads sampled key data through
//! [`CurveSource`], writes new key values through [`CurveSink`], and resolves
//! attribute rest values through [`DefaultResolver`]. Hosts usually implement
//! all three on one scene object; [`CurveHost`] is the convenience bound for
//! passing such an object around.

use crate::error::CurveError;
use crate::ids::CurveId;

/// Read access to a single host-owned scalar animation curve.
///
/// Any method may fail with [`CurveError::StaleCurve`] when the curve has
/// been deleted since the handle was issued; callers treat that as "drop this
/// curve, keep going".
pub trait CurveSource {
    fn num_keys(&self, curve: CurveId) -> Result<usize, CurveError>;

    fn key_time(&self, curve: CurveId, index: usize) -> Result<f64, CurveError>;

    fn key_value(&self, curve: CurveId, index: usize) -> Result<f64, CurveError>;

    /// Authored tangent handle at a key, as a (time-delta, value-delta)
    /// vector. `outgoing` selects the departing handle, otherwise the
    /// arriving one.
    fn tangent(&self, curve: CurveId, index: usize, outgoing: bool)
        -> Result<(f64, f64), CurveError>;

    /// Index of the key exactly at `time`, if one exists.
    fn find_key(&self, curve: CurveId, time: f64) -> Result<Option<usize>, CurveError>;

    /// Index of the key nearest to `time`. The curve must have at least one
    /// key.
    fn find_closest_key(&self, curve: CurveId, time: f64) -> Result<usize, CurveError>;

    /// Evaluate the curve at an arbitrary time. Used only to seed a newly
    /// inserted key.
    fn evaluate(&self, curve: CurveId, time: f64) -> Result<f64, CurveError>;
}

/// Write access to host-owned curves.
///
/// Implementations must report every mutation to the supplied
/// [`ChangeRecorder`] so the host undo system can batch a whole interaction
/// into one undoable step.
pub trait CurveSink {
    fn set_key_value(
        &mut self,
        curve: CurveId,
        index: usize,
        value: f64,
        recorder: &mut dyn ChangeRecorder,
    ) -> Result<(), CurveError>;

    /// Insert a key at `time` with `value`, returning its index. Indices of
    /// keys at or after the insertion point shift up by one.
    fn insert_key(
        &mut self,
        curve: CurveId,
        time: f64,
        value: f64,
        recorder: &mut dyn ChangeRecorder,
    ) -> Result<usize, CurveError>;
}

/// Resolves the rest/default value of the attribute a curve ultimately
/// drives. Traversal of the host's dependency graph (including animation
/// layer blend chains) lives behind this trait; `None` means the chain could
/// not be traced and the curve is skipped in Default mode.
pub trait DefaultResolver {
    fn resolve_default(&self, curve: CurveId) -> Option<f64>;
}

/// Undo-batch token threaded through every mutation of one interaction.
///
/// The engine never interprets the recorder; it only hands it to the sink.
/// Sinks call back with the concrete edit so the recorder can replay or
/// revert the whole batch.
pub trait ChangeRecorder {
    fn record_value_change(&mut self, curve: CurveId, index: usize, old_value: f64, new_value: f64);

    fn record_key_insert(&mut self, curve: CurveId, index: usize, time: f64);
}

/// Recorder that drops all edits, for hosts without undo.
#[derive(Default, Debug)]
pub struct NullRecorder;

impl ChangeRecorder for NullRecorder {
    fn record_value_change(&mut self, _: CurveId, _: usize, _: f64, _: f64) {}

    fn record_key_insert(&mut self, _: CurveId, _: usize, _: f64) {}
}

/// Full collaborator surface, for hosts that provide read, write, and
/// default resolution on one object.
pub trait CurveHost: CurveSource + CurveSink + DefaultResolver {}

impl<T: CurveSource + CurveSink + DefaultResolver> CurveHost for T {}
