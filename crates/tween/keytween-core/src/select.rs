//! Selection context supplied by the host control layer.
//!
//! Which curves are affected, and how, is decided outside the engine: the
//! host resolves its scene selection (directly selected curves, or
//! object/attribute plugs routed through its curve resolver, including any
//! animation-layer traversal) down to plain [`CurveId`]s before calling the
//! builder. The engine only consumes the result.

use serde::{Deserialize, Serialize};

use crate::ids::CurveId;

/// Closed time interval selected on the host time slider.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// A zero-width range means "no range selected".
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }
}

/// One curve the host resolved from its selection, with the key indices
/// selected in the graph editor when there are any.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveSelection {
    pub curve: CurveId,
    /// Graph-editor key selection, in discovery order. `None` (or empty)
    /// means no explicit key selection on this curve.
    #[serde(default)]
    pub selected_keys: Option<Vec<usize>>,
}

impl CurveSelection {
    pub fn whole_curve(curve: CurveId) -> Self {
        Self {
            curve,
            selected_keys: None,
        }
    }

    pub fn with_keys(curve: CurveId, keys: Vec<usize>) -> Self {
        Self {
            curve,
            selected_keys: Some(keys),
        }
    }
}

/// Everything the snapshot builder needs to know about one interaction's
/// selection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionContext {
    pub curves: Vec<CurveSelection>,
    /// Time-slider range selection; takes priority over key selections.
    #[serde(default)]
    pub time_range: Option<TimeRange>,
    /// Current scrub position, used when neither a range nor keys are
    /// selected.
    #[serde(default)]
    pub scrub_time: f64,
}

impl SelectionContext {
    /// Context for whole curves at the given scrub time.
    pub fn at_time(curves: impl IntoIterator<Item = CurveId>, scrub_time: f64) -> Self {
        Self {
            curves: curves
                .into_iter()
                .map(CurveSelection::whole_curve)
                .collect(),
            time_range: None,
            scrub_time,
        }
    }

    /// Context for whole curves over a time-slider range.
    pub fn over_range(curves: impl IntoIterator<Item = CurveId>, range: TimeRange) -> Self {
        Self {
            curves: curves
                .into_iter()
                .map(CurveSelection::whole_curve)
                .collect(),
            time_range: Some(range),
            scrub_time: range.start,
        }
    }

    /// The effective range selection, ignoring zero-width ranges.
    #[inline]
    pub(crate) fn effective_range(&self) -> Option<TimeRange> {
        self.time_range.filter(|r| !r.is_empty())
    }
}
