//! One slider/tool interaction, from press to release.
//!
//! The session owns the snapshot set for the duration of a drag and replaces
//! what used to be hidden module-level caches: construct one on press,
//! re-blend as the parameter moves, and drop it on release. Starting the
//! next interaction simply builds a new session; there is nothing to clean
//! up. Aborting means not committing — restoring values is the caller's job,
//! typically by replaying the change recorder.

use crate::blend;
use crate::curves::{ChangeRecorder, CurveHost, CurveSink};
use crate::mode::BlendMode;
use crate::select::SelectionContext;
use crate::snapshot::SnapshotSet;

/// Horizontal drag distance, in pixels, that maps to a full blend of 1.0.
pub const DRAG_SENSITIVITY: f64 = 150.0;

/// Blend magnitude cap for a normal session.
pub const BLEND_LIMIT: f64 = 1.0;

/// Blend magnitude cap with overshoot enabled.
pub const OVERSHOOT_BLEND_LIMIT: f64 = 2.0;

/// Snapshot plus the interaction settings captured at press time.
#[derive(Debug)]
pub struct TweenSession {
    snapshots: SnapshotSet,
    mode: BlendMode,
    overshoot: bool,
}

impl TweenSession {
    /// Snapshot the current selection and begin a session.
    ///
    /// This is the one step that may mutate curves (inserting a key at the
    /// scrub position); every mutation is reported to `recorder`.
    pub fn begin(
        host: &mut dyn CurveHost,
        ctx: &SelectionContext,
        mode: BlendMode,
        overshoot: bool,
        recorder: &mut dyn ChangeRecorder,
    ) -> Self {
        Self {
            snapshots: crate::builder::build_snapshots(host, ctx, mode, recorder),
            mode,
            overshoot,
        }
    }

    /// Nothing resolved from the selection; the caller usually surfaces a
    /// status message and skips the drag.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[inline]
    pub fn mode(&self) -> BlendMode {
        self.mode
    }

    #[inline]
    pub fn overshoot(&self) -> bool {
        self.overshoot
    }

    #[inline]
    pub fn snapshots(&self) -> &SnapshotSet {
        &self.snapshots
    }

    /// The blend magnitude this session accepts from UI input.
    #[inline]
    pub fn blend_limit(&self) -> f64 {
        if self.overshoot {
            OVERSHOOT_BLEND_LIMIT
        } else {
            BLEND_LIMIT
        }
    }

    /// Clamp a raw UI parameter into this session's blend range.
    #[inline]
    pub fn clamp_blend(&self, raw: f64) -> f64 {
        raw.clamp(-self.blend_limit(), self.blend_limit())
    }

    /// Map a horizontal drag distance (pixels from the press point) to a
    /// blend parameter.
    #[inline]
    pub fn blend_from_drag(&self, pixel_dx: f64) -> f64 {
        self.clamp_blend(pixel_dx / DRAG_SENSITIVITY)
    }

    /// Recompute and write all affected keys for the given blend parameter.
    /// Returns the number of keys written.
    pub fn interpolate(
        &self,
        blend: f64,
        sink: &mut dyn CurveSink,
        recorder: &mut dyn ChangeRecorder,
    ) -> usize {
        blend::interpolate(&self.snapshots, blend, self.mode, sink, recorder)
    }
}
