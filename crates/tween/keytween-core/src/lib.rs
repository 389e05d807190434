//! keytween-core (host-agnostic)
//!
//! Interactive key-blending engine for animation curves. The host builds a
//! [`SelectionContext`], the builder snapshots the affected keys with their
//! neighboring context, and [`blend::interpolate`] recomputes key values from
//! a single blend parameter as a slider or drag tool moves. All curve access
//! goes through the narrow collaborator traits in [`curves`]; the core never
//! owns curve storage.

pub mod blend;
pub mod builder;
pub mod curves;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod keyhammer;
pub mod mode;
pub mod select;
pub mod session;
pub mod snapshot;

// Re-exports for consumers (hosts and tools)
pub use blend::interpolate;
pub use builder::build_snapshots;
pub use curves::{ChangeRecorder, CurveHost, CurveSink, CurveSource, DefaultResolver, NullRecorder};
pub use error::CurveError;
pub use geometry::{CubicBezier, Point2};
pub use ids::{CurveId, CurveIdAllocator};
pub use keyhammer::hammer_keys;
pub use mode::BlendMode;
pub use select::{CurveSelection, SelectionContext, TimeRange};
pub use session::TweenSession;
pub use snapshot::{KeySnapshot, KeyState, SnapshotSet, TangentSpan};
