//! Cubic bezier helpers shared by the snapshot builder and the blend engine.

use crate::curves::CurveSource;
use crate::error::CurveError;
use crate::ids::CurveId;

/// A (time, value) point on an animation curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2 {
    pub time: f64,
    pub value: f64,
}

/// Cubic bezier segment between two keys. P0/P3 are the key positions,
/// P1/P2 derive from the keys' authored tangent handles scaled by 1/3
/// (standard Hermite-to-Bezier conversion).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub points: [Point2; 4],
}

impl CubicBezier {
    /// Build the segment between two key indices from the curve's authored
    /// tangents.
    pub fn from_tangents<S: CurveSource + ?Sized>(
        source: &S,
        curve: CurveId,
        start_index: usize,
        end_index: usize,
    ) -> Result<Self, CurveError> {
        let p0 = Point2 {
            time: source.key_time(curve, start_index)?,
            value: source.key_value(curve, start_index)?,
        };
        let p3 = Point2 {
            time: source.key_time(curve, end_index)?,
            value: source.key_value(curve, end_index)?,
        };

        let (dt, dv) = source.tangent(curve, start_index, true)?;
        let p1 = Point2 {
            time: p0.time + dt / 3.0,
            value: p0.value + dv / 3.0,
        };

        let (dt, dv) = source.tangent(curve, end_index, false)?;
        let p2 = Point2 {
            time: p3.time - dt / 3.0,
            value: p3.value - dv / 3.0,
        };

        Ok(Self {
            points: [p0, p1, p2, p3],
        })
    }

    /// Bernstein evaluation of the value component at parameter `u`.
    ///
    /// Deliberately unclamped: overshoot drags push `u` outside [0, 1] and
    /// the polynomial extrapolates.
    #[inline]
    pub fn value_at(&self, u: f64) -> f64 {
        let v = 1.0 - u;
        let [p0, p1, p2, p3] = self.points;
        v * v * v * p0.value
            + 3.0 * u * v * v * p1.value
            + 3.0 * u * u * v * p2.value
            + u * u * u * p3.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(values: [f64; 4]) -> CubicBezier {
        let mut points = [0.0, 1.0, 2.0, 3.0].map(|t| Point2 {
            time: t,
            value: 0.0,
        });
        for (p, v) in points.iter_mut().zip(values) {
            p.value = v;
        }
        CubicBezier { points }
    }

    #[test]
    fn endpoints_are_exact() {
        let bez = segment([2.0, 3.0, 5.0, 8.0]);
        assert_eq!(bez.value_at(0.0), 2.0);
        assert_eq!(bez.value_at(1.0), 8.0);
    }

    #[test]
    fn collinear_control_points_reduce_to_lerp() {
        // P1/P2 at thirds of the span makes the polynomial linear in u.
        let bez = segment([0.0, 1.0, 2.0, 3.0]);
        for u in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert!((bez.value_at(u) - 3.0 * u).abs() < 1e-12);
        }
    }

    #[test]
    fn extrapolates_outside_unit_range() {
        let bez = segment([0.0, 1.0, 2.0, 3.0]);
        assert!((bez.value_at(1.5) - 4.5).abs() < 1e-12);
        assert!((bez.value_at(-0.5) + 1.5).abs() < 1e-12);
    }
}
