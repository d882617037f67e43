use crate::error::{InvalidCurveError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// Minimum number of control points for a closed curve.
pub const MIN_CLOSED_POINTS: usize = 3;

/// Knot spacings below this are treated as coincident points.
const MIN_KNOT_SPACING: f64 = 1e-4;

/// Parametrization of a Catmull-Rom spline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CurveType {
    /// Knot spacing `|P_i P_i+1|^0.5`. Avoids cusps and self-intersections.
    #[default]
    Centripetal,
    /// Knot spacing `|P_i P_i+1|`.
    Chordal,
    /// Uniform knots with the given tension (0.5 is the classic spline).
    Uniform { tension: f64 },
}

impl CurveType {
    /// Uniform Catmull-Rom with the conventional tension of 0.5.
    pub const UNIFORM: Self = Self::Uniform { tension: 0.5 };
}

/// A closed Catmull-Rom spline through an ordered set of control points.
///
/// The raw parameter `t` covers one lap over `[0, 1]`; each control point
/// owns an equal share of the domain, so `evaluate(k / n)` is control point
/// `k`. Any `t` outside the domain wraps around the loop.
#[derive(Debug, Clone)]
pub struct CatmullRom {
    points: Vec<Point3>,
    curve_type: CurveType,
}

impl CatmullRom {
    /// Creates a closed spline through `points`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCurveError`] if fewer than three points are given, a
    /// coordinate is not finite, or all points lie on one line.
    pub fn closed(points: Vec<Point3>, curve_type: CurveType) -> Result<Self> {
        if points.len() < MIN_CLOSED_POINTS {
            return Err(InvalidCurveError::TooFewPoints {
                count: points.len(),
            }
            .into());
        }
        if let Some(index) = points
            .iter()
            .position(|p| !p.coords.iter().all(|c| c.is_finite()))
        {
            return Err(InvalidCurveError::NonFinite { index }.into());
        }
        if is_collinear(&points) {
            return Err(InvalidCurveError::Collinear.into());
        }
        Ok(Self { points, curve_type })
    }

    /// Returns the control points.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the parametrization.
    #[must_use]
    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    /// Returns the four points that shape segment `i` (which runs from
    /// `P[i]` to `P[i + 1]`).
    fn segment(&self, i: usize) -> [Point3; 4] {
        let n = self.points.len();
        [
            self.points[(i + n - 1) % n],
            self.points[i % n],
            self.points[(i + 1) % n],
            self.points[(i + 2) % n],
        ]
    }

    /// Computes the Hermite tangents at `p1` and `p2` for one segment.
    fn segment_tangents(&self, segment: [Point3; 4]) -> (Vector3, Vector3) {
        match self.curve_type {
            CurveType::Uniform { tension } => {
                let [p0, p1, p2, p3] = segment;
                ((p2 - p0) * tension, (p3 - p1) * tension)
            }
            CurveType::Centripetal => non_uniform_tangents(segment, 0.25),
            CurveType::Chordal => non_uniform_tangents(segment, 0.5),
        }
    }
}

/// Tangents for knot spacing `dt = |P_i P_i+1|^(2 * exponent)`.
fn non_uniform_tangents([p0, p1, p2, p3]: [Point3; 4], exponent: f64) -> (Vector3, Vector3) {
    let mut dt0 = nalgebra::distance_squared(&p0, &p1).powf(exponent);
    let mut dt1 = nalgebra::distance_squared(&p1, &p2).powf(exponent);
    let mut dt2 = nalgebra::distance_squared(&p2, &p3).powf(exponent);

    // Repeated points would divide by zero.
    if dt1 < MIN_KNOT_SPACING {
        dt1 = 1.0;
    }
    if dt0 < MIN_KNOT_SPACING {
        dt0 = dt1;
    }
    if dt2 < MIN_KNOT_SPACING {
        dt2 = dt1;
    }

    let m1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
    let m2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;
    (m1, m2)
}

impl Curve for CatmullRom {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn evaluate(&self, t: f64) -> Point3 {
        let n = self.points.len();
        let scaled = n as f64 * t;
        let floor = scaled.floor();
        let weight = scaled - floor;
        let index = (floor as i64).rem_euclid(n as i64);

        #[allow(clippy::cast_sign_loss)]
        let segment = self.segment(index as usize);
        let (m1, m2) = self.segment_tangents(segment);
        let [_, p1, p2, _] = segment;

        let c0 = p1.coords;
        let c1 = m1;
        let c2 = p1.coords * -3.0 + p2.coords * 3.0 - m1 * 2.0 - m2;
        let c3 = p1.coords * 2.0 - p2.coords * 2.0 + m1 + m2;

        Point3::from(c0 + (c1 + (c2 + c3 * weight) * weight) * weight)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        true
    }
}

fn is_collinear(points: &[Point3]) -> bool {
    let origin = points[0];
    let Some(axis) = points
        .iter()
        .map(|p| p - origin)
        .find(|v| v.norm() > TOLERANCE)
    else {
        return true;
    };
    let axis = axis.normalize();
    points
        .iter()
        .all(|p| (p - origin).cross(&axis).norm() <= TOLERANCE)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TubeflyError;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point3> {
        vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
        ]
    }

    #[test]
    fn passes_through_control_points() {
        for curve_type in [CurveType::Centripetal, CurveType::Chordal, CurveType::UNIFORM] {
            let curve = CatmullRom::closed(square(), curve_type).unwrap();
            for (k, p) in square().iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let t = k as f64 / 4.0;
                assert_relative_eq!(curve.evaluate(t), *p, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn closes_on_itself() {
        let curve = CatmullRom::closed(square(), CurveType::Centripetal).unwrap();
        assert_relative_eq!(curve.evaluate(0.0), curve.evaluate(1.0), epsilon = 1e-12);
        assert!(curve.is_closed());
    }

    #[test]
    fn parameter_wraps_outside_domain() {
        let curve = CatmullRom::closed(square(), CurveType::Centripetal).unwrap();
        assert_relative_eq!(curve.evaluate(1.3), curve.evaluate(0.3), epsilon = 1e-9);
        assert_relative_eq!(curve.evaluate(-0.2), curve.evaluate(0.8), epsilon = 1e-9);
    }

    #[test]
    fn uniform_midpoint_matches_closed_form() {
        // Classic Catmull-Rom midpoint: (-p0 + 9 p1 + 9 p2 - p3) / 16.
        let curve = CatmullRom::closed(square(), CurveType::UNIFORM).unwrap();
        let pts = square();
        let expected = Point3::from(
            (pts[3].coords * -1.0 + pts[0].coords * 9.0 + pts[1].coords * 9.0
                - pts[2].coords)
                / 16.0,
        );
        assert_relative_eq!(curve.evaluate(0.125), expected, epsilon = 1e-12);
    }

    #[test]
    fn symmetric_loop_bulges_outward() {
        // Halfway between two corners of a square the spline lies outside the chord.
        let curve = CatmullRom::closed(square(), CurveType::Centripetal).unwrap();
        let mid = curve.evaluate(0.125);
        assert_relative_eq!(mid.x, mid.y, epsilon = 1e-12);
        assert!(mid.coords.norm() > std::f64::consts::FRAC_1_SQRT_2);
    }

    #[test]
    fn tangent_follows_traversal_direction() {
        let curve = CatmullRom::closed(square(), CurveType::Centripetal).unwrap();
        let t = curve.tangent(0.0).unwrap();
        // Leaving (1, 0, 0) towards (0, 1, 0): counter-clockwise, so +Y.
        assert_relative_eq!(t, Vector3::y(), epsilon = 1e-6);
    }

    #[test]
    fn repeated_point_stays_finite() {
        let mut pts = square();
        pts.insert(1, pts[0]);
        let curve = CatmullRom::closed(pts, CurveType::Centripetal).unwrap();
        for k in 0..=50 {
            let p = curve.evaluate(f64::from(k) / 50.0);
            assert!(p.coords.iter().all(|c| c.is_finite()));
        }
    }

    #[test]
    fn two_points_rejected() {
        let err = CatmullRom::closed(square()[..2].to_vec(), CurveType::Centripetal).unwrap_err();
        assert!(matches!(
            err,
            TubeflyError::InvalidCurve(InvalidCurveError::TooFewPoints { count: 2 })
        ));
    }

    #[test]
    fn non_finite_point_rejected() {
        let mut pts = square();
        pts[2].y = f64::NAN;
        let err = CatmullRom::closed(pts, CurveType::Centripetal).unwrap_err();
        assert!(matches!(
            err,
            TubeflyError::InvalidCurve(InvalidCurveError::NonFinite { index: 2 })
        ));
    }

    #[test]
    fn collinear_points_rejected() {
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(3.0, 3.0, 3.0),
        ];
        let err = CatmullRom::closed(pts, CurveType::Centripetal).unwrap_err();
        assert!(matches!(
            err,
            TubeflyError::InvalidCurve(InvalidCurveError::Collinear)
        ));
    }

    #[test]
    fn coincident_points_rejected() {
        let pts = vec![Point3::new(2.0, 2.0, 2.0); 4];
        assert!(CatmullRom::closed(pts, CurveType::Centripetal).is_err());
    }
}
