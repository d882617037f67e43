use tracing::debug;

use crate::error::Result;
use crate::math::{wrap_unit, Point3, Vector3};
use crate::tessellation::{Polyline, Sampling, TessellateCurve};

use super::arc_length::{ArcLengthTable, DEFAULT_ARC_DIVISIONS};
use super::curve::{CatmullRom, Curve, CurveType};

/// An immutable closed path through control points, queried by arc fraction.
///
/// `point_at(u)` walks the curve at constant speed: `u = 0.5` is halfway
/// around the loop by length, regardless of how the control points are
/// spaced. Positions outside `[0, 1)` wrap, so `point_at(0) == point_at(1)`.
#[derive(Debug, Clone)]
pub struct CurveModel {
    spline: CatmullRom,
    arc_lengths: ArcLengthTable,
}

impl CurveModel {
    /// Creates a centripetal closed curve through `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three points are given, a point is not
    /// finite, or all points are collinear.
    pub fn new(points: Vec<Point3>) -> Result<Self> {
        Self::with_curve_type(points, CurveType::default())
    }

    /// Creates a closed curve with an explicit parametrization.
    ///
    /// # Errors
    ///
    /// Same as [`CurveModel::new`].
    pub fn with_curve_type(points: Vec<Point3>, curve_type: CurveType) -> Result<Self> {
        let spline = CatmullRom::closed(points, curve_type)?;
        let arc_lengths = ArcLengthTable::build(&spline, DEFAULT_ARC_DIVISIONS)?;
        debug!(
            points = spline.points().len(),
            ?curve_type,
            length = arc_lengths.total_length(),
            "built closed curve"
        );
        Ok(Self {
            spline,
            arc_lengths,
        })
    }

    /// Returns the point at normalized arc position `u`.
    ///
    /// `u` wraps into `[0, 1)`; non-finite values are treated as `0`.
    #[must_use]
    pub fn point_at(&self, u: f64) -> Point3 {
        self.spline.evaluate(self.arc_lengths.u_to_t(wrap_unit(u)))
    }

    /// Returns the point at raw spline parameter `t` (control point `k` sits
    /// at `k / n`).
    ///
    /// `t` wraps like [`CurveModel::point_at`]; non-finite values are treated as `0`.
    #[must_use]
    pub fn point(&self, t: f64) -> Point3 {
        self.spline.evaluate(wrap_unit(t))
    }

    /// Returns the unit tangent at normalized arc position `u`.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is stationary at `u`.
    pub fn tangent_at(&self, u: f64) -> Result<Vector3> {
        self.spline.tangent(self.arc_lengths.u_to_t(wrap_unit(u)))
    }

    /// Returns the approximate length of one lap.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.arc_lengths.total_length()
    }

    /// Returns the control points in traversal order.
    #[must_use]
    pub fn control_points(&self) -> &[Point3] {
        self.spline.points()
    }

    /// Returns the spline parametrization.
    #[must_use]
    pub fn curve_type(&self) -> CurveType {
        self.spline.curve_type()
    }

    /// Samples `divisions + 1` points at evenly spaced raw parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `divisions` is zero.
    pub fn points(&self, divisions: usize) -> Result<Polyline> {
        TessellateCurve::new(self, divisions, Sampling::Parameter).execute()
    }

    /// Samples `divisions + 1` points at evenly spaced arc positions.
    ///
    /// # Errors
    ///
    /// Returns an error if `divisions` is zero.
    pub fn spaced_points(&self, divisions: usize) -> Result<Polyline> {
        TessellateCurve::new(self, divisions, Sampling::ArcLength).execute()
    }
}
