mod tessellate_curve;

pub use tessellate_curve::{Sampling, TessellateCurve};

use crate::math::Point3;

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}

impl Polyline {
    /// Returns the summed length of all segments.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| nalgebra::distance(&w[0], &w[1]))
            .sum()
    }
}
