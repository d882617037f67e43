mod catmull_rom;

pub use catmull_rom::{CatmullRom, CurveType};

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Parameter step used for finite-difference tangents, as a fraction of the domain.
pub const TANGENT_DELTA: f64 = 1e-4;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns the width of the domain.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.t_max - self.t_min
    }
}

/// Trait for parametric curves in 3D space.
pub trait Curve {
    /// Evaluates the curve at raw parameter `t`.
    fn evaluate(&self, t: f64) -> Point3;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;

    /// Computes the unit tangent at parameter `t` by central differences.
    ///
    /// Closed curves sample across the seam; open curves clamp to the domain.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the curve is locally stationary.
    fn tangent(&self, t: f64) -> Result<Vector3> {
        let domain = self.domain();
        let delta = TANGENT_DELTA * domain.span();
        let (t1, t2) = if self.is_closed() {
            (t - delta, t + delta)
        } else {
            (
                (t - delta).max(domain.t_min),
                (t + delta).min(domain.t_max),
            )
        };

        let diff = self.evaluate(t2) - self.evaluate(t1);
        let len = diff.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(diff / len)
    }
}
