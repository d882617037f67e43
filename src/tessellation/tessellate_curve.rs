use crate::error::{InvalidArgumentError, Result};
use crate::geometry::CurveModel;

use super::Polyline;

/// How sample positions are spread along the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampling {
    /// Evenly spaced raw spline parameters. Denser where control points bunch up.
    Parameter,
    /// Evenly spaced arc positions.
    ArcLength,
}

/// Tessellates a closed curve into a polyline of `divisions + 1` points.
///
/// The last point repeats the first, so the polyline draws a closed loop.
pub struct TessellateCurve<'a> {
    curve: &'a CurveModel,
    divisions: usize,
    sampling: Sampling,
}

impl<'a> TessellateCurve<'a> {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(curve: &'a CurveModel, divisions: usize, sampling: Sampling) -> Self {
        Self {
            curve,
            divisions,
            sampling,
        }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if `divisions` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Polyline> {
        if self.divisions == 0 {
            return Err(InvalidArgumentError::Zero {
                parameter: "divisions",
            }
            .into());
        }

        let points = (0..=self.divisions)
            .map(|k| {
                let s = k as f64 / self.divisions as f64;
                match self.sampling {
                    Sampling::Parameter => self.curve.point(s),
                    // point_at wraps 1.0 to 0.0, which is the same point.
                    Sampling::ArcLength => self.curve.point_at(s),
                }
            })
            .collect();

        Ok(Polyline { points })
    }
}
