use crate::error::{
    ensure_non_negative, ensure_positive, GeometryError, InvalidArgumentError, Result,
};
use crate::geometry::CurveModel;
use crate::math::{wrap_unit, Matrix4, Point3, Vector3, TOLERANCE};

/// Camera position and look-at target for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Point3,
    pub target: Point3,
}

impl CameraPose {
    /// Creates a pose.
    #[must_use]
    pub fn new(position: Point3, target: Point3) -> Self {
        Self { position, target }
    }

    /// Returns the unit view direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if position and target coincide.
    pub fn direction(&self) -> Result<Vector3> {
        let dir = self.target - self.position;
        let len = dir.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(dir / len)
    }

    /// Returns the right-handed world-to-view matrix with +Y up.
    ///
    /// When looking straight up or down, +Z is used as the up hint instead.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if position and target coincide.
    pub fn view_matrix(&self) -> Result<Matrix4> {
        let dir = self.direction()?;
        let up = if dir.cross(&Vector3::y()).norm() < TOLERANCE {
            Vector3::z()
        } else {
            Vector3::y()
        };
        Ok(Matrix4::look_at_rh(&self.position, &self.target, &up))
    }
}

/// Timing of a looping fly-through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyThroughParams {
    /// Time for one lap, in scaled milliseconds.
    pub loop_duration_ms: f64,
    /// How far ahead along the curve the camera looks, as a fraction of a lap.
    pub look_ahead: f64,
    /// Factor applied to frame timestamps before looping.
    pub time_scale: f64,
}

impl FlyThroughParams {
    /// Checks every field.
    ///
    /// # Errors
    ///
    /// Returns an error if the loop duration or time scale is not positive,
    /// or the look-ahead is outside `(0, 1)`.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("loop_duration_ms", self.loop_duration_ms)?;
        ensure_look_ahead(self.look_ahead)?;
        ensure_positive("time_scale", self.time_scale)
    }

    /// Returns the real time, in milliseconds, one lap takes.
    #[must_use]
    pub fn lap_ms(&self) -> f64 {
        self.loop_duration_ms / self.time_scale
    }
}

impl Default for FlyThroughParams {
    /// An eight second loop driven at a tenth of frame time.
    fn default() -> Self {
        Self {
            loop_duration_ms: 8000.0,
            look_ahead: 0.01,
            time_scale: 0.1,
        }
    }
}

/// Derives camera poses from absolute time.
///
/// Stateless: every pose is recomputed from the time it is given, so dropped
/// frames never accumulate drift and the loop restarts cleanly.
#[derive(Debug, Clone, Copy)]
pub struct FlyThroughDriver<'a> {
    curve: &'a CurveModel,
}

impl<'a> FlyThroughDriver<'a> {
    /// Creates a driver over `curve`.
    #[must_use]
    pub fn new(curve: &'a CurveModel) -> Self {
        Self { curve }
    }

    /// Returns the normalized curve position reached at `time_ms`.
    ///
    /// # Errors
    ///
    /// Returns an error if `time_ms` is negative or not finite, or
    /// `loop_duration_ms` is not positive.
    pub fn position_at(time_ms: f64, loop_duration_ms: f64) -> Result<f64> {
        ensure_non_negative("time_ms", time_ms)?;
        ensure_positive("loop_duration_ms", loop_duration_ms)?;
        Ok(wrap_unit((time_ms % loop_duration_ms) / loop_duration_ms))
    }

    /// Returns the camera pose at `time_ms`.
    ///
    /// The camera sits at `point_at(u)` and looks at `point_at(u + look_ahead)`,
    /// where `u = (time_ms mod loop_duration_ms) / loop_duration_ms`.
    ///
    /// # Errors
    ///
    /// Returns an error if `time_ms` is negative, `loop_duration_ms` is not
    /// positive, or `look_ahead` is outside `(0, 1)`.
    pub fn pose_at(
        &self,
        time_ms: f64,
        loop_duration_ms: f64,
        look_ahead: f64,
    ) -> Result<CameraPose> {
        ensure_look_ahead(look_ahead)?;
        let u = Self::position_at(time_ms, loop_duration_ms)?;
        Ok(CameraPose {
            position: self.curve.point_at(u),
            target: self.curve.point_at(wrap_unit(u + look_ahead)),
        })
    }

    /// Returns the pose for a raw frame timestamp, applying `params.time_scale`.
    ///
    /// # Errors
    ///
    /// Same as [`FlyThroughDriver::pose_at`], plus a non-positive time scale.
    pub fn pose_for_frame(
        &self,
        timestamp_ms: f64,
        params: &FlyThroughParams,
    ) -> Result<CameraPose> {
        ensure_positive("time_scale", params.time_scale)?;
        self.pose_at(
            timestamp_ms * params.time_scale,
            params.loop_duration_ms,
            params.look_ahead,
        )
    }
}

fn ensure_look_ahead(look_ahead: f64) -> Result<()> {
    if !look_ahead.is_finite() {
        return Err(InvalidArgumentError::NonFinite {
            parameter: "look_ahead",
        }
        .into());
    }
    if look_ahead <= 0.0 || look_ahead >= 1.0 {
        return Err(InvalidArgumentError::OutOfRange {
            parameter: "look_ahead",
            value: look_ahead,
            min: 0.0,
            max: 1.0,
        }
        .into());
    }
    Ok(())
}
