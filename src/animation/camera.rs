use nalgebra::Perspective3;

use crate::error::{ensure_positive, InvalidArgumentError, Result};
use crate::math::Matrix4;

/// A perspective projection that follows the viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    fov_deg: f64,
    near: f64,
    far: f64,
    aspect: f64,
}

impl PerspectiveCamera {
    /// Creates a camera with a vertical field of view in degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if the field of view is outside `(0, 180)`, a clip
    /// distance is not positive, `far <= near`, or the aspect ratio is not
    /// positive.
    pub fn new(fov_deg: f64, aspect: f64, near: f64, far: f64) -> Result<Self> {
        ensure_positive("fov_deg", fov_deg)?;
        if fov_deg >= 180.0 {
            return Err(InvalidArgumentError::OutOfRange {
                parameter: "fov_deg",
                value: fov_deg,
                min: 0.0,
                max: 180.0,
            }
            .into());
        }
        ensure_positive("aspect", aspect)?;
        ensure_positive("near", near)?;
        ensure_positive("far", far)?;
        if far <= near {
            return Err(InvalidArgumentError::Invalid(format!(
                "far plane {far} must lie beyond near plane {near}"
            ))
            .into());
        }
        Ok(Self {
            fov_deg,
            near,
            far,
            aspect,
        })
    }

    /// Returns the vertical field of view in degrees.
    #[must_use]
    pub fn fov_deg(&self) -> f64 {
        self.fov_deg
    }

    /// Returns the width / height ratio.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    /// Returns the near and far clip distances.
    #[must_use]
    pub fn clip(&self) -> (f64, f64) {
        (self.near, self.far)
    }

    /// Updates the aspect ratio for a new viewport size in pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 {
            return Err(InvalidArgumentError::Zero { parameter: "width" }.into());
        }
        if height == 0 {
            return Err(InvalidArgumentError::Zero { parameter: "height" }.into());
        }
        self.aspect = f64::from(width) / f64::from(height);
        Ok(())
    }

    /// Returns the OpenGL-style projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Matrix4 {
        Perspective3::new(self.aspect, self.fov_deg.to_radians(), self.near, self.far)
            .to_homogeneous()
    }
}
