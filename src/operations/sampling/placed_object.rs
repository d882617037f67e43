use crate::math::{Point3, Rgb, Vector3};

/// Saturation used for decoration colors.
pub const DECORATION_SATURATION: f64 = 1.0;

/// Lightness used for decoration colors.
pub const DECORATION_LIGHTNESS: f64 = 0.5;

/// A decoration placed once along the curve. Never mutated after sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedObject {
    /// World position.
    pub position: Point3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vector3,
    /// Hue in `[0, 1)`.
    pub hue: f64,
    /// Normalized curve position the object was sampled from, before lateral offset.
    pub u: f64,
}

impl PlacedObject {
    /// Returns the fully saturated, mid-lightness color for this object's hue.
    #[must_use]
    pub fn color(&self) -> Rgb {
        Rgb::from_hsl(self.hue, DECORATION_SATURATION, DECORATION_LIGHTNESS)
    }
}
