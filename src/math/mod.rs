pub mod color;

pub use color::Rgb;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Wraps a normalized curve position into `[0, 1)`.
///
/// Uses Euclidean modulo, so `1.0` maps to `0.0` and `-0.25` to `0.75`.
/// Non-finite input maps to `0.0`.
#[must_use]
pub fn wrap_unit(u: f64) -> f64 {
    if !u.is_finite() {
        return 0.0;
    }
    let wrapped = u.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
