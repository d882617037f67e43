use std::f64::consts::TAU;

use rand::Rng;
use tracing::debug;

use crate::error::{ensure_non_negative, InvalidArgumentError, Result};
use crate::geometry::CurveModel;
use crate::math::{wrap_unit, Vector3};

use super::PlacedObject;

/// Bounds of the random sideways offset applied to X and Z.
///
/// Each axis draws independently from `[min, max)`. Defaults to no offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LateralOffset {
    min: f64,
    max: f64,
}

impl LateralOffset {
    /// No sideways offset.
    pub const NONE: Self = Self { min: 0.0, max: 0.0 };

    /// `[-0.4, 0.6)`, slightly biased towards +X/+Z. Used by the default scene.
    pub const SCATTER: Self = Self {
        min: -0.4,
        max: 0.6,
    };

    /// Creates offset bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite or `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() {
            return Err(InvalidArgumentError::NonFinite {
                parameter: "lateral_offset.min",
            }
            .into());
        }
        if !max.is_finite() {
            return Err(InvalidArgumentError::NonFinite {
                parameter: "lateral_offset.max",
            }
            .into());
        }
        if min > max {
            return Err(InvalidArgumentError::Invalid(format!(
                "lateral offset min {min} exceeds max {max}"
            ))
            .into());
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the largest possible absolute offset on one axis.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.min.abs().max(self.max.abs())
    }

    fn apply(&self, r: f64) -> f64 {
        self.min + (self.max - self.min) * r
    }
}

/// How uniform `[0, 1)` draws become rotation angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    /// Draws are used directly as radians, giving rotations of at most ~57°.
    #[default]
    Raw,
    /// Draws are scaled by 2π for fully random orientations.
    FullTurn,
}

impl RotationMode {
    /// Returns the factor applied to each uniform draw.
    #[must_use]
    pub fn scale(self) -> f64 {
        match self {
            Self::Raw => 1.0,
            Self::FullTurn => TAU,
        }
    }
}

/// Scatters decorations along a closed curve.
///
/// Object `i` of `count` sits near `u = i / count`, pushed forward along the
/// curve by up to `jitter` and sideways in X and Z by the lateral offset.
/// Y is left alone so objects stay level with the path.
pub struct PathSampler<'a> {
    curve: &'a CurveModel,
    lateral_offset: LateralOffset,
    rotation_mode: RotationMode,
}

impl<'a> PathSampler<'a> {
    /// Creates a sampler with no lateral offset and raw rotations.
    #[must_use]
    pub fn new(curve: &'a CurveModel) -> Self {
        Self {
            curve,
            lateral_offset: LateralOffset::NONE,
            rotation_mode: RotationMode::default(),
        }
    }

    /// Sets the sideways offset bounds.
    #[must_use]
    pub fn with_lateral_offset(mut self, lateral_offset: LateralOffset) -> Self {
        self.lateral_offset = lateral_offset;
        self
    }

    /// Sets how rotation angles are drawn.
    #[must_use]
    pub fn with_rotation_mode(mut self, rotation_mode: RotationMode) -> Self {
        self.rotation_mode = rotation_mode;
        self
    }

    /// Places `count` objects along the curve.
    ///
    /// Every call draws fresh values from `rng`; seed it for reproducible
    /// output. Per object, draws are taken in a fixed order: along-curve
    /// jitter, X offset, Z offset, X/Y/Z rotation, hue.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or `jitter` is negative or not finite.
    #[allow(clippy::cast_precision_loss)]
    pub fn sample<R: Rng + ?Sized>(
        &self,
        count: usize,
        jitter: f64,
        rng: &mut R,
    ) -> Result<Vec<PlacedObject>> {
        if count == 0 {
            return Err(InvalidArgumentError::Zero { parameter: "count" }.into());
        }
        ensure_non_negative("jitter", jitter)?;

        let rotation_scale = self.rotation_mode.scale();
        let objects: Vec<PlacedObject> = (0..count)
            .map(|i| {
                let u = wrap_unit(i as f64 / count as f64 + rng.gen::<f64>() * jitter);
                let mut position = self.curve.point_at(u);
                position.x += self.lateral_offset.apply(rng.gen());
                position.z += self.lateral_offset.apply(rng.gen());

                let rotation = Vector3::new(rng.gen(), rng.gen(), rng.gen()) * rotation_scale;
                let hue = rng.gen();

                PlacedObject {
                    position,
                    rotation,
                    hue,
                    u,
                }
            })
            .collect();

        debug!(
            count,
            jitter,
            rotation_mode = ?self.rotation_mode,
            "sampled decorations along curve"
        );
        Ok(objects)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TubeflyError;
    use crate::geometry::curve_model::tests::octagon;
    use crate::math::Point3;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn circle() -> CurveModel {
        CurveModel::new(octagon()).unwrap()
    }

    #[test]
    fn zero_jitter_spaces_evenly() {
        let curve = circle();
        let mut rng = StdRng::seed_from_u64(7);
        let objects = PathSampler::new(&curve)
            .with_lateral_offset(LateralOffset::NONE)
            .sample(4, 0.0, &mut rng)
            .unwrap();

        assert_eq!(objects.len(), 4);
        for (i, (object, expected_u)) in objects.iter().zip([0.0, 0.25, 0.5, 0.75]).enumerate() {
            assert_relative_eq!(object.u, expected_u, epsilon = 1e-12);
            assert_relative_eq!(object.position, curve.point_at(expected_u), epsilon = 1e-12);
            // On the octagon these are every other control point.
            assert_relative_eq!(object.position, octagon()[i * 2], epsilon = 1e-6);
        }
    }

    #[test]
    fn single_object_sits_at_start() {
        let curve = circle();
        let sample = |seed| {
            PathSampler::new(&curve)
                .with_lateral_offset(LateralOffset::NONE)
                .sample(1, 0.0, &mut StdRng::seed_from_u64(seed))
                .unwrap()
        };
        let first = sample(3);
        assert_eq!(first.len(), 1);
        assert_relative_eq!(first[0].position, curve.point_at(0.0), epsilon = 1e-12);
        assert_eq!(first, sample(3));
    }

    #[test]
    fn plain_sampler_without_jitter_stays_on_curve() {
        let curve = circle();
        let objects = PathSampler::new(&curve)
            .sample(1, 0.0, &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(objects.len(), 1);
        assert!(nalgebra::distance(&objects[0].position, &curve.point_at(0.0)) < 1e-9);

        let objects = PathSampler::new(&curve)
            .sample(8, 0.0, &mut StdRng::seed_from_u64(3))
            .unwrap();
        for (object, expected) in objects.iter().zip(octagon()) {
            assert_relative_eq!(object.position, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn same_seed_reproduces_layout() {
        let curve = circle();
        let sampler = PathSampler::new(&curve).with_lateral_offset(LateralOffset::SCATTER);
        let a = sampler.sample(55, 0.1, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = sampler.sample(55, 0.1, &mut StdRng::seed_from_u64(42)).unwrap();
        let c = sampler.sample(55, 0.1, &mut StdRng::seed_from_u64(43)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn jitter_pushes_forward_within_bound() {
        let curve = circle();
        let objects = PathSampler::new(&curve)
            .with_lateral_offset(LateralOffset::NONE)
            .sample(10, 0.05, &mut StdRng::seed_from_u64(1))
            .unwrap();
        for (i, object) in objects.iter().enumerate() {
            let base = f64::from(u32::try_from(i).unwrap()) / 10.0;
            let ahead = (object.u - base).rem_euclid(1.0);
            assert!(ahead < 0.05 + 1e-12, "object {i} moved {ahead}");
            assert!((0.0..1.0).contains(&object.u));
        }
    }

    #[test]
    fn lateral_offset_moves_x_and_z_only() {
        let curve = circle();
        let offset = LateralOffset::SCATTER;
        let objects = PathSampler::new(&curve)
            .with_lateral_offset(offset)
            .sample(20, 0.1, &mut StdRng::seed_from_u64(9))
            .unwrap();
        for object in &objects {
            let on_curve: Point3 = curve.point_at(object.u);
            let dx = object.position.x - on_curve.x;
            let dz = object.position.z - on_curve.z;
            assert!((offset.min()..offset.max()).contains(&dx));
            assert!((offset.min()..offset.max()).contains(&dz));
            assert_relative_eq!(object.position.y, on_curve.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn raw_rotations_stay_below_one_radian() {
        let curve = circle();
        let objects = PathSampler::new(&curve)
            .sample(30, 0.1, &mut StdRng::seed_from_u64(5))
            .unwrap();
        for object in &objects {
            assert!(object.rotation.iter().all(|a| (0.0..1.0).contains(a)));
            assert!((0.0..1.0).contains(&object.hue));
        }
    }

    #[test]
    fn full_turn_rotations_scale_by_tau() {
        let curve = circle();
        let raw = PathSampler::new(&curve)
            .sample(30, 0.1, &mut StdRng::seed_from_u64(5))
            .unwrap();
        let full = PathSampler::new(&curve)
            .with_rotation_mode(RotationMode::FullTurn)
            .sample(30, 0.1, &mut StdRng::seed_from_u64(5))
            .unwrap();
        for (r, f) in raw.iter().zip(&full) {
            assert_relative_eq!(f.rotation, r.rotation * TAU, epsilon = 1e-12);
            assert_relative_eq!(f.position, r.position, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_count_rejected() {
        let curve = circle();
        let err = PathSampler::new(&curve)
            .sample(0, 0.1, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(
            err,
            TubeflyError::InvalidArgument(InvalidArgumentError::Zero { parameter: "count" })
        ));
    }

    #[test]
    fn negative_jitter_rejected() {
        let curve = circle();
        let sampler = PathSampler::new(&curve);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(sampler.sample(4, -0.1, &mut rng).is_err());
        assert!(sampler.sample(4, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn inverted_offset_bounds_rejected() {
        assert!(LateralOffset::new(0.5, -0.5).is_err());
        assert!(LateralOffset::new(f64::NAN, 0.5).is_err());
        let offset = LateralOffset::new(-0.4, 0.6).unwrap();
        assert_eq!(offset, LateralOffset::SCATTER);
        assert_eq!(LateralOffset::default(), LateralOffset::NONE);
        assert_relative_eq!(offset.magnitude(), 0.6);
    }
}
