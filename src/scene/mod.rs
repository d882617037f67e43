pub mod config;

pub use config::{
    BloomParams, CameraParams, ControlsParams, DecorationParams, FogParams, LightParams,
    SceneConfig, TubeParams,
};

use rand::Rng;
use tracing::debug;

use crate::animation::{CameraPose, PerspectiveCamera};
use crate::error::Result;
use crate::geometry::CurveModel;
use crate::math::{Point3, Vector3};
use crate::operations::sampling::{PathSampler, PlacedObject};
use crate::tessellation::Polyline;

/// Everything a renderer needs to draw one frame.
///
/// Built once; afterwards only the camera pose and viewport change.
#[derive(Debug, Clone)]
pub struct Scene {
    config: SceneConfig,
    curve: CurveModel,
    debug_line: Polyline,
    decorations: Vec<PlacedObject>,
    camera: PerspectiveCamera,
    pose: CameraPose,
}

impl Scene {
    /// Builds the curve, debug line, decorations and camera from `config`.
    ///
    /// `rng` drives decoration placement; seed it for a reproducible layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the control
    /// points do not form a closed curve.
    pub fn build<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let curve =
            CurveModel::with_curve_type(config.control_points.clone(), config.curve_type)?;
        let debug_line = curve.points(config.debug_line_divisions)?;

        let params = &config.decorations;
        let decorations = PathSampler::new(&curve)
            .with_lateral_offset(params.lateral_offset)
            .with_rotation_mode(params.rotation_mode)
            .sample(params.count, params.jitter, rng)?;

        let camera = PerspectiveCamera::new(
            config.camera.fov_deg,
            1.0,
            config.camera.near,
            config.camera.far,
        )?;
        // Looks down -Z until the first frame moves it onto the curve.
        let start = Point3::new(0.0, 0.0, config.camera.initial_z);
        let pose = CameraPose::new(start, start - Vector3::z());

        debug!(
            decorations = decorations.len(),
            curve_length = curve.length(),
            "built scene"
        );

        Ok(Self {
            config: config.clone(),
            curve,
            debug_line,
            decorations,
            camera,
            pose,
        })
    }

    /// Returns the configuration the scene was built from.
    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Returns the path the camera flies along.
    #[must_use]
    pub fn curve(&self) -> &CurveModel {
        &self.curve
    }

    /// Returns the raw spline sampled as a polyline.
    #[must_use]
    pub fn debug_line(&self) -> &Polyline {
        &self.debug_line
    }

    /// Returns the decorations in placement order.
    #[must_use]
    pub fn decorations(&self) -> &[PlacedObject] {
        &self.decorations
    }

    /// Returns the projection settings.
    #[must_use]
    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    /// Returns the current camera pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Replaces the camera pose.
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.pose = pose;
    }

    /// Updates the projection for a new viewport size.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.camera.resize(width, height)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{InvalidCurveError, TubeflyError};
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_scene_builds() {
        let scene = Scene::build(&SceneConfig::default(), &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(scene.decorations().len(), 55);
        assert_eq!(scene.debug_line().points.len(), 101);
        assert_relative_eq!(scene.pose().position, Point3::new(0.0, 0.0, 5.0));
        assert!(scene.curve().length() > 0.0);
    }

    #[test]
    fn layout_is_reproducible_per_seed() {
        let config = SceneConfig::default();
        let a = Scene::build(&config, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = Scene::build(&config, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a.decorations(), b.decorations());
    }

    #[test]
    fn bad_control_points_surface_curve_error() {
        let config = SceneConfig {
            control_points: vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)],
            ..SceneConfig::default()
        };
        let err = Scene::build(&config, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(
            err,
            TubeflyError::InvalidCurve(InvalidCurveError::TooFewPoints { count: 2 })
        ));
    }

    #[test]
    fn resize_updates_projection() {
        let mut scene =
            Scene::build(&SceneConfig::default(), &mut StdRng::seed_from_u64(1)).unwrap();
        scene.resize(1280, 720).unwrap();
        assert_relative_eq!(scene.camera().aspect(), 1280.0 / 720.0);
        assert!(scene.resize(0, 0).is_err());
    }
}
