use tracing::debug;

use crate::animation::FlyThroughParams;
use crate::error::{ensure_non_negative, ensure_positive, InvalidArgumentError, Result};
use crate::geometry::CurveType;
use crate::math::{Point3, Rgb};
use crate::operations::sampling::{LateralOffset, RotationMode};

/// Tube mesh settings, consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeParams {
    /// Segments along the path.
    pub tubular_segments: usize,
    /// Tube radius in world units.
    pub radius: f64,
    /// Segments around the circumference.
    pub radial_segments: usize,
    /// Whether the tube joins back onto itself.
    pub closed: bool,
    /// Minimum face angle, in degrees, for an edge to be drawn.
    pub edge_threshold_deg: f64,
    /// Edge line color as `0xRRGGBB`.
    pub color: u32,
}

impl Default for TubeParams {
    fn default() -> Self {
        Self {
            tubular_segments: 222,
            radius: 0.65,
            radial_segments: 16,
            closed: true,
            edge_threshold_deg: 0.2,
            color: 0xff_00_00,
        }
    }
}

impl TubeParams {
    /// Returns the edge line color.
    #[must_use]
    pub fn rgb(&self) -> Rgb {
        Rgb::from_hex(self.color)
    }

    fn validate(&self) -> Result<()> {
        ensure_nonzero("tube.tubular_segments", self.tubular_segments)?;
        ensure_nonzero("tube.radial_segments", self.radial_segments)?;
        ensure_positive("tube.radius", self.radius)?;
        ensure_non_negative("tube.edge_threshold_deg", self.edge_threshold_deg)
    }
}

/// Decorative wireframe boxes scattered along the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorationParams {
    pub count: usize,
    /// Box edge length.
    pub box_size: f64,
    /// Maximum forward shift along the curve, as a fraction of a lap.
    pub jitter: f64,
    pub lateral_offset: LateralOffset,
    pub rotation_mode: RotationMode,
    /// Minimum face angle, in degrees, for a box edge to be drawn.
    pub edge_threshold_deg: f64,
}

impl Default for DecorationParams {
    fn default() -> Self {
        Self {
            count: 55,
            box_size: 0.075,
            jitter: 0.1,
            lateral_offset: LateralOffset::SCATTER,
            rotation_mode: RotationMode::Raw,
            edge_threshold_deg: 0.2,
        }
    }
}

impl DecorationParams {
    fn validate(&self) -> Result<()> {
        ensure_nonzero("decorations.count", self.count)?;
        ensure_positive("decorations.box_size", self.box_size)?;
        ensure_non_negative("decorations.jitter", self.jitter)?;
        ensure_non_negative("decorations.edge_threshold_deg", self.edge_threshold_deg)
    }
}

/// Perspective camera settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParams {
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    pub near: f64,
    pub far: f64,
    /// Starting distance along +Z before the first frame.
    pub initial_z: f64,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            initial_z: 5.0,
        }
    }
}

/// Orbit controls settings, consumed by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlsParams {
    pub enable_damping: bool,
    pub damping_factor: f64,
}

impl Default for ControlsParams {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.03,
        }
    }
}

/// Bloom post-processing settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomParams {
    /// Glow intensity.
    pub strength: f64,
    /// Blur spread in `[0, 1]`.
    pub radius: f64,
    /// Luminance above which pixels bloom.
    pub threshold: f64,
}

impl Default for BloomParams {
    fn default() -> Self {
        Self {
            strength: 3.5,
            radius: 0.0,
            threshold: 0.002,
        }
    }
}

impl BloomParams {
    fn validate(&self) -> Result<()> {
        ensure_non_negative("bloom.strength", self.strength)?;
        ensure_non_negative("bloom.threshold", self.threshold)?;
        ensure_non_negative("bloom.radius", self.radius)?;
        if self.radius > 1.0 {
            return Err(InvalidArgumentError::OutOfRange {
                parameter: "bloom.radius",
                value: self.radius,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        Ok(())
    }
}

/// Exponential fog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogParams {
    pub color: u32,
    pub density: f64,
}

impl Default for FogParams {
    fn default() -> Self {
        Self {
            color: 0x00_00_00,
            density: 0.4,
        }
    }
}

/// Hemisphere light colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightParams {
    pub sky_color: u32,
    pub ground_color: u32,
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            sky_color: 0xff_ff_ff,
            ground_color: 0x44_44_44,
        }
    }
}

/// Every tunable of the fly-through scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Control points of the closed path, in traversal order.
    pub control_points: Vec<Point3>,
    pub curve_type: CurveType,
    /// Segments in the debug polyline drawn along the raw spline.
    pub debug_line_divisions: usize,
    pub tube: TubeParams,
    pub decorations: DecorationParams,
    pub fly_through: FlyThroughParams,
    pub camera: CameraParams,
    pub controls: ControlsParams,
    pub bloom: BloomParams,
    pub fog: FogParams,
    pub light: LightParams,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            control_points: default_control_points(),
            curve_type: CurveType::Centripetal,
            debug_line_divisions: 100,
            tube: TubeParams::default(),
            decorations: DecorationParams::default(),
            fly_through: FlyThroughParams::default(),
            camera: CameraParams::default(),
            controls: ControlsParams::default(),
            bloom: BloomParams::default(),
            fog: FogParams::default(),
            light: LightParams::default(),
        }
    }
}

impl SceneConfig {
    /// Checks every numeric setting, reporting the first violation.
    ///
    /// Curve and camera settings are checked when the scene builds them.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        ensure_nonzero("debug_line_divisions", self.debug_line_divisions)?;
        self.tube.validate()?;
        self.decorations.validate()?;
        self.fly_through.validate()?;
        ensure_non_negative("controls.damping_factor", self.controls.damping_factor)?;
        self.bloom.validate()?;
        ensure_non_negative("fog.density", self.fog.density)?;
        debug!("scene config validated");
        Ok(())
    }
}

/// A winding closed loop around the origin, roughly 20 units across.
#[must_use]
pub fn default_control_points() -> Vec<Point3> {
    [
        (10.0, 0.0, 0.0),
        (7.5, 1.5, 6.0),
        (2.0, -0.5, 9.5),
        (-4.0, 2.0, 8.0),
        (-9.0, 0.5, 4.5),
        (-10.5, -1.5, -1.0),
        (-7.0, 1.0, -6.5),
        (-1.5, 3.0, -9.0),
        (4.0, 0.5, -8.5),
        (8.5, -2.0, -5.0),
        (11.0, 0.5, -2.0),
    ]
    .into_iter()
    .map(|(x, y, z)| Point3::new(x, y, z))
    .collect()
}

fn ensure_nonzero(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(InvalidArgumentError::Zero { parameter }.into());
    }
    Ok(())
}
