use tracing::trace;

use crate::error::{BackendError, Result};
use crate::scene::Scene;

use super::{CameraPose, FlyThroughDriver, TimeSource};

/// Draws a scene. Implemented by the rendering collaborator.
pub trait RenderBackend {
    /// Renders `scene` from its current camera pose.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame could not be drawn.
    fn render(&mut self, scene: &Scene) -> std::result::Result<(), BackendError>;
}

/// User camera controls, updated after every frame.
pub trait Controls {
    /// Applies pending input, called once after each rendered frame.
    fn update(&mut self);
}

/// Controls that do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoControls;

impl Controls for NoControls {
    fn update(&mut self) {}
}

/// Drives a scene one externally scheduled tick at a time.
///
/// Each tick poses the camera, renders and then updates controls. Stopping
/// is simply not calling [`FrameLoop::tick`] again.
pub struct FrameLoop<R, C = NoControls> {
    scene: Scene,
    renderer: R,
    controls: C,
    frames: u64,
}

impl<R: RenderBackend> FrameLoop<R> {
    /// Creates a loop without user controls.
    #[must_use]
    pub fn new(scene: Scene, renderer: R) -> Self {
        Self::with_controls(scene, renderer, NoControls)
    }
}

impl<R: RenderBackend, C: Controls> FrameLoop<R, C> {
    /// Creates a loop with user controls.
    #[must_use]
    pub fn with_controls(scene: Scene, renderer: R, controls: C) -> Self {
        Self {
            scene,
            renderer,
            controls,
            frames: 0,
        }
    }

    /// Advances to frame time `timestamp_ms`, returning the pose used.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp is negative or the renderer fails.
    pub fn tick(&mut self, timestamp_ms: f64) -> Result<CameraPose> {
        let pose = FlyThroughDriver::new(self.scene.curve())
            .pose_for_frame(timestamp_ms, &self.scene.config().fly_through)?;
        self.scene.set_pose(pose);
        self.renderer.render(&self.scene)?;
        self.controls.update();
        self.frames += 1;
        trace!(frame = self.frames, timestamp_ms, "rendered frame");
        Ok(pose)
    }

    /// Runs `frames` ticks, reading the clock once per tick.
    ///
    /// # Errors
    ///
    /// Stops at the first failing tick and returns its error.
    pub fn run<T: TimeSource + ?Sized>(&mut self, clock: &mut T, frames: usize) -> Result<()> {
        for _ in 0..frames {
            let now = clock.now_ms();
            self.tick(now)?;
        }
        Ok(())
    }

    /// Returns the number of frames rendered.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns the scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Returns the scene for viewport changes between ticks.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Returns the renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Consumes the loop, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> (Scene, R, C) {
        (self.scene, self.renderer, self.controls)
    }
}
