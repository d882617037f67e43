//! Tubefly headless fly-through.
//!
//! Builds the default tunnel scene and flies the camera around it for one
//! lap at 60 Hz, logging where the camera is instead of drawing it.
//!
//! Usage:
//! ```text
//! cargo run --example flythrough            # random decoration layout
//! cargo run --example flythrough -- 42      # seeded layout
//! RUST_LOG=tubefly=trace cargo run --example flythrough
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tubefly::animation::{FixedStepClock, RenderBackend};
use tubefly::error::BackendError;
use tubefly::{FrameLoop, Scene, SceneConfig, TubeflyError};

/// Logs the camera once per simulated second.
struct LogBackend {
    frames: u64,
}

impl RenderBackend for LogBackend {
    fn render(&mut self, scene: &Scene) -> Result<(), BackendError> {
        if self.frames % 60 == 0 {
            let pose = scene.pose();
            let view = pose.view_matrix().map_err(BackendError::new)?;
            info!(
                frame = self.frames,
                x = pose.position.x,
                y = pose.position.y,
                z = pose.position.z,
                finite = view.iter().all(|v| v.is_finite()),
                "camera"
            );
        }
        self.frames += 1;
        Ok(())
    }
}

fn main() -> Result<(), TubeflyError> {
    // Default: WARN for everything, INFO for the demo and the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=tubefly=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("flythrough=info".parse().unwrap_or_default())
        .add_directive("tubefly=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut rng = match std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = SceneConfig::default();
    let mut scene = Scene::build(&config, &mut rng)?;
    scene.resize(1920, 1080)?;

    let lap_frames = (config.fly_through.lap_ms() / (1000.0 / 60.0)).ceil();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lap_frames = lap_frames as usize;

    let mut frame_loop = FrameLoop::new(scene, LogBackend { frames: 0 });
    frame_loop.run(&mut FixedStepClock::sixty_hz(), lap_frames)?;
    info!(frames = frame_loop.frames(), "lap complete");
    Ok(())
}
