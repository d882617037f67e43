mod camera;
mod clock;
mod fly_through;
mod frame_loop;

pub use camera::PerspectiveCamera;
pub use clock::{FixedStepClock, MonotonicClock, TimeSource};
pub use fly_through::{CameraPose, FlyThroughDriver, FlyThroughParams};
pub use frame_loop::{Controls, FrameLoop, NoControls, RenderBackend};
