pub mod animation;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod scene;
pub mod tessellation;

pub use animation::{CameraPose, FlyThroughDriver, FlyThroughParams, FrameLoop};
pub use error::{InvalidArgumentError, InvalidCurveError, Result, TubeflyError};
pub use geometry::CurveModel;
pub use operations::sampling::{PathSampler, PlacedObject};
pub use scene::{Scene, SceneConfig};
