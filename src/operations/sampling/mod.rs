mod path_sampler;
mod placed_object;

pub use path_sampler::{LateralOffset, PathSampler, RotationMode};
pub use placed_object::PlacedObject;
