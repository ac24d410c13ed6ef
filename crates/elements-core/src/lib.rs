pub mod camera;
pub mod clock;
pub mod color;
pub mod constants;
pub mod error;
pub mod mapper;
pub mod particles;
pub mod scene;
pub mod segment;
pub mod transition;
pub mod trigger;
pub mod tween;
pub mod viewport;
pub mod visibility;

pub static SCENE_WGSL: &str = include_str!("../../../shaders/scene.wgsl");

pub use camera::*;
pub use clock::*;
pub use color::*;
pub use error::*;
pub use mapper::*;
pub use particles::*;
pub use scene::*;
pub use segment::*;
pub use transition::{apply_transition, depth_for, Targets};
pub use trigger::*;
pub use tween::*;
pub use viewport::*;
pub use visibility::*;
