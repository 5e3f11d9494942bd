pub mod app;
pub mod camera;
pub mod color;
pub mod constants;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod tween;
pub mod viewport;

pub use app::*;
pub use camera::*;
pub use color::*;
pub use constants::*;
pub use geometry::*;
pub use input::*;
pub use scene::*;
pub use tween::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static TOON_WGSL: &str = include_str!("../../shaders/toon.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
