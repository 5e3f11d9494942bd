// The main crate is wasm-only, so the pure-Rust core modules are included
// directly and tested on the host.
#![allow(dead_code)]

pub mod core {
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod color {
        include!("../../src/core/color.rs");
    }
    pub mod viewport {
        include!("../../src/core/viewport.rs");
    }
    pub mod input {
        include!("../../src/core/input.rs");
    }
    pub mod tween {
        include!("../../src/core/tween.rs");
    }
    pub mod camera {
        include!("../../src/core/camera.rs");
    }
    pub mod geometry {
        include!("../../src/core/geometry.rs");
    }
    pub mod scene {
        include!("../../src/core/scene.rs");
    }
    pub mod app {
        include!("../../src/core/app.rs");
    }

    pub use app::*;
    pub use camera::*;
    pub use color::*;
    pub use constants::*;
    pub use geometry::*;
    pub use input::*;
    pub use scene::*;
    pub use tween::*;
    pub use viewport::*;
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
