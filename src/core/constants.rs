// Scene layout and motion tuning constants.

// Sections
pub const SECTION_COUNT: usize = 3;
pub const SECTION_SPACING: f32 = 4.0; // world units between section meshes
pub const SECTION_OFFSET_X: f32 = 2.0; // alternates sign per section

// Continuous mesh spin (radians per second)
pub const SPIN_RATE_X: f32 = 0.1;
pub const SPIN_RATE_Y: f32 = 0.12;

// Section-enter kick
pub const KICK_DELTA: [f32; 3] = [6.0, 3.0, 1.5];
pub const KICK_DURATION_SEC: f32 = 1.5;

// Parallax
pub const PARALLAX_AMPLITUDE: f32 = 0.5;
pub const PARALLAX_EASING_PER_SEC: f32 = 5.0;

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 35.0;
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Light
pub const LIGHT_DIRECTION: [f32; 3] = [1.0, 1.0, 0.0];
pub const LIGHT_INTENSITY: f32 = 3.0;
pub const TOON_BANDS: [f32; 3] = [0.16, 0.5, 1.0]; // dark, mid, lit

// Particles
pub const PARTICLE_COUNT: usize = 500;
pub const PARTICLE_SIZE: f32 = 0.03;
pub const PARTICLE_SPREAD: f32 = 10.0; // x/z extent of the field
pub const PARTICLE_SEED: u64 = 42;

// Material
pub const DEFAULT_MATERIAL_COLOR: &str = "#f5402c";
