use super::color::Color;
use super::constants::*;
use super::geometry::{particle_field, Shape};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Startup parameters for the scene.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub section_spacing: f32,
    pub section_count: usize,
    pub particle_count: usize,
    pub particle_seed: u64,
    pub material_color: Color,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            section_spacing: SECTION_SPACING,
            section_count: SECTION_COUNT,
            particle_count: PARTICLE_COUNT,
            particle_seed: PARTICLE_SEED,
            material_color: Color::from_hex(DEFAULT_MATERIAL_COLOR)
                .unwrap_or(Color::new(245, 64, 44)),
        }
    }
}

/// One page section: a mesh at a fixed slot, spinning in place.
#[derive(Clone, Debug)]
pub struct Section {
    pub shape: Shape,
    pub position: Vec3,
    /// Euler angles (XYZ order), radians.
    pub rotation: Vec3,
}

impl Section {
    pub fn model_matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(rot, self.position)
    }

    /// Continuous spin; linear in `dt_sec`.
    #[inline]
    pub fn spin(&mut self, dt_sec: f32) {
        self.rotation.x += dt_sec * SPIN_RATE_X;
        self.rotation.y += dt_sec * SPIN_RATE_Y;
    }
}

/// Build the section list: shapes cycle through `Shape::SECTIONS`, meshes
/// step down by `spacing` and alternate left/right.
pub fn build_sections(count: usize, spacing: f32) -> Vec<Section> {
    (0..count)
        .map(|i| {
            let side = if i % 2 == 0 { 1.0 } else { -1.0 };
            Section {
                shape: Shape::SECTIONS[i % Shape::SECTIONS.len()],
                position: Vec3::new(side * SECTION_OFFSET_X, -(i as f32) * spacing, 0.0),
                rotation: Vec3::ZERO,
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToonMaterial {
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointsMaterial {
    pub color: Color,
    pub size: f32,
    pub size_attenuation: bool,
}

/// The two materials whose color is edited together.
#[derive(Clone, Debug)]
pub struct Materials {
    pub toon: ToonMaterial,
    pub particles: PointsMaterial,
    revision: u64,
}

impl Materials {
    pub fn new(color: Color) -> Self {
        Self {
            toon: ToonMaterial { color },
            particles: PointsMaterial {
                color,
                size: PARTICLE_SIZE,
                size_attenuation: true,
            },
            revision: 0,
        }
    }

    /// Assign `color` to both materials.
    pub fn set_color(&mut self, color: Color) {
        self.toon.color = color;
        self.particles.color = color;
        self.revision += 1;
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.toon.color
    }

    /// Bumped on every edit; lets the renderer skip redundant uploads.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Static scene content built once at startup.
#[derive(Clone, Debug)]
pub struct SceneContent {
    pub sections: Vec<Section>,
    pub particles: Vec<[f32; 3]>,
    pub materials: Materials,
}

impl SceneContent {
    pub fn new(params: &SceneParams) -> Self {
        Self {
            sections: build_sections(params.section_count, params.section_spacing),
            particles: particle_field(
                params.particle_count,
                PARTICLE_SPREAD,
                params.section_spacing,
                params.section_count,
                params.particle_seed,
            ),
            materials: Materials::new(params.material_color),
        }
    }
}
