use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed triangle list with counter-clockwise front faces.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn push(&mut self, position: Vec3, normal: Vec3) {
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        });
    }

    /// Emit the two triangles of the quad `a b c d` as (a,b,d) and (b,c,d).
    fn quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Shapes placed in the page sections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        p: u32,
        q: u32,
    },
}

impl Shape {
    /// Section shapes in page order.
    pub const SECTIONS: [Shape; 3] = [
        Shape::Torus {
            radius: 1.0,
            tube: 0.4,
            radial_segments: 16,
            tubular_segments: 60,
        },
        Shape::Cone {
            radius: 1.0,
            height: 2.0,
            radial_segments: 32,
        },
        Shape::TorusKnot {
            radius: 0.8,
            tube: 0.35,
            tubular_segments: 100,
            radial_segments: 16,
            p: 2,
            q: 3,
        },
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Torus { .. } => "torus",
            Shape::Cone { .. } => "cone",
            Shape::TorusKnot { .. } => "torus_knot",
        }
    }

    pub fn build(&self) -> MeshData {
        match *self {
            Shape::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => torus(radius, tube, radial_segments, tubular_segments),
            Shape::Cone {
                radius,
                height,
                radial_segments,
            } => cone(radius, height, radial_segments),
            Shape::TorusKnot {
                radius,
                tube,
                tubular_segments,
                radial_segments,
                p,
                q,
            } => torus_knot(radius, tube, tubular_segments, radial_segments, p, q),
        }
    }
}

pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let radial = radial_segments.max(2);
    let tubular = tubular_segments.max(3);
    let mut mesh = MeshData::default();

    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let ring = radius + tube * v.cos();
            let p = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.push(p, p - center);
        }
    }

    let row = tubular + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.quad(a, b, c, d);
        }
    }
    mesh
}

/// Closed cone with its apex up, centered on the origin.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let radial = radial_segments.max(3);
    let half = height / 2.0;
    let slope = radius / height;
    let mut mesh = MeshData::default();

    // Side: two rings (apex, base); apex ring collapses to a point but keeps
    // per-column normals.
    for ring in 0..=1u32 {
        let r = ring as f32 * radius;
        let y = half - ring as f32 * height;
        for x in 0..=radial {
            let theta = x as f32 / radial as f32 * TAU;
            let (s, c) = theta.sin_cos();
            mesh.push(Vec3::new(r * s, y, r * c), Vec3::new(s, slope, c));
        }
    }
    let row = radial + 1;
    for x in 0..radial {
        let a = x;
        let b = row + x;
        let c = row + x + 1;
        let d = x + 1;
        mesh.quad(a, b, c, d);
    }

    // Base cap, facing -Y.
    let center_start = mesh.vertices.len() as u32;
    for _ in 0..radial {
        mesh.push(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y);
    }
    let ring_start = mesh.vertices.len() as u32;
    for x in 0..=radial {
        let theta = x as f32 / radial as f32 * TAU;
        let (s, c) = theta.sin_cos();
        mesh.push(Vec3::new(radius * s, -half, radius * c), Vec3::NEG_Y);
    }
    for x in 0..radial {
        let c = center_start + x;
        let i = ring_start + x;
        mesh.indices.extend_from_slice(&[i + 1, i, c]);
    }
    mesh
}

pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let tubular = tubular_segments.max(3);
    let radial = radial_segments.max(3);
    let (p, q) = (p.max(1) as f32, q as f32);
    let mut mesh = MeshData::default();

    let curve = |u: f32| {
        let q_over_p = q / p * u;
        let cs = q_over_p.cos();
        Vec3::new(
            radius * (2.0 + cs) * 0.5 * u.cos(),
            radius * (2.0 + cs) * 0.5 * u.sin(),
            radius * q_over_p.sin() * 0.5,
        )
    };

    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * p * TAU;
        let p1 = curve(u);
        let p2 = curve(u + 0.01);
        let t = p2 - p1;
        let n = p2 + p1;
        let b = t.cross(n).normalize_or_zero();
        let n = b.cross(t).normalize_or_zero();
        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let pos = p1 + n * cx + b * cy;
            mesh.push(pos, pos - p1);
        }
    }

    let row = radial + 1;
    for j in 1..=tubular {
        for i in 1..=radial {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            mesh.quad(a, b, c, d);
        }
    }
    mesh
}

/// Random point cloud spanning every section vertically.
///
/// X and Z cover `[-spread/2, spread/2)`; Y starts half a section above the
/// first mesh and runs down through `spacing * section_count`.
pub fn particle_field(
    count: usize,
    spread: f32,
    spacing: f32,
    section_count: usize,
    seed: u64,
) -> Vec<[f32; 3]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let depth = spacing * section_count as f32;
    (0..count)
        .map(|_| {
            let x = (rng.gen::<f32>() - 0.5) * spread;
            let y = spacing * 0.5 - rng.gen::<f32>() * depth;
            let z = (rng.gen::<f32>() - 0.5) * spread;
            [x, y, z]
        })
        .collect()
}
