// Host-side tests for generated section meshes.

mod common;
use common::core::*;

fn assert_well_formed(mesh: &MeshData) {
    assert!(!mesh.vertices.is_empty());
    assert_eq!(mesh.indices.len() % 3, 0);
    let n = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n), "index out of range");
    for v in &mesh.vertices {
        let len = glam::Vec3::from_array(v.normal).length();
        assert!((len - 1.0).abs() < 1e-3, "normal not unit: {len}");
        assert!(v.position.iter().all(|c| c.is_finite()));
    }
}

#[test]
fn torus_counts_and_extent() {
    let mesh = torus(1.0, 0.4, 16, 60);
    assert_eq!(mesh.vertices.len(), 17 * 61);
    assert_eq!(mesh.triangle_count(), 16 * 60 * 2);
    assert_well_formed(&mesh);
    let max_r = mesh
        .vertices
        .iter()
        .map(|v| (v.position[0].powi(2) + v.position[1].powi(2)).sqrt())
        .fold(0.0f32, f32::max);
    assert!((max_r - 1.4).abs() < 1e-3);
}

#[test]
fn torus_normals_point_away_from_the_ring() {
    let mesh = torus(1.0, 0.4, 8, 12);
    for v in &mesh.vertices {
        let p = glam::Vec3::from_array(v.position);
        let ring = glam::Vec3::new(p.x, p.y, 0.0).normalize();
        let n = glam::Vec3::from_array(v.normal);
        assert!((p - ring).dot(n) > 0.0);
    }
}

#[test]
fn cone_is_closed_and_spans_its_height() {
    let mesh = cone(1.0, 2.0, 32);
    // side rings + cap centers + cap ring
    assert_eq!(mesh.vertices.len(), 2 * 33 + 32 + 33);
    assert_eq!(mesh.triangle_count(), 32 * 2 + 32);
    assert_well_formed(&mesh);
    let ys: Vec<f32> = mesh.vertices.iter().map(|v| v.position[1]).collect();
    let top = ys.iter().cloned().fold(f32::MIN, f32::max);
    let bottom = ys.iter().cloned().fold(f32::MAX, f32::min);
    assert_eq!(top, 1.0);
    assert_eq!(bottom, -1.0);
}

#[test]
fn cone_base_faces_down() {
    let mesh = cone(1.0, 2.0, 8);
    let cap_start = 2 * 9;
    for v in &mesh.vertices[cap_start..] {
        assert_eq!(v.normal, [0.0, -1.0, 0.0]);
    }
}

#[test]
fn torus_knot_counts() {
    let mesh = torus_knot(0.8, 0.35, 100, 16, 2, 3);
    assert_eq!(mesh.vertices.len(), 101 * 17);
    assert_eq!(mesh.triangle_count(), 100 * 16 * 2);
    assert_well_formed(&mesh);
}

#[test]
fn section_shapes_build() {
    for shape in Shape::SECTIONS {
        let mesh = shape.build();
        assert_well_formed(&mesh);
        assert!(mesh.triangle_count() > 100, "{} too coarse", shape.name());
    }
}

#[test]
fn vertex_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
    let mesh = torus(1.0, 0.4, 4, 6);
    let bytes: &[u8] = bytemuck::cast_slice(&mesh.vertices);
    assert_eq!(bytes.len(), mesh.vertices.len() * 24);
}
