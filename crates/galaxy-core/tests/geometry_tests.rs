use galaxy_core::{plane_mesh, sphere_mesh};
use glam::Vec3;

#[test]
fn sphere_vertices_lie_on_radius_with_unit_normals() {
    let m = sphere_mesh(0.2, 32, 32);
    assert_eq!(m.vertices.len(), 33 * 33);
    for v in &m.vertices {
        let p = Vec3::from_array(v.position);
        let n = Vec3::from_array(v.normal);
        assert!((p.length() - 0.2).abs() < 1e-5);
        assert!((n.length() - 1.0).abs() < 1e-5);
        assert!((p.normalize() - n).length() < 1e-4);
    }
}

#[test]
fn sphere_indices_skip_pole_degenerates() {
    let m = sphere_mesh(1.0, 32, 32);
    // each of the 32 columns: one triangle in the two pole rows, two elsewhere
    assert_eq!(m.indices.len(), 32 * (2 * 32 - 2) * 3);
    let max = m.vertices.len() as u32;
    assert!(m.indices.iter().all(|i| *i < max));
}

#[test]
fn plane_spans_requested_size() {
    let m = plane_mesh(2.0, 2.0);
    for v in &m.vertices {
        assert_eq!(v.position[0].abs(), 1.0);
        assert_eq!(v.position[1].abs(), 1.0);
        assert_eq!(v.position[2], 0.0);
    }
}
