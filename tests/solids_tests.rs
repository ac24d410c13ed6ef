// Host-side tests for the solid meshes.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod solids {
    include!("../src/render/solids.rs");
}

use solids::*;

const ALL: [Shape; 5] = [
    Shape::Tetrahedron,
    Shape::Cube,
    Shape::Octahedron,
    Shape::Icosahedron,
    Shape::Dodecahedron,
];

#[test]
fn triangle_and_edge_counts_match_each_solid() {
    // (triangles, outline edges)
    let expected = [(4, 6), (12, 12), (8, 12), (20, 30), (36, 30)];
    for (shape, (tris, edges)) in ALL.iter().zip(expected) {
        let mesh = build_solid(*shape, 1.75);
        assert_eq!(mesh.triangles.len(), tris * 3, "{shape:?} triangles");
        assert_eq!(mesh.edges.len(), edges * 2, "{shape:?} edges");
    }
}

#[test]
fn round_solids_sit_on_their_radius() {
    for shape in [
        Shape::Tetrahedron,
        Shape::Octahedron,
        Shape::Icosahedron,
        Shape::Dodecahedron,
    ] {
        let mesh = build_solid(shape, 1.75);
        for v in &mesh.triangles {
            let r = glam::Vec3::from_array(v.pos).length();
            assert!((r - 1.75).abs() < 1e-4, "{shape:?} vertex at radius {r}");
        }
    }
}

#[test]
fn cube_side_is_root_of_twice_radius() {
    let mesh = build_solid(Shape::Cube, 1.75);
    let half = (3.5f32).sqrt() / 2.0;
    for v in &mesh.triangles {
        for c in v.pos {
            assert!((c.abs() - half).abs() < 1e-5, "coordinate {c}");
        }
    }
}

#[test]
fn uvs_are_normalised() {
    for shape in ALL {
        let mesh = build_solid(shape, 1.0);
        for v in mesh.triangles.iter().chain(&mesh.edges) {
            assert!((0.0..=1.0).contains(&v.uv[0]) && (0.0..=1.0).contains(&v.uv[1]));
        }
    }
}

#[test]
fn coplanar_split_is_not_an_edge() {
    // unit square split along its diagonal
    let points = [
        glam::Vec3::new(0.0, 0.0, 0.0),
        glam::Vec3::new(1.0, 0.0, 0.0),
        glam::Vec3::new(1.0, 1.0, 0.0),
        glam::Vec3::new(0.0, 1.0, 0.0),
    ];
    let faces = [[0, 1, 2], [0, 2, 3]];
    let edges = feature_edges(&points, &faces);
    assert_eq!(edges.len(), 4);
    assert!(!edges.contains(&[0, 2]));
}

#[test]
fn vertex_layout_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<SolidVertex>(), 20);
    let mesh = build_solid(Shape::Tetrahedron, 1.0);
    let bytes: &[u8] = bytemuck::cast_slice(&mesh.triangles);
    assert_eq!(bytes.len(), 12 * 20);
}
