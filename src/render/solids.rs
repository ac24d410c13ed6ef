// Platonic solid meshes for the five segments.
//
// Kept free of web/wgpu types so host tests can `include!` it.

use glam::{Vec2, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SolidVertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
}

/// Triangle soup plus the outline edges worth drawing.
#[derive(Clone, Debug)]
pub struct SolidMesh {
    pub triangles: Vec<SolidVertex>,
    pub edges: Vec<SolidVertex>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Tetrahedron,
    Cube,
    Octahedron,
    Icosahedron,
    Dodecahedron,
}

// Adjacent faces closer than this are treated as one flat face.
const EDGE_THRESHOLD_DEG: f32 = 1.0;

pub fn build_solid(shape: Shape, radius: f32) -> SolidMesh {
    let (points, faces) = match shape {
        Shape::Tetrahedron => tetrahedron(),
        Shape::Cube => cube(),
        Shape::Octahedron => octahedron(),
        Shape::Icosahedron => icosahedron(),
        Shape::Dodecahedron => dodecahedron(),
    };
    let points: Vec<Vec3> = match shape {
        // box side is sqrt(2r), not a circumscribed radius
        Shape::Cube => points.iter().map(|p| *p * ((2.0 * radius).sqrt() / 2.0)).collect(),
        _ => points.iter().map(|p| p.normalize() * radius).collect(),
    };
    let triangles = faces
        .iter()
        .flat_map(|f| f.iter().map(|&i| vertex(points[i as usize])))
        .collect();
    let edges = feature_edges(&points, &faces)
        .into_iter()
        .flat_map(|[a, b]| [vertex(points[a as usize]), vertex(points[b as usize])])
        .collect();
    SolidMesh { triangles, edges }
}

/// Edges bordering exactly one face, or two faces that meet at an angle.
pub fn feature_edges(points: &[Vec3], faces: &[[u32; 3]]) -> Vec<[u32; 2]> {
    let normal = |f: &[u32; 3]| {
        let (a, b, c) = (
            points[f[0] as usize],
            points[f[1] as usize],
            points[f[2] as usize],
        );
        (b - a).cross(c - a).normalize_or_zero()
    };
    let mut seen: Vec<([u32; 2], Vec3, usize)> = Vec::new();
    for f in faces {
        let n = normal(f);
        for k in 0..3 {
            let (a, b) = (f[k], f[(k + 1) % 3]);
            let key = if a < b { [a, b] } else { [b, a] };
            match seen.iter_mut().find(|(e, _, _)| *e == key) {
                Some(entry) => {
                    // winding may differ between tables, compare orientation-free
                    let flat = entry.1.dot(n).abs() >= EDGE_THRESHOLD_DEG.to_radians().cos();
                    entry.2 += if flat { 2 } else { 1 };
                }
                None => seen.push((key, n, 1)),
            }
        }
    }
    // count 1: boundary, 2: crease, 3+: coplanar pair
    seen.into_iter()
        .filter(|(_, _, count)| *count <= 2)
        .map(|(e, _, _)| e)
        .collect()
}

fn vertex(p: Vec3) -> SolidVertex {
    let uv = spherical_uv(p);
    SolidVertex {
        pos: p.to_array(),
        uv: uv.to_array(),
    }
}

fn spherical_uv(p: Vec3) -> Vec2 {
    let n = p.normalize_or_zero();
    let u = n.z.atan2(n.x) / std::f32::consts::TAU + 0.5;
    let v = n.y.clamp(-1.0, 1.0).asin() / std::f32::consts::PI + 0.5;
    Vec2::new(u, v)
}

fn tetrahedron() -> (Vec<Vec3>, Vec<[u32; 3]>) {
    let points = vec![
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ];
    let faces = vec![[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];
    (points, faces)
}

fn cube() -> (Vec<Vec3>, Vec<[u32; 3]>) {
    let points = vec![
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ];
    let faces = vec![
        [0, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 4, 7],
        [0, 7, 3],
        [1, 2, 6],
        [1, 6, 5],
        [0, 1, 5],
        [0, 5, 4],
        [3, 7, 6],
        [3, 6, 2],
    ];
    (points, faces)
}

fn octahedron() -> (Vec<Vec3>, Vec<[u32; 3]>) {
    let points = vec![
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
    ];
    let faces = vec![
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    (points, faces)
}

fn icosahedron() -> (Vec<Vec3>, Vec<[u32; 3]>) {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let points = vec![
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    let faces = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    (points, faces)
}

fn dodecahedron() -> (Vec<Vec3>, Vec<[u32; 3]>) {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let r = 1.0 / t;
    let points = vec![
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(0.0, -r, -t),
        Vec3::new(0.0, -r, t),
        Vec3::new(0.0, r, -t),
        Vec3::new(0.0, r, t),
        Vec3::new(-r, -t, 0.0),
        Vec3::new(-r, t, 0.0),
        Vec3::new(r, -t, 0.0),
        Vec3::new(r, t, 0.0),
        Vec3::new(-t, 0.0, -r),
        Vec3::new(t, 0.0, -r),
        Vec3::new(-t, 0.0, r),
        Vec3::new(t, 0.0, r),
    ];
    let faces = vec![
        [3, 11, 7],
        [3, 7, 15],
        [3, 15, 13],
        [7, 19, 17],
        [7, 17, 6],
        [7, 6, 15],
        [17, 4, 8],
        [17, 8, 10],
        [17, 10, 6],
        [8, 0, 16],
        [8, 16, 2],
        [8, 2, 10],
        [0, 12, 1],
        [0, 1, 18],
        [0, 18, 16],
        [6, 10, 2],
        [6, 2, 13],
        [6, 13, 15],
        [2, 16, 18],
        [2, 18, 3],
        [2, 3, 13],
        [18, 1, 9],
        [18, 9, 11],
        [18, 11, 3],
        [4, 14, 12],
        [4, 12, 0],
        [4, 0, 8],
        [11, 9, 5],
        [11, 5, 19],
        [11, 19, 7],
        [19, 5, 14],
        [19, 14, 4],
        [19, 4, 17],
        [1, 12, 14],
        [1, 14, 5],
        [1, 5, 9],
    ];
    (points, faces)
}
