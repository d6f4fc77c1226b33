use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Generate octahedron vertices and indices.
///
/// Eight triangular faces with per-face normals, so each face shades
/// flat. Vertices are duplicated per face (24 total), CCW winding
/// viewed from outside, apexes on the coordinate axes at `radius`.
pub fn octahedron_mesh(radius: f32) -> (Vec<Vertex>, Vec<u16>) {
    let r = radius;
    // Axis apexes.
    let px = [r, 0.0, 0.0];
    let nx = [-r, 0.0, 0.0];
    let py = [0.0, r, 0.0];
    let ny = [0.0, -r, 0.0];
    let pz = [0.0, 0.0, r];
    let nz = [0.0, 0.0, -r];

    let n = 1.0 / 3.0_f32.sqrt();
    #[rustfmt::skip]
    let faces: [([f32; 3], [f32; 3], [f32; 3], [f32; 3]); 8] = [
        // Upper hemisphere
        (px, py, pz, [ n,  n,  n]),
        (pz, py, nx, [-n,  n,  n]),
        (nx, py, nz, [-n,  n, -n]),
        (nz, py, px, [ n,  n, -n]),
        // Lower hemisphere
        (pz, ny, px, [ n, -n,  n]),
        (nx, ny, pz, [-n, -n,  n]),
        (nz, ny, nx, [-n, -n, -n]),
        (px, ny, nz, [ n, -n, -n]),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(24);
    for (a, b, c, normal) in faces {
        let base = vertices.len() as u16;
        vertices.push(Vertex {
            position: a,
            normal,
        });
        vertices.push(Vertex {
            position: b,
            normal,
        });
        vertices.push(Vertex {
            position: c,
            normal,
        });
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octahedron_has_eight_faces() {
        let (verts, indices) = octahedron_mesh(1.0);
        assert_eq!(verts.len(), 24);
        assert_eq!(indices.len(), 24);
    }

    #[test]
    fn vertices_sit_on_radius() {
        let (verts, _) = octahedron_mesh(2.0);
        for v in &verts {
            let len =
                (v.position[0].powi(2) + v.position[1].powi(2) + v.position[2].powi(2)).sqrt();
            assert!((len - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn normals_are_unit_length() {
        let (verts, _) = octahedron_mesh(1.0);
        for v in &verts {
            let len = (v.normal[0].powi(2) + v.normal[1].powi(2) + v.normal[2].powi(2)).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn winding_faces_outward() {
        let (verts, indices) = octahedron_mesh(1.0);
        for tri in indices.chunks(3) {
            let a = verts[tri[0] as usize].position;
            let b = verts[tri[1] as usize].position;
            let c = verts[tri[2] as usize].position;
            let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
            let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
            let cross = [
                u[1] * v[2] - u[2] * v[1],
                u[2] * v[0] - u[0] * v[2],
                u[0] * v[1] - u[1] * v[0],
            ];
            let n = verts[tri[0] as usize].normal;
            let dot = cross[0] * n[0] + cross[1] * n[1] + cross[2] * n[2];
            assert!(dot > 0.0, "face winding disagrees with its normal");
        }
    }
}
