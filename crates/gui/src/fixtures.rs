//! Factory functions for creating test data.
//!
//! Provides OBJ snippets, meshes and dimension values used in tests and by
//! the command interface.

use glam::Vec3;
use shared::Dimensions;

use crate::viewport::mesh::{self, MeshData};

// ── OBJ sources ─────────────────────────────────────────────────

/// Unit cube spanning [0, 1] on every axis, written with quad faces
pub const CUBE_OBJ: &str = "\
# unit cube
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 0 0 1
v 1 0 1
v 1 1 1
v 0 1 1
f 1 4 3 2
f 5 6 7 8
f 1 2 6 5
f 4 8 7 3
f 1 5 8 4
f 2 3 7 6
";

/// Single triangle lying in the XY plane (zero depth)
pub const TRIANGLE_OBJ: &str = "\
v 0 0 0
v 2 0 0
v 0 1 0
f 1 2 3
";

// ── Mesh factories ──────────────────────────────────────────────

/// Box mesh centred at the origin
pub fn box_mesh(w: f32, h: f32, d: f32) -> MeshData {
    mesh::cube(w, h, d)
}

/// Unit cube mesh (1x1x1)
pub fn unit_cube_mesh() -> MeshData {
    mesh::cube(1.0, 1.0, 1.0)
}

/// Box mesh whose vertices are offset from the origin
pub fn offset_box_mesh(w: f32, h: f32, d: f32, offset: Vec3) -> MeshData {
    let mut m = mesh::cube(w, h, d);
    for p in &mut m.positions {
        *p += offset;
    }
    m
}

/// Flat square in the XZ plane (zero height)
pub fn flat_quad_mesh(size: f32) -> MeshData {
    let h = size * 0.5;
    MeshData {
        positions: vec![
            Vec3::new(-h, 0.0, -h),
            Vec3::new(h, 0.0, -h),
            Vec3::new(h, 0.0, h),
            Vec3::new(-h, 0.0, h),
        ],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

// ── Dimension factories ─────────────────────────────────────────

pub fn dims(w: f64, h: f64, d: f64) -> Dimensions {
    Dimensions::new(w, h, d)
}

pub fn unit_dims() -> Dimensions {
    Dimensions::new(1.0, 1.0, 1.0)
}

/// Text fields as the dimension dialog would hold them
pub fn dim_fields(w: &str, h: &str, d: &str) -> [String; 3] {
    [w.to_string(), h.to_string(), d.to_string()]
}
