use glam::Vec3;

/// CPU-side triangle mesh in local (model) space
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    /// Three indices per triangle
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate triangles as vertex positions, skipping out-of-range indices
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).filter_map(|tri| {
            let a = *self.positions.get(tri[0] as usize)?;
            let b = *self.positions.get(tri[1] as usize)?;
            let c = *self.positions.get(tri[2] as usize)?;
            Some([a, b, c])
        })
    }

    /// Unique undirected edges (for wireframe drawing)
    pub fn edges(&self) -> Vec<(u32, u32)> {
        let mut edges: Vec<(u32, u32)> = self
            .indices
            .chunks_exact(3)
            .flat_map(|tri| [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])])
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        edges.sort_unstable();
        edges.dedup();
        edges
    }
}

/// Axis-aligned box mesh centred at the origin
pub fn cube(w: f32, h: f32, d: f32) -> MeshData {
    let hw = w * 0.5;
    let hh = h * 0.5;
    let hd = d * 0.5;

    let positions = vec![
        Vec3::new(-hw, -hh, -hd),
        Vec3::new(hw, -hh, -hd),
        Vec3::new(hw, hh, -hd),
        Vec3::new(-hw, hh, -hd),
        Vec3::new(-hw, -hh, hd),
        Vec3::new(hw, -hh, hd),
        Vec3::new(hw, hh, hd),
        Vec3::new(-hw, hh, hd),
    ];

    // Two triangles per face, counter-clockwise seen from outside
    let indices = vec![
        4, 5, 6, 4, 6, 7, // front (+Z)
        1, 0, 3, 1, 3, 2, // back (-Z)
        5, 1, 2, 5, 2, 6, // right (+X)
        0, 4, 7, 0, 7, 3, // left (-X)
        7, 6, 2, 7, 2, 3, // top (+Y)
        0, 1, 5, 0, 5, 4, // bottom (-Y)
    ];

    MeshData { positions, indices }
}

/// Ground grid line segments on the Y = 0 plane
pub fn grid_lines(range: i32, cell_size: f32) -> Vec<(Vec3, Vec3)> {
    let extent = range as f32 * cell_size;
    let mut lines = Vec::with_capacity(((range * 2 + 1) * 2) as usize);

    for i in -range..=range {
        let f = i as f32 * cell_size;
        // Line along Z
        lines.push((Vec3::new(f, 0.0, -extent), Vec3::new(f, 0.0, extent)));
        // Line along X
        lines.push((Vec3::new(-extent, 0.0, f), Vec3::new(extent, 0.0, f)));
    }

    lines
}
