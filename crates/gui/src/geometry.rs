//! World-space bounding boxes of scene-graph subtrees.

use glam::Vec3;
use shared::Axis;

use crate::scene_graph::{NodeId, SceneGraph};

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box that contains nothing; expanding it by a point yields that point
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::MAX),
        max: Vec3::splat(f32::MIN),
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut aabb = Self::EMPTY;
        for p in points {
            aabb.expand(p);
        }
        aabb
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn expand(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Extents on X, Y, Z; zero for an empty box
    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn translated(&self, delta: Vec3) -> Aabb {
        Aabb {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(b.x, b.y, b.z),
            Vec3::new(a.x, b.y, b.z),
        ]
    }

    /// The 12 box edges as corner index pairs into `corners()`
    pub const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    /// Open-interval overlap of the two boxes' projections on `axis`.
    /// Boxes that merely touch do not overlap.
    pub fn overlaps_on(&self, other: &Aabb, axis: Axis) -> bool {
        let i = axis.index();
        self.min[i] < other.max[i] && self.max[i] > other.min[i]
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Minimal world-space box around every vertex of `node` and its descendants.
///
/// Forces a world-matrix recomputation of the subtree first, so it is safe to
/// call right after a transform mutation.
pub fn bounding_box(graph: &mut SceneGraph, node: NodeId) -> Aabb {
    graph.update_world_matrices(node);

    let mut aabb = Aabb::EMPTY;
    for id in graph.descendants(node) {
        let Some(n) = graph.node(id) else {
            continue;
        };
        let Some(mesh) = &n.mesh else {
            continue;
        };
        let world = n.world_matrix();
        for p in &mesh.positions {
            aabb.expand(world.transform_point3(*p));
        }
    }
    aabb
}

/// Width, height, depth of the world-space box (zero vector when the subtree has no geometry)
pub fn dimensions(graph: &mut SceneGraph, node: NodeId) -> Vec3 {
    bounding_box(graph, node).size()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::mesh;
    use glam::Quat;

    #[test]
    fn test_empty_box() {
        let aabb = Aabb::EMPTY;
        assert!(aabb.is_empty());
        assert_eq!(aabb.size(), Vec3::ZERO);
    }

    #[test]
    fn test_from_points() {
        let aabb = Aabb::from_points([Vec3::new(1.0, -1.0, 0.0), Vec3::new(-2.0, 3.0, 4.0)]);
        assert_eq!(aabb.min, Vec3::new(-2.0, -1.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 3.0, 4.0));
        assert_eq!(aabb.size(), Vec3::new(3.0, 4.0, 4.0));
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(!a.overlaps_on(&b, Axis::X));
        assert!(a.overlaps_on(&b, Axis::Y));
        assert!(a.overlaps_on(&b, Axis::Z));
    }

    #[test]
    fn test_bounding_box_of_subtree() {
        let mut g = SceneGraph::new();
        let root = g.add_node("root", None);
        let a = g.add_node("a", Some(root));
        let b = g.add_node("b", Some(root));
        g.set_mesh(a, mesh::cube(1.0, 1.0, 1.0));
        g.set_mesh(b, mesh::cube(1.0, 1.0, 1.0));
        g.translate(b, Vec3::new(3.0, 0.0, 0.0));

        let aabb = bounding_box(&mut g, root);
        assert!((aabb.min - Vec3::new(-0.5, -0.5, -0.5)).length() < 1e-6);
        assert!((aabb.max - Vec3::new(3.5, 0.5, 0.5)).length() < 1e-6);
    }

    #[test]
    fn test_bounding_box_sees_fresh_transform() {
        let mut g = SceneGraph::new();
        let root = g.add_node("root", None);
        g.set_mesh(root, mesh::cube(2.0, 2.0, 2.0));
        g.update_all();

        g.translate(root, Vec3::new(0.0, 5.0, 0.0));
        let aabb = bounding_box(&mut g, root);
        assert!((aabb.min.y - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_about_y_swaps_extents() {
        let mut g = SceneGraph::new();
        let root = g.add_node("root", None);
        g.set_mesh(root, mesh::cube(2.0, 1.0, 4.0));
        if let Some(n) = g.node_mut(root) {
            n.transform.rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        }
        let size = dimensions(&mut g, root);
        assert!((size - Vec3::new(4.0, 1.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn test_dimensions_without_geometry() {
        let mut g = SceneGraph::new();
        let root = g.add_node("empty", None);
        assert_eq!(dimensions(&mut g, root), Vec3::ZERO);
    }
}
