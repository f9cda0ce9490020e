use glam::Vec3;

use crate::geometry::Aabb;
use crate::scene_graph::{NodeId, SceneGraph};

/// A ray in world space
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Ray-AABB intersection using the slab method.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    if aabb.is_empty() {
        return None;
    }

    let inv_dir = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t1 = (aabb.min.x - ray.origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv_dir.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv_dir.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Möller-Trumbore ray-triangle intersection algorithm.
/// Returns the distance along the ray if hit, or None if no intersection.
pub fn ray_triangle_intersect(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-7;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);

    // Intersection is behind ray origin
    if t > EPSILON {
        Some(t)
    } else {
        None
    }
}

/// Nearest mesh-bearing node hit by the ray
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeHit {
    pub node: NodeId,
    pub distance: f32,
}

/// Find the nearest mesh node under the ray.
///
/// Uses world matrices as of the last update; each node's world box is
/// tested first, then its triangles.
pub fn pick_node(ray: &Ray, graph: &SceneGraph) -> Option<NodeHit> {
    let mut best: Option<NodeHit> = None;

    for id in 0..graph.len() {
        let Some(node) = graph.node(id) else {
            continue;
        };
        let Some(mesh) = &node.mesh else {
            continue;
        };
        let world = node.world_matrix();

        let aabb = Aabb::from_points(mesh.positions.iter().map(|p| world.transform_point3(*p)));
        let Some(box_dist) = ray_aabb(ray, &aabb) else {
            continue;
        };
        if best.is_some_and(|b| box_dist > b.distance) {
            continue;
        }

        for [a, b, c] in mesh.triangles() {
            let hit = ray_triangle_intersect(
                ray,
                world.transform_point3(a),
                world.transform_point3(b),
                world.transform_point3(c),
            );
            if let Some(dist) = hit {
                if best.is_none_or(|b| dist < b.distance) {
                    best = Some(NodeHit { node: id, distance: dist });
                }
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::mesh;

    fn down_ray(x: f32, z: f32) -> Ray {
        Ray {
            origin: Vec3::new(x, 10.0, z),
            direction: Vec3::NEG_Y,
        }
    }

    #[test]
    fn test_ray_aabb_hit_and_miss() {
        let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        assert_eq!(ray_aabb(&down_ray(0.0, 0.0), &aabb), Some(9.0));
        assert_eq!(ray_aabb(&down_ray(5.0, 0.0), &aabb), None);
        assert_eq!(ray_aabb(&down_ray(0.0, 0.0), &Aabb::EMPTY), None);
    }

    #[test]
    fn test_ray_triangle() {
        let ray = down_ray(0.1, 0.1);
        let t = ray_triangle_intersect(
            &ray,
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert_eq!(t, Some(10.0));
        assert!((ray.at(10.0) - Vec3::new(0.1, 0.0, 0.1)).length() < 1e-6);
    }

    #[test]
    fn test_pick_nearest_node() {
        let mut g = SceneGraph::new();
        let low = g.add_node("low", None);
        let high = g.add_node("high", None);
        g.set_mesh(low, mesh::cube(1.0, 1.0, 1.0));
        g.set_mesh(high, mesh::cube(1.0, 1.0, 1.0));
        g.translate(high, Vec3::new(0.0, 3.0, 0.0));
        g.update_all();

        let hit = pick_node(&down_ray(0.0, 0.0), &g).unwrap();
        assert_eq!(hit.node, high);
        assert!((hit.distance - 6.5).abs() < 1e-5);
    }

    #[test]
    fn test_pick_skips_meshless_nodes() {
        let mut g = SceneGraph::new();
        g.add_node("group", None);
        g.update_all();
        assert!(pick_node(&down_ray(0.0, 0.0), &g).is_none());
    }
}
