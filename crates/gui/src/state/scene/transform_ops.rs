//! Transform operations on registered objects

use glam::{Quat, Vec3};

use super::SceneState;
use crate::snap::{self, SnapCorrection};

impl SceneState {
    /// Move an object's root by a world-space delta
    pub fn translate_object(&mut self, id: &str, delta: Vec3) {
        let Some(root) = self.get(id).map(|o| o.root) else {
            return;
        };
        self.graph.translate(root, delta);
        self.graph.update_world_matrices(root);
        self.version += 1;
    }

    /// Position of an object's root
    pub fn position(&self, id: &str) -> Option<Vec3> {
        let root = self.get(id)?.root;
        self.graph.transform(root).map(|t| t.position)
    }

    /// Place an object's root at `position`
    pub fn set_position(&mut self, id: &str, position: Vec3) {
        let Some(root) = self.get(id).map(|o| o.root) else {
            return;
        };
        if let Some(node) = self.graph.node_mut(root) {
            node.transform.position = position;
        }
        self.graph.update_world_matrices(root);
        self.version += 1;
    }

    /// Spin an object in place about the world vertical axis
    pub fn rotate_object_y(&mut self, id: &str, radians: f32) {
        let Some(root) = self.get(id).map(|o| o.root) else {
            return;
        };
        if let Some(node) = self.graph.node_mut(root) {
            node.transform.rotation =
                (Quat::from_rotation_y(radians) * node.transform.rotation).normalize();
        }
        self.graph.update_world_matrices(root);
        self.version += 1;
    }

    /// Multiply an object's scale per axis; no axis goes below `min_scale`
    pub fn scale_object(&mut self, id: &str, factors: Vec3, min_scale: f32) {
        let Some(root) = self.get(id).map(|o| o.root) else {
            return;
        };
        if let Some(node) = self.graph.node_mut(root) {
            node.transform.scale = (node.transform.scale * factors).max(Vec3::splat(min_scale));
        }
        self.graph.update_world_matrices(root);
        self.version += 1;
    }

    /// Move an object vertically so its box minimum Y is 0. Returns the applied delta.
    pub fn ground_object(&mut self, id: &str) -> Option<f32> {
        let aabb = self.bounding_box(id)?;
        if aabb.is_empty() {
            return None;
        }
        let dy = -aabb.min.y;
        self.translate_object(id, Vec3::new(0.0, dy, 0.0));
        Some(dy)
    }

    /// Move an object horizontally so its box center lies at `center` on X and Z
    pub fn center_object_xz(&mut self, id: &str, center_x: f32, center_z: f32) {
        let Some(aabb) = self.bounding_box(id) else {
            return;
        };
        if aabb.is_empty() {
            return;
        }
        let c = aabb.center();
        self.translate_object(id, Vec3::new(center_x - c.x, 0.0, center_z - c.z));
    }

    /// Snap an object against every other object and the ground plane.
    ///
    /// Applies at most one single-axis correction.
    pub fn snap_object(&mut self, id: &str, threshold: f32) -> Option<SnapCorrection> {
        let moving = self.bounding_box(id)?;
        let candidates = self.boxes_except(id);
        let correction = snap::find_snap(&moving, &candidates, threshold)?;
        self.translate_object(id, correction.offset());
        tracing::debug!(
            "Snapped {} by {:.4} on {} to {:?}",
            id,
            correction.delta,
            correction.axis.label(),
            correction.target
        );
        Some(correction)
    }
}
