//! Resizing registered objects

use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Quat};
use shared::{DimensionError, Dimensions};

use super::import_ops::scale_factors;
use super::SceneState;

/// True when a spin about Y is closer to an odd quarter turn, so that the
/// object's own width lies along world Z.
fn swaps_footprint(rotation: Quat) -> bool {
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
    ((yaw / FRAC_PI_2).round() as i64).rem_euclid(2) == 1
}

fn swap_footprint(d: Dimensions) -> Dimensions {
    Dimensions::new(d.depth, d.height, d.width)
}

impl SceneState {
    /// Size shown in the edit dialog: the object's own extents, with width
    /// and depth in the world axes of the nearest quarter turn.
    ///
    /// Submitting these values unchanged leaves the object as it is.
    pub fn edit_dimensions(&self, id: &str) -> Option<Dimensions> {
        let obj = self.get(id)?;
        let t = self.graph.transform(obj.root)?;
        let size = (obj.initial_size * t.scale).abs();
        let own = Dimensions::new(size.x as f64, size.y as f64, size.z as f64);
        Some(if swaps_footprint(t.rotation) {
            swap_footprint(own)
        } else {
            own
        })
    }

    /// Resize an object to `requested` relative to its import-time size.
    ///
    /// Width and depth are world X and Z: for an object spun by a quarter
    /// turn they land on its own depth and width. Keeps the horizontal box
    /// centre, re-grounds, and refreshes the list row and highlight box.
    /// Returns `Ok(false)` if the object does not exist. Invalid dimensions
    /// leave the object untouched.
    pub fn set_dimensions(
        &mut self,
        id: &str,
        requested: Dimensions,
        precision: usize,
    ) -> Result<bool, DimensionError> {
        requested.validate()?;
        let Some(obj) = self.get(id) else {
            return Ok(false);
        };
        let (root, initial_size) = (obj.root, obj.initial_size);
        let Some(rotation) = self.graph.transform(root).map(|t| t.rotation) else {
            return Ok(false);
        };
        let own = if swaps_footprint(rotation) {
            swap_footprint(requested)
        } else {
            requested
        };
        let scale = scale_factors(own, initial_size)?;

        let center = self
            .bounding_box(id)
            .filter(|b| !b.is_empty())
            .map(|b| b.center());

        if let Some(node) = self.graph.node_mut(root) {
            node.transform.scale = scale;
        }
        self.graph.update_world_matrices(root);

        if let Some(c) = center {
            self.center_object_xz(id, c.x, c.z);
        }
        self.ground_object(id);
        self.refresh_row(id, precision);
        self.refresh_highlight(id);
        self.version += 1;

        tracing::info!("Resized {} to {:?}", id, requested);
        Ok(true)
    }
}
