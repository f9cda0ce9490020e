//! Headless test harness for programmatic scene manipulation.
//!
//! Drives the same `AppState` actions as the UI, without a window.

use glam::Vec3;
use shared::{DimensionError, Dimensions, ObjectId, SceneSummary, TransformMode};

use crate::geometry::Aabb;
use crate::import::{self, ImportError};
use crate::state::{AppSettings, AppState, HighlightBox};
use crate::viewport::mesh;
use crate::viewport::picking::{self, Ray};

/// Headless test harness — owns the full editor state
pub struct TestHarness {
    pub state: AppState,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Create a new empty harness with default settings (nothing read from disk).
    pub fn new() -> Self {
        Self::with_settings(AppSettings::default())
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            state: AppState::with_settings(settings),
        }
    }

    // ── Scene manipulation ────────────────────────────────────

    /// Import a unit box mesh at the requested size; the new object is selected
    pub fn add_box(&mut self, w: f64, h: f64, d: f64) -> Result<ObjectId, ImportError> {
        self.state
            .import_with_dimensions(mesh::cube(1.0, 1.0, 1.0), Dimensions::new(w, h, d))
    }

    /// Import a box and move its box centre to (`x`, `z`)
    pub fn add_box_at(
        &mut self,
        w: f64,
        h: f64,
        d: f64,
        x: f32,
        z: f32,
    ) -> Result<ObjectId, ImportError> {
        let id = self.add_box(w, h, d)?;
        self.place(&id, x, z);
        Ok(id)
    }

    /// Import OBJ text at the requested size; the new object is selected
    pub fn import_obj(&mut self, text: &str, dims: Dimensions) -> Result<ObjectId, ImportError> {
        let mesh = import::parse_obj(text.as_bytes())?;
        self.state.import_with_dimensions(mesh, dims)
    }

    /// Move an object's box centre on X/Z without snapping
    pub fn place(&mut self, id: &str, x: f32, z: f32) {
        self.state.scene.center_object_xz(id, x, z);
        self.state.refresh_highlights();
    }

    pub fn select(&mut self, id: &str) -> bool {
        self.state.select(id)
    }

    pub fn deselect(&mut self) {
        self.state.deselect();
    }

    pub fn escape(&mut self) {
        self.state.handle_escape();
    }

    /// Click on the mesh part of an object (not its registered root)
    pub fn click_object(&mut self, id: &str) {
        let part = self.state.scene.get(id).and_then(|o| {
            self.state
                .scene
                .graph
                .node(o.root)
                .and_then(|n| n.children.first().copied())
        });
        self.state.click_node(part);
    }

    pub fn click_empty(&mut self) {
        self.state.click_node(None);
    }

    /// Click along a world-space ray, as the viewport does
    pub fn click_ray(&mut self, origin: Vec3, direction: Vec3) {
        self.state.scene.graph.update_all();
        let ray = Ray {
            origin,
            direction: direction.normalize(),
        };
        let hit = picking::pick_node(&ray, &self.state.scene.graph).map(|h| h.node);
        self.state.click_node(hit);
    }

    pub fn set_mode(&mut self, mode: TransformMode) -> bool {
        self.state.set_mode(mode)
    }

    // ── Dragging ──────────────────────────────────────────────

    pub fn begin_drag(&mut self) -> bool {
        self.state.begin_drag()
    }

    pub fn drag_translate(&mut self, delta: Vec3) -> bool {
        self.state.drag_translate(delta)
    }

    pub fn drag_rotate(&mut self, degrees: f32) -> bool {
        self.state.drag_rotate(degrees.to_radians())
    }

    pub fn drag_scale(&mut self, factors: Vec3) -> bool {
        self.state.drag_scale(factors)
    }

    pub fn end_drag(&mut self) {
        self.state.end_drag();
    }

    /// Full translate drag split into `steps` equal moves
    pub fn drag_by(&mut self, delta: Vec3, steps: u32) -> bool {
        if !self.begin_drag() {
            return false;
        }
        let steps = steps.max(1);
        let step = delta / steps as f32;
        for _ in 0..steps {
            self.drag_translate(step);
        }
        self.end_drag();
        true
    }

    // ── Dimensions ────────────────────────────────────────────

    pub fn set_dimensions(&mut self, id: &str, dims: Dimensions) -> Result<bool, DimensionError> {
        self.state.set_dimensions(id, dims)
    }

    /// Edit through the dimension dialog with raw text fields
    pub fn set_dimensions_text(&mut self, id: &str, fields: [&str; 3]) -> Option<ObjectId> {
        if !self.state.request_edit(id) {
            return None;
        }
        if let Some(f) = self.state.dimension_dialog.fields_mut() {
            *f = fields.map(str::to_string);
        }
        self.state.submit_dimension_dialog()
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn object_count(&self) -> usize {
        self.state.scene.len()
    }

    pub fn selected(&self) -> Option<&ObjectId> {
        self.state.selected()
    }

    pub fn dimensions(&mut self, id: &str) -> Option<Dimensions> {
        self.state.scene.dimensions(id)
    }

    pub fn bounding_box(&mut self, id: &str) -> Option<Aabb> {
        self.state.scene.bounding_box(id)
    }

    pub fn highlight(&self, id: &str) -> Option<HighlightBox> {
        self.state.scene.get(id).map(|o| o.highlight)
    }

    pub fn row_label(&self, id: &str) -> Option<&str> {
        self.state.scene.get(id).map(|o| o.row.label.as_str())
    }

    pub fn notice(&self) -> Option<&str> {
        self.state.notice.as_ref().map(|n| n.message.as_str())
    }

    /// Snapshot of all objects in insertion order
    pub fn summary(&mut self) -> SceneSummary {
        let objects = self
            .state
            .scene
            .ids()
            .iter()
            .filter_map(|id| self.state.scene.summary(id))
            .collect();
        SceneSummary {
            objects,
            selected: self.state.selected().cloned(),
            mode: self.state.session.mode(),
        }
    }

    /// Export the scene summary as JSON
    pub fn export_scene_json(&mut self) -> String {
        serde_json::to_string_pretty(&self.summary()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_box() {
        let mut h = TestHarness::new();
        let id = h.add_box(1.0, 2.0, 3.0).unwrap();
        assert_eq!(h.object_count(), 1);
        assert_eq!(h.selected(), Some(&id));
        let d = h.dimensions(&id).unwrap();
        assert!((d.height - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_add_box_at() {
        let mut h = TestHarness::new();
        let id = h.add_box_at(1.0, 1.0, 1.0, 4.0, -2.0).unwrap();
        let c = h.bounding_box(&id).unwrap().center();
        assert!((c.x - 4.0).abs() < 1e-5);
        assert!((c.z + 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_click_ray_selects() {
        let mut h = TestHarness::new();
        let a = h.add_box_at(1.0, 1.0, 1.0, 0.0, 0.0).unwrap();
        let _b = h.add_box_at(1.0, 1.0, 1.0, 3.0, 0.0).unwrap();
        h.click_ray(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);
        assert_eq!(h.selected(), Some(&a));
        h.click_ray(Vec3::new(10.0, 10.0, 10.0), Vec3::NEG_Y);
        assert!(h.selected().is_none());
    }

    #[test]
    fn test_export_scene_json() {
        let mut h = TestHarness::new();
        h.add_box(1.0, 1.0, 1.0).unwrap();
        let json = h.export_scene_json();
        assert!(json.contains("Object 1"));
        assert!(json.contains("initial_size"));
    }
}
