//! Editor actions on `AppState`: selection, drag lifecycle, mode switch,
//! import and dimension editing.
//!
//! The UI, the harness and the command interface all go through these.

use std::path::Path;

use glam::Vec3;
use shared::{Dimensions, ObjectId, TransformMode};

use super::dimension_dialog::{DialogOutcome, DimensionPurpose};
use super::selection::highlight_rule;
use super::{AppState, Notice};
use crate::import::{self, ImportError, PendingMesh};
use crate::scene_graph::NodeId;
use crate::viewport::mesh::MeshData;

impl AppState {
    // ── Selection ───────────────────────────────────────────────

    /// Select a registered object. Returns false for unknown ids.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.scene.contains(id) {
            return false;
        }
        if self.selection.is_selected(id) {
            return true;
        }
        self.deselect();
        self.selection.set(id.to_string());
        self.session.attach(id.to_string());
        self.refresh_highlights();
        tracing::info!("Selected {}", id);
        true
    }

    /// Clear the selection and detach the gizmo. Also recovers from an
    /// interrupted drag.
    pub fn deselect(&mut self) {
        if self.session.end() {
            tracing::warn!("Drag interrupted by deselect");
        }
        self.session.detach();
        if let Some(prev) = self.selection.clear() {
            tracing::info!("Deselected {}", prev);
        }
        self.refresh_highlights();
    }

    /// Escape always deselects
    pub fn handle_escape(&mut self) {
        self.deselect();
    }

    /// Viewport click: a hit on any part selects its registered object,
    /// a miss (or a hit on something unregistered) deselects.
    pub fn click_node(&mut self, hit: Option<NodeId>) {
        let target = hit.and_then(|n| self.scene.registered_root_of(n).cloned());
        match target {
            Some(id) => {
                self.select(&id);
            }
            None => self.deselect(),
        }
    }

    /// Apply the highlight rule to every object and refresh the extents of
    /// the ones that end up visible
    pub fn refresh_highlights(&mut self) {
        let translate_drag = self.session.translate_drag();
        for id in self.scene.ids() {
            let rule = highlight_rule(self.selection.is_selected(&id), translate_drag);
            let Some(obj) = self.scene.get_mut(&id) else {
                continue;
            };
            match rule {
                Some(style) => {
                    obj.highlight.show(style);
                    self.scene.refresh_highlight(&id);
                }
                None => obj.highlight.hide(),
            }
        }
    }

    pub fn selected(&self) -> Option<&ObjectId> {
        self.selection.selected()
    }

    // ── Manipulation ────────────────────────────────────────────

    /// Switch gizmo mode. Ignored during a drag or with nothing selected.
    pub fn set_mode(&mut self, mode: TransformMode) -> bool {
        if !self.session.set_mode(mode) {
            return false;
        }
        self.refresh_highlights();
        true
    }

    /// Gizmo drag started
    pub fn begin_drag(&mut self) -> bool {
        let origin = self
            .selection
            .selected()
            .and_then(|id| self.scene.position(id))
            .unwrap_or(Vec3::ZERO);
        if !self.session.begin(origin) {
            return false;
        }
        tracing::debug!("Drag started ({:?})", self.session.mode());
        self.refresh_highlights();
        true
    }

    /// Gizmo changed the selected object's transform
    pub fn object_changed(&mut self) {
        let Some(id) = self.selection.selected().cloned() else {
            return;
        };
        if !self.session.is_dragging() {
            return;
        }
        match self.session.mode() {
            TransformMode::Translate => {
                if self.settings.snap.enabled {
                    self.scene.snap_object(&id, self.settings.snap.threshold);
                }
            }
            TransformMode::Scale => {
                self.scene.ground_object(&id);
            }
            TransformMode::Rotate => {}
        }
        self.refresh_highlights();
    }

    /// Gizmo drag finished
    pub fn end_drag(&mut self) {
        if !self.session.end() {
            return;
        }
        self.refresh_highlights();
        if let Some(id) = self.selection.selected().cloned() {
            self.scene.refresh_row(&id, self.settings.dimensions.precision);
        }
        tracing::debug!("Drag ended");
    }

    /// Translate step of a drag.
    ///
    /// Deltas add up from where the drag began; the snap only adjusts the
    /// displayed position, so small moves away from a contact are not lost.
    pub fn drag_translate(&mut self, delta: Vec3) -> bool {
        if !self.can_apply(TransformMode::Translate) {
            return false;
        }
        let target = self.session.drag_by(delta);
        if let Some(id) = self.selection.selected().cloned() {
            self.scene.set_position(&id, target);
        }
        self.object_changed();
        true
    }

    /// Rotate step of a drag (about the vertical axis)
    pub fn drag_rotate(&mut self, radians: f32) -> bool {
        if !self.can_apply(TransformMode::Rotate) {
            return false;
        }
        if let Some(id) = self.selection.selected().cloned() {
            self.scene.rotate_object_y(&id, radians);
        }
        self.object_changed();
        true
    }

    /// Scale step of a drag (per-axis factors)
    pub fn drag_scale(&mut self, factors: Vec3) -> bool {
        if !self.can_apply(TransformMode::Scale) {
            return false;
        }
        if let Some(id) = self.selection.selected().cloned() {
            self.scene
                .scale_object(&id, factors, self.settings.gizmo.min_scale);
        }
        self.object_changed();
        true
    }

    fn can_apply(&self, mode: TransformMode) -> bool {
        self.session.is_dragging() && self.session.mode() == mode && self.selection.has_selection()
    }

    // ── Import / dimensions ─────────────────────────────────────

    /// Load a mesh file picked by the user and open the dimension dialog
    pub fn request_import_file(&mut self, path: &Path) {
        match import::load_obj_file(path) {
            Ok(pending) => self.request_import(pending),
            Err(e) => {
                tracing::error!("Import of {} failed: {}", path.display(), e);
                self.report_error("Import failed", e.to_string());
            }
        }
    }

    /// Open the dimension dialog for an already parsed mesh
    pub fn request_import(&mut self, pending: PendingMesh) {
        let defaults = self.settings.dimensions.import_defaults;
        self.dimension_dialog.open_import(pending, defaults);
    }

    /// Open the dimension dialog for an existing object
    pub fn request_edit(&mut self, id: &str) -> bool {
        let Some(current) = self.scene.edit_dimensions(id) else {
            return false;
        };
        self.dimension_dialog.open_edit(id.to_string(), current);
        true
    }

    pub fn request_edit_selected(&mut self) -> bool {
        match self.selection.selected().cloned() {
            Some(id) => self.request_edit(&id),
            None => false,
        }
    }

    /// Register a mesh at the given size and select it
    pub fn import_with_dimensions(
        &mut self,
        mesh: MeshData,
        dimensions: Dimensions,
    ) -> Result<ObjectId, ImportError> {
        let id = self
            .scene
            .import_mesh(mesh, dimensions, self.settings.dimensions.precision)?;
        self.select(&id);
        Ok(id)
    }

    /// Resize an object; invalid dimensions change nothing
    pub fn set_dimensions(&mut self, id: &str, dimensions: Dimensions) -> Result<bool, shared::DimensionError> {
        let changed = self
            .scene
            .set_dimensions(id, dimensions, self.settings.dimensions.precision)?;
        if changed {
            self.refresh_highlights();
        }
        Ok(changed)
    }

    /// OK pressed in the dimension dialog. Returns the affected object.
    pub fn submit_dimension_dialog(&mut self) -> Option<ObjectId> {
        match self.dimension_dialog.submit()? {
            DialogOutcome::Submitted {
                purpose: DimensionPurpose::Import(pending),
                dimensions,
            } => match self.import_with_dimensions(pending.mesh, dimensions) {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::error!("Import of {} failed: {}", pending.source, e);
                    self.report_error("Import failed", e.to_string());
                    None
                }
            },
            DialogOutcome::Submitted {
                purpose: DimensionPurpose::Edit(id),
                dimensions,
            } => match self.set_dimensions(&id, dimensions) {
                Ok(true) => Some(id),
                Ok(false) => None,
                Err(e) => {
                    self.report_error("Invalid dimensions", e.to_string());
                    None
                }
            },
            DialogOutcome::Invalid(e) => {
                tracing::warn!("Dimension input rejected: {}", e);
                self.report_error("Invalid dimensions", e.to_string());
                None
            }
        }
    }

    /// Cancel pressed in the dimension dialog
    pub fn cancel_dimension_dialog(&mut self) {
        if let Some(DimensionPurpose::Import(pending)) = self.dimension_dialog.cancel() {
            tracing::info!("Import of {} cancelled", pending.source);
        }
    }

    // ── Messages ────────────────────────────────────────────────

    pub fn report_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notice = Some(Notice {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::state::{AppSettings, HighlightStyle};

    fn state() -> AppState {
        AppState::with_settings(AppSettings::default())
    }

    fn add_cube(s: &mut AppState) -> ObjectId {
        s.import_with_dimensions(fixtures::unit_cube_mesh(), fixtures::unit_dims())
            .unwrap()
    }

    #[test]
    fn test_import_selects_new_object() {
        let mut s = state();
        let a = add_cube(&mut s);
        assert_eq!(s.selected(), Some(&a));
        assert_eq!(s.session.attached(), Some(&a));
        let obj = s.scene.get(&a).unwrap();
        assert!(obj.highlight.visible);
        assert_eq!(obj.highlight.style, HighlightStyle::Active);
    }

    #[test]
    fn test_select_switches_highlight() {
        let mut s = state();
        let a = add_cube(&mut s);
        let b = add_cube(&mut s);
        assert!(s.select(&a));
        assert!(s.scene.get(&a).unwrap().highlight.visible);
        assert!(!s.scene.get(&b).unwrap().highlight.visible);
    }

    #[test]
    fn test_select_unknown_is_refused() {
        let mut s = state();
        let a = add_cube(&mut s);
        assert!(!s.select("missing"));
        assert_eq!(s.selected(), Some(&a));
    }

    #[test]
    fn test_reselect_keeps_mode() {
        let mut s = state();
        let a = add_cube(&mut s);
        s.set_mode(TransformMode::Scale);
        s.select(&a);
        assert_eq!(s.session.mode(), TransformMode::Scale);
    }

    #[test]
    fn test_select_other_resets_mode() {
        let mut s = state();
        let a = add_cube(&mut s);
        let _b = add_cube(&mut s);
        s.set_mode(TransformMode::Rotate);
        s.select(&a);
        assert_eq!(s.session.mode(), TransformMode::Translate);
    }

    #[test]
    fn test_deselect_during_drag_recovers() {
        let mut s = state();
        let a = add_cube(&mut s);
        let b = add_cube(&mut s);
        s.select(&a);
        s.begin_drag();
        assert!(s.scene.get(&b).unwrap().highlight.visible);
        s.deselect();
        assert!(!s.session.is_dragging());
        assert!(s.session.orbit_enabled());
        assert!(s.session.attached().is_none());
        assert!(s.scene.objects().iter().all(|o| !o.highlight.visible));
    }

    #[test]
    fn test_translate_drag_shows_inactive_highlights() {
        let mut s = state();
        let a = add_cube(&mut s);
        let b = add_cube(&mut s);
        s.select(&a);
        s.begin_drag();
        let hb = s.scene.get(&b).unwrap().highlight;
        assert!(hb.visible);
        assert_eq!(hb.style, HighlightStyle::Inactive);
        s.end_drag();
        assert!(!s.scene.get(&b).unwrap().highlight.visible);
    }

    #[test]
    fn test_rotate_drag_hides_other_highlights() {
        let mut s = state();
        let a = add_cube(&mut s);
        let b = add_cube(&mut s);
        s.select(&a);
        s.set_mode(TransformMode::Rotate);
        s.begin_drag();
        assert!(!s.scene.get(&b).unwrap().highlight.visible);
    }

    #[test]
    fn test_drag_step_requires_matching_mode() {
        let mut s = state();
        add_cube(&mut s);
        assert!(!s.drag_translate(Vec3::X));
        s.begin_drag();
        assert!(!s.drag_rotate(0.5));
        assert!(s.drag_translate(Vec3::X));
    }

    #[test]
    fn test_small_translate_steps_leave_the_ground() {
        let mut s = state();
        let a = add_cube(&mut s);
        assert!(s.begin_drag());
        for _ in 0..40 {
            assert!(s.drag_translate(Vec3::new(0.0, 0.025, 0.0)));
        }
        s.end_drag();
        let aabb = s.scene.bounding_box(&a).unwrap();
        assert!((aabb.min.y - 1.0).abs() < 1e-4, "min.y = {}", aabb.min.y);
    }

    #[test]
    fn test_edit_request_prefills_rotated_footprint() {
        let mut s = state();
        let a = s
            .import_with_dimensions(fixtures::unit_cube_mesh(), fixtures::dims(1.0, 2.0, 3.0))
            .unwrap();
        s.set_mode(TransformMode::Rotate);
        s.begin_drag();
        s.drag_rotate(std::f32::consts::FRAC_PI_2);
        s.end_drag();
        let before = s.scene.dimensions(&a).unwrap();

        assert!(s.request_edit(&a));
        assert_eq!(s.submit_dimension_dialog(), Some(a.clone()));
        let after = s.scene.dimensions(&a).unwrap();
        assert!((after.width - before.width).abs() < 1e-4);
        assert!((after.depth - before.depth).abs() < 1e-4);
        assert!((after.width - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_click_miss_deselects() {
        let mut s = state();
        add_cube(&mut s);
        s.click_node(None);
        assert!(s.selected().is_none());
    }

    #[test]
    fn test_cancel_import_registers_nothing() {
        let mut s = state();
        s.request_import(PendingMesh {
            source: "cube.obj".into(),
            mesh: fixtures::unit_cube_mesh(),
        });
        assert!(s.modal_open());
        s.cancel_dimension_dialog();
        assert!(s.scene.is_empty());
        assert!(s.notice.is_none());
        assert!(!s.modal_open());
    }

    #[test]
    fn test_invalid_submit_reports_and_registers_nothing() {
        let mut s = state();
        s.request_import(PendingMesh {
            source: "cube.obj".into(),
            mesh: fixtures::unit_cube_mesh(),
        });
        s.dimension_dialog.fields_mut().unwrap()[2] = "abc".into();
        assert!(s.submit_dimension_dialog().is_none());
        assert!(s.scene.is_empty());
        assert!(s.notice.is_some());
    }

    #[test]
    fn test_wrong_extension_reports() {
        let mut s = state();
        s.request_import_file(Path::new("model.stl"));
        assert!(!s.dimension_dialog.is_open());
        assert!(s.notice.as_ref().unwrap().message.contains(".obj"));
    }
}
