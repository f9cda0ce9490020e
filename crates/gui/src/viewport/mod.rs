//! 3D viewport panel (software wireframe rendering)

mod camera;
mod gizmo;
mod overlays;
mod renderer;
pub use meshstage_lib::viewport::{mesh, picking};

use egui::Ui;
use glam::Vec3;
use shared::TransformMode;

use crate::state::AppState;
use camera::ArcBallCamera;
use gizmo::{
    compute_drag_delta, compute_rotate_delta, compute_scale_factors, draw_gizmo, gizmo_hit_test,
    handle_metrics, GizmoState,
};

/// 3D viewport panel
pub struct ViewportPanel {
    camera: ArcBallCamera,
    gizmo_state: GizmoState,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: ArcBallCamera::new(),
            gizmo_state: GizmoState::default(),
        }
    }

    pub fn reset_camera(&mut self) {
        self.camera = ArcBallCamera::new();
    }

    /// Frame the selected object
    pub fn focus_selected(&mut self, state: &mut AppState) {
        let Some(id) = state.selected().cloned() else {
            return;
        };
        if let Some(aabb) = state.scene.bounding_box(&id) {
            self.camera.frame(&aabb);
        }
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        // Gizmo sits on the selected object's box centre
        let gizmo_center = state
            .session
            .attached()
            .cloned()
            .and_then(|id| state.scene.bounding_box(&id))
            .map(|aabb| aabb.center());

        // ── Gizmo and camera controls ─────────────────────────────
        let gizmo_consumed = self.handle_gizmo_and_camera(&response, ui, rect, state, gizmo_center);

        // ── Scroll zoom ─────────────────────────────
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.01);
            }
        }

        // ── Object selection via click ──────────────────────────
        if !gizmo_consumed {
            self.handle_selection(&response, rect, state, gizmo_center);
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        renderer::paint_viewport(ui, rect, &self.camera, state);

        if let Some(center) = gizmo_center {
            let painter = ui.painter_at(rect);
            let (length, _) =
                handle_metrics(&self.camera, center, state.settings.gizmo.length, rect);
            draw_gizmo(
                &painter,
                &self.camera,
                center,
                length,
                state.session.mode(),
                self.gizmo_state.active_axis,
                rect,
            );
        }

        self.draw_overlays(ui, rect, state);
    }

    /// Returns true when the pointer interaction belonged to the gizmo
    fn handle_gizmo_and_camera(
        &mut self,
        response: &egui::Response,
        ui: &Ui,
        rect: egui::Rect,
        state: &mut AppState,
        gizmo_center: Option<Vec3>,
    ) -> bool {
        // ── Gizmo drag handling ─────────────────────────────────
        if state.session.is_dragging() {
            if response.dragged_by(egui::PointerButton::Primary) {
                let delta = response.drag_delta();
                if let (Some(axis), Some(center)) = (self.gizmo_state.active_axis, gizmo_center) {
                    match state.session.mode() {
                        TransformMode::Translate => {
                            let world_delta =
                                compute_drag_delta(&self.camera, center, axis, delta, rect);
                            state.drag_translate(world_delta);
                        }
                        TransformMode::Rotate => {
                            state.drag_rotate(compute_rotate_delta(delta));
                        }
                        TransformMode::Scale => {
                            let uniform = ui.input(|i| i.modifiers.shift);
                            let factors = compute_scale_factors(
                                &self.camera,
                                center,
                                axis,
                                delta,
                                state.settings.gizmo.length,
                                uniform,
                                rect,
                            );
                            state.drag_scale(factors);
                        }
                    }
                }
            }
            // End drag when button released
            if response.drag_stopped() || !response.dragged_by(egui::PointerButton::Primary) {
                self.gizmo_state.end_drag();
                state.end_drag();
            }
            return true;
        }

        // ── Gizmo drag start on LMB drag ───────────────────
        let alt = ui.input(|i| i.modifiers.alt);
        if response.drag_started_by(egui::PointerButton::Primary) && !alt {
            let pointer_pos = response.interact_pointer_pos().or_else(|| response.hover_pos());
            if let (Some(pos), Some(center)) = (pointer_pos, gizmo_center) {
                if let Some(axis) = self.hit_gizmo(pos, rect, state, center) {
                    if state.begin_drag() {
                        self.gizmo_state.active_axis = Some(axis);
                        return true;
                    }
                }
            }
        }

        // ── Camera controls (only when not dragging gizmo) ──
        if state.session.orbit_enabled() {
            if response.dragged_by(egui::PointerButton::Middle)
                || response.dragged_by(egui::PointerButton::Primary)
            {
                let delta = response.drag_delta();
                self.camera.rotate(delta.x * 0.5, delta.y * 0.5);
            }

            if response.dragged_by(egui::PointerButton::Secondary) {
                let delta = response.drag_delta();
                self.camera.pan(delta.x * 0.01, delta.y * 0.01);
            }
        }
        false
    }

    fn hit_gizmo(
        &self,
        pos: egui::Pos2,
        rect: egui::Rect,
        state: &AppState,
        center: Vec3,
    ) -> Option<shared::Axis> {
        let ray = self.camera.screen_ray(pos, rect);
        let (length, tolerance) =
            handle_metrics(&self.camera, center, state.settings.gizmo.length, rect);
        gizmo_hit_test(&ray, center, length, tolerance, state.session.mode())
    }

    fn handle_selection(
        &mut self,
        response: &egui::Response,
        rect: egui::Rect,
        state: &mut AppState,
        gizmo_center: Option<Vec3>,
    ) {
        if !response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };
        if let Some(center) = gizmo_center {
            if self.hit_gizmo(pos, rect, state, center).is_some() {
                return;
            }
        }

        let ray = self.camera.screen_ray(pos, rect);
        state.scene.graph.update_all();
        let hit = picking::pick_node(&ray, &state.scene.graph).map(|h| h.node);
        state.click_node(hit);
    }

    fn draw_overlays(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);

        if state.settings.viewport.show_axes {
            overlays::draw_axis_labels(&painter, rect, &self.camera);
        }

        overlays::draw_dimension_label(&painter, rect, &self.camera, state);

        overlays::draw_camera_info(&painter, rect, &self.camera);

        // Navigation hint
        if state.scene.is_empty() {
            overlays::draw_nav_hint(&painter, rect);
        }
    }
}
