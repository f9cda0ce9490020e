//! Wireframe rendering for the viewport

use egui::{Color32, Painter, Rect, Stroke, Ui};
use glam::Vec3;

use super::camera::ArcBallCamera;
use super::mesh;
use crate::geometry::Aabb;
use crate::state::settings::GridSettings;
use crate::state::{AppState, HighlightStyle};

pub fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// Paint the 3D viewport using egui's painter (wireframe rendering)
pub fn paint_viewport(ui: &Ui, rect: Rect, camera: &ArcBallCamera, state: &AppState) {
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 0.0, rgb(state.settings.viewport.background_color));

    if state.settings.grid.visible {
        draw_grid(&painter, rect, camera, &state.settings.grid);
    }
    if state.settings.viewport.show_axes {
        draw_axes(&painter, rect, camera);
    }

    // Meshes, in graph order
    let graph = &state.scene.graph;
    let base = rgb(state.settings.viewport.mesh_color);
    let selected_root = state
        .selection
        .selected()
        .and_then(|id| state.scene.get(id))
        .map(|o| o.root);

    for id in 0..graph.len() {
        let Some(node) = graph.node(id) else {
            continue;
        };
        let Some(mesh) = &node.mesh else {
            continue;
        };
        let selected = selected_root.is_some_and(|r| graph.ancestors(id).any(|a| a == r));
        let stroke = Stroke::new(
            if selected { 1.2 } else { 0.8 },
            if selected { base } else { base.gamma_multiply(0.7) },
        );

        let world = node.world_matrix();
        let projected: Vec<Option<egui::Pos2>> = mesh
            .positions
            .iter()
            .map(|p| camera.project(world.transform_point3(*p), rect))
            .collect();

        for (a, b) in mesh.edges() {
            if let (Some(Some(pa)), Some(Some(pb))) =
                (projected.get(a as usize), projected.get(b as usize))
            {
                painter.line_segment([*pa, *pb], stroke);
            }
        }
    }

    // Highlight boxes
    let hl = &state.settings.highlight;
    for obj in state.scene.objects() {
        if !obj.highlight.visible {
            continue;
        }
        let color = match obj.highlight.style {
            HighlightStyle::Active => rgb(hl.active_color),
            HighlightStyle::Inactive => rgb(hl.inactive_color),
        };
        draw_box(&painter, rect, camera, &obj.highlight.extents, Stroke::new(hl.thickness, color));
    }
}

fn draw_grid(painter: &Painter, rect: Rect, camera: &ArcBallCamera, settings: &GridSettings) {
    let alpha = (settings.opacity.clamp(0.0, 1.0) * 255.0) as u8;
    let stroke = Stroke::new(0.5, Color32::from_rgba_premultiplied(60, 60, 60, alpha));

    for (a, b) in mesh::grid_lines(settings.range, settings.size) {
        if let (Some(pa), Some(pb)) = (camera.project(a, rect), camera.project(b, rect)) {
            if rect.contains(pa) || rect.contains(pb) {
                painter.line_segment([pa, pb], stroke);
            }
        }
    }
}

fn draw_axes(painter: &Painter, rect: Rect, camera: &ArcBallCamera) {
    let axes = [
        (Vec3::X, Color32::from_rgb(200, 60, 60)),
        (Vec3::Y, Color32::from_rgb(60, 180, 60)),
        (Vec3::Z, Color32::from_rgb(60, 90, 210)),
    ];
    for (dir, color) in axes {
        draw_line_3d(painter, rect, camera, Vec3::ZERO, dir * 1.5, Stroke::new(1.5, color));
    }
}

/// Draw the 12 edges of an AABB
pub fn draw_box(painter: &Painter, rect: Rect, camera: &ArcBallCamera, aabb: &Aabb, stroke: Stroke) {
    if aabb.is_empty() {
        return;
    }
    let corners = aabb.corners();
    let projected: Vec<Option<egui::Pos2>> =
        corners.iter().map(|c| camera.project(*c, rect)).collect();
    for (i, j) in Aabb::EDGES {
        if let (Some(a), Some(b)) = (projected[i], projected[j]) {
            painter.line_segment([a, b], stroke);
        }
    }
}

/// Draw a line between two world points
pub fn draw_line_3d(
    painter: &Painter,
    rect: Rect,
    camera: &ArcBallCamera,
    a: Vec3,
    b: Vec3,
    stroke: Stroke,
) {
    if let (Some(pa), Some(pb)) = (camera.project(a, rect), camera.project(b, rect)) {
        painter.line_segment([pa, pb], stroke);
    }
}
