//! Viewport overlay drawing (axis labels, dimension label, hints)

use egui::Painter;
use glam::Vec3;
use shared::Dimensions;

use crate::i18n::t;
use crate::state::{format_dimensions, AppState};

use super::camera::ArcBallCamera;

/// Draw axis labels in the viewport
pub fn draw_axis_labels(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera) {
    let labels = [
        (Vec3::new(1.6, 0.0, 0.0), "X", egui::Color32::from_rgb(220, 70, 70)),
        (Vec3::new(0.0, 1.6, 0.0), "Y", egui::Color32::from_rgb(70, 200, 70)),
        (Vec3::new(0.0, 0.0, 1.6), "Z", egui::Color32::from_rgb(70, 110, 220)),
    ];

    for (pos, label, color) in &labels {
        if let Some(screen) = camera.project(*pos, rect) {
            if rect.contains(screen) {
                painter.text(
                    screen,
                    egui::Align2::LEFT_BOTTOM,
                    *label,
                    egui::FontId::monospace(12.0),
                    *color,
                );
            }
        }
    }
}

/// W x H x D label above the selected object's highlight box
pub fn draw_dimension_label(
    painter: &Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    state: &AppState,
) {
    if !state.settings.dimensions.show_labels {
        return;
    }
    let Some(obj) = state.selected().and_then(|id| state.scene.get(id)) else {
        return;
    };
    if !obj.highlight.visible || obj.highlight.extents.is_empty() {
        return;
    }

    let extents = &obj.highlight.extents;
    let anchor = Vec3::new(extents.center().x, extents.max.y, extents.center().z);
    let Some(screen) = camera.project(anchor, rect) else {
        return;
    };
    if !rect.contains(screen) {
        return;
    }

    let size = extents.size();
    let dims = Dimensions::new(size.x as f64, size.y as f64, size.z as f64);
    let text = format_dimensions(dims, state.settings.dimensions.precision);
    let galley = painter.layout_no_wrap(
        text,
        egui::FontId::monospace(11.0),
        egui::Color32::from_rgb(230, 230, 235),
    );
    let pos = screen - egui::vec2(galley.size().x * 0.5, galley.size().y + 8.0);
    painter.rect_filled(
        egui::Rect::from_min_size(pos, galley.size()).expand(3.0),
        3.0,
        egui::Color32::from_rgba_premultiplied(0, 0, 0, 160),
    );
    painter.galley(pos, galley, egui::Color32::WHITE);
}

/// Camera distance and angles in the top right corner
pub fn draw_camera_info(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera) {
    let overlay_rect = egui::Rect::from_min_size(
        egui::pos2(rect.right() - 140.0, rect.top() + 4.0),
        egui::vec2(136.0, 44.0),
    );
    painter.rect_filled(
        overlay_rect,
        4.0,
        egui::Color32::from_rgba_premultiplied(0, 0, 0, 140),
    );
    painter.text(
        overlay_rect.min + egui::vec2(6.0, 4.0),
        egui::Align2::LEFT_TOP,
        format!(
            "Dist: {:.1}\nYaw: {:.0}  Pitch: {:.0}",
            camera.distance,
            camera.yaw.to_degrees(),
            camera.pitch.to_degrees(),
        ),
        egui::FontId::monospace(10.0),
        egui::Color32::from_rgb(160, 160, 170),
    );
}

pub fn draw_nav_hint(painter: &Painter, rect: egui::Rect) {
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 20.0),
        egui::Align2::CENTER_BOTTOM,
        t("status.nav_hint"),
        egui::FontId::proportional(11.0),
        egui::Color32::from_rgb(100, 100, 110),
    );
}
