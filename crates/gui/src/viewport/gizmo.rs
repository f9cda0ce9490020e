use egui::{Color32, Painter, Stroke};
use glam::Vec3;
use shared::{Axis, TransformMode};

use super::camera::ArcBallCamera;
use super::picking::Ray;

/// Radians of spin per pixel of horizontal drag in rotate mode
const ROTATE_SPEED: f32 = 0.01;
/// Pick tolerance around a handle, in pixels
const HIT_TOLERANCE_PX: f32 = 8.0;

/// State of the manipulation gizmo in the viewport
#[derive(Default)]
pub struct GizmoState {
    /// Currently dragged handle
    pub active_axis: Option<Axis>,
}

impl GizmoState {
    pub fn end_drag(&mut self) {
        self.active_axis = None;
    }
}

pub fn axis_dir(axis: Axis) -> Vec3 {
    match axis {
        Axis::X => Vec3::X,
        Axis::Y => Vec3::Y,
        Axis::Z => Vec3::Z,
    }
}

pub fn axis_color(axis: Axis) -> Color32 {
    match axis {
        Axis::X => Color32::from_rgb(220, 60, 60),
        Axis::Y => Color32::from_rgb(60, 200, 60),
        Axis::Z => Color32::from_rgb(60, 100, 230),
    }
}

/// Test if a ray hits one of the handles exposed in `mode`.
/// `axis_length` is in world units.
pub fn gizmo_hit_test(
    ray: &Ray,
    center: Vec3,
    axis_length: f32,
    threshold: f32,
    mode: TransformMode,
) -> Option<Axis> {
    let mut best: Option<(Axis, f32)> = None;

    for &axis in mode.axes() {
        let line_end = center + axis_dir(axis) * axis_length;
        let dist = ray_line_distance(ray, center, line_end);

        if dist < threshold && best.is_none_or(|(_, d)| dist < d) {
            best = Some((axis, dist));
        }
    }

    best.map(|(axis, _)| axis)
}

/// World-space handle length and pick tolerance for a gizmo drawn
/// `length_px` pixels long at `center`
pub fn handle_metrics(
    camera: &ArcBallCamera,
    center: Vec3,
    length_px: f32,
    rect: egui::Rect,
) -> (f32, f32) {
    let wpp = camera.world_per_pixel(center, rect);
    (length_px * wpp, HIT_TOLERANCE_PX * wpp)
}

/// Screen-space direction of a world axis at `center`, with its pixel length per world unit
fn screen_axis(
    camera: &ArcBallCamera,
    center: Vec3,
    axis: Axis,
    rect: egui::Rect,
) -> Option<(egui::Vec2, f32)> {
    let p0 = camera.project(center, rect)?;
    let p1 = camera.project(center + axis_dir(axis), rect)?;
    let v = p1 - p0;
    let len = v.length();
    if len < 1.0 {
        return None;
    }
    Some((v / len, len))
}

/// Compute the world-space translation delta for a gizmo drag.
/// Projects the screen-space drag delta along the axis direction in screen space.
pub fn compute_drag_delta(
    camera: &ArcBallCamera,
    center: Vec3,
    axis: Axis,
    screen_delta: egui::Vec2,
    rect: egui::Rect,
) -> Vec3 {
    let Some((dir, px_per_unit)) = screen_axis(camera, center, axis, rect) else {
        return Vec3::ZERO;
    };
    let projected = screen_delta.dot(dir);
    axis_dir(axis) * (projected / px_per_unit)
}

/// Spin angle for a rotate drag
pub fn compute_rotate_delta(screen_delta: egui::Vec2) -> f32 {
    screen_delta.x * ROTATE_SPEED
}

/// Per-axis scale factors for a scale drag.
///
/// Dragging a handle by its own length doubles the scale on that axis.
/// With `uniform` all three axes scale together.
pub fn compute_scale_factors(
    camera: &ArcBallCamera,
    center: Vec3,
    axis: Axis,
    screen_delta: egui::Vec2,
    length_px: f32,
    uniform: bool,
    rect: egui::Rect,
) -> Vec3 {
    let Some((dir, _)) = screen_axis(camera, center, axis, rect) else {
        return Vec3::ONE;
    };
    let factor = (1.0 + screen_delta.dot(dir) / length_px.max(1.0)).max(0.01);
    if uniform {
        Vec3::splat(factor)
    } else {
        let mut f = Vec3::ONE;
        f[axis.index()] = factor;
        f
    }
}

/// Draw the handles exposed in `mode`
pub fn draw_gizmo(
    painter: &Painter,
    camera: &ArcBallCamera,
    center: Vec3,
    axis_length: f32,
    mode: TransformMode,
    active: Option<Axis>,
    rect: egui::Rect,
) {
    let Some(origin) = camera.project(center, rect) else {
        return;
    };

    for &axis in mode.axes() {
        let Some(tip) = camera.project(center + axis_dir(axis) * axis_length, rect) else {
            continue;
        };
        let color = if active == Some(axis) {
            Color32::from_rgb(255, 230, 80)
        } else {
            axis_color(axis)
        };
        let stroke = Stroke::new(2.5, color);
        painter.line_segment([origin, tip], stroke);

        match mode {
            TransformMode::Translate => {
                let back = (origin - tip).normalized() * 10.0;
                let side = egui::vec2(-back.y, back.x) * 0.5;
                painter.line_segment([tip, tip + back + side], stroke);
                painter.line_segment([tip, tip + back - side], stroke);
            }
            TransformMode::Scale => {
                painter.rect_filled(egui::Rect::from_center_size(tip, egui::vec2(8.0, 8.0)), 0.0, color);
            }
            TransformMode::Rotate => {
                painter.circle_stroke(origin, (tip - origin).length(), stroke);
            }
        }
        painter.text(
            tip + egui::vec2(4.0, -4.0),
            egui::Align2::LEFT_BOTTOM,
            axis.label(),
            egui::FontId::monospace(11.0),
            color,
        );
    }
}

// ── Helpers ──────────────────────────────────────────────────

/// Minimum distance between a ray and a line segment.
fn ray_line_distance(ray: &Ray, line_start: Vec3, line_end: Vec3) -> f32 {
    let u = ray.direction;
    let v = line_end - line_start;
    let w = ray.origin - line_start;

    let a = u.dot(u); // always >= 0
    let b = u.dot(v);
    let c = v.dot(v); // always >= 0
    let d = u.dot(w);
    let e = v.dot(w);

    let denom = a * c - b * b;

    let (sc, tc);

    if denom < 1e-7 {
        // Nearly parallel
        sc = 0.0;
        tc = if b > c { d / b } else { e / c };
    } else {
        sc = (b * e - c * d) / denom;
        tc = (a * e - b * d) / denom;
    }

    let tc = tc.clamp(0.0, 1.0);
    let sc = sc.max(0.0);

    let closest_ray = ray.origin + u * sc;
    let closest_line = line_start + v * tc;

    (closest_ray - closest_line).length()
}
