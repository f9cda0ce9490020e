use egui::Ui;
use shared::TransformMode;

use crate::i18n::t;
use crate::state::{short_id, AppState};

pub fn mode_label(mode: TransformMode) -> &'static str {
    match mode {
        TransformMode::Translate => t("mode.translate"),
        TransformMode::Rotate => t("mode.rotate"),
        TransformMode::Scale => t("mode.scale"),
    }
}

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.weak(format!("{} {}", t("status.objects"), state.scene.len()));

        ui.separator();

        match state.selected().and_then(|id| state.scene.get(id)) {
            Some(obj) => {
                ui.label(format!("{} {} [{}]", t("status.selected"), obj.name, short_id(&obj.id)));
                ui.separator();
                ui.label(format!("{} {}", t("status.mode"), mode_label(state.session.mode())));
                if state.session.is_dragging() {
                    ui.colored_label(egui::Color32::from_rgb(255, 200, 100), t("status.dragging"));
                }
            }
            None => {
                ui.weak(t("status.no_selection"));
            }
        }

        if state.dimension_dialog.is_importing() {
            ui.separator();
            ui.colored_label(egui::Color32::from_rgb(255, 200, 100), t("status.importing"));
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(concat!("Mesh Stage v", env!("CARGO_PKG_VERSION")));
        });
    });
}
