//! Toolbar actions and UI

use egui::Ui;
use shared::TransformMode;

use crate::i18n::t;
use crate::state::AppState;

use super::status_bar::mode_label;

// ── Public actions (callable from menus too) ─────────────────

/// Ask for an OBJ file and open the dimension dialog for it
pub fn action_import(state: &mut AppState) {
    if state.modal_open() {
        return;
    }
    if let Some(path) = rfd::FileDialog::new()
        .set_title(t("menu.import_title"))
        .add_filter("OBJ", &[crate::import::MESH_EXTENSION])
        .pick_file()
    {
        state.request_import_file(&path);
    }
}

pub fn action_edit_dimensions(state: &mut AppState) {
    if !state.modal_open() {
        state.request_edit_selected();
    }
}

fn mode_tip(mode: TransformMode) -> &'static str {
    match mode {
        TransformMode::Translate => t("mode.translate_tip"),
        TransformMode::Rotate => t("mode.rotate_tip"),
        TransformMode::Scale => t("mode.scale_tip"),
    }
}

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!state.modal_open(), egui::Button::new(t("toolbar.import")))
            .on_hover_text(t("toolbar.import_tip"))
            .clicked()
        {
            action_import(state);
        }

        ui.separator();

        // ── Gizmo mode ──
        let can_switch = state.session.attached().is_some() && !state.session.is_dragging();
        let current = state.session.mode();
        for &mode in TransformMode::all() {
            let button = egui::Button::new(mode_label(mode)).selected(current == mode);
            if ui
                .add_enabled(can_switch, button)
                .on_hover_text(mode_tip(mode))
                .clicked()
            {
                state.set_mode(mode);
            }
        }

        ui.separator();

        if ui
            .add_enabled(
                state.selection.has_selection() && !state.modal_open(),
                egui::Button::new(t("toolbar.edit_dims")),
            )
            .clicked()
        {
            action_edit_dimensions(state);
        }

        ui.separator();
        ui.checkbox(&mut state.settings.snap.enabled, t("toolbar.snap"));
    });
}
