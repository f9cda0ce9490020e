//! Application menu bar and settings window

use eframe::egui;

use crate::i18n::{lang, set_lang, t, Lang};
use crate::state::AppState;
use crate::ui::toolbar;
use crate::viewport::ViewportPanel;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui
            .add_enabled(!state.modal_open(), egui::Button::new(t("menu.import")))
            .clicked()
        {
            ui.close_menu();
            toolbar::action_import(state);
        }
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the edit menu
pub fn edit_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.edit"), |ui| {
        let has_selection = state.selection.has_selection();
        if ui
            .add_enabled(
                has_selection && !state.modal_open(),
                egui::Button::new(t("menu.edit_dims")),
            )
            .clicked()
        {
            toolbar::action_edit_dimensions(state);
            ui.close_menu();
        }
        if ui
            .add_enabled(has_selection, egui::Button::new(t("menu.deselect")))
            .clicked()
        {
            state.deselect();
            ui.close_menu();
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.menu_button(t("menu.view"), |ui| {
        ui.checkbox(&mut state.panels.object_list, t("menu.object_list"));
        ui.checkbox(&mut state.panels.status_bar, t("menu.status_bar"));
        ui.separator();
        if ui.button(t("menu.reset_camera")).clicked() {
            viewport.reset_camera();
            ui.close_menu();
        }
        if ui
            .add_enabled(state.selection.has_selection(), egui::Button::new(t("menu.focus")))
            .clicked()
        {
            viewport.focus_selected(state);
            ui.close_menu();
        }
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            if ui.selectable_label(lang() == Lang::En, "English").clicked() {
                set_lang(Lang::En);
                ui.close_menu();
            }
            if ui.selectable_label(lang() == Lang::Ru, "Русский").clicked() {
                set_lang(Lang::Ru);
                ui.close_menu();
            }
        });
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.settings"), |ui| {
        if ui.button(t("menu.preferences")).clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(400.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_snap_settings(ui, state);
                show_highlight_settings(ui, state);
                show_dimension_settings(ui, state);
                show_grid_settings(ui, state);
                show_viewport_settings(ui, state);
                show_gizmo_settings(ui, state);
                show_ui_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    state.show_settings_window = open && state.show_settings_window;
}

fn color_row(ui: &mut egui::Ui, label: &str, rgb: &mut [u8; 3]) {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut color = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
        if ui.color_edit_button_srgba(&mut color).changed() {
            *rgb = [color.r(), color.g(), color.b()];
        }
    });
}

fn show_snap_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.snap"));
    ui.checkbox(&mut state.settings.snap.enabled, t("settings.snap_enabled"));

    ui.horizontal(|ui| {
        ui.label(t("settings.snap_threshold"));
        ui.add(
            egui::DragValue::new(&mut state.settings.snap.threshold)
                .speed(0.01)
                .range(0.0..=10.0),
        );
    });
    ui.add_space(10.0);
}

fn show_highlight_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.highlight"));
    color_row(ui, t("settings.active_color"), &mut state.settings.highlight.active_color);
    color_row(ui, t("settings.inactive_color"), &mut state.settings.highlight.inactive_color);

    ui.horizontal(|ui| {
        ui.label(t("settings.thickness"));
        ui.add(
            egui::DragValue::new(&mut state.settings.highlight.thickness)
                .speed(0.1)
                .range(0.5..=5.0),
        );
    });
    ui.add_space(10.0);
}

fn show_dimension_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.dimensions"));

    ui.horizontal(|ui| {
        ui.label(t("settings.dim_precision"));
        let changed = ui
            .add(
                egui::DragValue::new(&mut state.settings.dimensions.precision)
                    .speed(1.0)
                    .range(0..=6),
            )
            .changed();
        if changed {
            let precision = state.settings.dimensions.precision;
            for id in state.scene.ids() {
                state.scene.refresh_row(&id, precision);
            }
        }
    });

    ui.checkbox(&mut state.settings.dimensions.show_labels, t("settings.dim_labels"));

    ui.label(t("settings.import_defaults"));
    let defaults = &mut state.settings.dimensions.import_defaults;
    ui.horizontal(|ui| {
        for (label, value) in [
            (t("dialog.width"), &mut defaults.width),
            (t("dialog.height"), &mut defaults.height),
            (t("dialog.depth"), &mut defaults.depth),
        ] {
            ui.label(label);
            ui.add(egui::DragValue::new(value).speed(0.1).range(0.001..=1000.0));
        }
    });
    ui.add_space(10.0);
}

fn show_grid_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.grid"));
    ui.checkbox(&mut state.settings.grid.visible, t("settings.grid_visible"));

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.size)
                .speed(0.1)
                .range(0.1..=100.0),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_range"));
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.range)
                .speed(1)
                .range(1..=50),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_opacity"));
        ui.add(egui::Slider::new(&mut state.settings.grid.opacity, 0.0..=1.0));
    });
    ui.add_space(10.0);
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.viewport"));
    color_row(ui, t("settings.bg_color"), &mut state.settings.viewport.background_color);
    color_row(ui, t("settings.mesh_color"), &mut state.settings.viewport.mesh_color);
    ui.checkbox(&mut state.settings.viewport.show_axes, t("settings.show_axes"));
    ui.add_space(10.0);
}

fn show_gizmo_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.gizmo"));
    ui.horizontal(|ui| {
        ui.label(t("settings.gizmo_length"));
        ui.add(
            egui::DragValue::new(&mut state.settings.gizmo.length)
                .speed(1.0)
                .range(30.0..=300.0),
        );
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.min_scale"));
        ui.add(
            egui::DragValue::new(&mut state.settings.gizmo.min_scale)
                .speed(0.001)
                .range(0.001..=1.0),
        );
    });
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.ui"));
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button(t("settings.apply")).clicked() {
            state.settings.save();
        }
        if ui.button(t("settings.reset")).clicked() {
            state.settings = crate::state::settings::AppSettings::default();
        }
        if ui.button(t("settings.close")).clicked() {
            state.show_settings_window = false;
        }
    });
}
