//! Object list panel: one row per registered object, in import order

use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

enum RowAction {
    Select(String),
    Edit(String),
}

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading(t("list.title"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("({})", state.scene.len()));
        });
    });
    ui.separator();

    if state.scene.is_empty() {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.weak(t("list.empty"));
            ui.add_space(4.0);
            if ui
                .add_enabled(!state.modal_open(), egui::Button::new(t("toolbar.import")))
                .clicked()
            {
                super::toolbar::action_import(state);
            }
        });
        return;
    }

    let interactive = !state.modal_open() && !state.session.is_dragging();
    let mut action = None;

    egui::ScrollArea::vertical()
        .id_salt("object_list_scroll")
        .show(ui, |ui| {
            for obj in state.scene.objects() {
                let selected = state.selection.is_selected(&obj.id);
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(interactive, egui::Button::new("✏").small())
                        .on_hover_text(t("list.edit_tip"))
                        .clicked()
                    {
                        action = Some(RowAction::Edit(obj.id.clone()));
                    }
                    let label = ui
                        .add_enabled(interactive, egui::SelectableLabel::new(selected, obj.row.label.as_str()))
                        .on_hover_text(obj.id.as_str());
                    if label.clicked() {
                        action = Some(RowAction::Select(obj.id.clone()));
                    }
                });
            }
        });

    match action {
        Some(RowAction::Select(id)) => {
            state.select(&id);
        }
        // Editing from the list does not change the selection
        Some(RowAction::Edit(id)) => {
            state.request_edit(&id);
        }
        None => {}
    }
}
