//! Dimension dialog UI rendering
//!
//! Shows a modal window with width/height/depth fields.
//! Data structures are in state/dimension_dialog.rs.

use crate::i18n::t;
use crate::state::{DimensionDialog, DimensionPurpose};

/// Extension trait for DimensionDialog to add UI rendering
pub trait DimensionDialogUi {
    /// Show the dialog UI, returns Some(true) if OK clicked, Some(false) if cancelled
    fn show(&mut self, ctx: &egui::Context) -> Option<bool>;
}

impl DimensionDialogUi for DimensionDialog {
    fn show(&mut self, ctx: &egui::Context) -> Option<bool> {
        let (title, source) = match &self.request()?.purpose {
            DimensionPurpose::Import(pending) => (t("dialog.import_title"), Some(pending.source.clone())),
            DimensionPurpose::Edit(_) => (t("dialog.edit_title"), None),
        };

        let mut result = None;

        // Dim the rest of the UI while the dialog is up
        egui::Area::new(egui::Id::new("dimension_dialog_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen = ctx.screen_rect();
                ui.allocate_rect(screen, egui::Sense::click_and_drag());
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(100));
            });

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(260.0);

                if let Some(source) = &source {
                    ui.horizontal(|ui| {
                        ui.weak(t("dialog.source"));
                        ui.label(source.as_str());
                    });
                    ui.add_space(6.0);
                }

                let labels = [t("dialog.width"), t("dialog.height"), t("dialog.depth")];
                let mut enter = false;
                if let Some(fields) = self.fields_mut() {
                    egui::Grid::new("dimension_fields_grid")
                        .num_columns(2)
                        .spacing([10.0, 8.0])
                        .show(ui, |ui| {
                            for (label, field) in labels.iter().zip(fields.iter_mut()) {
                                ui.label(*label);
                                let response = ui.add(
                                    egui::TextEdit::singleline(field).desired_width(120.0),
                                );
                                if response.lost_focus()
                                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                                {
                                    enter = true;
                                }
                                ui.end_row();
                            }
                        });
                }

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(8.0);

                // OK / Cancel buttons
                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(t("dialog.cancel")).clicked() {
                            result = Some(false);
                        }
                        if ui.button(t("dialog.ok")).clicked() || enter {
                            result = Some(true);
                        }
                    });
                });
            });

        if result.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = Some(false);
        }

        result
    }
}
