//! Main application module

mod keyboard;
mod menus;
mod styles;

use std::path::PathBuf;

use eframe::egui;

use crate::state::settings::AppSettings;
use crate::state::AppState;
use crate::ui::dimension_dialog::DimensionDialogUi;
use crate::ui::{notice, object_list, status_bar, toolbar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct MeshApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Settings as last written to disk
    last_saved_settings: AppSettings,
}

impl MeshApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial_import: Option<PathBuf>) -> Self {
        let mut state = AppState::default();

        // Mesh passed on the command line goes through the normal import dialog
        if let Some(path) = initial_import {
            state.request_import_file(&path);
        }

        // Apply initial styles with font size from settings
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let last_font_size = state.settings.ui.font_size;
        let last_saved_settings = state.settings.clone();

        Self {
            state,
            viewport: ViewportPanel::new(),
            last_font_size,
            last_saved_settings,
        }
    }
}

impl eframe::App for MeshApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        // Persist settings once they settle (not mid-drag of a slider)
        if self.state.settings != self.last_saved_settings && !ctx.input(|i| i.pointer.any_down()) {
            self.state.settings.save();
            self.last_saved_settings = self.state.settings.clone();
        }

        keyboard::handle_keyboard(ctx, &mut self.state, &mut self.viewport);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state);
                menus::edit_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state, &mut self.viewport);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Notice, then the dimension dialog ────────────────
        notice::show(ctx, &mut self.state);
        self.handle_dimension_dialog(ctx);

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.state);
            });

        // ── Status bar ───────────────────────────────────────
        if self.state.panels.status_bar {
            egui::TopBottomPanel::bottom("status_bar")
                .exact_height(22.0)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style())
                        .inner_margin(egui::Margin::symmetric(8, 2)),
                )
                .show(ctx, |ui| {
                    status_bar::show(ui, &self.state);
                });
        }

        // ── Left panel: Object list ──────────────────────────
        if self.state.panels.object_list {
            egui::SidePanel::left("object_list")
                .default_width(240.0)
                .width_range(160.0..=420.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    object_list::show(ui, &mut self.state);
                });
        }

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                // Viewport input is blocked while a modal waits for the user
                ui.add_enabled_ui(!self.state.modal_open(), |ui| {
                    self.viewport.show(ui, &mut self.state);
                });
            });

        if self.state.session.is_dragging() {
            ctx.request_repaint();
        }
    }
}

impl MeshApp {
    fn handle_dimension_dialog(&mut self, ctx: &egui::Context) {
        // A notice stacks on top of the dialog; answer it first
        if self.state.notice.is_some() {
            return;
        }
        match self.state.dimension_dialog.show(ctx) {
            Some(true) => {
                if let Some(id) = self.state.submit_dimension_dialog() {
                    tracing::info!("Dimensions applied to {}", id);
                }
            }
            Some(false) => self.state.cancel_dimension_dialog(),
            None => {}
        }
    }
}
