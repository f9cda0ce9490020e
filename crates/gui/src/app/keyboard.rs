//! Keyboard shortcut handling

use eframe::egui;
use shared::TransformMode;

use crate::state::AppState;
use crate::ui::toolbar;
use crate::viewport::ViewportPanel;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(
    ctx: &egui::Context,
    state: &mut AppState,
    viewport: &mut ViewportPanel,
) {
    // Dialogs own the keyboard while open
    if state.modal_open() {
        return;
    }
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    let (escape, mode, edit, focus) = ctx.input(|i| {
        let plain = !i.modifiers.command && !i.modifiers.alt;
        let mode = if !plain {
            None
        } else if i.key_pressed(egui::Key::W) {
            Some(TransformMode::Translate)
        } else if i.key_pressed(egui::Key::E) {
            Some(TransformMode::Rotate)
        } else if i.key_pressed(egui::Key::R) {
            Some(TransformMode::Scale)
        } else {
            None
        };
        (
            i.key_pressed(egui::Key::Escape),
            mode,
            plain && i.key_pressed(egui::Key::D),
            plain && i.key_pressed(egui::Key::F),
        )
    });

    // Escape — deselect
    if escape {
        state.handle_escape();
    }
    if let Some(mode) = mode {
        state.set_mode(mode);
    }
    // D — edit dimensions of the selection
    if edit {
        toolbar::action_edit_dimensions(state);
    }
    // F — focus camera on selected object
    if focus {
        viewport.focus_selected(state);
    }
}
