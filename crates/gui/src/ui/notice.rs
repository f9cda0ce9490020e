use crate::i18n::t;
use crate::state::AppState;

/// Blocking message window; returns once the user acknowledges it
pub fn show(ctx: &egui::Context, state: &mut AppState) {
    let Some(notice) = &state.notice else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new(notice.title.as_str())
        .id(egui::Id::new("notice_window"))
        .collapsible(false)
        .resizable(false)
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(240.0);
            ui.label(notice.message.as_str());
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button(t("notice.ok")).clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        state.dismiss_notice();
    }
}
