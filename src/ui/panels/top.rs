use eframe::egui;

use crate::core::ProcessSource;
use crate::ui::GuiState;

/// Render the header: title, search field and the "show all" toggle.
pub fn show<S: ProcessSource>(ctx: &egui::Context, state: &mut GuiState<S>) {
    egui::TopBottomPanel::top("top").show(ctx, |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.heading("🔒 Privacy Reset");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut show_all = state.provider.show_all();
                if ui
                    .checkbox(&mut show_all, "Show all processes")
                    .on_hover_text("Include background and accessory processes")
                    .changed()
                {
                    state.set_show_all(show_all);
                }
            });
        });
        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::singleline(&mut state.search)
                .hint_text("🔍 Search")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);
    });
}
