use crate::core::ProcessSource;
use crate::ui::GuiState;
use eframe::egui;
use eframe::epaint::Color32;

/// Render the bottom status bar.
pub fn show<S: ProcessSource>(ctx: &egui::Context, state: &GuiState<S>) {
    egui::TopBottomPanel::bottom("bottom_status")
        .resizable(false)
        .show(ctx, |ui| {
            let listed = state.provider.apps().len();
            let running = state.in_flight.len();

            ui.horizontal(|ui| {
                ui.set_height(24.0);
                ui.centered_and_justified(|ui| {
                    let text = if running > 0 {
                        format!("Applications: {}  •  Resetting: {}", listed, running)
                    } else {
                        format!("Applications: {}", listed)
                    };
                    ui.label(
                        egui::RichText::new(text)
                            .color(Color32::from_rgb(110, 112, 124))
                            .monospace(),
                    );
                });
            });
        });
}
