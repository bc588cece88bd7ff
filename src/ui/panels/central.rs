use crate::core::{ProcessSource, ResetRequest};
use crate::provider::matches_search;
use crate::types::StateColors;
use crate::ui::{list, tasks, GuiState};
use eframe::egui;
use egui::Color32;

/// Render the list of running applications with their reset menus.
pub fn show<S: ProcessSource>(ctx: &egui::Context, state: &mut GuiState<S>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let apps: Vec<_> = state
            .provider
            .apps()
            .iter()
            .filter(|app| matches_search(app, &state.search))
            .cloned()
            .collect();

        if apps.is_empty() {
            ui.centered_and_justified(|ui| {
                if state.search.trim().is_empty() {
                    ui.label("No running applications.");
                } else {
                    ui.label(format!("No applications match \"{}\".", state.search.trim()));
                }
            });
            return;
        }

        let colors = StateColors {
            default: Color32::from_rgb(247, 248, 250),
            hover: Color32::WHITE,
        };

        // rows are fixed height, so only the visible slice is laid out and asks for icons
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, list::ROW_HEIGHT, apps.len(), |ui, rows| {
                for app in &apps[rows] {
                    let icon = state.icons.get(ctx, app.pid);
                    let picked = ui
                        .push_id(app.pid, |ui| list::app_row(ui, app, icon.as_ref(), &state.in_flight, &colors))
                        .inner;
                    if let Some(permission) = picked {
                        if let Some(request) = ResetRequest::for_app(app, permission) {
                            tasks::spawn_reset(state, request, ctx);
                        }
                    }
                }
            });
    });
}
