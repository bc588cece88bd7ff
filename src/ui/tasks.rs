//! Background work launched from the UI: one thread per permission reset,
//! so the UI thread never waits on the reset tool.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use eframe::egui;

use crate::core::{ProcessSource, ResetRequest};
use crate::types::ActionOutcome;

use super::GuiState;

/// Mark the control busy and run the reset on a worker thread.
/// The outcome comes back through `state.outcome_rx`.
pub fn spawn_reset<S: ProcessSource>(state: &mut GuiState<S>, request: ResetRequest, ctx: &egui::Context) {
    let key = (request.pid, request.permission.command_name);
    if !state.in_flight.insert(key) {
        tracing::debug!("Reset {} already running", request.id());
        return;
    }

    tracing::info!(
        "Resetting {} for {} ({})",
        request.permission.command_name,
        request.app_name,
        request.bundle_id
    );
    run_detached(
        request,
        state.config.tccutil.clone(),
        state.outcome_tx.clone(),
        Some(ctx.clone()),
    );
}

fn run_detached(
    request: ResetRequest,
    tool: PathBuf,
    tx: mpsc::Sender<ActionOutcome>,
    ctx: Option<egui::Context>,
) {
    thread::spawn(move || {
        let outcome = request.run(&tool);
        let _ = tx.send(outcome);
        if let Some(ctx) = ctx {
            ctx.request_repaint();
        }
    });
}
