//! Egui-based UI for Privacy Reset.
//!
//! This module defines the application state, the eframe App implementation,
//! and wires UI actions to background tasks defined in ui::tasks. All state
//! lives on the UI thread; workers only send results back over channels.

use std::collections::HashSet;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use eframe::{egui, App};

use crate::config::AppConfig;
use crate::core::{spawn_process_watcher, ProcessSource, WorkspaceSource};
use crate::defaults::{Defaults, SHOW_ALL_KEY};
use crate::provider::RunningAppsProvider;
use crate::style::set_appkit_style;
use crate::toast::{Toast, ToastStack};
use crate::types::{ActionOutcome, ProcessEvent};

mod icons;
mod list;
mod overlay;
mod panels;
pub mod tasks;

pub use icons::IconCache;

/// Identifies one reset control: (pid, tool token).
pub type ResetKey = (i32, &'static str);

/// UI-thread state.
pub struct GuiState<S> {
    pub config: AppConfig,
    pub defaults: Defaults,
    pub provider: RunningAppsProvider<S>,
    pub toasts: ToastStack,
    pub icons: IconCache,
    pub search: String,
    pub in_flight: HashSet<ResetKey>,

    pub outcome_tx: mpsc::Sender<ActionOutcome>,
    pub outcome_rx: mpsc::Receiver<ActionOutcome>,
    pub process_rx: Option<mpsc::Receiver<ProcessEvent>>,
    seen_generation: u64,
}

impl<S: ProcessSource> GuiState<S> {
    pub fn new(config: AppConfig, defaults: Defaults, source: S) -> Self {
        let (tx, rx) = mpsc::channel();
        let provider = RunningAppsProvider::new(source, defaults.show_all());
        Self {
            config,
            defaults,
            provider,
            toasts: ToastStack::new(),
            icons: IconCache::default(),
            search: String::new(),
            in_flight: HashSet::new(),
            outcome_tx: tx,
            outcome_rx: rx,
            process_rx: None,
            seen_generation: 0,
        }
    }

    /// Persist the preference and recompute the list synchronously.
    pub fn set_show_all(&mut self, show_all: bool) {
        tracing::info!("Show all processes: {}", show_all);
        if let Err(e) = self.defaults.set_bool(SHOW_ALL_KEY, show_all) {
            tracing::warn!("Could not save preference: {:?}", e);
        }
        self.provider.set_show_all(show_all);
    }

    /// Fold one finished reset into the UI: clear its in-flight flag and post a toast.
    pub fn accept_outcome(&mut self, outcome: ActionOutcome, icon: Option<egui::TextureHandle>, now: Instant) {
        self.in_flight
            .remove(&(outcome.pid, outcome.permission.command_name));
        self.toasts.post(Toast::from_outcome(&outcome, icon, now));
    }

    /// Drain watcher events, run due timers. Returns true when the app list changed.
    pub fn pump(&mut self, now: Instant) -> bool {
        if let Some(rx) = &self.process_rx {
            let mut saw_event = false;
            while let Ok(ev) = rx.try_recv() {
                match ev {
                    ProcessEvent::Launched(pid) => tracing::debug!("Process {} launched", pid),
                    ProcessEvent::Terminated(pid) => tracing::debug!("Process {} terminated", pid),
                }
                saw_event = true;
            }
            if saw_event {
                self.provider.notify(now);
            }
        }
        self.provider.tick(now);
        self.toasts.tick(now);

        let generation = self.provider.generation();
        if generation != self.seen_generation {
            self.seen_generation = generation;
            true
        } else {
            false
        }
    }

    /// Earliest instant at which something scheduled has to happen.
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.provider.next_deadline(), self.toasts.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }
}

/// Main eframe application that renders and controls the UI.
pub struct PrivacyResetApp {
    pub state: GuiState<WorkspaceSource>,
}

impl PrivacyResetApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let defaults = Defaults::load(config.defaults_path.clone());
        tracing::debug!("User defaults at {:?}", defaults.path());
        let mut state = GuiState::new(config, defaults, WorkspaceSource);

        let ctx = cc.egui_ctx.clone();
        state.process_rx = Some(spawn_process_watcher(state.config.poll_interval, move || {
            ctx.request_repaint();
        }));

        set_appkit_style(&cc.egui_ctx);
        Self { state }
    }
}

/// Egui frame update: drains worker results, runs timers, lays out panels.
impl App for PrivacyResetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // pull finished resets (non-blocking)
        while let Ok(outcome) = self.state.outcome_rx.try_recv() {
            let icon = self.state.icons.get(ctx, outcome.pid);
            self.state.accept_outcome(outcome, icon, now);
        }

        if self.state.pump(now) {
            let pids: HashSet<i32> = self.state.provider.apps().iter().map(|a| a.pid).collect();
            self.state.icons.retain(&pids);
        }

        panels::top::show(ctx, &mut self.state);
        panels::bottom::show(ctx, &self.state);
        panels::central::show(ctx, &mut self.state);
        let animating = overlay::show(ctx, &self.state.toasts, now);

        if animating {
            ctx.request_repaint();
        } else if let Some(deadline) = self.state.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        } else if !self.state.in_flight.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ResetRequest;
    use crate::permissions::{CAMERA, MICROPHONE};
    use crate::toast::TOAST_LIFETIME;
    use crate::types::{ActivationPolicy, OutcomeKind, RunningApp};

    struct StaticSource(Vec<RunningApp>);

    impl ProcessSource for StaticSource {
        fn snapshot(&self) -> Vec<RunningApp> {
            self.0.clone()
        }
    }

    fn state() -> (tempfile::TempDir, GuiState<StaticSource>) {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            defaults_path: dir.path().join("prefs.plist"),
            ..AppConfig::default()
        };
        let defaults = Defaults::load(config.defaults_path.clone());
        let source = StaticSource(vec![
            RunningApp {
                pid: 1,
                name: Some("Safari".into()),
                bundle_id: Some("com.apple.Safari".into()),
                activation_policy: ActivationPolicy::Regular,
            },
            RunningApp {
                pid: 2,
                name: Some("Safari Networking".into()),
                bundle_id: Some("com.apple.WebKit.Networking".into()),
                activation_policy: ActivationPolicy::Prohibited,
            },
        ]);
        (dir, GuiState::new(config, defaults, source))
    }

    #[test]
    fn test_show_all_is_persisted() {
        let (_dir, mut state) = state();
        assert_eq!(state.provider.apps().len(), 1);

        state.set_show_all(true);
        assert_eq!(state.provider.apps().len(), 2);
        assert!(Defaults::load(state.config.defaults_path.clone()).show_all());
    }

    #[test]
    fn test_outcome_clears_in_flight_and_posts_once() {
        let (_dir, mut state) = state();
        let app = state.provider.apps()[0].clone();
        let req = ResetRequest::for_app(&app, CAMERA).unwrap();
        state.in_flight.insert((app.pid, CAMERA.command_name));
        state.in_flight.insert((app.pid, MICROPHONE.command_name));

        let t0 = Instant::now();
        state.accept_outcome(req.outcome(OutcomeKind::Success), None, t0);
        assert!(!state.in_flight.contains(&(app.pid, CAMERA.command_name)));
        assert!(state.in_flight.contains(&(app.pid, MICROPHONE.command_name)));

        state.accept_outcome(req.outcome(OutcomeKind::Failure), None, t0);
        assert_eq!(state.toasts.entries().len(), 1);
        assert_eq!(state.toasts.entries()[0].kind, OutcomeKind::Success);

        assert_eq!(state.next_deadline(), Some(t0 + TOAST_LIFETIME));
        state.pump(t0 + TOAST_LIFETIME);
        assert!(state.toasts.entries().is_empty());
    }

    #[test]
    fn test_pump_reports_list_changes_once() {
        let (_dir, mut state) = state();
        let t0 = Instant::now();
        assert!(state.pump(t0));
        assert!(!state.pump(t0));
        state.set_show_all(true);
        assert!(state.pump(t0));
    }
}
