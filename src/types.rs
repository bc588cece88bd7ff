//! Core data types shared across the application.

use egui::Color32;

use crate::permissions::Permission;

/// How a running process presents itself to the user (NSApplicationActivationPolicy).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationPolicy {
    /// Dock icon and menu bar.
    Regular,
    /// No Dock icon, may own windows.
    Accessory,
    /// Background only.
    Prohibited,
}

impl ActivationPolicy {
    /// Map the raw NSInteger reported by AppKit; unknown values count as background.
    pub fn from_raw(raw: isize) -> Self {
        match raw {
            0 => ActivationPolicy::Regular,
            1 => ActivationPolicy::Accessory,
            _ => ActivationPolicy::Prohibited,
        }
    }
}

/// Snapshot of one running process as reported by the OS.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunningApp {
    pub pid: i32,
    pub name: Option<String>,
    pub bundle_id: Option<String>,
    pub activation_policy: ActivationPolicy,
}

impl RunningApp {
    /// A reset needs both a bundle identifier (for the tool) and a name (for the message).
    pub fn is_resettable(&self) -> bool {
        self.bundle_id.is_some() && self.name.is_some()
    }
}

/// Process table change observed by the watcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessEvent {
    Launched(i32),
    Terminated(i32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Failure,
}

/// Result of one reset, sent from the worker thread back to the UI.
#[derive(Clone, Debug)]
pub struct ActionOutcome {
    pub kind: OutcomeKind,
    pub id: String,
    pub message: String,
    pub pid: i32,
    pub permission: Permission,
}

/// Identity of a toast: the bundle identifier joined with the tool token.
pub fn outcome_id(bundle_id: &str, permission: &Permission) -> String {
    format!("{}:{}", bundle_id, permission.command_name)
}

/// Row fill colors by pointer state.
pub struct StateColors {
    pub default: Color32,
    pub hover: Color32,
}
