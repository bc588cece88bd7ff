//! Stack of transient outcome notifications.
//!
//! Entries are keyed by id. Posting an id that is already live is a no-op and
//! leaves the existing dismissal deadline alone. Dismissed entries linger in a
//! separate list while they fade out; they no longer count as live.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use egui::TextureHandle;

use crate::types::{ActionOutcome, OutcomeKind};

/// How long an entry stays visible.
pub const TOAST_LIFETIME: Duration = Duration::from_millis(3200);

/// Length of the fade-out after dismissal.
pub const FADE_OUT: Duration = Duration::from_millis(800);

#[derive(Clone)]
pub struct Toast {
    pub kind: OutcomeKind,
    pub id: String,
    pub message: String,
    pub icon: Option<TextureHandle>,
    pub shown_at: Instant,
}

impl Toast {
    pub fn from_outcome(outcome: &ActionOutcome, icon: Option<TextureHandle>, now: Instant) -> Self {
        Self {
            kind: outcome.kind,
            id: outcome.id.clone(),
            message: outcome.message.clone(),
            icon,
            shown_at: now,
        }
    }
}

/// An entry on its way out.
#[derive(Clone)]
pub struct Leaving {
    pub toast: Toast,
    pub since: Instant,
}

#[derive(Default)]
pub struct ToastStack {
    entries: Vec<Toast>,
    dismissers: HashMap<String, Instant>,
    leaving: Vec<Leaving>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live entries, oldest first.
    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    pub fn leaving(&self) -> &[Leaving] {
        &self.leaving
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|t| t.id == id)
    }

    /// Append unless an entry with the same id is live. Returns true when appended.
    pub fn post(&mut self, toast: Toast) -> bool {
        if self.contains(&toast.id) {
            tracing::debug!("Toast {} already visible", toast.id);
            return false;
        }
        self.dismissers
            .insert(toast.id.clone(), toast.shown_at + TOAST_LIFETIME);
        self.entries.push(toast);
        true
    }

    /// Remove a live entry and its deadline. Returns false if it was not live.
    pub fn dismiss(&mut self, id: &str, now: Instant) -> bool {
        let Some(i) = self.entries.iter().position(|t| t.id == id) else {
            return false;
        };
        let toast = self.entries.remove(i);
        self.dismissers.remove(id);
        self.leaving.push(Leaving { toast, since: now });
        true
    }

    /// Fire due deadlines and drop finished fades. Returns how many entries were dismissed.
    pub fn tick(&mut self, now: Instant) -> usize {
        // walk entries so simultaneous expiries leave in stack order
        let due: Vec<String> = self
            .entries
            .iter()
            .filter(|t| self.dismissers.get(&t.id).is_some_and(|deadline| now >= *deadline))
            .map(|t| t.id.clone())
            .collect();
        let dismissed = due.iter().filter(|id| self.dismiss(id, now)).count();
        self.leaving.retain(|l| now < l.since + FADE_OUT);
        dismissed
    }

    /// Earliest pending dismissal.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.dismissers.values().min().copied()
    }

    /// Whether anything is on screen, live or fading.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.leaving.is_empty()
    }
}
