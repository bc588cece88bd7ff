//! Live, filtered, sorted view of the running applications.
//!
//! The list is never patched: every change event (after debouncing) and every
//! change of the "show all" preference rebuilds it from a fresh snapshot.

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::core::ProcessSource;
use crate::types::{ActivationPolicy, RunningApp};

/// Quiet period after the last launch/terminate event before recomputing.
pub const DEBOUNCE: Duration = Duration::from_millis(250);

pub struct RunningAppsProvider<S> {
    source: S,
    show_all: bool,
    apps: Vec<RunningApp>,
    pending: Option<Instant>,
    generation: u64,
}

impl<S: ProcessSource> RunningAppsProvider<S> {
    pub fn new(source: S, show_all: bool) -> Self {
        let mut provider = Self {
            source,
            show_all,
            apps: Vec::new(),
            pending: None,
            generation: 0,
        };
        provider.refresh();
        provider
    }

    pub fn apps(&self) -> &[RunningApp] {
        &self.apps
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    /// Bumped on every recompute; lets the UI notice a new list.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Record a launch/terminate event. Each event restarts the debounce window.
    pub fn notify(&mut self, now: Instant) {
        self.pending = Some(now + DEBOUNCE);
    }

    /// Recompute if the debounce window has elapsed. Returns true when the list was rebuilt.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if now >= deadline => {
                self.pending = None;
                self.refresh();
                true
            }
            _ => false,
        }
    }

    /// When the pending recompute is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
    }

    /// Change the filter and recompute right away.
    pub fn set_show_all(&mut self, show_all: bool) {
        self.show_all = show_all;
        self.refresh();
    }

    pub fn refresh(&mut self) {
        self.apps = visible_apps(self.source.snapshot(), self.show_all);
        self.generation += 1;
        tracing::debug!(
            "Running apps recomputed: {} visible (show all: {})",
            self.apps.len(),
            self.show_all
        );
    }
}

/// Drop unnamed entries, drop background entries unless `show_all`, sort by name.
pub fn visible_apps(snapshot: Vec<RunningApp>, show_all: bool) -> Vec<RunningApp> {
    let mut apps: Vec<RunningApp> = snapshot
        .into_iter()
        .filter(|app| app.name.is_some())
        .filter(|app| show_all || app.activation_policy == ActivationPolicy::Regular)
        .collect();
    apps.sort_by(compare_names);
    apps
}

fn compare_names(a: &RunningApp, b: &RunningApp) -> Ordering {
    let a_name = a.name.as_deref().unwrap_or_default();
    let b_name = b.name.as_deref().unwrap_or_default();
    sort_key(a_name)
        .cmp(&sort_key(b_name))
        .then_with(|| a_name.to_lowercase().cmp(&b_name.to_lowercase()))
        .then_with(|| a_name.cmp(b_name))
        .then_with(|| a.pid.cmp(&b.pid))
}

/// Lowercased name with combining marks stripped, so "Über" sorts with "u".
fn sort_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case-insensitive substring match on the display name; an empty query matches everything.
pub fn matches_search(app: &RunningApp, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    app.name
        .as_deref()
        .is_some_and(|name| name.to_lowercase().contains(&query.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeSource {
        apps: RefCell<Vec<RunningApp>>,
        reads: Cell<usize>,
    }

    impl ProcessSource for &FakeSource {
        fn snapshot(&self) -> Vec<RunningApp> {
            self.reads.set(self.reads.get() + 1);
            self.apps.borrow().clone()
        }
    }

    fn app(pid: i32, name: Option<&str>, policy: ActivationPolicy) -> RunningApp {
        RunningApp {
            pid,
            name: name.map(str::to_string),
            bundle_id: name.map(|n| format!("com.example.{}", n.to_lowercase())),
            activation_policy: policy,
        }
    }

    fn names(apps: &[RunningApp]) -> Vec<&str> {
        apps.iter().filter_map(|a| a.name.as_deref()).collect()
    }

    fn sample() -> Vec<RunningApp> {
        vec![
            app(1, Some("safari"), ActivationPolicy::Regular),
            app(2, None, ActivationPolicy::Regular),
            app(3, Some("Finder"), ActivationPolicy::Regular),
            app(4, Some("Spotlight Helper"), ActivationPolicy::Prohibited),
            app(5, Some("Notes"), ActivationPolicy::Regular),
            app(6, Some("Control Center"), ActivationPolicy::Accessory),
            app(7, None, ActivationPolicy::Prohibited),
        ]
    }

    #[test]
    fn test_unnamed_never_listed() {
        for show_all in [false, true] {
            let apps = visible_apps(sample(), show_all);
            assert!(apps.iter().all(|a| a.name.is_some()));
            assert!(apps.iter().all(|a| a.pid != 2 && a.pid != 7));
        }
    }

    #[test]
    fn test_regular_only_unless_show_all() {
        let regular = visible_apps(sample(), false);
        assert_eq!(names(&regular), vec!["Finder", "Notes", "safari"]);

        let all = visible_apps(sample(), true);
        assert_eq!(
            names(&all),
            vec!["Control Center", "Finder", "Notes", "safari", "Spotlight Helper"]
        );
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let snapshot = vec![
            app(1, Some("zed"), ActivationPolicy::Regular),
            app(2, Some("Alpha"), ActivationPolicy::Regular),
            app(3, Some("beta"), ActivationPolicy::Regular),
            app(4, Some("Zebra"), ActivationPolicy::Regular),
        ];
        let apps = visible_apps(snapshot, false);
        assert_eq!(names(&apps), vec!["Alpha", "beta", "Zebra", "zed"]);
    }

    #[test]
    fn test_sort_ignores_diacritics() {
        let snapshot = vec![
            app(1, Some("Zoom"), ActivationPolicy::Regular),
            app(2, Some("Über"), ActivationPolicy::Regular),
            app(3, Some("Notes"), ActivationPolicy::Regular),
            app(4, Some("Éditeur"), ActivationPolicy::Regular),
        ];
        let apps = visible_apps(snapshot, false);
        assert_eq!(names(&apps), vec!["Éditeur", "Notes", "Über", "Zoom"]);
    }

    #[test]
    fn test_accented_and_plain_names_stay_adjacent() {
        let snapshot = vec![
            app(1, Some("resume"), ActivationPolicy::Regular),
            app(2, Some("Résumé"), ActivationPolicy::Regular),
            app(3, Some("Safari"), ActivationPolicy::Regular),
            app(4, Some("Reeder"), ActivationPolicy::Regular),
        ];
        let apps = visible_apps(snapshot, false);
        assert_eq!(names(&apps), vec!["Reeder", "resume", "Résumé", "Safari"]);
    }

    #[test]
    fn test_show_all_toggle_recomputes_immediately() {
        let source = FakeSource::default();
        *source.apps.borrow_mut() = sample();
        let mut provider = RunningAppsProvider::new(&source, false);
        assert_eq!(provider.apps().len(), 3);
        let generation = provider.generation();

        provider.set_show_all(true);
        assert!(provider.show_all());
        assert_eq!(provider.apps().len(), 5);
        assert!(provider.generation() > generation);
        assert!(provider.apps().iter().any(|a| a.pid == 4));

        provider.set_show_all(false);
        assert!(provider.apps().iter().all(|a| a.pid != 4));
    }

    #[test]
    fn test_events_are_debounced() {
        let source = FakeSource::default();
        let mut provider = RunningAppsProvider::new(&source, false);
        assert_eq!(source.reads.get(), 1);
        assert!(provider.apps().is_empty());

        *source.apps.borrow_mut() = sample();
        let t0 = Instant::now();
        provider.notify(t0);
        provider.notify(t0 + Duration::from_millis(100));
        provider.notify(t0 + Duration::from_millis(200));

        // window restarts with every event
        assert!(!provider.tick(t0 + Duration::from_millis(300)));
        assert_eq!(source.reads.get(), 1);
        assert_eq!(
            provider.next_deadline(),
            Some(t0 + Duration::from_millis(200) + DEBOUNCE)
        );

        assert!(provider.tick(t0 + Duration::from_millis(450)));
        assert_eq!(source.reads.get(), 2);
        assert_eq!(provider.apps().len(), 3);
        assert_eq!(provider.next_deadline(), None);

        assert!(!provider.tick(t0 + Duration::from_secs(5)));
        assert_eq!(source.reads.get(), 2);
    }

    #[test]
    fn test_background_helper_example() {
        let snapshot = vec![
            app(10, Some("Safari"), ActivationPolicy::Regular),
            app(11, Some("Safari Networking"), ActivationPolicy::Prohibited),
        ];
        assert_eq!(names(&visible_apps(snapshot.clone(), false)), vec!["Safari"]);
        assert_eq!(
            names(&visible_apps(snapshot, true)),
            vec!["Safari", "Safari Networking"]
        );
    }

    #[test]
    fn test_matches_search() {
        let safari = app(1, Some("Safari"), ActivationPolicy::Regular);
        assert!(matches_search(&safari, ""));
        assert!(matches_search(&safari, "  "));
        assert!(matches_search(&safari, "saf"));
        assert!(matches_search(&safari, "FARI"));
        assert!(!matches_search(&safari, "notes"));
        assert!(!matches_search(&app(2, None, ActivationPolicy::Regular), "x"));
    }
}
