use std::{
    collections::HashSet,
    io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
    sync::mpsc,
    thread,
    time::Duration,
};
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};
use thiserror::Error;

use crate::permissions::Permission;
use crate::types::{ActionOutcome, ActivationPolicy, OutcomeKind, ProcessEvent, RunningApp};

// Core/business logic: reading the OS process list, watching it for changes,
// and running the permission reset tool.

/// Ground truth for the running-apps list.
pub trait ProcessSource {
    fn snapshot(&self) -> Vec<RunningApp>;
}

/// The platform's own view of running applications.
#[derive(Clone, Copy, Debug, Default)]
pub struct WorkspaceSource;

impl ProcessSource for WorkspaceSource {
    #[cfg(target_os = "macos")]
    fn snapshot(&self) -> Vec<RunningApp> {
        crate::osx::running_applications()
    }

    #[cfg(not(target_os = "macos"))]
    fn snapshot(&self) -> Vec<RunningApp> {
        process_table_snapshot()
    }
}

/// Process table via sysinfo. Carries no bundle identifiers, so nothing here is resettable.
#[cfg_attr(target_os = "macos", allow(dead_code))]
pub fn process_table_snapshot() -> Vec<RunningApp> {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessesToUpdate::All, true, ProcessRefreshKind::nothing());
    sys.processes()
        .iter()
        .map(|(pid, proc_)| RunningApp {
            pid: pid.as_u32() as i32,
            name: Some(proc_.name().to_string_lossy().into_owned()).filter(|n| !n.is_empty()),
            bundle_id: None,
            activation_policy: ActivationPolicy::Prohibited,
        })
        .collect()
}

/// Spawn a thread that polls the process table and reports launches and terminations.
/// `wake` is called after each batch of events; the thread exits once `rx` is dropped.
pub fn spawn_process_watcher<F>(interval: Duration, wake: F) -> mpsc::Receiver<ProcessEvent>
where
    F: Fn() + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut sys = System::new();
        let mut known = current_pids(&mut sys);
        loop {
            thread::sleep(interval);
            let now = current_pids(&mut sys);
            let events = diff_pids(&known, &now);
            known = now;
            if events.is_empty() {
                continue;
            }
            tracing::debug!("Process watcher saw {} change(s)", events.len());
            for ev in events {
                if tx.send(ev).is_err() {
                    tracing::debug!("Process watcher stopped");
                    return;
                }
            }
            wake();
        }
    });
    rx
}

fn current_pids(sys: &mut System) -> HashSet<u32> {
    sys.refresh_processes_specifics(ProcessesToUpdate::All, true, ProcessRefreshKind::nothing());
    sys.processes().keys().map(|pid| pid.as_u32()).collect()
}

/// Launch/terminate events between two pid sets, terminations first.
pub fn diff_pids(before: &HashSet<u32>, after: &HashSet<u32>) -> Vec<ProcessEvent> {
    let mut terminated: Vec<u32> = before.difference(after).copied().collect();
    let mut launched: Vec<u32> = after.difference(before).copied().collect();
    terminated.sort_unstable();
    launched.sort_unstable();
    terminated
        .into_iter()
        .map(|p| ProcessEvent::Terminated(p as i32))
        .chain(launched.into_iter().map(|p| ProcessEvent::Launched(p as i32)))
        .collect()
}

#[derive(Debug, Error)]
pub enum ResetError {
    #[error("failed to launch {program:?}: {source}")]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{program:?} exited with {status}")]
    Exit { program: PathBuf, status: ExitStatus },
}

fn reset_command(tool: &Path, permission: &Permission, bundle_id: &str) -> Command {
    let mut cmd = Command::new(tool);
    cmd.arg("reset").arg(permission.command_name).arg(bundle_id);
    cmd
}

/// Run `<tool> reset <TOKEN> <BUNDLE_ID>` and wait for it. Exit code 0 is success.
pub fn reset_permission(tool: &Path, permission: &Permission, bundle_id: &str) -> Result<(), ResetError> {
    let output = reset_command(tool, permission, bundle_id)
        .output()
        .map_err(|source| ResetError::Launch {
            program: tool.to_path_buf(),
            source,
        })?;

    if !output.stderr.is_empty() {
        tracing::debug!("{:?} stderr: {}", tool, String::from_utf8_lossy(&output.stderr).trim());
    }
    if output.status.success() {
        Ok(())
    } else {
        Err(ResetError::Exit {
            program: tool.to_path_buf(),
            status: output.status,
        })
    }
}

/// Everything a worker needs to reset one permission for one app.
#[derive(Clone, Debug)]
pub struct ResetRequest {
    pub permission: Permission,
    pub pid: i32,
    pub bundle_id: String,
    pub app_name: String,
}

impl ResetRequest {
    /// Build a request, or None when the app lacks a bundle identifier or name.
    pub fn for_app(app: &RunningApp, permission: Permission) -> Option<Self> {
        Some(Self {
            permission,
            pid: app.pid,
            bundle_id: app.bundle_id.clone()?,
            app_name: app.name.clone()?,
        })
    }

    pub fn id(&self) -> String {
        crate::types::outcome_id(&self.bundle_id, &self.permission)
    }

    /// Blocking: spawns the tool once and turns its result into an outcome.
    pub fn run(&self, tool: &Path) -> ActionOutcome {
        match reset_permission(tool, &self.permission, &self.bundle_id) {
            Ok(()) => {
                tracing::info!("Reset {} for {}", self.permission.command_name, self.bundle_id);
                self.outcome(OutcomeKind::Success)
            }
            Err(e) => {
                tracing::warn!(
                    "Reset {} for {} failed: {}",
                    self.permission.command_name,
                    self.bundle_id,
                    e
                );
                self.outcome(OutcomeKind::Failure)
            }
        }
    }

    pub fn outcome(&self, kind: OutcomeKind) -> ActionOutcome {
        let message = match kind {
            OutcomeKind::Success => format!(
                "Successfully reset {} approval status for {}",
                self.permission.display_name, self.app_name
            ),
            OutcomeKind::Failure => format!(
                "Failed to reset {} approval status for {}",
                self.permission.display_name, self.app_name
            ),
        };
        ActionOutcome {
            kind,
            id: self.id(),
            message,
            pid: self.pid,
            permission: self.permission,
        }
    }
}
