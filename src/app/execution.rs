//! Launch pipeline: readiness gate, assembly, busy tracking, streaming.

use std::collections::HashSet;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use std::thread;

use crate::domain::command::assemble;
use crate::domain::{Action, ActionRegistry, AppError, Invocation, ToolPaths};
use crate::ports::{OutputEvent, ProcessRunner};

/// Tracks one in-flight execution per action; a second trigger while one
/// is outstanding is rejected as busy. Different actions may run
/// concurrently.
#[derive(Debug, Clone, Default)]
pub struct ExecutionTracker {
    in_flight: Arc<Mutex<HashSet<Action>>>,
}

impl ExecutionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the action in flight; false if it already was.
    pub fn try_begin(&self, action: Action) -> bool {
        self.in_flight.lock().expect("tracker lock poisoned").insert(action)
    }

    pub fn finish(&self, action: Action) {
        self.in_flight.lock().expect("tracker lock poisoned").remove(&action);
    }

    pub fn is_busy(&self, action: Action) -> bool {
        self.in_flight.lock().expect("tracker lock poisoned").contains(&action)
    }
}

/// Error unless every mandatory field of the gating action is written.
pub fn ensure_ready(registry: &ActionRegistry, action: Action) -> Result<(), AppError> {
    if registry.is_ready(action) {
        Ok(())
    } else {
        Err(AppError::NotReady { action, missing: registry.missing_count(action) })
    }
}

/// Gate, assemble, and launch in the background.
///
/// Returns the assembled command once the child is spawned; output chunks
/// print as they arrive and the busy mark clears when the child exits.
pub fn launch<R: ProcessRunner>(
    runner: &R,
    tracker: &ExecutionTracker,
    registry: &ActionRegistry,
    paths: &ToolPaths,
    invocation: Invocation,
) -> Result<String, AppError> {
    let action = invocation.action();
    ensure_ready(registry, action)?;
    if !tracker.try_begin(action) {
        return Err(AppError::ActionBusy { action });
    }

    let command = assemble(invocation, registry, paths);
    let events = match runner.launch(&command) {
        Ok(events) => events,
        Err(err) => {
            tracker.finish(action);
            return Err(err);
        }
    };

    println!("{}", invocation.progress_message());
    let tracker = tracker.clone();
    thread::spawn(move || {
        let success = forward(events);
        report_outcome(invocation, success);
        tracker.finish(action);
    });
    Ok(command)
}

/// Gate, assemble, and run to completion, streaming inline.
///
/// Used by the one-shot subcommands; a non-zero exit surfaces once as
/// [`AppError::CommandFailed`] with no retry.
pub fn run_to_completion<R: ProcessRunner>(
    runner: &R,
    registry: &ActionRegistry,
    paths: &ToolPaths,
    invocation: Invocation,
) -> Result<(), AppError> {
    ensure_ready(registry, invocation.action())?;
    let command = assemble(invocation, registry, paths);

    println!("{}", invocation.progress_message());
    let events = runner.launch(&command)?;
    let success = forward(events);
    report_outcome(invocation, success);
    if success { Ok(()) } else { Err(AppError::CommandFailed { command }) }
}

fn forward(events: Receiver<OutputEvent>) -> bool {
    let mut success = false;
    for event in events {
        match event {
            OutputEvent::Stdout(line) => println!("{line}"),
            OutputEvent::Stderr(line) => eprintln!("{line}"),
            OutputEvent::Exited { success: outcome } => success = outcome,
        }
    }
    success
}

fn report_outcome(invocation: Invocation, success: bool) {
    if success {
        println!("✅ {}", invocation.success_message());
    } else {
        eprintln!("❌ {}", invocation.failure_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldId;
    use crate::testing::FakeRunner;

    #[test]
    fn tracker_rejects_a_second_in_flight_execution() {
        let tracker = ExecutionTracker::new();
        assert!(tracker.try_begin(Action::Run));
        assert!(!tracker.try_begin(Action::Run));
        assert!(tracker.try_begin(Action::Clone));

        tracker.finish(Action::Run);
        assert!(!tracker.is_busy(Action::Run));
        assert!(tracker.try_begin(Action::Run));
    }

    #[test]
    fn launch_gates_on_readiness() {
        let registry = ActionRegistry::new();
        let err = launch(
            &FakeRunner::success(),
            &ExecutionTracker::new(),
            &registry,
            &ToolPaths::default(),
            Invocation::Verify,
        )
        .unwrap_err();

        match err {
            AppError::NotReady { action: Action::Run, missing: 1 } => {}
            other => panic!("expected NotReady, got {other:?}"),
        }
    }

    #[test]
    fn launch_reports_busy_while_outstanding() {
        let mut registry = ActionRegistry::new();
        registry.set_field(FieldId::RunEnvLocation, "/fv/env");
        let tracker = ExecutionTracker::new();
        assert!(tracker.try_begin(Action::Run));

        let err = launch(
            &FakeRunner::success(),
            &tracker,
            &registry,
            &ToolPaths::default(),
            Invocation::Compile,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::ActionBusy { action: Action::Run }));
    }

    #[test]
    fn run_to_completion_surfaces_failure_once() {
        let mut registry = ActionRegistry::new();
        registry.set_field(FieldId::RunEnvLocation, "/fv/env");

        let err = run_to_completion(
            &FakeRunner::failure(),
            &registry,
            &ToolPaths::default(),
            Invocation::Verify,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::CommandFailed { .. }));
    }

    #[test]
    fn run_to_completion_succeeds_on_clean_exit() {
        let mut registry = ActionRegistry::new();
        registry.set_field(FieldId::ClonePath, "/repo");
        registry.set_field(FieldId::SystemName, "NIC");

        run_to_completion(
            &FakeRunner::success(),
            &registry,
            &ToolPaths::default(),
            Invocation::Clone,
        )
        .unwrap();
    }
}
