use crate::domain::{ActionRegistry, CexWatcher, ToolPaths};
use crate::app::execution::ExecutionTracker;
use crate::ports::{CexListerPort, ProcessRunner};

/// Application context holding the engine state and collaborator ports.
pub struct AppContext<R: ProcessRunner, L: CexListerPort> {
    paths: ToolPaths,
    registry: ActionRegistry,
    watcher: CexWatcher,
    tracker: ExecutionTracker,
    runner: R,
    lister: L,
}

impl<R: ProcessRunner, L: CexListerPort> AppContext<R, L> {
    /// Create a new application context with fresh flag state.
    pub fn new(paths: ToolPaths, runner: R, lister: L) -> Self {
        Self {
            paths,
            registry: ActionRegistry::new(),
            watcher: CexWatcher::new(),
            tracker: ExecutionTracker::new(),
            runner,
            lister,
        }
    }

    pub fn paths(&self) -> &ToolPaths {
        &self.paths
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ActionRegistry {
        &mut self.registry
    }

    pub fn watcher_mut(&mut self) -> &mut CexWatcher {
        &mut self.watcher
    }

    pub fn tracker(&self) -> &ExecutionTracker {
        &self.tracker
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Split borrow for a watcher refresh driven by the registry's
    /// environment location.
    pub fn watch_parts(&mut self) -> (&mut CexWatcher, &ActionRegistry, &L) {
        (&mut self.watcher, &self.registry, &self.lister)
    }
}
