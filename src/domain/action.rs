use std::fmt;

/// The external operations the front end can assemble and launch.
///
/// Each action gates on its own set of mandatory fields; readiness is
/// tracked by the [`ActionRegistry`](crate::domain::flags::ActionRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Clone a project into a working directory.
    Clone,
    /// Build a formal-verification environment.
    Build,
    /// Compile the environment or run the model checker inside it.
    Run,
}

impl Action {
    /// All actions in display order.
    pub const ALL: [Action; 3] = [Action::Clone, Action::Build, Action::Run];

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Action::Clone => "Clone",
            Action::Build => "Create FV Environment",
            Action::Run => "Compilation & Run",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which build script the environment-build action should launch.
///
/// Attached explicitly to the menu entry; never inferred from display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildTarget {
    GpuFw,
    GolanFw,
    Pelican,
}

impl BuildTarget {
    /// All targets in display order.
    pub const ALL: [BuildTarget; 3] =
        [BuildTarget::GpuFw, BuildTarget::GolanFw, BuildTarget::Pelican];

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildTarget::GpuFw => "GPU_FW",
            BuildTarget::GolanFw => "GOLAN_FW",
            BuildTarget::Pelican => "PELICAN",
        }
    }

    /// CLI argument spelling for this target.
    pub fn arg_name(&self) -> &'static str {
        match self {
            BuildTarget::GpuFw => "gpu-fw",
            BuildTarget::GolanFw => "golan-fw",
            BuildTarget::Pelican => "pelican",
        }
    }

    /// Parse a target from its CLI argument spelling.
    pub fn from_arg_name(name: &str) -> Option<BuildTarget> {
        match name.to_lowercase().as_str() {
            "gpu-fw" | "gpu_fw" => Some(BuildTarget::GpuFw),
            "golan-fw" | "golan_fw" => Some(BuildTarget::GolanFw),
            "pelican" => Some(BuildTarget::Pelican),
            _ => None,
        }
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A concrete launchable command.
///
/// [`Action::Run`] fans out into two invocations (compile and verify) that
/// share the same readiness gate and environment-location field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Clone,
    Build(BuildTarget),
    Compile,
    Verify,
}

impl Invocation {
    /// The action whose readiness gates this invocation.
    pub fn action(&self) -> Action {
        match self {
            Invocation::Clone => Action::Clone,
            Invocation::Build(_) => Action::Build,
            Invocation::Compile | Invocation::Verify => Action::Run,
        }
    }

    /// Progress message shown when the invocation is launched.
    pub fn progress_message(&self) -> &'static str {
        match self {
            Invocation::Clone => "Cloning in progress..",
            Invocation::Build(_) => "Build in progress..",
            Invocation::Compile => "Compilation in progress..",
            Invocation::Verify => "SMcVer in progress..",
        }
    }

    /// Message reported on a clean exit.
    pub fn success_message(&self) -> &'static str {
        match self {
            Invocation::Clone => "Cloning finished.",
            Invocation::Build(_) => "FV environment built.",
            Invocation::Compile => "Compilation finished.",
            Invocation::Verify => "SMcVer run successfully!",
        }
    }

    /// Message reported on a failed exit or spawn.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Invocation::Clone => "Failed to clone.",
            Invocation::Build(_) => "Failed to build the FV environment.",
            Invocation::Compile => "Failed to compile.",
            Invocation::Verify => "Failed to run SMcVer.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_target_arg_names_roundtrip() {
        for target in BuildTarget::ALL {
            assert_eq!(BuildTarget::from_arg_name(target.arg_name()), Some(target));
        }
    }

    #[test]
    fn all_actions_have_display_names() {
        for action in Action::ALL {
            assert!(!action.display_name().is_empty());
        }
    }

    #[test]
    fn run_invocations_share_the_run_action() {
        assert_eq!(Invocation::Compile.action(), Action::Run);
        assert_eq!(Invocation::Verify.action(), Action::Run);
        assert_eq!(Invocation::Build(BuildTarget::Pelican).action(), Action::Build);
    }
}
