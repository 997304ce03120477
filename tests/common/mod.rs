//! Shared testing utilities for fvctl CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI
/// exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `fvctl` binary within the
    /// working directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("fvctl").expect("Failed to locate fvctl binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write an fvctl.toml with the given content.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("fvctl.toml"), content).expect("Failed to write config");
    }

    /// Swap the interpreter for `echo` so runs succeed and print the
    /// command tail instead of invoking real scripts.
    pub fn use_echo_executable(&self) {
        self.write_config("executable = \"echo\"\n");
    }

    /// Create `<work>/fv/latest_run` holding the given files; returns the
    /// base directory the watcher should be pointed at.
    pub fn make_run_dir(&self, files: &[&str]) -> PathBuf {
        let base = self.work_dir.join("fv");
        let dir = base.join("latest_run");
        fs::create_dir_all(&dir).expect("Failed to create latest_run directory");
        for file in files {
            fs::write(dir.join(file), "").expect("Failed to seed run file");
        }
        base
    }
}
