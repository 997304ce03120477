//! Counter-example directory tracking.
//!
//! A small two-state machine (`no-path` / `has-path`) that derives the
//! counter-example directory from the tracked environment location or a
//! user-entered override, and classifies directory entries by the fixed
//! `cex` name marker. Filesystem reads go through the
//! [`CexListerPort`](crate::ports::CexListerPort); everything here is pure.

use std::path::PathBuf;

/// Subdirectory under the resolved base that holds the latest results.
pub const CEX_SUBDIR: &str = "latest_run";

/// Name marker identifying counter-example files (case-sensitive).
pub const CEX_MARKER: &str = "cex";

/// One counter-example entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CexEntry {
    /// File name with the extension stripped, for display.
    pub display: String,
    /// Full file name on disk.
    pub file_name: String,
}

/// Result of a refresh, distinct from the error case of an unreadable
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CexListing {
    /// Neither an environment location nor an override path is known.
    NoPath,
    /// The directory was readable but held no marked entries.
    Pass,
    /// Marked entries, in directory order.
    Findings(Vec<CexEntry>),
}

/// Tracks the resolved counter-example base path across refresh and edit
/// events.
#[derive(Debug, Default)]
pub struct CexWatcher {
    base: Option<String>,
    last_env_location: Option<String>,
}

impl CexWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// An explicit user-entered path always wins and switches to has-path.
    pub fn edit(&mut self, path: &str) {
        self.base = Some(path.to_string());
    }

    /// Resolve the directory to list for a refresh event.
    ///
    /// Re-derives from the environment location only when it changed since
    /// it was last observed; otherwise the previously resolved base is
    /// re-listed. Returns `None` while no path is known.
    pub fn refresh(&mut self, env_location: Option<&str>) -> Option<PathBuf> {
        match (env_location, self.base.as_deref()) {
            (None, None) => None,
            (None, Some(base)) => Some(cex_dir(base)),
            (Some(env), None) => {
                self.track(env);
                self.base.as_deref().map(cex_dir)
            }
            (Some(env), Some(_)) => {
                if self.last_env_location.as_deref() != Some(env) {
                    self.track(env);
                }
                self.base.as_deref().map(cex_dir)
            }
        }
    }

    /// The currently resolved base path, if any.
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    fn track(&mut self, env_location: &str) {
        self.base = Some(parent_of(env_location).to_string());
        self.last_env_location = Some(env_location.to_string());
    }
}

/// Strip the trailing path segment after the last `/`. A value without a
/// separator is returned unchanged.
fn parent_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(pos) => &path[..pos],
        None => path,
    }
}

fn cex_dir(base: &str) -> PathBuf {
    PathBuf::from(base).join(CEX_SUBDIR)
}

/// Display name: everything up to the last `.`.
fn display_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(pos) => &file_name[..pos],
        None => file_name,
    }
}

/// Classify raw directory entries into a listing. Entries whose name does
/// not contain the marker are dropped; an empty result is the PASS
/// sentinel, not an error.
pub fn classify(file_names: Vec<String>) -> CexListing {
    let entries: Vec<CexEntry> = file_names
        .into_iter()
        .filter(|name| name.contains(CEX_MARKER))
        .map(|name| CexEntry { display: display_name(&name).to_string(), file_name: name })
        .collect();

    if entries.is_empty() { CexListing::Pass } else { CexListing::Findings(entries) }
}
