use std::io;
use std::path::Path;

use crate::ports::CexListerPort;

/// Filesystem-backed directory lister for counter-example runs.
#[derive(Debug, Clone, Default)]
pub struct FilesystemCexLister;

impl FilesystemCexLister {
    pub fn new() -> Self {
        Self
    }
}

impl CexListerPort for FilesystemCexLister {
    fn list_file_names(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}
