use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::CexListerPort;

/// Scripted directory lister recording the directory it was asked for.
#[derive(Debug, Default)]
pub struct FakeCexLister {
    files: Vec<String>,
    fail: bool,
    last_dir: Mutex<Option<PathBuf>>,
}

impl FakeCexLister {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_files(files: Vec<String>) -> Self {
        Self { files, ..Self::default() }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn last_dir(&self) -> Option<PathBuf> {
        self.last_dir.lock().expect("lock poisoned").clone()
    }
}

impl CexListerPort for FakeCexLister {
    fn list_file_names(&self, dir: &Path) -> io::Result<Vec<String>> {
        *self.last_dir.lock().expect("lock poisoned") = Some(dir.to_path_buf());
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
        }
        Ok(self.files.clone())
    }
}
