use std::io;
use std::path::Path;

/// Directory read access for the counter-example watcher.
///
/// Returns raw file names; classification happens in the domain. An I/O
/// failure propagates so the caller can distinguish "unreadable" from
/// "empty".
pub trait CexListerPort {
    fn list_file_names(&self, dir: &Path) -> io::Result<Vec<String>>;
}
