//! Counter-example listing service: ties the watcher state machine to a
//! directory lister and keeps "unreadable" distinct from "empty".

use crate::domain::cex::classify;
use crate::domain::{AppError, CexListing, CexWatcher};
use crate::ports::CexListerPort;

/// Resolve the watcher's directory for a refresh event and classify its
/// entries.
pub fn refresh<L: CexListerPort>(
    watcher: &mut CexWatcher,
    env_location: Option<&str>,
    lister: &L,
) -> Result<CexListing, AppError> {
    let Some(dir) = watcher.refresh(env_location) else {
        return Ok(CexListing::NoPath);
    };

    let names = lister.list_file_names(&dir).map_err(|err| AppError::CexListing {
        path: dir.display().to_string(),
        details: err.to_string(),
    })?;
    Ok(classify(names))
}

/// Render a listing the way the tree view did: a sentinel line for the
/// no-path and pass states, one display name per finding otherwise.
pub fn print_listing(listing: &CexListing) {
    match listing {
        CexListing::NoPath => println!("No path insert yet."),
        CexListing::Pass => println!("PASS"),
        CexListing::Findings(entries) => {
            for entry in entries {
                println!("{}", entry.display);
            }
        }
    }
}
