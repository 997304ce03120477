use clap::Args;

use crate::adapters::FilesystemCexLister;
use crate::app::counter_examples;
use crate::domain::validation::validate_field_value;
use crate::domain::{AppError, CexWatcher};

#[derive(Args)]
pub struct CexArgs {
    /// Parent directory of the latest run results
    #[arg(long)]
    pub path: Option<String>,
}

pub fn run_cex(args: CexArgs) -> Result<(), AppError> {
    let mut watcher = CexWatcher::new();
    if let Some(path) = args.path.as_deref() {
        validate_field_value(path)?;
        watcher.edit(path);
    }

    let listing = counter_examples::refresh(&mut watcher, None, &FilesystemCexLister::new())?;
    counter_examples::print_listing(&listing);
    Ok(())
}
