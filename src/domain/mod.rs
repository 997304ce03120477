pub mod action;
pub mod cex;
pub mod command;
pub mod config;
pub mod error;
pub mod flags;
pub mod validation;

pub use action::{Action, BuildTarget, Invocation};
pub use cex::{CexEntry, CexListing, CexWatcher};
pub use config::ToolPaths;
pub use error::AppError;
pub use flags::{ActionRegistry, CheckboxId, FieldId, FieldKind, SetOutcome};
