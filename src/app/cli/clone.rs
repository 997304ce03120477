use clap::Args;

use super::{apply_choice, apply_text, finish};
use crate::domain::{ActionRegistry, AppError, FieldId, Invocation};

#[derive(Args)]
pub struct CloneArgs {
    /// Path to the clone directory location
    #[arg(long)]
    pub dir_path: Option<String>,
    /// System to clone for (Switch, GPU, NIC)
    #[arg(long)]
    pub system: Option<String>,
    /// Project to compile (arava, gb100, carmel, sunbird)
    #[arg(long)]
    pub project: Option<String>,
    /// Name of the fw machine to connect to
    #[arg(long)]
    pub machine: Option<String>,
    /// Name of the clone folder
    #[arg(long)]
    pub folder: Option<String>,
    /// Print the assembled command without executing it
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run_clone(args: CloneArgs) -> Result<(), AppError> {
    let mut registry = ActionRegistry::new();
    apply_text(&mut registry, FieldId::ClonePath, args.dir_path.as_deref())?;
    apply_choice(&mut registry, FieldId::SystemName, args.system.as_deref())?;
    apply_choice(&mut registry, FieldId::ProjectName, args.project.as_deref())?;
    apply_text(&mut registry, FieldId::FwMachine, args.machine.as_deref())?;
    apply_text(&mut registry, FieldId::FolderName, args.folder.as_deref())?;
    finish(&registry, Invocation::Clone, args.dry_run)
}
