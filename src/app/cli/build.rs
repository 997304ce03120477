use clap::Args;

use super::{apply_text, finish};
use crate::domain::{ActionRegistry, AppError, BuildTarget, FieldId, Invocation};

#[derive(Args)]
pub struct BuildArgs {
    /// Build target: gpu-fw, golan-fw, or pelican
    pub target: String,
    /// FV environment directory location to be open
    #[arg(long)]
    pub env_location: Option<String>,
    /// FV environment name that will be open
    #[arg(long)]
    pub env_name: Option<String>,
    /// Name of the function under test
    #[arg(long)]
    pub function_name: Option<String>,
    /// Exe file location
    #[arg(long)]
    pub exe_file: Option<String>,
    /// Name of the C file where the function is
    #[arg(long)]
    pub c_file_name: Option<String>,
    /// Path for the project build log
    #[arg(long)]
    pub make_log_location: Option<String>,
    /// Print the assembled command without executing it
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run_build(args: BuildArgs) -> Result<(), AppError> {
    let target = BuildTarget::from_arg_name(&args.target).ok_or_else(|| {
        AppError::Validation(format!(
            "Invalid build target '{}': must be one of gpu-fw, golan-fw, pelican",
            args.target
        ))
    })?;

    let mut registry = ActionRegistry::new();
    apply_text(&mut registry, FieldId::EnvLocation, args.env_location.as_deref())?;
    apply_text(&mut registry, FieldId::EnvName, args.env_name.as_deref())?;
    apply_text(&mut registry, FieldId::FunctionName, args.function_name.as_deref())?;
    apply_text(&mut registry, FieldId::ExeFile, args.exe_file.as_deref())?;
    apply_text(&mut registry, FieldId::CFileName, args.c_file_name.as_deref())?;
    apply_text(&mut registry, FieldId::MakeLogLocation, args.make_log_location.as_deref())?;
    finish(&registry, Invocation::Build(target), args.dry_run)
}
