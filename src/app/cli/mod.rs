//! CLI adapter.

mod build;
mod cex;
mod clone;
mod menu;
mod run_target;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::adapters::ShellRunner;
use crate::app::execution;
use crate::domain::command::assemble;
use crate::domain::flags::FieldKind;
use crate::domain::validation::validate_field_value;
use crate::domain::{ActionRegistry, AppError, FieldId, Invocation, ToolPaths};

#[derive(Parser)]
#[command(name = "fvctl")]
#[command(version)]
#[command(
    about = "Assemble and run formal-verification tool invocations",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default when no subcommand is given)
    #[clap(visible_alias = "m")]
    Menu,
    /// Clone a project
    #[clap(visible_alias = "c")]
    Clone(clone::CloneArgs),
    /// Build a formal-verification environment
    #[clap(visible_alias = "b")]
    Build(build::BuildArgs),
    /// Compile the FV environment
    Compile(run_target::CompileArgs),
    /// Run the SMcVer model checker
    #[clap(visible_alias = "v")]
    Verify(run_target::VerifyArgs),
    /// List counter examples from the latest run
    Cex(cex::CexArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        None | Some(Commands::Menu) => menu::run_menu(),
        Some(Commands::Clone(args)) => clone::run_clone(args),
        Some(Commands::Build(args)) => build::run_build(args),
        Some(Commands::Compile(args)) => run_target::run_compile(args),
        Some(Commands::Verify(args)) => run_target::run_verify(args),
        Some(Commands::Cex(args)) => cex::run_cex(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Feed a provided text value through the whitespace gate and into the
/// registry; absent arguments leave the field unset.
fn apply_text(
    registry: &mut ActionRegistry,
    id: FieldId,
    value: Option<&str>,
) -> Result<(), AppError> {
    let Some(value) = value else { return Ok(()) };
    validate_field_value(value)?;
    registry.set_field(id, value);
    Ok(())
}

/// Feed a provided choice value into the registry after checking it
/// against the field's option list.
fn apply_choice(
    registry: &mut ActionRegistry,
    id: FieldId,
    value: Option<&str>,
) -> Result<(), AppError> {
    let Some(value) = value else { return Ok(()) };
    validate_field_value(value)?;
    let FieldKind::Choice { options } = id.kind() else {
        unreachable!("{} is not a choice field", id.label())
    };
    if !options.contains(&value) {
        return Err(AppError::Validation(format!(
            "Invalid value '{}' for {}: choose one of {}",
            value,
            id.label(),
            options.join(", ")
        )));
    }
    registry.set_field(id, value);
    Ok(())
}

/// Gate on readiness, then either print the assembled command or run it
/// to completion with streamed output.
fn finish(registry: &ActionRegistry, invocation: Invocation, dry_run: bool) -> Result<(), AppError> {
    let paths = ToolPaths::load_from(Path::new("."))?;
    execution::ensure_ready(registry, invocation.action())?;
    if dry_run {
        println!("{}", assemble(invocation, registry, &paths));
        return Ok(());
    }
    execution::run_to_completion(&ShellRunner::new(), registry, &paths, invocation)
}
