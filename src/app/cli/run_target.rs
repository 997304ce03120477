use clap::Args;

use super::{apply_text, finish};
use crate::domain::validation::validate_unroll;
use crate::domain::{ActionRegistry, AppError, CheckboxId, FieldId, Invocation};

#[derive(Args)]
pub struct CompileArgs {
    /// Absolute path to the FV environment
    #[arg(long)]
    pub env_location: Option<String>,
    /// Mark this as the environment's first compilation
    #[arg(long)]
    pub first_cmp: bool,
    /// Pass the compile script's help flag
    #[arg(long)]
    pub help_flag: bool,
    /// Print the assembled command without executing it
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run_compile(args: CompileArgs) -> Result<(), AppError> {
    let mut registry = ActionRegistry::new();
    apply_text(&mut registry, FieldId::RunEnvLocation, args.env_location.as_deref())?;
    if args.first_cmp {
        registry.toggle(CheckboxId::FirstCompilation);
    }
    if args.help_flag {
        registry.toggle(CheckboxId::CompileHelp);
    }
    finish(&registry, Invocation::Compile, args.dry_run)
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Absolute path to the FV environment
    #[arg(long)]
    pub env_location: Option<String>,
    /// Report multiple counter examples
    #[arg(long)]
    pub multiple_cex: bool,
    /// Ignore unroll asserts
    #[arg(long)]
    pub no_unwind_assert: bool,
    /// Disable rbw asserts
    #[arg(long)]
    pub disable_memory_test: bool,
    /// Pass the model checker's help flag
    #[arg(long)]
    pub help_flag: bool,
    /// Unroll bound for the model checker
    #[arg(long)]
    pub unroll: Option<String>,
    /// Print the assembled command without executing it
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run_verify(args: VerifyArgs) -> Result<(), AppError> {
    let mut registry = ActionRegistry::new();
    apply_text(&mut registry, FieldId::RunEnvLocation, args.env_location.as_deref())?;
    if args.multiple_cex {
        registry.toggle(CheckboxId::MultipleCex);
    }
    if args.no_unwind_assert {
        registry.toggle(CheckboxId::NoUnwindAssert);
    }
    if args.disable_memory_test {
        registry.toggle(CheckboxId::DisableMemoryTest);
    }
    if args.help_flag {
        registry.toggle(CheckboxId::VerifyHelp);
    }
    if let Some(unroll) = args.unroll.as_deref() {
        let (value, warn) = validate_unroll(unroll)?;
        registry.set_unroll(value);
        if warn {
            println!("⚠️  High unroll value may cause performance issues.");
        }
    }
    finish(&registry, Invocation::Verify, args.dry_run)
}
