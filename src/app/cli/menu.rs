//! Interactive menu: the flag tree rendered as nested selects.
//!
//! Every edit flows through the same registry methods the one-shot
//! subcommands use; the menu only renders state and relays events.

use std::io::ErrorKind;
use std::path::Path;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::adapters::{FilesystemCexLister, ShellRunner};
use crate::app::AppContext;
use crate::app::counter_examples;
use crate::app::execution;
use crate::domain::flags::FieldKind;
use crate::domain::validation::{validate_field_value, validate_unroll};
use crate::domain::{
    Action, AppError, BuildTarget, CheckboxId, FieldId, Invocation, SetOutcome, ToolPaths,
};

const MENU_BACK_OPTION: &str = "[back]";

type Ctx = AppContext<ShellRunner, FilesystemCexLister>;

pub fn run_menu() -> Result<(), AppError> {
    let paths = ToolPaths::load_from(Path::new("."))?;
    let mut ctx = AppContext::new(paths, ShellRunner::new(), FilesystemCexLister::new());

    loop {
        let items = [
            Action::Clone.display_name(),
            Action::Build.display_name(),
            Action::Run.display_name(),
            "Counter Examples",
            "Quit",
        ];
        let Some(choice) = select("fvctl", &items)? else {
            return Ok(());
        };
        match choice {
            0 => clone_menu(&mut ctx)?,
            1 => build_menu(&mut ctx)?,
            2 => compile_run_menu(&mut ctx)?,
            3 => cex_menu(&mut ctx)?,
            _ => return Ok(()),
        }
    }
}

fn clone_menu(ctx: &mut Ctx) -> Result<(), AppError> {
    let fields = FieldId::for_action(Action::Clone);
    loop {
        let mut items: Vec<String> = vec!["Clone me!".to_string()];
        items.extend(fields.iter().map(|id| field_item(ctx, *id)));
        items.push(MENU_BACK_OPTION.to_string());

        let Some(choice) = select("Clone", &items)? else {
            return Ok(());
        };
        if choice == 0 {
            launch(ctx, Invocation::Clone);
        } else if choice <= fields.len() {
            edit_field(ctx, fields[choice - 1])?;
        } else {
            return Ok(());
        }
    }
}

fn build_menu(ctx: &mut Ctx) -> Result<(), AppError> {
    let fields = FieldId::for_action(Action::Build);
    loop {
        let mut items: Vec<String> =
            BuildTarget::ALL.iter().map(|t| t.display_name().to_string()).collect();
        items.extend(fields.iter().map(|id| field_item(ctx, *id)));
        items.push(MENU_BACK_OPTION.to_string());

        let Some(choice) = select("Create FV Environment", &items)? else {
            return Ok(());
        };
        let targets = BuildTarget::ALL.len();
        if choice < targets {
            launch(ctx, Invocation::Build(BuildTarget::ALL[choice]));
        } else if choice < targets + fields.len() {
            edit_field(ctx, fields[choice - targets])?;
        } else {
            return Ok(());
        }
    }
}

fn compile_run_menu(ctx: &mut Ctx) -> Result<(), AppError> {
    loop {
        let mut items: Vec<String> =
            vec!["Compile".to_string(), "Run SMcVer".to_string()];
        items.push(field_item(ctx, FieldId::RunEnvLocation));
        items.extend(CheckboxId::ALL.iter().map(|id| checkbox_item(ctx, *id)));
        items.push(format!("Unroll [{}]", ctx.registry().unroll()));
        items.push(MENU_BACK_OPTION.to_string());

        let Some(choice) = select("Compilation & Run", &items)? else {
            return Ok(());
        };
        let checkboxes = CheckboxId::ALL.len();
        match choice {
            0 => launch(ctx, Invocation::Compile),
            1 => launch(ctx, Invocation::Verify),
            2 => edit_field(ctx, FieldId::RunEnvLocation)?,
            n if n < 3 + checkboxes => {
                ctx.registry_mut().toggle(CheckboxId::ALL[n - 3]);
            }
            n if n == 3 + checkboxes => edit_unroll(ctx)?,
            _ => return Ok(()),
        }
    }
}

fn cex_menu(ctx: &mut Ctx) -> Result<(), AppError> {
    loop {
        let items = ["Refresh", "Edit path", MENU_BACK_OPTION];
        let Some(choice) = select("Counter Examples", &items)? else {
            return Ok(());
        };
        match choice {
            0 => {
                let (watcher, registry, lister) = ctx.watch_parts();
                match counter_examples::refresh(watcher, registry.env_location(), lister) {
                    Ok(listing) => counter_examples::print_listing(&listing),
                    Err(err) => eprintln!("Error: {err}"),
                }
            }
            1 => {
                let current = ctx.watcher_mut().base().unwrap_or("").to_string();
                let Some(path) = prompt_text("Path to counter examples", &current)? else {
                    continue;
                };
                if path.is_empty() {
                    continue;
                }
                let (watcher, _registry, lister) = ctx.watch_parts();
                watcher.edit(&path);
                match counter_examples::refresh(watcher, None, lister) {
                    Ok(listing) => counter_examples::print_listing(&listing),
                    Err(err) => eprintln!("Error: {err}"),
                }
            }
            _ => return Ok(()),
        }
    }
}

/// Menu line for a field: label plus a filled/empty indicator.
fn field_item(ctx: &Ctx, id: FieldId) -> String {
    let field = ctx.registry().field(id);
    if field.is_written() {
        format!("{} [{}]", id.label(), field.value())
    } else {
        format!("{} [...]", id.label())
    }
}

fn checkbox_item(ctx: &Ctx, id: CheckboxId) -> String {
    let mark = if ctx.registry().checkbox(id) { "x" } else { " " };
    format!("[{}] {}", mark, id.label())
}

fn edit_field(ctx: &mut Ctx, id: FieldId) -> Result<(), AppError> {
    match id.kind() {
        FieldKind::Text => {
            let current = ctx.registry().field(id).value().to_string();
            let Some(value) = prompt_text(id.help(), &current)? else {
                return Ok(());
            };
            report_set(ctx.registry_mut().set_field(id, &value));
        }
        FieldKind::Choice { options } => {
            let Some(choice) = select(id.help(), options)? else {
                return Ok(());
            };
            report_set(ctx.registry_mut().set_field(id, options[choice]));
        }
    }
    Ok(())
}

fn report_set(outcome: SetOutcome) {
    match outcome {
        SetOutcome::Written | SetOutcome::Replaced => println!("Field updated!"),
        SetOutcome::Cleared => println!("Field erased. Please fill again."),
        SetOutcome::Unchanged => {}
    }
}

fn edit_unroll(ctx: &mut Ctx) -> Result<(), AppError> {
    let initial = ctx.registry().unroll().to_string();
    let input = Input::new()
        .with_prompt("Enter Unroll:")
        .with_initial_text(initial)
        .validate_with(|value: &String| {
            validate_unroll(value).map(|_| ()).map_err(|err| err.to_string())
        })
        .interact_text();

    let value = match input {
        Ok(value) => value,
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => return Ok(()),
        Err(err) => {
            return Err(AppError::Validation(format!("Failed to read unroll: {err}")));
        }
    };

    let (unroll, warn) = validate_unroll(&value)?;
    ctx.registry_mut().set_unroll(unroll);
    println!("Unroll updated to: {unroll}.");
    if warn {
        println!("⚠️  High unroll value may cause performance issues.");
    }
    Ok(())
}

fn launch(ctx: &mut Ctx, invocation: Invocation) {
    let result = execution::launch(
        ctx.runner(),
        ctx.tracker(),
        ctx.registry(),
        ctx.paths(),
        invocation,
    );
    if let Err(err) = result {
        eprintln!("Error: {err}");
    }
}

fn prompt_text(prompt: &str, initial: &str) -> Result<Option<String>, AppError> {
    let result = Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial.to_string())
        .allow_empty(true)
        .validate_with(|value: &String| {
            validate_field_value(value).map_err(|err| err.to_string())
        })
        .interact_text();

    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read input: {err}"))),
    }
}

fn select<T: ToString>(prompt: &str, items: &[T]) -> Result<Option<usize>, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to select: {err}")))
}
