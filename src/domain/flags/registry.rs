//! Flag-state and readiness tracking.
//!
//! The [`ActionRegistry`] owns every mutable piece of flag state: the
//! per-action mandatory counters, the per-action ordered flag lists, the
//! two shared checkbox token lists, and the dedicated unroll slot. All
//! mutation goes through its methods; nothing else holds the lists.

use std::collections::BTreeMap;

use crate::domain::action::Action;
use crate::domain::flags::field::{FieldId, FieldKind, FlagField};

/// Default unroll bound for the model checker.
pub const UNROLL_DEFAULT: u32 = 32;

/// Which shared checkbox list a toggle feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagScope {
    Compile,
    Verify,
}

/// Fixed boolean flags, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CheckboxId {
    FirstCompilation,
    CompileHelp,
    VerifyHelp,
    MultipleCex,
    NoUnwindAssert,
    DisableMemoryTest,
}

impl CheckboxId {
    /// All checkbox flags in display order.
    pub const ALL: [CheckboxId; 6] = [
        CheckboxId::FirstCompilation,
        CheckboxId::CompileHelp,
        CheckboxId::VerifyHelp,
        CheckboxId::MultipleCex,
        CheckboxId::NoUnwindAssert,
        CheckboxId::DisableMemoryTest,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            CheckboxId::FirstCompilation => "1st Compilation",
            CheckboxId::CompileHelp => "help",
            CheckboxId::VerifyHelp => "help for smcver flags",
            CheckboxId::MultipleCex => "multiple counter examples",
            CheckboxId::NoUnwindAssert => "ignore unroll asserts",
            CheckboxId::DisableMemoryTest => "disable rbw asserts",
        }
    }

    /// The complete, fixed token this checkbox contributes.
    pub fn token(&self) -> &'static str {
        match self {
            CheckboxId::FirstCompilation => "-first_cmp y",
            CheckboxId::CompileHelp => "-h",
            CheckboxId::VerifyHelp => "-h",
            CheckboxId::MultipleCex => "-multiple_cex",
            CheckboxId::NoUnwindAssert => "-no-unwind-assert",
            CheckboxId::DisableMemoryTest => "-disableMemoryTest",
        }
    }

    /// Which shared list the token lands in.
    pub fn scope(&self) -> FlagScope {
        match self {
            CheckboxId::FirstCompilation | CheckboxId::CompileHelp => FlagScope::Compile,
            _ => FlagScope::Verify,
        }
    }
}

/// What a `set_field` call did, for user-facing feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// Unset field received its first value.
    Written,
    /// Written field received a different (or the same) value again.
    Replaced,
    /// Written field was set back to empty.
    Cleared,
    /// Unset field was set to empty; nothing happened.
    Unchanged,
}

#[derive(Debug, Default)]
struct ActionState {
    required_remaining: u32,
    flags: Vec<String>,
}

/// The single owner of all flag state.
#[derive(Debug)]
pub struct ActionRegistry {
    fields: BTreeMap<FieldId, FlagField>,
    states: [ActionState; 3],
    checkboxes: BTreeMap<CheckboxId, bool>,
    compile_flags: Vec<String>,
    verify_flags: Vec<String>,
    unroll: u32,
}

fn index(action: Action) -> usize {
    match action {
        Action::Clone => 0,
        Action::Build => 1,
        Action::Run => 2,
    }
}

/// Remove the first exact match of `token`, if any. Removing an absent
/// token is a deliberate no-op.
fn remove_first(list: &mut Vec<String>, token: &str) {
    if let Some(pos) = list.iter().position(|t| t == token) {
        list.remove(pos);
    }
}

impl ActionRegistry {
    /// Build the full field inventory with every counter at its initial value.
    pub fn new() -> Self {
        let fields: BTreeMap<FieldId, FlagField> =
            FieldId::ALL.into_iter().map(|id| (id, FlagField::new(id))).collect();

        let mut states: [ActionState; 3] = Default::default();
        for id in FieldId::ALL {
            if id.mandatory() {
                states[index(id.action())].required_remaining += 1;
            }
        }

        let checkboxes = CheckboxId::ALL.into_iter().map(|id| (id, false)).collect();

        Self {
            fields,
            states,
            checkboxes,
            compile_flags: Vec::new(),
            verify_flags: Vec::new(),
            unroll: UNROLL_DEFAULT,
        }
    }

    /// Read access to a field's current state.
    pub fn field(&self, id: FieldId) -> &FlagField {
        &self.fields[&id]
    }

    /// True iff every mandatory field of the action is written.
    pub fn is_ready(&self, action: Action) -> bool {
        self.states[index(action)].required_remaining == 0
    }

    /// Number of mandatory fields still unset for the action.
    pub fn missing_count(&self, action: Action) -> u32 {
        self.states[index(action)].required_remaining
    }

    /// The live flag list for the action, in insertion order.
    pub fn current_flags(&self, action: Action) -> &[String] {
        &self.states[index(action)].flags
    }

    /// The shared compile checkbox token list.
    pub fn compile_flags(&self) -> &[String] {
        &self.compile_flags
    }

    /// The shared verify checkbox token list.
    pub fn verify_flags(&self) -> &[String] {
        &self.verify_flags
    }

    /// Current unroll bound.
    pub fn unroll(&self) -> u32 {
        self.unroll
    }

    /// The single unroll token in its current form.
    pub fn unroll_token(&self) -> String {
        format!("--u {}", self.unroll)
    }

    /// Replace the unroll slot. Never touches any flag list.
    pub fn set_unroll(&mut self, value: u32) {
        self.unroll = value;
    }

    /// The environment location observed by the counter-example watcher,
    /// when the run action's field is written.
    pub fn env_location(&self) -> Option<&str> {
        let field = self.field(FieldId::RunEnvLocation);
        field.is_written().then(|| field.value())
    }

    /// Whether a checkbox flag is currently enabled.
    pub fn checkbox(&self, id: CheckboxId) -> bool {
        self.checkboxes[&id]
    }

    /// Assign a new value to a field.
    ///
    /// Precondition: `new_value` contains no whitespace; the input
    /// boundary validates before calling. For choice fields the value is
    /// one of the field's options and never empty.
    pub fn set_field(&mut self, id: FieldId, new_value: &str) -> SetOutcome {
        debug_assert!(
            !new_value.contains(char::is_whitespace),
            "whitespace must be rejected before set_field"
        );

        match id.kind() {
            FieldKind::Text => self.set_text(id, new_value),
            FieldKind::Choice { .. } => self.set_choice(id, new_value),
        }
    }

    fn set_text(&mut self, id: FieldId, new_value: &str) -> SetOutcome {
        let was_written = self.fields[&id].is_written();
        let old_token = self.fields[&id].token_for(self.fields[&id].value());
        let new_token = self.fields[&id].token_for(new_value);
        let mandatory = id.mandatory();
        let state = &mut self.states[index(id.action())];

        if !was_written && new_value.is_empty() {
            return SetOutcome::Unchanged;
        }

        if was_written {
            remove_first(&mut state.flags, &old_token);
        }

        let outcome = if new_value.is_empty() {
            if mandatory {
                state.required_remaining += 1;
            }
            SetOutcome::Cleared
        } else {
            if !was_written && mandatory {
                state.required_remaining -= 1;
            }
            state.flags.push(new_token);
            if was_written { SetOutcome::Replaced } else { SetOutcome::Written }
        };

        let field = self.fields.get_mut(&id).expect("field inventory is fixed");
        field.assign(new_value, !new_value.is_empty());
        outcome
    }

    fn set_choice(&mut self, id: FieldId, new_value: &str) -> SetOutcome {
        debug_assert!(!new_value.is_empty(), "choice fields have no unset state");
        if new_value.is_empty() {
            return SetOutcome::Unchanged;
        }

        let was_written = self.fields[&id].is_written();
        let old_token = self.fields[&id].token_for(self.fields[&id].value());
        let new_token = self.fields[&id].token_for(new_value);
        let state = &mut self.states[index(id.action())];

        if was_written {
            remove_first(&mut state.flags, &old_token);
        } else if id.mandatory() {
            state.required_remaining -= 1;
        }
        state.flags.push(new_token);

        let field = self.fields.get_mut(&id).expect("field inventory is fixed");
        field.assign(new_value, true);
        if was_written { SetOutcome::Replaced } else { SetOutcome::Written }
    }

    /// Flip a checkbox flag; returns the new state.
    pub fn toggle(&mut self, id: CheckboxId) -> bool {
        let enabled = self.checkboxes.get_mut(&id).expect("checkbox inventory is fixed");
        *enabled = !*enabled;
        let now_enabled = *enabled;

        let list = match id.scope() {
            FlagScope::Compile => &mut self.compile_flags,
            FlagScope::Verify => &mut self.verify_flags,
        };
        if now_enabled {
            list.push(id.token().to_string());
        } else {
            remove_first(list, id.token());
        }
        now_enabled
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
