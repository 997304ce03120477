//! Field slots for action parameters.
//!
//! Every user-fillable parameter is a [`FlagField`] identified by a
//! [`FieldId`]. The static shape of each field (template, kind, whether it
//! is mandatory) lives on the identifier; the field itself carries only the
//! mutable state the UI needs to reflect.

use crate::domain::action::Action;

/// System choices offered for the clone action.
pub const SYSTEM_OPTIONS: &[&str] = &["Switch", "GPU", "NIC"];

/// Project choices offered for the clone action.
pub const PROJECT_OPTIONS: &[&str] = &["arava", "gb100", "carmel", "sunbird"];

/// How a field accepts and serializes its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free string input; empty string means unset.
    Text,
    /// Pick from a fixed option list; has no unset state once picked.
    Choice { options: &'static [&'static str] },
}

/// Stable identity for every field the front end offers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    // Clone
    ClonePath,
    SystemName,
    ProjectName,
    FwMachine,
    FolderName,
    // Build
    EnvLocation,
    EnvName,
    FunctionName,
    ExeFile,
    CFileName,
    MakeLogLocation,
    // Run
    RunEnvLocation,
}

impl FieldId {
    /// All fields in display order.
    pub const ALL: [FieldId; 12] = [
        FieldId::ClonePath,
        FieldId::SystemName,
        FieldId::ProjectName,
        FieldId::FwMachine,
        FieldId::FolderName,
        FieldId::EnvLocation,
        FieldId::EnvName,
        FieldId::FunctionName,
        FieldId::ExeFile,
        FieldId::CFileName,
        FieldId::MakeLogLocation,
        FieldId::RunEnvLocation,
    ];

    /// The action this field belongs to.
    pub fn action(&self) -> Action {
        match self {
            FieldId::ClonePath
            | FieldId::SystemName
            | FieldId::ProjectName
            | FieldId::FwMachine
            | FieldId::FolderName => Action::Clone,
            FieldId::EnvLocation
            | FieldId::EnvName
            | FieldId::FunctionName
            | FieldId::ExeFile
            | FieldId::CFileName
            | FieldId::MakeLogLocation => Action::Build,
            FieldId::RunEnvLocation => Action::Run,
        }
    }

    /// Fields of the given action, in display order.
    pub fn for_action(action: Action) -> Vec<FieldId> {
        FieldId::ALL.into_iter().filter(|id| id.action() == action).collect()
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::ClonePath => "Directory Path",
            FieldId::SystemName => "System Name",
            FieldId::ProjectName => "Project Name",
            FieldId::FwMachine => "FW Machine Name",
            FieldId::FolderName => "Folder Name",
            FieldId::EnvLocation => "Environment location",
            FieldId::EnvName => "Environment name",
            FieldId::FunctionName => "Function name",
            FieldId::ExeFile => "File Location",
            FieldId::CFileName => "C File Name",
            FieldId::MakeLogLocation => "make.log Location",
            FieldId::RunEnvLocation => "FV Environment Path",
        }
    }

    /// Prompt text shown when the field is edited.
    pub fn help(&self) -> &'static str {
        match self {
            FieldId::ClonePath => "Path to clone directory location.",
            FieldId::SystemName => "Choose the system.",
            FieldId::ProjectName => "Choose the project to compile.",
            FieldId::FwMachine => "The name of the fw machine you want to connect.",
            FieldId::FolderName => "The name of the clone folder.",
            FieldId::EnvLocation => "FV environment directory location to be open.",
            FieldId::EnvName => "FV environment name that will be open.",
            FieldId::FunctionName => "The name of the function under test.",
            FieldId::ExeFile => "Exe file location.",
            FieldId::CFileName => "The name of the C file where the function is.",
            FieldId::MakeLogLocation => "The path for the project build log.",
            FieldId::RunEnvLocation => "Absolute path to the FV environment.",
        }
    }

    /// Command-line token template this field contributes.
    pub fn template(&self) -> &'static str {
        match self {
            FieldId::ClonePath => "--clone_path",
            FieldId::SystemName => "--system_name",
            FieldId::ProjectName => "--project_name",
            FieldId::FwMachine => "--fw_machine",
            FieldId::FolderName => "--folder_name",
            FieldId::EnvLocation | FieldId::RunEnvLocation => "--env_location",
            FieldId::EnvName => "--env_name",
            FieldId::FunctionName => "--Function_name",
            FieldId::ExeFile => "--exe_file",
            FieldId::CFileName => "--c_file_name",
            FieldId::MakeLogLocation => "--make_log_location",
        }
    }

    /// Input kind.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldId::SystemName => FieldKind::Choice { options: SYSTEM_OPTIONS },
            FieldId::ProjectName => FieldKind::Choice { options: PROJECT_OPTIONS },
            _ => FieldKind::Text,
        }
    }

    /// Whether an unset value blocks the owning action.
    pub fn mandatory(&self) -> bool {
        !matches!(self, FieldId::ProjectName | FieldId::FwMachine | FieldId::FolderName)
    }
}

/// Mutable state of one parameter slot.
#[derive(Debug, Clone)]
pub struct FlagField {
    id: FieldId,
    value: String,
    written: bool,
}

impl FlagField {
    pub(crate) fn new(id: FieldId) -> Self {
        Self { id, value: String::new(), written: false }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Current value; empty when unset.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the field currently holds a non-empty value.
    pub fn is_written(&self) -> bool {
        self.written
    }

    /// Serialized token for the given value.
    pub(crate) fn token_for(&self, value: &str) -> String {
        format!("{} {}", self.id.template(), value)
    }

    pub(crate) fn assign(&mut self, value: &str, written: bool) {
        self.value = value.to_string();
        self.written = written;
    }
}
