//! The flag-state and readiness engine.

pub mod field;
pub mod registry;

pub use field::{FieldId, FieldKind, FlagField, PROJECT_OPTIONS, SYSTEM_OPTIONS};
pub use registry::{ActionRegistry, CheckboxId, FlagScope, SetOutcome, UNROLL_DEFAULT};
