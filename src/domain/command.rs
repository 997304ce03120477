//! Command assembly.
//!
//! Builds the complete invocation string for a ready action: executable,
//! script path, then the action's ordered flags, single-space joined. The
//! unroll token is appended only for the verify run. Callers gate on
//! readiness before assembling; `assemble` itself is pure.

use crate::domain::action::Invocation;
use crate::domain::config::ToolPaths;
use crate::domain::flags::ActionRegistry;

/// Assemble the full command line for an invocation.
///
/// Deterministic for a fixed set of written values, up to the insertion
/// order the registry recorded.
pub fn assemble(invocation: Invocation, registry: &ActionRegistry, paths: &ToolPaths) -> String {
    let mut parts: Vec<&str> = vec![&paths.executable];

    match invocation {
        Invocation::Clone => {
            parts.push(&paths.clone_script);
            parts.extend(registry.current_flags(invocation.action()).iter().map(String::as_str));
            parts.join(" ")
        }
        Invocation::Build(target) => {
            parts.push(paths.build_script(target));
            parts.extend(registry.current_flags(invocation.action()).iter().map(String::as_str));
            parts.join(" ")
        }
        Invocation::Compile => {
            parts.push(&paths.compile_script);
            parts.extend(registry.compile_flags().iter().map(String::as_str));
            parts.extend(registry.current_flags(invocation.action()).iter().map(String::as_str));
            parts.join(" ")
        }
        Invocation::Verify => {
            parts.push(&paths.verify_script);
            parts.extend(registry.current_flags(invocation.action()).iter().map(String::as_str));
            parts.extend(registry.verify_flags().iter().map(String::as_str));
            let unroll = registry.unroll_token();
            parts.push(&unroll);
            parts.join(" ")
        }
    }
}
