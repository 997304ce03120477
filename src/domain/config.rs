//! Tool-path configuration loaded from `fvctl.toml`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::AppError;
use crate::domain::action::BuildTarget;

/// Configuration file name looked up in the working directory.
pub const CONFIG_FILE: &str = "fvctl.toml";

/// Executable and script locations for the external tools.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolPaths {
    /// Interpreter used to run every script.
    #[serde(default = "default_executable")]
    pub executable: String,
    /// Project clone script.
    #[serde(default = "default_clone_script")]
    pub clone_script: String,
    /// Environment build script for the GPU firmware target.
    #[serde(default = "default_build_script")]
    pub build_script_gpu_fw: String,
    /// Environment build script for the Golan firmware target.
    #[serde(default = "default_build_script")]
    pub build_script_golan_fw: String,
    /// Environment build script for the Pelican target.
    #[serde(default = "default_build_script")]
    pub build_script_pelican: String,
    /// Environment compile script.
    #[serde(default = "default_compile_script")]
    pub compile_script: String,
    /// Model checker run script.
    #[serde(default = "default_verify_script")]
    pub verify_script: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            clone_script: default_clone_script(),
            build_script_gpu_fw: default_build_script(),
            build_script_golan_fw: default_build_script(),
            build_script_pelican: default_build_script(),
            compile_script: default_compile_script(),
            verify_script: default_verify_script(),
        }
    }
}

impl ToolPaths {
    /// Load from `dir/fvctl.toml`; a missing file yields the defaults.
    pub fn load_from(dir: &Path) -> Result<Self, AppError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let paths: ToolPaths = toml::from_str(&content)?;
        paths.validate()?;
        Ok(paths)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        for (name, value) in [
            ("executable", &self.executable),
            ("clone_script", &self.clone_script),
            ("build_script_gpu_fw", &self.build_script_gpu_fw),
            ("build_script_golan_fw", &self.build_script_golan_fw),
            ("build_script_pelican", &self.build_script_pelican),
            ("compile_script", &self.compile_script),
            ("verify_script", &self.verify_script),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::InvalidConfig(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    /// Build script for the given target.
    pub fn build_script(&self, target: BuildTarget) -> &str {
        match target {
            BuildTarget::GpuFw => &self.build_script_gpu_fw,
            BuildTarget::GolanFw => &self.build_script_golan_fw,
            BuildTarget::Pelican => &self.build_script_pelican,
        }
    }
}

fn default_executable() -> String {
    "python3".to_string()
}

fn default_clone_script() -> String {
    "scripts/FVClone.py".to_string()
}

fn default_build_script() -> String {
    "scripts/FVBuild.py".to_string()
}

fn default_compile_script() -> String {
    "scripts/FVCompile.py".to_string()
}

fn default_verify_script() -> String {
    "scripts/SmcverRun.py".to_string()
}
