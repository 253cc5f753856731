//! Generator configuration module.
//!
//! Handles loading and validating `pagesmith.toml`. Every key has a default,
//! so the user's file (if any) is deserialized straight into
//! [`GeneratorConfig`] and validated. Command-line flags are applied last by
//! the binary, which then checks the final directories with
//! [`validate_dirs`] before anything is written.
//!
//! ## Config File Location
//!
//! `pagesmith.toml` is read from the working directory:
//!
//! ```text
//! project/
//! ├── pagesmith.toml      # optional
//! ├── site.json
//! ├── templates/
//! │   ├── bistro/
//! │   └── modern/
//! └── output/             # generated
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! templates_dir = "templates"   # Folder scanned for template subfolders
//! output_dir = "output"         # Where generated sites are written
//! animations = true             # Inject animations.js; false adds a no-motion class
//! clean = false                 # Wipe output_dir before writing
//! # default_template = "bistro" # Used when --template is not given
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "pagesmith.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator settings loaded from `pagesmith.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Folder whose immediate subfolders are templates.
    pub templates_dir: String,
    /// Destination for generated sites.
    pub output_dir: String,
    /// Inject the animation script into rendered pages.
    pub animations: bool,
    /// Remove everything in `output_dir` before writing.
    pub clean: bool,
    /// Template used when none is named on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            templates_dir: "templates".to_string(),
            output_dir: "output".to_string(),
            animations: true,
            clean: false,
            default_template: None,
        }
    }
}

impl GeneratorConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.templates_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "templates_dir must not be empty".into(),
            ));
        }
        if self.output_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".into(),
            ));
        }
        if self
            .default_template
            .as_deref()
            .is_some_and(|t| t.trim().is_empty())
        {
            return Err(ConfigError::Validation(
                "default_template must not be blank".into(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Directory checks
// =============================================================================

/// Check that writing (and cleaning) `output` cannot destroy the templates or
/// the project itself.
///
/// Relative paths are taken from `project`. Paths are compared after
/// resolving symlinks and `..`; a directory that does not exist yet is
/// resolved through its nearest existing ancestor. Rejected:
///
/// - `output` is the project directory or one of its parents
/// - `output` is, or contains, the templates directory
/// - `output` lies inside the templates directory
pub fn validate_dirs(project: &Path, templates: &Path, output: &Path) -> Result<(), ConfigError> {
    let project = resolve_dir(project, Path::new("."))?;
    let templates = resolve_dir(&project, templates)?;
    let output = resolve_dir(&project, output)?;

    if project.starts_with(&output) {
        return Err(ConfigError::Validation(format!(
            "output directory '{}' must not be the project directory or one of its parents",
            output.display()
        )));
    }
    if templates.starts_with(&output) {
        return Err(ConfigError::Validation(format!(
            "output directory '{}' must not be or contain the templates directory '{}'",
            output.display(),
            templates.display()
        )));
    }
    if output.starts_with(&templates) {
        return Err(ConfigError::Validation(format!(
            "output directory '{}' must not be inside the templates directory '{}'",
            output.display(),
            templates.display()
        )));
    }
    Ok(())
}

/// `base.join(path)` made absolute, with its longest existing prefix
/// canonicalized.
fn resolve_dir(base: &Path, path: &Path) -> Result<PathBuf, io::Error> {
    let absolute = std::path::absolute(base.join(path))?;
    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    loop {
        if let Ok(canonical) = existing.canonicalize() {
            return Ok(missing
                .iter()
                .rev()
                .fold(canonical, |acc: PathBuf, part| acc.join(part)));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return Ok(absolute),
        }
    }
}

// =============================================================================
// Config loading
// =============================================================================

/// Load config from `pagesmith.toml` in the given directory.
///
/// Missing keys take their defaults and unknown keys are rejected. Without a
/// file the defaults are used as they are.
pub fn load_config(dir: &Path) -> Result<GeneratorConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    let config = if path.is_file() {
        toml::from_str(&fs::read_to_string(&path)?)?
    } else {
        GeneratorConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `pagesmith.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Pagesmith Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the directory you run pagesmith from.
# Command-line flags override these values.
# Unknown keys will cause an error.

# Folder scanned for templates. Each subfolder containing at least one
# .html file is a template; its folder name is the template name.
templates_dir = "templates"

# Where generated sites are written.
output_dir = "output"

# Inject <script src="animations.js"> into pages. When false, pages get a
# "no-motion" class instead (same as --no-animations).
animations = true

# Delete everything in output_dir before writing (same as --clean).
clean = false

# Template to use when --template is not given. When unset and exactly one
# template is installed, that template is used.
# default_template = "bistro"
"##
}
