//! Shared generation pipeline entrypoint used by the CLI.

use std::path::PathBuf;

use crate::writer::{generate_all, generate_file, GeneratedUnits};
use crate::GenError;

/// Scope for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenScope {
    /// Process every file in the configured service directory.
    All,
    /// Process a single descriptor file.
    File(PathBuf),
}

/// Explicit configuration for a generation run.
///
/// The CLI resolves flags and environment fallbacks into this struct; nothing
/// below it reads the environment.
#[derive(Debug, Clone, Default)]
pub struct GenConfig {
    /// Directory scanned in [`GenScope::All`] mode. Required there (unset or
    /// empty is fatal), unused otherwise.
    pub service_dir: Option<PathBuf>,
    /// When set, every generated unit lands here instead of its default
    /// location (beside the input for services, the current directory for
    /// targets).
    pub output_dir: Option<PathBuf>,
    /// Optional directory of `.tera` templates overriding the embedded ones.
    pub template_dir: Option<PathBuf>,
}

/// Run the generation pipeline for a scope.
pub fn run(
    scope: GenScope,
    config: &GenConfig,
    dry_run: bool,
) -> Result<Vec<GeneratedUnits>, GenError> {
    match scope {
        GenScope::All => generate_all(config, dry_run),
        GenScope::File(path) => Ok(vec![generate_file(&path, config, dry_run)?]),
    }
}
