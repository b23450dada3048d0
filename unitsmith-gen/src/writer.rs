//! Atomic unit writer and the per-file generation pipeline.
//!
//! ## Write protocol
//!
//! 1. Render content (already done by caller).
//! 2. Normalise line endings to LF.
//! 3. Ensure parent directories exist.
//! 4. Write to `<path>.unitsmith.tmp`.
//! 5. Rename to final path (atomic on POSIX); remove the tmp on failure.

use std::path::{Path, PathBuf};

use unitsmith_core::error::DescriptorError;
use unitsmith_core::{loader, Descriptor};
use unitsmith_renderer::{RenderError, TemplateEngine, UnitKind};

use crate::error::{io_err, GenError};
use crate::pipeline::GenConfig;

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual unit write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written.
    Written { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

// ---------------------------------------------------------------------------
// Output paths
// ---------------------------------------------------------------------------

/// `<input>.service` beside the input file, or under `output_dir` when set.
///
/// The input's extension is replaced whatever it is: `app.yaml` and `app.yml`
/// both map to `app.service`.
pub fn service_unit_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let unit = input.with_extension(UnitKind::Service.extension());
    match (output_dir, unit.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => unit,
    }
}

/// `<name>.target` under the current directory, or under `output_dir` when set.
pub fn target_unit_path(name: &str, output_dir: Option<&Path>) -> PathBuf {
    let file = format!("{name}.{}", UnitKind::Target.extension());
    match output_dir {
        Some(dir) => dir.join(file),
        None => PathBuf::from(file),
    }
}

// ---------------------------------------------------------------------------
// atomic_write
// ---------------------------------------------------------------------------

/// Atomically write a single rendered unit.
///
/// In dry-run mode nothing touches the filesystem.
pub(crate) fn atomic_write(
    path: &Path,
    content: &str,
    dry_run: bool,
) -> Result<WriteResult, GenError> {
    // Normalise line endings to LF before writing.
    let normalized = content.replace("\r\n", "\n");

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite { path: path.to_path_buf() });
    }

    // parent() of a bare file name is Some("") — nothing to create then.
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
    }

    let tmp = PathBuf::from(format!("{}.unitsmith.tmp", path.display()));
    std::fs::write(&tmp, normalized).map_err(|e| io_err(&tmp, e))?;

    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written { path: path.to_path_buf() })
}

// ---------------------------------------------------------------------------
// generate_file
// ---------------------------------------------------------------------------

/// Units generated from a single descriptor file.
#[derive(Debug)]
pub struct GeneratedUnits {
    pub source: PathBuf,
    pub writes: Vec<WriteResult>,
}

/// Convert one descriptor file: load, validate, render, write.
///
/// A service descriptor produces one `.service` unit; a meta descriptor
/// produces one `.target` unit per entry.
pub fn generate_file(
    input: &Path,
    config: &GenConfig,
    dry_run: bool,
) -> Result<GeneratedUnits, GenError> {
    let descriptor = loader::load(input)?;
    descriptor
        .validate()
        .map_err(|source| DescriptorError::Invalid { path: input.to_path_buf(), source })?;

    let engine =
        TemplateEngine::new(config.template_dir.as_deref()).map_err(|e| render_err(input, e))?;

    let mut writes = Vec::new();
    match &descriptor {
        Descriptor::Service(service) => {
            let content = engine.render_service(service).map_err(|e| render_err(input, e))?;
            let path = service_unit_path(input, config.output_dir.as_deref());
            writes.push(atomic_write(&path, &content, dry_run)?);
        }
        Descriptor::Meta(meta) => {
            for entry in &meta.targets {
                let content = engine.render_target(entry).map_err(|e| render_err(input, e))?;
                let path = target_unit_path(&entry.name, config.output_dir.as_deref());
                writes.push(atomic_write(&path, &content, dry_run)?);
            }
        }
    }

    Ok(GeneratedUnits { source: input.to_path_buf(), writes })
}

fn render_err(path: &Path, source: RenderError) -> GenError {
    GenError::Render { path: path.to_path_buf(), source }
}

// ---------------------------------------------------------------------------
// generate_all
// ---------------------------------------------------------------------------

/// Process every file in the configured service directory.
///
/// Entries are sorted by file name so runs are deterministic; subdirectories
/// are skipped. The first failing file aborts the batch — units written
/// before it stay on disk.
pub fn generate_all(config: &GenConfig, dry_run: bool) -> Result<Vec<GeneratedUnits>, GenError> {
    let dir = match &config.service_dir {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => return Err(GenError::ServiceDirUnset),
    };

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| io_err(dir, e))?
        .filter_map(|e| e.ok())
        .filter(|e| !e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .collect();
    entries.sort_by_key(|e| e.file_name());

    tracing::debug!("processing {} descriptor files in {}", entries.len(), dir.display());

    let mut results = Vec::new();
    for entry in entries {
        results.push(generate_file(&entry.path(), config, dry_run)?);
    }
    Ok(results)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn service_path_replaces_extension() {
        assert_eq!(
            service_unit_path(Path::new("/srv/app.yaml"), None),
            PathBuf::from("/srv/app.service")
        );
        assert_eq!(
            service_unit_path(Path::new("services/app.yml"), None),
            PathBuf::from("services/app.service")
        );
    }

    #[test]
    fn service_path_relocates_into_output_dir() {
        let path = service_unit_path(Path::new("/srv/descriptors/app.yaml"), Some(Path::new("/out")));
        assert_eq!(path, PathBuf::from("/out/app.service"));
    }

    #[test]
    fn target_path_is_bare_name_or_relocated() {
        assert_eq!(target_unit_path("web", None), PathBuf::from("web.target"));
        assert_eq!(target_unit_path("web", Some(Path::new("/out"))), PathBuf::from("/out/web.target"));
    }

    #[test]
    fn first_write_returns_written() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("app.service");
        let result = atomic_write(&path, "content\n", false).unwrap();
        assert!(matches!(result, WriteResult::Written { .. }));
        assert!(path.exists());
    }

    #[test]
    fn dry_run_does_not_write_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.service");
        let result = atomic_write(&path, "content\n", true).unwrap();
        assert!(matches!(result, WriteResult::WouldWrite { .. }));
        assert!(!path.exists(), "dry-run must not create files");
    }

    #[test]
    fn tmp_file_removed_after_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clean.service");
        atomic_write(&path, "data\n", false).unwrap();
        let tmp_path = PathBuf::from(format!("{}.unitsmith.tmp", path.display()));
        assert!(!tmp_path.exists(), ".unitsmith.tmp must be cleaned up");
    }

    #[test]
    fn creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out").join("nested").join("app.service");
        atomic_write(&path, "content\n", false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn crlf_content_is_written_as_lf() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("normalize.service");
        atomic_write(&path, "line1\r\nline2\r\n", false).unwrap();
        let disk = fs::read_to_string(&path).unwrap();
        assert_eq!(disk, "line1\nline2\n");
    }

    #[test]
    fn rename_failure_cleans_up_tmp() {
        let tmp = TempDir::new().unwrap();
        // A directory occupies the final path, so the rename must fail.
        let path = tmp.path().join("occupied");
        fs::create_dir(&path).unwrap();

        let err = atomic_write(&path, "content\n", false).unwrap_err();
        assert!(matches!(err, GenError::Io { .. }), "got: {err}");
        let tmp_path = PathBuf::from(format!("{}.unitsmith.tmp", path.display()));
        assert!(!tmp_path.exists(), ".unitsmith.tmp must be removed after failed rename");
    }
}
