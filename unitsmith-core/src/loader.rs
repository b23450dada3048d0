//! Descriptor file loading.
//!
//! The reserved file-name suffix `_meta.yaml` selects the meta decode path;
//! every other file decodes as a service descriptor. The two paths are
//! mutually exclusive.

use std::path::Path;

use crate::error::DescriptorError;
use crate::types::{Descriptor, MetaDescriptor, ServiceDescriptor};

/// File-name suffix that marks a descriptor as a target declaration.
pub const META_SUFFIX: &str = "_meta.yaml";

/// True if the file name of `path` ends with [`META_SUFFIX`].
pub fn is_meta_path(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(META_SUFFIX))
        .unwrap_or(false)
}

/// Read and decode the descriptor file at `path`.
///
/// Returns `DescriptorError::Io` if the file cannot be read,
/// `DescriptorError::Parse` (with path + line context from serde_yaml) if the
/// content is malformed. No validation happens here; see [`crate::validate`].
pub fn load(path: &Path) -> Result<Descriptor, DescriptorError> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    if is_meta_path(path) {
        let meta: MetaDescriptor = serde_yaml::from_str(&contents)
            .map_err(|e| DescriptorError::Parse { path: path.to_path_buf(), source: e })?;
        Ok(Descriptor::Meta(meta))
    } else {
        let service: ServiceDescriptor = serde_yaml::from_str(&contents)
            .map_err(|e| DescriptorError::Parse { path: path.to_path_buf(), source: e })?;
        Ok(Descriptor::Service(service))
    }
}

fn io_err(path: &Path, source: std::io::Error) -> DescriptorError {
    DescriptorError::Io { path: path.to_path_buf(), source }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_suffix_detection() {
        assert!(is_meta_path(Path::new("app_meta.yaml")));
        assert!(is_meta_path(Path::new("services/app_meta.yaml")));
        assert!(is_meta_path(Path::new("_meta.yaml")));
        assert!(!is_meta_path(Path::new("app.yaml")));
        assert!(!is_meta_path(Path::new("app_meta.yaml.bak")));
        assert!(!is_meta_path(Path::new("meta.yaml")));
    }

    #[test]
    fn load_selects_service_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.yaml");
        std::fs::write(&path, "cmd: /bin/app\n").expect("write");
        let desc = load(&path).expect("load");
        assert!(matches!(desc, Descriptor::Service(_)));
    }

    #[test]
    fn load_selects_meta_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app_meta.yaml");
        std::fs::write(&path, "targets:\n  - name: web\n    description: Web tier\n")
            .expect("write");
        let desc = load(&path).expect("load");
        assert!(matches!(desc, Descriptor::Meta(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, DescriptorError::Io { .. }), "got: {err}");
    }
}
