//! Error types for unitsmith-gen.

use std::path::PathBuf;

use thiserror::Error;

use unitsmith_core::error::DescriptorError;
use unitsmith_renderer::RenderError;

/// All errors that can arise from unit generation.
#[derive(Debug, Error)]
pub enum GenError {
    /// An error from descriptor loading or validation; already carries the
    /// offending path.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// A template failed to render for the given input file.
    #[error("failed to render units for {path}: {source}")]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Batch mode has no service directory to scan.
    #[error("no service directory configured; set --service-dir or SERVICE_DIR")]
    ServiceDirUnset,
}

/// Convenience constructor for [`GenError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> GenError {
    GenError::Io {
        path: path.into(),
        source,
    }
}
