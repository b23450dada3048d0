//! Error types for unitsmith-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading and validating a descriptor file.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Underlying I/O failure while reading a descriptor file.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML decode error — includes file path and line context from serde_yaml.
    #[error("failed to parse descriptor at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The descriptor decoded cleanly but failed a validation rule.
    #[error("invalid descriptor at {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}

/// A single failed validation rule; the first failure wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent, null, or empty.
    #[error("required field {0} is missing or empty")]
    MissingField(String),

    /// `target` and `after` must stay period-free; the templates append
    /// `.target` to them.
    #[error("field {field} must not contain a period: {value:?}")]
    ForbiddenPeriod {
        field: &'static str,
        value: String,
    },
}
