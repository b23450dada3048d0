//! Required-field and character validation for decoded descriptors.
//!
//! By the time a descriptor reaches this module, absent and null keys have
//! already decoded to empty values, so every rule is a plain string check.
//! Checks run in field declaration order and stop at the first failure.
//! Messages name the YAML keys (`cmd`, `dir`), not the Rust field names.

use crate::error::ValidationError;
use crate::types::{Descriptor, MetaDescriptor, ServiceDescriptor};

/// Validate a service descriptor: all five fields non-empty, no period in
/// `target` or `after` (the renderer appends `.target` to both).
pub fn service(service: &ServiceDescriptor) -> Result<(), ValidationError> {
    require("cmd", &service.command)?;
    require("dir", &service.directory)?;
    require("target", &service.target)?;
    require("description", &service.description)?;
    require("after", &service.after)?;
    no_period("target", &service.target)?;
    no_period("after", &service.after)?;
    Ok(())
}

/// Validate a meta descriptor: at least one target entry, each with a
/// non-empty name and description.
pub fn meta(meta: &MetaDescriptor) -> Result<(), ValidationError> {
    if meta.targets.is_empty() {
        return Err(ValidationError::MissingField("targets".to_owned()));
    }
    for (i, entry) in meta.targets.iter().enumerate() {
        require(format!("targets[{i}].name"), &entry.name)?;
        require(format!("targets[{i}].description"), &entry.description)?;
    }
    Ok(())
}

impl Descriptor {
    /// Dispatch to the validator matching the decoded shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Descriptor::Service(s) => service(s),
            Descriptor::Meta(m) => meta(m),
        }
    }
}

fn require(field: impl Into<String>, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(field.into()));
    }
    Ok(())
}

fn no_period(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.contains('.') {
        return Err(ValidationError::ForbiddenPeriod { field, value: value.to_owned() });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
