//! Descriptor types decoded from service YAML files.
//!
//! Rust field names are spelled out; `#[serde(rename)]` keeps the wire names
//! (`cmd`, `dir`) that descriptor authors write. A key that is absent or
//! explicitly null decodes to its default value, so "missing" is reported by
//! validation rather than by the decoder.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Deserialization helpers
// ---------------------------------------------------------------------------

/// Treats an explicit YAML null (`cmd:`) the same as an absent key.
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Descriptor structs
// ---------------------------------------------------------------------------

/// One supervised service, decoded from a `*.yaml` descriptor file.
///
/// Every field is required and must be non-empty; see [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ServiceDescriptor {
    /// Command line that launches the process (`ExecStart`).
    #[serde(rename = "cmd", default, deserialize_with = "null_as_default")]
    pub command: String,
    /// Working directory for the process (`WorkingDirectory`).
    #[serde(rename = "dir", default, deserialize_with = "null_as_default")]
    pub directory: String,
    /// Grouping target this service belongs to (`PartOf`). Must not contain
    /// a period; the renderer appends `.target`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub target: String,
    /// Human-readable summary (`Description`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Target this service starts after (`After`). Must not contain a period.
    #[serde(default, deserialize_with = "null_as_default")]
    pub after: String,
}

/// Target declarations, decoded from a `*_meta.yaml` descriptor file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MetaDescriptor {
    /// Ordered list of targets to generate; must be non-empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub targets: Vec<TargetEntry>,
}

/// One target declared by a meta descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TargetEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// A decoded descriptor file. The variant is selected by file-name suffix,
/// never by sniffing content; see [`crate::loader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    Service(ServiceDescriptor),
    Meta(MetaDescriptor),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
