//! Tera rendering engine — [`UnitKind`] enum and [`TemplateEngine`].
//!
//! # Template mapping
//!
//! | Descriptor           | Template       | Output extension |
//! |----------------------|----------------|------------------|
//! | `ServiceDescriptor`  | `service.tera` | `.service`       |
//! | `TargetEntry` (each) | `target.tera`  | `.target`        |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::Tera;

use unitsmith_core::types::{ServiceDescriptor, TargetEntry};

use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("service.tera", include_str!("templates/service.tera")),
    ("target.tera", include_str!("templates/target.tera")),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

/// Lists `<name>.tera` files directly inside `dir` (no recursion — template
/// names are flat). Names are lower-cased so overrides match regardless of
/// the author's casing.
fn load_override_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    let mut templates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if !meta.is_file() {
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_lowercase();
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(override_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert((*name).to_string(), (*content).to_string());
    }
    if let Some(dir) = override_dir {
        for (name, content) in load_override_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// UnitKind
// ---------------------------------------------------------------------------

/// The two kinds of generated unit files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Service,
    Target,
}

impl UnitKind {
    /// Template name to render for this kind.
    pub fn template_name(&self) -> &'static str {
        match self {
            UnitKind::Service => "service.tera",
            UnitKind::Target => "target.tera",
        }
    }

    /// Extension of the generated unit file (without the leading dot).
    pub fn extension(&self) -> &'static str {
        match self {
            UnitKind::Service => "service",
            UnitKind::Target => "target",
        }
    }
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering unit files with optional user overrides.
///
/// `override_dir` may contain `.tera` files that replace the embedded
/// defaults by file name. Placeholders are the descriptor wire names
/// (`cmd`, `dir`, `target`, `description`, `after`; `name` and `description`
/// for targets); referencing anything else fails the render.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus any
    /// overrides found in `override_dir`.
    pub fn new(override_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(override_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render a `.service` unit from a validated service descriptor.
    pub fn render_service(&self, service: &ServiceDescriptor) -> Result<String, RenderError> {
        self.render(UnitKind::Service, service)
    }

    /// Render a `.target` unit from one entry of a meta descriptor.
    pub fn render_target(&self, entry: &TargetEntry) -> Result<String, RenderError> {
        self.render(UnitKind::Target, entry)
    }

    fn render(&self, kind: UnitKind, data: &impl Serialize) -> Result<String, RenderError> {
        let ctx = tera::Context::from_serialize(data)?;
        Ok(self.tera.render(kind.template_name(), &ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
