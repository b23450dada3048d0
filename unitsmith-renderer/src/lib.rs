//! # unitsmith-renderer
//!
//! Tera-based template engine that renders process-supervisor unit files from
//! validated descriptors.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use unitsmith_core::ServiceDescriptor;
//! use unitsmith_renderer::TemplateEngine;
//!
//! fn render_one(service: &ServiceDescriptor) {
//!     if let Ok(engine) = TemplateEngine::new(None) {
//!         if let Ok(unit) = engine.render_service(service) {
//!             println!("{} bytes", unit.len());
//!         }
//!     }
//! }
//! ```

pub mod engine;
pub mod error;

pub use engine::{TemplateEngine, UnitKind};
pub use error::RenderError;
