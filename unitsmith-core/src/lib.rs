//! Unitsmith core library — descriptor types, YAML loading, validation, errors.
//!
//! Public API surface:
//! - [`types`] — descriptor structs decoded from YAML
//! - [`loader`] — suffix dispatch and [`loader::load`]
//! - [`validate`] — required-field and character rules
//! - [`error`] — [`DescriptorError`], [`ValidationError`]

pub mod error;
pub mod loader;
pub mod types;
pub mod validate;

pub use error::{DescriptorError, ValidationError};
pub use types::{Descriptor, MetaDescriptor, ServiceDescriptor, TargetEntry};
