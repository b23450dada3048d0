//! # unitsmith-gen
//!
//! Output-path computation, atomic unit writing, and the generation pipeline.
//!
//! Call [`writer::generate_file`] to convert a single descriptor file, or
//! [`writer::generate_all`] to process every file in the configured service
//! directory. [`pipeline::run`] wraps both behind a [`pipeline::GenScope`].

pub mod error;
pub mod pipeline;
pub mod writer;

pub use error::GenError;
pub use pipeline::{run, GenConfig, GenScope};
pub use writer::{generate_all, generate_file, GeneratedUnits, WriteResult};
