//! Fieldmap Core - primitives for field mapping generation
//!
//! This crate provides the pure building blocks for fieldmap, with no
//! file I/O dependencies. It includes:
//!
//! - Underscore-to-camel identifier conversion
//! - Raw field definition and mapping entry record shapes
//! - The fixed ignore set for housekeeping columns
//! - The projection and recase transforms
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod convert;
pub mod error;
pub mod model;
pub mod project;
pub mod recase;

// Re-export commonly used items
pub use convert::snake_to_camel;
pub use error::{MappingError, Result};
pub use model::{FieldDef, MappingEntry, IGNORED_FIELDS, MAPPER_RULE_DIRECT};
pub use project::{map_field, project_fields};
pub use recase::recase_expressions;
