//! Linked-data authority common types and errors.
//!
//! This crate provides foundational types shared by the configuration crates:
//! - Opaque identifier types (language tags, predicate IRIs)
//! - Configuration document versioning
//! - Common error types

pub mod error;
pub mod schema;
pub mod tag;

pub use error::{Error, Result};
pub use schema::CONFIG_VERSION;
pub use tag::{Iri, LanguageTag};
