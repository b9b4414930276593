//! Linked-data authority search configuration.
//!
//! This crate provides:
//! - Key-normalized raw configuration trees (JSON and YAML)
//! - A typed, nil-safe view of an authority's `search` block
//! - Predicate, context, and URL-template sub-views
//! - Language preference resolution (request → authority → system default)
//! - Authority document loading

pub mod authority;
pub mod context_map;
pub mod language;
pub mod raw;
pub mod results;
pub mod search;
pub mod settings;
pub mod url;

pub use authority::AuthorityConfig;
pub use context_map::{ContextGroup, ContextMap, ContextProperty};
pub use language::{LanguagePreference, LanguageService, Literal, Taggable, TextLiteral};
pub use raw::RawConfig;
pub use results::PredicateMapping;
pub use search::SearchConfig;
pub use settings::Settings;
pub use url::{UrlConfig, VariableMapping};

pub use lod_common::{Error, Iri, LanguageTag, Result};
