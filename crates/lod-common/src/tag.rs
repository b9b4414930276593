//! Opaque identifier types.
//!
//! Language tags and predicate IRIs are carried exactly as declared: no case
//! folding, no syntax validation. Equality is byte equality.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A natural language or locale identifier such as `en` or `fr-CA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(pub String);

impl LanguageTag {
    pub fn new(tag: impl Into<String>) -> Self {
        LanguageTag(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        LanguageTag(tag.to_string())
    }
}

impl From<String> for LanguageTag {
    fn from(tag: String) -> Self {
        LanguageTag(tag)
    }
}

/// Identifier of a predicate in a result triple, typically a URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(pub String);

impl Iri {
    pub fn new(iri: impl Into<String>) -> Self {
        Iri(iri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Iri {
    fn from(iri: &str) -> Self {
        Iri(iri.to_string())
    }
}
