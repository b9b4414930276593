//! Language preference resolution and language-tagged literals.
//!
//! # Resolution
//!
//! [`LanguageService::preferred_language`] picks the first tier that names a
//! language:
//!
//! 1. the language of the request (user),
//! 2. the language declared by the authority,
//! 3. the process-wide default from [`crate::settings`].
//!
//! A tier is normalized to a list: a single tag becomes a one-element list,
//! a list is returned unchanged (no dedup, no case folding).

use lod_common::{Iri, LanguageTag};
use serde::{Deserialize, Serialize};

use crate::settings::{self, Settings};

/// A language preference as supplied by a caller or a configuration:
/// a single tag or a sequence of tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LanguagePreference {
    One(LanguageTag),
    Many(Vec<LanguageTag>),
}

impl LanguagePreference {
    /// A blank tag, or a list holding only blank tags, names no language
    /// and does not select its tier.
    pub fn is_present(&self) -> bool {
        match self {
            LanguagePreference::One(tag) => !tag.is_empty(),
            LanguagePreference::Many(tags) => tags.iter().any(|tag| !tag.is_empty()),
        }
    }

    pub fn into_tags(self) -> Vec<LanguageTag> {
        match self {
            LanguagePreference::One(tag) => vec![tag],
            LanguagePreference::Many(tags) => tags,
        }
    }
}

impl From<LanguageTag> for LanguagePreference {
    fn from(tag: LanguageTag) -> Self {
        LanguagePreference::One(tag)
    }
}

impl From<&str> for LanguagePreference {
    fn from(tag: &str) -> Self {
        LanguagePreference::One(LanguageTag::from(tag))
    }
}

impl From<Vec<LanguageTag>> for LanguagePreference {
    fn from(tags: Vec<LanguageTag>) -> Self {
        LanguagePreference::Many(tags)
    }
}

impl From<&[LanguageTag]> for LanguagePreference {
    fn from(tags: &[LanguageTag]) -> Self {
        LanguagePreference::Many(tags.to_vec())
    }
}

impl From<Vec<&str>> for LanguagePreference {
    fn from(tags: Vec<&str>) -> Self {
        LanguagePreference::Many(tags.into_iter().map(LanguageTag::from).collect())
    }
}

/// Stateless language resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageService;

impl LanguageService {
    /// Resolve the effective language list against the global settings.
    pub fn preferred_language(
        user_language: Option<LanguagePreference>,
        authority_language: Option<LanguagePreference>,
    ) -> Vec<LanguageTag> {
        Self::preferred_language_with(settings::global(), user_language, authority_language)
    }

    /// Resolve the effective language list against explicit settings.
    pub fn preferred_language_with(
        settings: &Settings,
        user_language: Option<LanguagePreference>,
        authority_language: Option<LanguagePreference>,
    ) -> Vec<LanguageTag> {
        user_language
            .filter(LanguagePreference::is_present)
            .or_else(|| authority_language.filter(LanguagePreference::is_present))
            .map(LanguagePreference::into_tags)
            .unwrap_or_else(|| settings.default_language.clone())
    }

    /// True iff the literal can carry a language tag and carries a non-empty one.
    pub fn literal_has_language_marker(literal: &Literal) -> bool {
        literal
            .as_taggable()
            .is_some_and(|text| text.language().is_some_and(|tag| !tag.is_empty()))
    }
}

/// Capability of text values that may carry a language tag.
pub trait Taggable {
    fn language(&self) -> Option<&LanguageTag>;
}

/// A string literal, with or without a language tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextLiteral {
    pub value: String,
    pub language: Option<LanguageTag>,
}

impl Taggable for TextLiteral {
    fn language(&self) -> Option<&LanguageTag> {
        self.language.as_ref()
    }
}

/// An RDF literal value as handed over by the result parser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Literal {
    Text(TextLiteral),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    /// Any other datatype, kept in lexical form.
    Typed { lexical: String, datatype: Iri },
}

impl Literal {
    pub fn plain(value: impl Into<String>) -> Self {
        Literal::Text(TextLiteral {
            value: value.into(),
            language: None,
        })
    }

    pub fn tagged(value: impl Into<String>, language: impl Into<LanguageTag>) -> Self {
        Literal::Text(TextLiteral {
            value: value.into(),
            language: Some(language.into()),
        })
    }

    /// The language capability, for the variants that have one.
    pub fn as_taggable(&self) -> Option<&dyn Taggable> {
        match self {
            Literal::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Integer(value)
    }
}
