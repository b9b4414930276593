//! Typed view over an authority's `search` configuration.
//!
//! [`SearchConfig`] captures the normalized `search` sub-tree once and
//! derives every typed value at construction. Nothing is mutated afterwards,
//! so every accessor is a plain read and the type is `Send + Sync`.
//!
//! Every accessor has a safe answer for every input shape:
//!
//! | field missing or malformed | accessor result |
//! |----------------------------|-----------------|
//! | `url`                      | `None`          |
//! | `language`                 | `None`          |
//! | `results` / a predicate    | `None`          |
//! | `context`                  | `None`, `supports_context() == false` |
//! | `subauthorities`           | empty mapping, count 0 |
//!
//! Support flags follow the presence of a field, not its content: an empty
//! `context` mapping still supports context.

use std::collections::BTreeMap;

use lod_common::{Iri, LanguageTag};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::context_map::ContextMap;
use crate::language::{LanguagePreference, LanguageService};
use crate::raw::{kind, string_map_at, RawConfig};
use crate::results::PredicateMapping;
use crate::url::UrlConfig;

pub const URL: &str = "url";
pub const REPLACEMENT_PATTERNS: &str = "qa_replacement_patterns";
pub const LANGUAGE: &str = "language";
pub const RESULTS: &str = "results";
pub const CONTEXT: &str = "context";
pub const SUBAUTHORITIES: &str = "subauthorities";

/// Search configuration for one authority.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchConfig {
    raw: RawConfig,
    url_config: Option<UrlConfig>,
    language: Option<Vec<LanguageTag>>,
    results: Option<PredicateMapping>,
    context_map: Option<ContextMap>,
    subauthorities: BTreeMap<String, String>,
    replacement_patterns: BTreeMap<String, String>,
}

impl SearchConfig {
    /// Build the view from a normalized `search` sub-tree.
    pub fn new(raw: RawConfig) -> Self {
        let map = raw.as_map();
        let config = Self {
            url_config: raw.section(URL).map(UrlConfig::from_raw),
            language: raw.get(LANGUAGE).and_then(parse_language),
            results: raw.section(RESULTS).map(PredicateMapping::from_raw),
            context_map: raw.section(CONTEXT).map(ContextMap::from_raw),
            subauthorities: string_map_at(map, SUBAUTHORITIES),
            replacement_patterns: string_map_at(map, REPLACEMENT_PATTERNS),
            raw,
        };
        debug!(
            supports_search = config.supports_search(),
            subauthorities = config.subauthorities.len(),
            "search configuration resolved"
        );
        config
    }

    /// The view of an authority that declares no search.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the view from an un-normalized JSON tree.
    pub fn from_json(value: Value) -> Self {
        Self::new(RawConfig::from_json(value))
    }

    /// The normalized sub-tree this view was built from.
    pub fn raw(&self) -> &RawConfig {
        &self.raw
    }

    pub fn supports_search(&self) -> bool {
        !self.raw.is_empty()
    }

    pub fn url_config(&self) -> Option<&UrlConfig> {
        self.url_config.as_ref()
    }

    /// Languages declared by the authority, in declared order.
    pub fn language(&self) -> Option<&[LanguageTag]> {
        self.language.as_deref()
    }

    /// Effective language list for a request.
    ///
    /// The request's language wins; otherwise the authority's declared
    /// language; otherwise the process default.
    pub fn preferred_language(&self, user_language: Option<LanguagePreference>) -> Vec<LanguageTag> {
        LanguageService::preferred_language(user_language, self.language_preference())
    }

    fn language_preference(&self) -> Option<LanguagePreference> {
        self.language.as_deref().map(LanguagePreference::from)
    }

    pub fn results(&self) -> Option<&PredicateMapping> {
        self.results.as_ref()
    }

    pub fn results_id_predicate(&self) -> Option<&Iri> {
        self.results.as_ref()?.id_predicate()
    }

    pub fn results_label_predicate(&self) -> Option<&Iri> {
        self.results.as_ref()?.label_predicate()
    }

    pub fn results_altlabel_predicate(&self) -> Option<&Iri> {
        self.results.as_ref()?.altlabel_predicate()
    }

    pub fn results_sort_predicate(&self) -> Option<&Iri> {
        self.results.as_ref()?.sort_predicate()
    }

    pub fn supports_sort(&self) -> bool {
        self.results_sort_predicate().is_some()
    }

    pub fn supports_context(&self) -> bool {
        self.context_map.is_some()
    }

    pub fn context_map(&self) -> Option<&ContextMap> {
        self.context_map.as_ref()
    }

    pub fn has_subauthorities(&self) -> bool {
        !self.subauthorities.is_empty()
    }

    /// Case-sensitive membership test on subauthority keys.
    pub fn subauthority(&self, key: &str) -> bool {
        self.subauthorities.contains_key(key)
    }

    pub fn subauthority_name(&self, key: &str) -> Option<&str> {
        self.subauthorities.get(key).map(String::as_str)
    }

    pub fn subauthority_count(&self) -> usize {
        self.subauthorities.len()
    }

    pub fn subauthorities(&self) -> &BTreeMap<String, String> {
        &self.subauthorities
    }

    /// Logical parameter name → template variable name, used by the query
    /// builder when filling the URL template.
    pub fn replacement_patterns(&self) -> &BTreeMap<String, String> {
        &self.replacement_patterns
    }

    pub fn replacement_pattern(&self, name: &str) -> Option<&str> {
        self.replacement_patterns.get(name).map(String::as_str)
    }

    pub fn has_replacement_patterns(&self) -> bool {
        !self.replacement_patterns.is_empty()
    }
}

/// A scalar tag or a sequence of tags. Any other shape, or a sequence with a
/// non-string member, is treated as undeclared.
fn parse_language(value: &Value) -> Option<Vec<LanguageTag>> {
    match LanguagePreference::deserialize(value) {
        Ok(preference) => Some(preference.into_tags()),
        Err(err) => {
            debug!(found = kind(value), error = %err, "language must be a tag or a sequence of tags");
            None
        }
    }
}
