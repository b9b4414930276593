//! Untyped configuration trees with canonical keys.
//!
//! Authority documents arrive as JSON or YAML and may spell keys either as
//! plain strings (`url`) or in Ruby-symbol form (`:url`). Every key is
//! rewritten to its canonical string form here, once, so the typed views in
//! the rest of the crate never branch on key representation.
//!
//! The readers at the bottom of this module (`string_at`, `bool_at`, ...)
//! implement the crate-wide degradation rule: a field that is missing, null,
//! or of the wrong shape reads as absent.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::debug;

/// An immutable, key-normalized configuration mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
    map: Map<String, Value>,
}

impl RawConfig {
    /// A configuration with no keys.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap a JSON value, normalizing keys at every depth.
    ///
    /// Anything other than a mapping (including `null`) yields an empty
    /// configuration.
    pub fn from_json(value: Value) -> Self {
        match normalize_json(value) {
            Value::Object(map) => Self { map },
            Value::Null => Self::empty(),
            other => {
                debug!(found = kind(&other), "configuration root is not a mapping");
                Self::empty()
            }
        }
    }

    /// Wrap a YAML value, converting it to the JSON data model first.
    pub fn from_yaml(value: serde_yaml::Value) -> Self {
        Self::from_json(yaml_to_json(value))
    }

    /// Wrap an already-normalized mapping.
    pub(crate) fn from_map(map: Map<String, Value>) -> Self {
        Self { map }
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Value stored under `key`; `null` reads as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        present(&self.map, key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Nested mapping stored under `key`, if the value is a mapping.
    pub fn section(&self, key: &str) -> Option<&Map<String, Value>> {
        mapping_at(&self.map, key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.map
    }

    /// The normalized tree as a JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.map.clone())
    }
}

/// Canonical form of a configuration key.
///
/// A single leading `:` (Ruby symbol notation) is dropped; nothing else is
/// touched, so `@context` and `variableRepresentation` survive as written.
pub fn normalize_key(key: &str) -> String {
    match key.strip_prefix(':') {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => key.to_string(),
    }
}

/// Recursively rewrite every mapping key in `value` to canonical form.
pub fn normalize_json(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (normalize_key(&key), normalize_json(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_json).collect()),
        other => other,
    }
}

/// Convert a YAML tree into the JSON data model.
///
/// Scalar keys (numbers, booleans) become their string spelling. Entries
/// whose key is itself a collection have no JSON equivalent and are dropped.
pub fn yaml_to_json(value: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => yaml_number(&n),
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                let key = match key {
                    Yaml::String(s) => s,
                    Yaml::Bool(b) => b.to_string(),
                    Yaml::Number(n) => n.to_string(),
                    other => {
                        debug!(?other, "dropping YAML entry with non-scalar key");
                        continue;
                    }
                };
                map.insert(key, yaml_to_json(value));
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::from(i)
    } else if let Some(u) = n.as_u64() {
        Value::from(u)
    } else {
        n.as_f64()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

// ── Shape-tolerant readers ──────────────────────────────────────────────

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

pub(crate) fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}

pub(crate) fn mapping_at<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    match present(map, key)? {
        Value::Object(inner) => Some(inner),
        other => {
            debug!(key, found = kind(other), "expected a mapping; treating as absent");
            None
        }
    }
}

pub(crate) fn string_at(map: &Map<String, Value>, key: &str) -> Option<String> {
    match present(map, key)? {
        Value::String(s) => Some(s.clone()),
        other => {
            debug!(key, found = kind(other), "expected a string; treating as absent");
            None
        }
    }
}

pub(crate) fn bool_at(map: &Map<String, Value>, key: &str) -> Option<bool> {
    match present(map, key)? {
        Value::Bool(b) => Some(*b),
        other => {
            debug!(key, found = kind(other), "expected a boolean; treating as absent");
            None
        }
    }
}

/// Flat string-to-string mapping under `key`; empty when absent.
///
/// Entries whose value is not a string are skipped rather than coerced.
pub(crate) fn string_map_at(map: &Map<String, Value>, key: &str) -> BTreeMap<String, String> {
    let Some(inner) = mapping_at(map, key) else {
        return BTreeMap::new();
    };
    inner
        .iter()
        .filter_map(|(entry, value)| match value {
            Value::String(s) => Some((entry.clone(), s.clone())),
            other => {
                debug!(key, entry = %entry, found = kind(other), "skipping non-string entry");
                None
            }
        })
        .collect()
}
