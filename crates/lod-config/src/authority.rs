//! Authority configuration documents.
//!
//! An authority document bundles everything needed to query one linked-data
//! authority:
//!
//! ```yaml
//! QA_CONFIG_VERSION: "2.2"
//! prefixes:
//!   skos: http://www.w3.org/2004/02/skos/core#
//! term:  { ... }   # kept opaque
//! search: { ... }  # resolved into a SearchConfig
//! ```
//!
//! Loading is the only fallible step in this crate: the document must parse
//! and its root must be a mapping. Once loaded, every accessor is infallible.

use std::collections::BTreeMap;
use std::path::Path;

use lod_common::schema::{is_compatible, CONFIG_VERSION, CONFIG_VERSION_KEY};
use lod_common::{Error, Result};
use serde_json::Value;
use tracing::{info, warn};

use crate::raw::{kind, normalize_json, string_map_at, yaml_to_json, RawConfig};
use crate::search::SearchConfig;

const PREFIXES: &str = "prefixes";
const TERM: &str = "term";
const SEARCH: &str = "search";

/// A loaded authority configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorityConfig {
    name: Option<String>,
    version: Option<String>,
    prefixes: BTreeMap<String, String>,
    term: RawConfig,
    search: SearchConfig,
}

impl AuthorityConfig {
    /// Build from a parsed document tree.
    pub fn from_value(value: Value) -> Result<Self> {
        let root = match normalize_json(value) {
            Value::Object(map) => RawConfig::from_map(map),
            other => {
                return Err(Error::NotAMapping {
                    found: kind(&other).to_string(),
                })
            }
        };

        let version = match root.get(CONFIG_VERSION_KEY) {
            Some(Value::String(v)) => Some(v.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        if let Some(version) = &version {
            if !is_compatible(version) {
                warn!(version = %version, supported = CONFIG_VERSION, "rejecting authority document");
                return Err(Error::UnsupportedVersion {
                    version: version.clone(),
                    supported: CONFIG_VERSION.to_string(),
                });
            }
        }

        let section = |key: &str| {
            root.section(key)
                .map(|map| RawConfig::from_map(map.clone()))
                .unwrap_or_default()
        };

        Ok(Self {
            name: None,
            prefixes: string_map_at(root.as_map(), PREFIXES),
            term: section(TERM),
            search: SearchConfig::new(section(SEARCH)),
            version,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        Self::from_value(yaml_to_json(value))
    }

    /// Load a `.json`, `.yml`, or `.yaml` document. The file stem becomes the
    /// authority name.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let mut config = match extension.as_str() {
            "json" => Self::from_json_str(&content)?,
            "yml" | "yaml" => Self::from_yaml_str(&content)?,
            _ => return Err(Error::UnknownFormat(path.display().to_string())),
        };
        config.name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string);
        info!(
            path = %path.display(),
            authority = config.name.as_deref().unwrap_or_default(),
            supports_search = config.supports_search(),
            supports_term = config.supports_term(),
            "loaded authority configuration"
        );
        Ok(config)
    }

    /// Authority name, when loaded from a file.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Declared `QA_CONFIG_VERSION`, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Namespace prefixes available to `lpath` expressions.
    pub fn prefixes(&self) -> &BTreeMap<String, String> {
        &self.prefixes
    }

    pub fn prefix(&self, name: &str) -> Option<&str> {
        self.prefixes.get(name).map(String::as_str)
    }

    /// The `term` sub-tree, uninterpreted.
    pub fn term(&self) -> &RawConfig {
        &self.term
    }

    pub fn supports_term(&self) -> bool {
        !self.term.is_empty()
    }

    pub fn search(&self) -> &SearchConfig {
        &self.search
    }

    pub fn supports_search(&self) -> bool {
        self.search.supports_search()
    }
}
