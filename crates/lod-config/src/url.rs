//! The `url` block: an IRI template plus its variable mappings.
//!
//! Only the declared structure is exposed. Expanding the template into a
//! request URL belongs to the query builder.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::raw::{bool_at, kind, present, string_at};

/// Variable representation assumed when a template does not declare one.
pub const DEFAULT_VARIABLE_REPRESENTATION: &str = "BasicRepresentation";

/// How one template variable is filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariableMapping {
    pub variable: String,
    pub property: Option<String>,
    pub required: bool,
    /// Value used when the caller supplies none; empty when undeclared.
    pub default: String,
    /// Whether the value is percent-encoded before substitution.
    pub encode: bool,
}

impl VariableMapping {
    fn from_raw(map: &Map<String, Value>) -> Option<Self> {
        let Some(variable) = string_at(map, "variable") else {
            debug!("skipping url mapping without a variable name");
            return None;
        };
        Some(Self {
            variable,
            property: string_at(map, "property"),
            required: bool_at(map, "required").unwrap_or(false),
            default: string_at(map, "default").unwrap_or_default(),
            encode: bool_at(map, "encode").unwrap_or(false),
        })
    }
}

/// Parsed `url` block of a search configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlConfig {
    template: Option<String>,
    variable_representation: String,
    mappings: Vec<VariableMapping>,
}

impl UrlConfig {
    pub fn from_raw(map: &Map<String, Value>) -> Self {
        let template = string_at(map, "template");
        if template.is_none() {
            debug!("url block declares no template");
        }

        let mappings = match present(map, "mapping") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::Object(entry) => VariableMapping::from_raw(entry),
                    other => {
                        debug!(found = kind(other), "skipping malformed url mapping");
                        None
                    }
                })
                .collect(),
            Some(other) => {
                debug!(found = kind(other), "url mapping must be a sequence");
                Vec::new()
            }
            None => Vec::new(),
        };

        Self {
            template,
            variable_representation: string_at(map, "variableRepresentation")
                .unwrap_or_else(|| DEFAULT_VARIABLE_REPRESENTATION.to_string()),
            mappings,
        }
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn variable_representation(&self) -> &str {
        &self.variable_representation
    }

    /// Mappings in declaration order.
    pub fn mappings(&self) -> &[VariableMapping] {
        &self.mappings
    }

    pub fn mapping(&self, variable: &str) -> Option<&VariableMapping> {
        self.mappings.iter().find(|m| m.variable == variable)
    }

    pub fn required_variables(&self) -> impl Iterator<Item = &str> {
        self.mappings
            .iter()
            .filter(|m| m.required)
            .map(|m| m.variable.as_str())
    }

    pub fn optional_variables(&self) -> impl Iterator<Item = &str> {
        self.mappings
            .iter()
            .filter(|m| !m.required)
            .map(|m| m.variable.as_str())
    }
}
