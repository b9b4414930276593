//! Display and grouping metadata for search-result context.
//!
//! A `context` block names optional groups and lists the properties shown
//! alongside each result. Property order is display order and is kept
//! exactly as declared.
//!
//! A property's `group_id` is not checked against the declared groups here.
//! A dangling reference is logged at debug level and otherwise left for the
//! renderer to resolve.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::raw::{bool_at, kind, mapping_at, present, string_at};

const GROUPS: &str = "groups";
const PROPERTIES: &str = "properties";

/// Label metadata for a named group of properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContextGroup {
    /// Localization key for the group label.
    pub label_i18n: Option<String>,
    /// Label used when the localization key does not resolve.
    pub label_default: Option<String>,
}

impl ContextGroup {
    fn from_raw(map: &Map<String, Value>) -> Self {
        Self {
            label_i18n: string_at(map, "group_label_i18n"),
            label_default: string_at(map, "group_label_default"),
        }
    }
}

/// One property displayed in a result's context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContextProperty {
    pub label_i18n: Option<String>,
    pub label_default: Option<String>,
    /// Path expression selecting the property's values from the result graph.
    pub lpath: Option<String>,
    pub selectable: bool,
    pub drillable: bool,
    pub group_id: Option<String>,
}

impl ContextProperty {
    fn from_raw(map: &Map<String, Value>) -> Self {
        Self {
            label_i18n: string_at(map, "property_label_i18n"),
            label_default: string_at(map, "property_label_default"),
            lpath: string_at(map, "lpath"),
            selectable: bool_at(map, "selectable").unwrap_or(false),
            drillable: bool_at(map, "drillable").unwrap_or(false),
            group_id: string_at(map, "group_id"),
        }
    }

    pub fn is_grouped(&self) -> bool {
        self.group_id.is_some()
    }

    pub fn in_group(&self, group_id: &str) -> bool {
        self.group_id.as_deref() == Some(group_id)
    }
}

/// Parsed `context` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContextMap {
    groups: BTreeMap<String, ContextGroup>,
    properties: Vec<ContextProperty>,
}

impl ContextMap {
    pub fn from_raw(map: &Map<String, Value>) -> Self {
        let groups: BTreeMap<String, ContextGroup> = mapping_at(map, GROUPS)
            .map(|groups| {
                groups
                    .iter()
                    .filter_map(|(key, value)| match value {
                        Value::Object(group) => Some((key.clone(), ContextGroup::from_raw(group))),
                        other => {
                            debug!(group = %key, found = kind(other), "skipping malformed context group");
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        let properties: Vec<ContextProperty> = match present(map, PROPERTIES) {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| match item {
                    Value::Object(property) => Some(ContextProperty::from_raw(property)),
                    other => {
                        debug!(index, found = kind(other), "skipping malformed context property");
                        None
                    }
                })
                .collect(),
            Some(other) => {
                debug!(found = kind(other), "context properties must be a sequence");
                Vec::new()
            }
            None => Vec::new(),
        };

        for property in &properties {
            if let Some(group_id) = property.group_id.as_deref() {
                if !groups.contains_key(group_id) {
                    debug!(group_id, "context property references an undeclared group");
                }
            }
        }

        Self { groups, properties }
    }

    pub fn groups(&self) -> &BTreeMap<String, ContextGroup> {
        &self.groups
    }

    pub fn group(&self, group_id: &str) -> Option<&ContextGroup> {
        self.groups.get(group_id)
    }

    pub fn group_label_default(&self, group_id: &str) -> Option<&str> {
        self.group(group_id)?.label_default.as_deref()
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> &[ContextProperty] {
        &self.properties
    }

    pub fn properties_in_group<'a>(
        &'a self,
        group_id: &'a str,
    ) -> impl Iterator<Item = &'a ContextProperty> + 'a {
        self.properties.iter().filter(move |p| p.in_group(group_id))
    }

    pub fn ungrouped_properties(&self) -> impl Iterator<Item = &ContextProperty> {
        self.properties.iter().filter(|p| !p.is_grouped())
    }
}
