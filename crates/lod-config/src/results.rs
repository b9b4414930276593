//! Predicate roles used to interpret search-result triples.

use lod_common::Iri;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::raw::string_at;

pub const ID_PREDICATE: &str = "id_predicate";
pub const LABEL_PREDICATE: &str = "label_predicate";
pub const ALTLABEL_PREDICATE: &str = "altlabel_predicate";
pub const SORT_PREDICATE: &str = "sort_predicate";

/// The `results` block of a search configuration.
///
/// Each role is independent; a missing role is `None`, never a placeholder.
/// Serializes back to the declared mapping, omitting undeclared roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PredicateMapping {
    #[serde(rename = "id_predicate", skip_serializing_if = "Option::is_none")]
    pub id: Option<Iri>,

    #[serde(rename = "label_predicate", skip_serializing_if = "Option::is_none")]
    pub label: Option<Iri>,

    #[serde(rename = "altlabel_predicate", skip_serializing_if = "Option::is_none")]
    pub altlabel: Option<Iri>,

    #[serde(rename = "sort_predicate", skip_serializing_if = "Option::is_none")]
    pub sort: Option<Iri>,
}

impl PredicateMapping {
    pub fn from_raw(map: &Map<String, Value>) -> Self {
        let iri = |key: &str| string_at(map, key).map(Iri::new);
        Self {
            id: iri(ID_PREDICATE),
            label: iri(LABEL_PREDICATE),
            altlabel: iri(ALTLABEL_PREDICATE),
            sort: iri(SORT_PREDICATE),
        }
    }

    pub fn id_predicate(&self) -> Option<&Iri> {
        self.id.as_ref()
    }

    pub fn label_predicate(&self) -> Option<&Iri> {
        self.label.as_ref()
    }

    pub fn altlabel_predicate(&self) -> Option<&Iri> {
        self.altlabel.as_ref()
    }

    pub fn sort_predicate(&self) -> Option<&Iri> {
        self.sort.as_ref()
    }

    pub fn supports_id(&self) -> bool {
        self.id.is_some()
    }

    pub fn supports_label(&self) -> bool {
        self.label.is_some()
    }

    pub fn supports_altlabel(&self) -> bool {
        self.altlabel.is_some()
    }

    pub fn supports_sort(&self) -> bool {
        self.sort.is_some()
    }
}
