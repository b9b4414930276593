//! Search configuration accessors against full, minimal, and term-only
//! authority documents.

use std::collections::BTreeMap;
use std::path::PathBuf;

use lod_config::{AuthorityConfig, Iri, LanguageTag, SearchConfig};
use serde_json::json;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load(name: &str) -> AuthorityConfig {
    AuthorityConfig::load_from_file(&fixture(name)).expect("fixture should load")
}

fn full_config() -> SearchConfig {
    load("lod_full_config.json").search().clone()
}

fn min_config() -> SearchConfig {
    load("lod_min_config.json").search().clone()
}

fn term_only_config() -> SearchConfig {
    load("lod_term_only_config.json").search().clone()
}

fn iri(value: &str) -> Iri {
    Iri::from(value)
}

#[test]
fn search_config_is_empty_for_term_only() {
    assert!(term_only_config().raw().is_empty());
}

#[test]
fn search_config_round_trips_declared_tree() {
    let document: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(fixture("lod_full_config.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(full_config().raw().to_value(), document["search"]);
}

#[test]
fn supports_search() {
    assert!(!term_only_config().supports_search());
    assert!(full_config().supports_search());
    assert!(min_config().supports_search());
}

#[test]
fn url_config() {
    assert!(term_only_config().url_config().is_none());

    let config = full_config();
    let url = config.url_config().expect("url block declared");
    assert_eq!(
        url.template(),
        Some("http://localhost/test_default/search?subauth={?subauth}&query={?query}&param1={?param1}&param2={?param2}")
    );
    assert_eq!(url.variable_representation(), "BasicRepresentation");
    let variables: Vec<_> = url.mappings().iter().map(|m| m.variable.as_str()).collect();
    assert_eq!(variables, vec!["query", "subauth", "param1", "param2"]);
    assert_eq!(url.required_variables().collect::<Vec<_>>(), vec!["query"]);
    assert_eq!(url.mapping("param1").unwrap().default, "delta");
    assert_eq!(url.mapping("param2").unwrap().default, "echo");
    assert_eq!(
        url.mapping("subauth").unwrap().property.as_deref(),
        Some("hydra:freetextQuery")
    );
}

#[test]
fn language() {
    assert!(term_only_config().language().is_none());
    assert!(min_config().language().is_none());
    let expected: Vec<LanguageTag> = vec!["en".into(), "fr".into(), "de".into()];
    assert_eq!(full_config().language(), Some(expected.as_slice()));
}

#[test]
fn results() {
    assert!(term_only_config().results().is_none());

    let config = full_config();
    let results = config.results().expect("results declared");
    assert_eq!(
        serde_json::to_value(results).unwrap(),
        json!({
            "id_predicate": "http://purl.org/dc/terms/identifier",
            "label_predicate": "http://www.w3.org/2004/02/skos/core#prefLabel",
            "altlabel_predicate": "http://www.w3.org/2004/02/skos/core#altLabel",
            "sort_predicate": "http://www.w3.org/2004/02/skos/core#prefLabel"
        })
    );
}

#[test]
fn results_id_predicate() {
    assert!(term_only_config().results_id_predicate().is_none());
    assert_eq!(
        full_config().results_id_predicate(),
        Some(&iri("http://purl.org/dc/terms/identifier"))
    );
}

#[test]
fn results_label_predicate() {
    assert!(term_only_config().results_label_predicate().is_none());
    assert_eq!(
        full_config().results_label_predicate(),
        Some(&iri("http://www.w3.org/2004/02/skos/core#prefLabel"))
    );
}

#[test]
fn results_altlabel_predicate() {
    assert!(term_only_config().results_altlabel_predicate().is_none());
    assert!(min_config().results_altlabel_predicate().is_none());
    assert_eq!(
        full_config().results_altlabel_predicate(),
        Some(&iri("http://www.w3.org/2004/02/skos/core#altLabel"))
    );
}

#[test]
fn min_config_keeps_declared_predicates() {
    let config = min_config();
    assert_eq!(
        config.results_id_predicate(),
        Some(&iri("http://purl.org/dc/terms/identifier"))
    );
    assert_eq!(
        config.results_label_predicate(),
        Some(&iri("http://www.w3.org/2004/02/skos/core#prefLabel"))
    );
}

#[test]
fn supports_sort() {
    assert!(!term_only_config().supports_sort());
    assert!(!min_config().supports_sort());
    assert!(full_config().supports_sort());
}

#[test]
fn results_sort_predicate() {
    assert!(term_only_config().results_sort_predicate().is_none());
    assert!(min_config().results_sort_predicate().is_none());
    assert_eq!(
        full_config().results_sort_predicate(),
        Some(&iri("http://www.w3.org/2004/02/skos/core#prefLabel"))
    );
}

#[test]
fn supports_context() {
    assert!(!term_only_config().supports_context());
    assert!(!min_config().supports_context());
    assert!(full_config().supports_context());
}

#[test]
fn context_map() {
    assert!(term_only_config().context_map().is_none());
    assert!(min_config().context_map().is_none());

    let config = full_config();
    let context = config.context_map().expect("context declared");
    let dates = context.group("dates").expect("dates group");
    assert_eq!(
        dates.label_i18n.as_deref(),
        Some("qa.linked_data.authority.locnames_ld4l_cache.dates")
    );
    assert_eq!(dates.label_default.as_deref(), Some("Dates"));

    let properties = context.properties();
    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0].label_default.as_deref(), Some("Authoritative Label"));
    assert_eq!(properties[0].lpath.as_deref(), Some("madsrdf:authoritativeLabel"));
    assert!(properties[0].selectable);
    assert!(properties[0].group_id.is_none());
    assert_eq!(properties[1].group_id.as_deref(), Some("dates"));
    assert_eq!(
        properties[1].lpath.as_deref(),
        Some("madsrdf:identifiesRWO/madsrdf:birthDate/schema:label")
    );
    assert!(!properties[1].selectable);
    assert!(!properties[1].drillable);
}

#[test]
fn has_subauthorities() {
    assert!(!term_only_config().has_subauthorities());
    assert!(!min_config().has_subauthorities());
    assert!(full_config().has_subauthorities());
}

#[test]
fn subauthority() {
    assert!(!term_only_config().subauthority("fake_subauth"));
    assert!(!min_config().subauthority("fake_subauth"));
    assert!(!full_config().subauthority("fake_subauth"));
    assert!(full_config().subauthority("search_sub2_key"));
}

#[test]
fn subauthority_count() {
    assert_eq!(term_only_config().subauthority_count(), 0);
    assert_eq!(min_config().subauthority_count(), 0);
    assert_eq!(full_config().subauthority_count(), 3);
}

#[test]
fn subauthorities() {
    assert!(term_only_config().subauthorities().is_empty());
    assert!(min_config().subauthorities().is_empty());

    let expected: BTreeMap<String, String> = [
        ("search_sub1_key", "search_sub1_name"),
        ("search_sub2_key", "search_sub2_name"),
        ("search_sub3_key", "search_sub3_name"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(full_config().subauthorities(), &expected);
}

#[test]
fn replacement_patterns() {
    assert!(!term_only_config().has_replacement_patterns());
    assert_eq!(min_config().replacement_pattern("query"), Some("query"));
    assert_eq!(full_config().replacement_patterns().len(), 2);
}

#[test]
fn encoding_config_from_symbol_keyed_yaml() {
    let authority = load("lod_encoding_config.yml");
    assert_eq!(authority.name(), Some("lod_encoding_config"));
    assert_eq!(authority.version(), Some("2.2"));

    let config = authority.search();
    let url = config.url_config().expect("url block declared");
    assert!(url.mapping("query").unwrap().encode);
    assert!(!url.mapping("lang").unwrap().encode);
    assert_eq!(url.mapping("lang").unwrap().default, "en");
    assert_eq!(config.language(), Some([LanguageTag::from("fr")].as_slice()));
    assert!(config.results_altlabel_predicate().is_none());
    assert!(!config.supports_context());
}
