// Host-side tests for lookup response interpretation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod lookup {
    include!("../src/lookup.rs");
}

use lookup::*;

const FOUND: &str = r#"{
    "number_of_results": 2,
    "items": [
        {
            "chosen": false,
            "organization": {
                "id": "https://ror.org/00aaaaa00",
                "name": "Other Institute",
                "country": { "country_name": "France" }
            }
        },
        {
            "chosen": true,
            "score": 1.0,
            "organization": {
                "id": "https://ror.org/02mhbdp94",
                "name": "Universidad de Los Andes",
                "country": { "country_code": "CO", "country_name": "Colombia" }
            }
        }
    ]
}"#;

#[test]
fn chosen_item_is_the_match() {
    let outcome = LookupOutcome::from_json(FOUND).expect("valid body");
    assert!(outcome.is_match());
    assert_eq!(outcome.particle_text(), "02mhbdp94");
    match &outcome {
        LookupOutcome::Match(org) => assert_eq!(org.name, "Universidad de Los Andes"),
        LookupOutcome::NoMatch => panic!("expected a match"),
    }
}

#[test]
fn unchosen_items_are_not_a_match() {
    let body = r#"{"items":[{"chosen":false,"organization":{"id":"https://ror.org/x","name":"X"}}]}"#;
    let outcome = LookupOutcome::from_json(body).unwrap();
    assert!(!outcome.is_match());
    assert_eq!(outcome.particle_text(), NO_MATCH_TEXT);
}

#[test]
fn missing_items_is_no_match() {
    let outcome = LookupOutcome::from_json("{}").unwrap();
    assert!(!outcome.is_match());
    assert_eq!(outcome.particle_text(), "?");
    assert!(outcome.result_html().contains("No matching organizations found."));
}

#[test]
fn malformed_body_is_a_parse_error() {
    let err = LookupOutcome::from_json("not json").unwrap_err();
    assert!(matches!(err, LookupError::Parse(_)));
    assert!(err.to_string().starts_with("malformed lookup response"));
}

#[test]
fn short_id_keeps_unprefixed_ids() {
    let org = Organization {
        id: "03yrm5c26".to_owned(),
        name: "N".to_owned(),
        country: None,
    };
    assert_eq!(org.short_id(), "03yrm5c26");
}

#[test]
fn result_html_lists_name_link_and_location() {
    let html = LookupOutcome::from_json(FOUND).unwrap().result_html();
    assert!(html.contains("Found matching organization:"));
    assert!(html.contains("Name: Universidad de Los Andes"));
    assert!(html.contains("<a href=\"https://ror.org/02mhbdp94\">https://ror.org/02mhbdp94</a>"));
    assert!(html.contains("Location: Colombia"));
}

#[test]
fn names_are_escaped() {
    let body = r#"{"items":[{"chosen":true,"organization":{"id":"https://ror.org/1","name":"<b>A & B</b>"}}]}"#;
    let html = LookupOutcome::from_json(body).unwrap().result_html();
    assert!(html.contains("Name: &lt;b&gt;A &amp; B&lt;/b&gt;"));
    assert!(html.contains("Location: Unknown"));
}

#[test]
fn error_html_carries_message() {
    let html = error_html("HTTP error! status: 503");
    assert!(html.contains("Error searching for organization: HTTP error! status: 503"));
    assert!(html.contains("#ff0000"));
}
