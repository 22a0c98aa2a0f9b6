//! Integration tests for redirect resolution and compatibility matching.

use axle_fitment::{Field, FitmentTree};
use axle_selector::{
    CompatibilityEntry, MatchType, Selector, SelectorError, SelectorEvent, UNKNOWN,
};
use serde_json::json;

fn tree() -> FitmentTree {
    FitmentTree::from_json(&json!({
        "2019": {
            "Porsche": {
                "911": {
                    "redirectUrls": {
                        "default": "/carmakers/porsche/911",
                        "parts": "/parts/porsche/911"
                    },
                    "Carrera": {
                        "2dr Coupe": {
                            "3.0L Twin Turbo H6 379hp": ["8-speed PDK", "7-speed Manual"]
                        }
                    },
                    "Carrera S": {
                        "redirectUrls": { "default": "/carmakers/porsche/911-carrera-s" },
                        "2dr Coupe": {
                            "3.0L Twin Turbo H6 443hp": ["8-speed PDK"]
                        }
                    }
                },
                "Cayman": {
                    "Base": {
                        "2dr Coupe": { "2.0L Turbo H4 300hp": ["7-speed PDK"] }
                    }
                }
            }
        }
    }))
    .expect("test dataset is well formed")
}

fn entry(
    year: &str,
    submodel: &str,
    chassis: &str,
    engine: &str,
    transmission: &str,
) -> CompatibilityEntry {
    CompatibilityEntry {
        year: year.to_string(),
        make: "Porsche".to_string(),
        model: "911".to_string(),
        submodel: submodel.to_string(),
        chassis: chassis.to_string(),
        engine: engine.to_string(),
        transmission: transmission.to_string(),
    }
}

fn carrera_selector(transmission: &str) -> Selector {
    let mut selector = Selector::new();
    for (field, value) in [
        (Field::Year, "2019"),
        (Field::Make, "Porsche"),
        (Field::Model, "911"),
        (Field::Submodel, "Carrera"),
        (Field::Chassis, "2dr Coupe"),
        (Field::Engine, "3.0L Twin Turbo H6 379hp"),
        (Field::Transmission, transmission),
    ] {
        let _ = selector.assign_field(field, value).expect("assignment accepted");
    }
    selector
}

#[test]
fn perfect_partial_and_none_classification() {
    let tree = tree();
    let list = vec![entry(
        "2019",
        "Carrera",
        "2dr Coupe",
        "3.0L Twin Turbo H6 379hp",
        "8-speed PDK",
    )];

    let (outcome, _) = carrera_selector("8-speed PDK")
        .resolve(&tree, &list, "default", None)
        .expect("selection is complete");
    assert_eq!(outcome.match_type, MatchType::Perfect);

    let (outcome, _) = carrera_selector("7-speed Manual")
        .resolve(&tree, &list, "default", None)
        .expect("selection is complete");
    assert_eq!(outcome.match_type, MatchType::Partial);

    // Same make/model but no 2019 entry: identity never matches.
    let other_year = vec![entry(
        "2020",
        "Carrera",
        "2dr Coupe",
        "3.0L Twin Turbo H6 379hp",
        "8-speed PDK",
    )];
    let (outcome, _) = carrera_selector("8-speed PDK")
        .resolve(&tree, &other_year, "default", None)
        .expect("selection is complete");
    assert_eq!(outcome.match_type, MatchType::None);

    let (outcome, _) = carrera_selector("8-speed PDK")
        .resolve(&tree, &[], "default", None)
        .expect("selection is complete");
    assert_eq!(outcome.match_type, MatchType::None);
}

#[test]
fn classification_stops_at_the_first_identity_match() {
    let tree = tree();
    // A partial entry ahead of a perfect one: the scan stops at the first
    // year/make/model match, so the later perfect entry is never considered.
    let list = vec![
        entry("2019", "Carrera", "2dr Coupe", "3.0L Twin Turbo H6 379hp", "7-speed Manual"),
        entry("2019", "Carrera", "2dr Coupe", "3.0L Twin Turbo H6 379hp", "8-speed PDK"),
    ];
    let (outcome, _) = carrera_selector("8-speed PDK")
        .resolve(&tree, &list, "default", None)
        .expect("selection is complete");
    assert_eq!(outcome.match_type, MatchType::Partial);
}

#[test]
fn url_assembly_from_the_model_level_default() {
    let tree = tree();
    let (outcome, events) = carrera_selector("8-speed PDK")
        .resolve(&tree, &[], "default", None)
        .expect("selection is complete");

    assert_eq!(
        outcome.redirect_url.as_deref(),
        Some(
            "/carmakers/porsche/911/?year=2019&submodel=Carrera&chassis=2dr+Coupe\
             &engine=3.0L+Twin+Turbo+H6+379hp&transmission=8-speed+PDK"
        )
    );
    assert!(matches!(events.as_slice(), [SelectorEvent::Resolved { .. }]));
}

#[test]
fn context_selects_its_map_entry_with_default_fallback() {
    let tree = tree();
    let (outcome, _) = carrera_selector("8-speed PDK")
        .resolve(&tree, &[], "parts", None)
        .expect("selection is complete");
    assert!(
        outcome
            .redirect_url
            .as_deref()
            .is_some_and(|url| url.starts_with("/parts/porsche/911/?")),
        "parts context should use the parts entry"
    );

    // Unmapped context falls back to default.
    let (outcome, _) = carrera_selector("8-speed PDK")
        .resolve(&tree, &[], "accessories", None)
        .expect("selection is complete");
    assert!(
        outcome
            .redirect_url
            .as_deref()
            .is_some_and(|url| url.starts_with("/carmakers/porsche/911/?"))
    );
}

#[test]
fn submodel_redirects_override_the_model_level_map() {
    let tree = tree();
    let mut selector = Selector::new();
    for (field, value) in [
        (Field::Year, "2019"),
        (Field::Make, "Porsche"),
        (Field::Model, "911"),
        (Field::Submodel, "Carrera S"),
        (Field::Chassis, "2dr Coupe"),
        (Field::Engine, "3.0L Twin Turbo H6 443hp"),
        (Field::Transmission, "8-speed PDK"),
    ] {
        let _ = selector.assign_field(field, value).expect("assignment accepted");
    }

    let (outcome, _) = selector
        .resolve(&tree, &[], "default", None)
        .expect("selection is complete");
    assert!(
        outcome
            .redirect_url
            .as_deref()
            .is_some_and(|url| url.starts_with("/carmakers/porsche/911-carrera-s/?")),
        "submodel-level default wins over the model-level one"
    );

    // The model-level parts entry survives the merge untouched.
    let (outcome, _) = selector
        .resolve(&tree, &[], "parts", None)
        .expect("selection is complete");
    assert!(
        outcome
            .redirect_url
            .as_deref()
            .is_some_and(|url| url.starts_with("/parts/porsche/911/?"))
    );
}

#[test]
fn sentinel_values_never_become_query_parameters() {
    let tree = tree();
    let mut selector = Selector::new();
    for (field, value) in [
        (Field::Year, "2019"),
        (Field::Make, "Porsche"),
        (Field::Model, "911"),
        (Field::Submodel, UNKNOWN),
        (Field::Chassis, "2dr Coupe"),
        (Field::Engine, UNKNOWN),
        (Field::Transmission, "8-speed PDK"),
    ] {
        let _ = selector.assign_field(field, value).expect("assignment accepted");
    }

    let (outcome, _) = selector
        .resolve(&tree, &[], "default", None)
        .expect("selection is complete");
    let url = outcome.redirect_url.expect("url resolves");
    assert!(!url.contains("submodel="));
    assert!(!url.contains("engine="));
    assert!(url.contains("chassis=2dr+Coupe"));
    assert!(url.contains("year=2019"));
}

#[test]
fn plain_reference_becomes_a_ref_parameter() {
    let tree = tree();
    let (outcome, _) = carrera_selector("8-speed PDK")
        .resolve(&tree, &[], "default", Some("garage-widget"))
        .expect("selection is complete");
    assert!(
        outcome
            .redirect_url
            .expect("url resolves")
            .ends_with("&ref=garage-widget")
    );
}

#[test]
fn encoded_reference_is_spliced_pair_by_pair() {
    let tree = tree();
    let (outcome, _) = carrera_selector("8-speed PDK")
        .resolve(
            &tree,
            &[],
            "default",
            Some("utm_source=garage&utm_medium=widget"),
        )
        .expect("selection is complete");
    let url = outcome.redirect_url.expect("url resolves");
    assert!(url.ends_with("&utm_source=garage&utm_medium=widget"));
    assert!(!url.contains("ref="));
}

#[test]
fn missing_redirect_map_fails_without_a_url_but_still_classifies() {
    let tree = tree();
    let mut selector = Selector::new();
    for (field, value) in [
        (Field::Year, "2019"),
        (Field::Make, "Porsche"),
        (Field::Model, "Cayman"),
        (Field::Submodel, "Base"),
        (Field::Chassis, "2dr Coupe"),
        (Field::Engine, "2.0L Turbo H4 300hp"),
        (Field::Transmission, "7-speed PDK"),
    ] {
        let _ = selector.assign_field(field, value).expect("assignment accepted");
    }

    let list = vec![CompatibilityEntry {
        year: "2019".to_string(),
        make: "Porsche".to_string(),
        model: "Cayman".to_string(),
        submodel: "Base".to_string(),
        chassis: "2dr Coupe".to_string(),
        engine: "2.0L Turbo H4 300hp".to_string(),
        transmission: "7-speed PDK".to_string(),
    }];

    let (outcome, events) = selector
        .resolve(&tree, &list, "default", None)
        .expect("selection is complete");
    assert_eq!(outcome.redirect_url, None);
    assert_eq!(outcome.match_type, MatchType::Perfect);
    assert!(matches!(
        events.as_slice(),
        [SelectorEvent::ResolutionFailed { .. }]
    ));
}

#[test]
fn a_mutated_tree_surfaces_a_lookup_failure() {
    let tree = tree();
    let selector = carrera_selector("8-speed PDK");

    // The dataset the selection was built against is gone; resolve against
    // one that no longer has the year.
    let replacement = FitmentTree::from_json(&json!({
        "2021": {
            "Porsche": {
                "911": {
                    "redirectUrls": { "default": "/carmakers/porsche/911" },
                    "Carrera": { "2dr Coupe": { "3.0L H6": ["8-speed PDK"] } }
                }
            }
        }
    }))
    .expect("replacement dataset is well formed");

    let (outcome, events) = selector
        .resolve(&replacement, &[], "default", None)
        .expect("selection is complete");
    assert_eq!(outcome.redirect_url, None);
    match events.as_slice() {
        [SelectorEvent::ResolutionFailed { message }] => {
            assert!(message.contains("2019"), "failure names the missing year");
        }
        other => panic!("expected a resolution failure, got {other:?}"),
    }
}

#[test]
fn resolving_an_incomplete_selection_is_a_validation_error() {
    let tree = tree();
    let mut selector = Selector::new();
    let _ = selector.assign_field(Field::Year, "2019").expect("year accepted");
    let err = selector
        .resolve(&tree, &[], "default", None)
        .expect_err("incomplete selections cannot resolve");
    assert!(matches!(err, SelectorError::Validation(_)));
}
