mod common;

use album_engine::search::{resolve, resolve_with, suggestion_names, Resolution};
use album_engine::SearchError;
use common::library;

fn candidates(input: &str) -> album_engine::search::Candidates {
    match resolve(input, &library()).unwrap() {
        Resolution::Candidates(c) => c,
        other => panic!("expected candidates for {input:?}, got {other:?}"),
    }
}

#[test]
fn exact_key_short_circuits_fuzzy_matching() {
    // "blond" is also within distance 1 of "blonde".
    let resolution = resolve("  BLOND ", &library()).unwrap();
    assert_eq!(
        resolution,
        Resolution::Exact {
            key: "blond".to_string()
        }
    );
}

#[test]
fn near_misses_become_album_candidates() {
    let c = candidates("blondee");
    assert_eq!(c.album_matches, vec!["blond", "blonde"]);
    assert!(c.artist_matches.is_empty());
    assert_eq!(c.literal, "blondee");
}

#[test]
fn artist_names_are_matched_too() {
    let c = candidates("kayne");
    assert_eq!(c.artist_matches, vec!["graduation", "yeezus"]);
    assert!(!c.album_matches.contains(&"yeezus".to_string()));
}

#[test]
fn records_without_artist_never_match_by_artist() {
    let c = candidates("dam");
    assert_eq!(c.album_matches, vec!["damn"]);
    assert!(!c.artist_matches.contains(&"skit collection".to_string()));
}

#[test]
fn acronyms_resolve_to_candidates() {
    let c = candidates("dsotm");
    assert_eq!(c.acronym_matches, vec!["the dark side of the moon"]);

    let c = candidates("tpab");
    assert_eq!(c.acronym_matches, vec!["to pimp a butterfly"]);
}

#[test]
fn nothing_close_means_create_new() {
    let resolution = resolve("Songs in the Key of Life", &library()).unwrap();
    assert_eq!(
        resolution,
        Resolution::NotFound {
            literal: "Songs in the Key of Life".to_string()
        }
    );
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(resolve("   ", &library()), Err(SearchError::EmptyInput));
}

#[test]
fn distance_budget_is_configurable() {
    let strict = resolve_with("blondee", &library(), 0).unwrap();
    assert!(matches!(strict, Resolution::NotFound { .. }));
}

#[test]
fn suggestions_use_display_names() {
    let names = suggestion_names(&library());
    assert_eq!(names.len(), 8);
    assert!(names.contains(&"The Dark Side of the Moon".to_string()));
    assert!(names.contains(&"To Pimp A Butterfly".to_string()));
}
