use proptest::prelude::*;

use super::*;
use crate::state::catalog::Catalog;

fn names(cards: &[&CardRecord]) -> Vec<&'static str> {
    cards.iter().map(|c| c.name).collect()
}

// =============================================================
// name_matches
// =============================================================

#[test]
fn empty_query_matches_any_name() {
    assert!(name_matches("Pikachu", ""));
    assert!(name_matches("", ""));
}

#[test]
fn match_ignores_case_on_both_sides() {
    assert!(name_matches("Pikachu", "PIKA"));
    assert!(name_matches("Pikachu", "pika"));
    assert!(name_matches("Pikachu", "kAcH"));
}

#[test]
fn whitespace_query_is_literal() {
    assert!(!name_matches("Pikachu", " "));
    assert!(!name_matches("Pikachu", " pika"));
    assert!(name_matches("Mr. Mime", " "));
}

#[test]
fn accented_characters_are_not_folded() {
    assert!(name_matches("Flabébé", "ébé"));
    assert!(name_matches("Flabébé", "ÉBÉ"));
    assert!(!name_matches("Flabébé", "ebe"));
}

// =============================================================
// filter_cards scenarios
// =============================================================

#[test]
fn char_query_returns_only_charizard() {
    let catalog = Catalog::bundled();
    let result = filter_cards(catalog.cards(), "char");
    assert_eq!(names(&result), ["Charizard"]);
}

#[test]
fn non_matching_query_returns_empty() {
    let catalog = Catalog::bundled();
    assert!(filter_cards(catalog.cards(), "zz").is_empty());
}

#[test]
fn empty_query_returns_full_catalog_in_order() {
    let catalog = Catalog::bundled();
    let result = filter_cards(catalog.cards(), "");
    assert_eq!(result.len(), catalog.len());
    for (got, expected) in result.iter().zip(catalog.cards()) {
        assert!(std::ptr::eq(*got, expected));
    }
}

#[test]
fn shared_substring_keeps_catalog_order() {
    let catalog = Catalog::bundled();
    // "ar" appears in Charizard, Bulbasaur and Gengar.
    let result = filter_cards(catalog.cards(), "ar");
    assert_eq!(names(&result), ["Charizard", "Bulbasaur", "Gengar"]);
}

#[test]
fn upper_and_lower_case_queries_agree() {
    let catalog = Catalog::bundled();
    assert_eq!(filter_cards(catalog.cards(), "PIKA"), filter_cards(catalog.cards(), "pika"));
}

#[test]
fn filtered_cards_are_catalog_references() {
    let catalog = Catalog::bundled();
    let result = filter_cards(catalog.cards(), "mew");
    assert!(std::ptr::eq(result[0], catalog.get(5).unwrap()));
}

// =============================================================
// Laws
// =============================================================

proptest! {
    #[test]
    fn result_is_ordered_subsequence_of_catalog(query in "\\PC{0,4}") {
        let catalog = Catalog::bundled();
        let result = filter_cards(catalog.cards(), &query);
        let mut positions = result.iter().map(|card| {
            catalog.cards().iter().position(|c| std::ptr::eq(c, *card)).unwrap()
        });
        let mut last = positions.next();
        for pos in positions {
            prop_assert!(Some(pos) > last);
            last = Some(pos);
        }
    }

    #[test]
    fn refiltering_with_same_query_is_idempotent(query in "[a-zA-Z ]{0,3}") {
        let catalog = Catalog::bundled();
        let once = filter_cards(catalog.cards(), &query);
        let owned: Vec<CardRecord> = once.iter().map(|c| (*c).clone()).collect();
        let twice = filter_cards(&owned, &query);
        prop_assert_eq!(names(&once), names(&twice));
    }

    #[test]
    fn query_case_does_not_change_result(query in "[a-zA-Z]{0,4}") {
        let catalog = Catalog::bundled();
        let upper = filter_cards(catalog.cards(), &query.to_uppercase());
        let lower = filter_cards(catalog.cards(), &query.to_lowercase());
        prop_assert_eq!(names(&upper), names(&lower));
    }
}
