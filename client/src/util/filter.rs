//! Name search over the card catalog.
//!
//! DESIGN
//! ======
//! Filtering is a pure function of `(cards, query)`. Views derive the visible
//! list from it on every query change instead of keeping a separately mutated
//! copy, so the grid can never drift from the catalog.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::state::catalog::CardRecord;

/// Case-insensitive substring test against a card name.
///
/// The query is matched literally: surrounding whitespace is significant and
/// no diacritic folding is applied.
pub fn name_matches(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Cards whose name contains `query`, in catalog order.
pub fn filter_cards<'a>(cards: &'a [CardRecord], query: &str) -> Vec<&'a CardRecord> {
    cards.iter().filter(|card| name_matches(card.name, query)).collect()
}
