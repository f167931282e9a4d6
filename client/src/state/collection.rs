//! Collection-browser state: search query and inspected card.
//!
//! DESIGN
//! ======
//! Only the two inputs the user actually mutates are stored here. The visible
//! grid, the result phase, and the detail dialog are all derived from
//! `(catalog, query, selection)` on demand.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use crate::state::catalog::{Catalog, CardRecord};
use crate::util::filter::filter_cards;

/// What the grid is currently showing, recomputed on every query change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultPhase {
    /// Query is empty; the whole catalog is visible.
    AllShown,
    /// Query is non-empty and at least one card matches.
    Filtered,
    /// Query is non-empty and nothing matches.
    EmptyResult,
}

/// Detail dialog visibility, derived from the selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DetailDialog {
    Closed,
    Open(&'static CardRecord),
}

impl DetailDialog {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// The card on display, if any.
    pub fn card(self) -> Option<&'static CardRecord> {
        match self {
            Self::Open(card) => Some(card),
            Self::Closed => None,
        }
    }
}

/// State owned by one collection view.
///
/// Held in a page-local `RwSignal`; nothing here is persisted.
#[derive(Clone, Debug, Default)]
pub struct CollectionState {
    pub query: String,
    pub selection: Option<&'static CardRecord>,
}

impl CollectionState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Inspect `card`, replacing any previous selection.
    pub fn select(&mut self, card: &'static CardRecord) {
        self.selection = Some(card);
    }

    /// Drop the selection. Returns whether anything was selected.
    pub fn clear(&mut self) -> bool {
        self.selection.take().is_some()
    }

    /// Catalog cards matching the current query.
    pub fn visible(&self, catalog: Catalog) -> Vec<&'static CardRecord> {
        filter_cards(catalog.cards(), &self.query)
    }

    pub fn phase(&self, catalog: Catalog) -> ResultPhase {
        result_phase(&self.query, self.visible(catalog).len())
    }

    pub fn dialog(&self) -> DetailDialog {
        match self.selection {
            Some(card) => DetailDialog::Open(card),
            None => DetailDialog::Closed,
        }
    }
}

/// Classify a filter outcome.
pub fn result_phase(query: &str, visible: usize) -> ResultPhase {
    if query.is_empty() {
        ResultPhase::AllShown
    } else if visible == 0 {
        ResultPhase::EmptyResult
    } else {
        ResultPhase::Filtered
    }
}
