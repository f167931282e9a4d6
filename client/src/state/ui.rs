//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (sidebar width) out of the
//! collection state so layout controls can evolve independently of browsing.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_expanded: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_expanded: true }
    }
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_expanded = !self.sidebar_expanded;
    }
}
