//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the browser chrome and the card surfaces while reading
//! shared state from Leptos context providers or props.

pub mod card_dialog;
pub mod card_tile;
pub mod sidebar;
