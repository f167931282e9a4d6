//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `catalog`, `collection`, `ui`) so
//! individual components can depend on small focused models.

pub mod auth;
pub mod catalog;
pub mod collection;
pub mod ui;
