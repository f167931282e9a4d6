//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure derivations
//! from page and component logic to improve reuse and testability.

pub mod filter;
pub mod session;
pub mod storage;
