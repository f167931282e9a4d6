#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_item_is_none_outside_browser() {
    assert_eq!(load_item("token"), None);
}

#[test]
fn writes_are_noops_outside_browser() {
    save_item("token", "1");
    assert_eq!(load_item("token"), None);
}
