//! Inventory list behavior through the public API.

use cellar_foundation::{Inventory, Item};
use proptest::prelude::*;

fn listed(inv: &Inventory) -> Vec<String> {
    inv.names().map(String::from).collect()
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn sword_shield_key_scenario() {
    let mut inv = Inventory::new();
    inv.add("Sword");
    inv.add("Shield");
    inv.add("Rusty Key");
    assert_eq!(listed(&inv), ["Rusty Key", "Shield", "Sword"]);

    assert!(inv.remove("Shield"));
    assert_eq!(listed(&inv), ["Rusty Key", "Sword"]);
}

#[test]
fn print_twice_is_identical() {
    let inv: Inventory = ["a", "b", "c"].into_iter().collect();
    assert_eq!(listed(&inv), listed(&inv));
}

#[test]
fn iter_yields_items() {
    let inv: Inventory = ["Gold Crown"].into_iter().collect();
    let items: Vec<&Item> = (&inv).into_iter().collect();
    assert_eq!(items, [&Item::new("Gold Crown")]);
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn remove_on_empty_is_false() {
    let mut inv = Inventory::new();
    assert!(!inv.remove("Sword"));
}

#[test]
fn remove_only_element_empties() {
    let mut inv = Inventory::new();
    inv.add("Dusty Book");
    assert!(inv.remove("Dusty Book"));
    assert_eq!(inv.names().count(), 0);
    assert!(inv.is_empty());
}

#[test]
fn remove_missing_changes_nothing() {
    let mut inv: Inventory = ["Sword", "Shield"].into_iter().collect();
    let before = listed(&inv);
    assert!(!inv.remove("Gold Crown"));
    assert_eq!(listed(&inv), before);
    assert_eq!(inv.len(), 2);
}

#[test]
fn remove_is_case_sensitive() {
    let mut inv: Inventory = ["Sword"].into_iter().collect();
    assert!(!inv.remove("sword"));
    assert!(inv.remove("Sword"));
}

#[test]
fn taken_item_can_be_put_back() {
    let mut inv: Inventory = ["a", "b"].into_iter().collect();
    let item = inv.take("a").unwrap();
    inv.push_front(item);
    assert_eq!(listed(&inv), ["a", "b"]);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn listing_is_idempotent(names in prop::collection::vec("[a-z]{1,5}", 0..30)) {
        let inv: Inventory = names.iter().cloned().collect();
        prop_assert_eq!(listed(&inv), listed(&inv));
    }

    #[test]
    fn removing_every_name_empties(names in prop::collection::vec("[a-z]{1,5}", 0..30)) {
        let mut inv: Inventory = names.iter().cloned().collect();
        for name in &names {
            prop_assert!(inv.remove(name));
        }
        prop_assert!(inv.is_empty());
        prop_assert_eq!(inv.len(), 0);
    }
}
