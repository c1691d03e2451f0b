//! The inventory walkthrough shown with `--demo`.

use cellar_foundation::Inventory;

/// Items added by the walkthrough, in insertion order.
pub const DEMO_ITEMS: [&str; 3] = ["Sword", "Shield", "Rusty Key"];

/// Fills an inventory, lists it, removes the Shield, and lists it again.
#[must_use]
pub fn inventory_demo() -> Vec<String> {
    let mut inv: Inventory = DEMO_ITEMS.into_iter().collect();

    let mut lines = vec!["Inventory:".to_string()];
    lines.extend(inv.names().map(String::from));

    lines.push("Removing Shield...".to_string());
    inv.remove("Shield");

    lines.push(String::new());
    lines.push("Inventory:".to_string());
    lines.extend(inv.names().map(String::from));
    lines
}
