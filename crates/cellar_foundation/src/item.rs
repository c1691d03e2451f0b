//! Items held in inventories.

use std::fmt;

/// A named object that can occupy an [`Inventory`](crate::Inventory).
///
/// Items are immutable once created and compare by exact, case-sensitive
/// name equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    name: String,
}

impl Item {
    /// Creates an item with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the item's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consumes the item, returning its name.
    #[must_use]
    pub fn into_name(self) -> String {
        self.name
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Item {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Item {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
