//! The singly-linked inventory list.
//!
//! An [`Inventory`] is an owned chain of nodes: the inventory owns the head
//! node and every node owns the rest of the chain. New items are pushed on
//! the front, so iteration yields items in reverse insertion order.
//!
//! ```
//! use cellar_foundation::Inventory;
//!
//! let mut inv = Inventory::new();
//! inv.add("Sword");
//! inv.add("Shield");
//! inv.add("Rusty Key");
//! assert_eq!(inv.names().collect::<Vec<_>>(), ["Rusty Key", "Shield", "Sword"]);
//!
//! assert!(inv.remove("Shield"));
//! assert_eq!(inv.names().collect::<Vec<_>>(), ["Rusty Key", "Sword"]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::item::Item;

type Link = Option<Box<Node>>;

struct Node {
    item: Item,
    next: Link,
}

/// An ordered collection of [`Item`]s owned by a single holder.
///
/// Duplicate names are allowed and are distinct entries. `len` always equals
/// the number of nodes in the chain.
#[derive(Default)]
pub struct Inventory {
    head: Link,
    len: usize,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the inventory holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds an item named `name` to the front of the inventory.
    pub fn add(&mut self, name: impl Into<String>) {
        self.push_front(Item::new(name));
    }

    /// Adds an existing item to the front of the inventory.
    pub fn push_front(&mut self, item: Item) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { item, next }));
        self.len += 1;
    }

    /// Removes the first item whose name is exactly `name`.
    ///
    /// Returns `true` if an item was removed. The rest of the chain after the
    /// removed node is handed to its predecessor (or becomes the new head).
    pub fn remove(&mut self, name: &str) -> bool {
        self.take(name).is_some()
    }

    /// Removes and returns the first item whose name is exactly `name`.
    pub fn take(&mut self, name: &str) -> Option<Item> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.item.name() != name) {
            link = &mut link.as_mut()?.next;
        }

        // Either the matching node's slot or the empty tail.
        let Node { item, next } = *link.take()?;
        *link = next;
        self.len -= 1;
        Some(item)
    }

    /// Returns true if an item named `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|item| item.name() == name)
    }

    /// Iterates over the items, front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Iterates over item names, front to back.
    ///
    /// This is the display view of the inventory. Each call walks the
    /// current state again, so two calls in a row yield the same names.
    #[must_use]
    pub fn names(&self) -> Names<'_> {
        Names { inner: self.iter() }
    }

    /// Unlinks every node one at a time.
    fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }
}

impl Drop for Inventory {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl<S: Into<String>> Extend<S> for Inventory {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.add(name);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Inventory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut inv = Self::new();
        inv.extend(iter);
        inv
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the items of an [`Inventory`].
#[derive(Clone)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Iterator over the item names of an [`Inventory`].
#[derive(Clone)]
pub struct Names<'a> {
    inner: Iter<'a>,
}

impl<'a> Iterator for Names<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Item::name)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Names<'_> {}
impl FusedIterator for Names<'_> {}
