//! Ordered in-memory shopping list with append, toggle, and bulk removal.

use tracing::debug;

use crate::item::{ItemId, ShoppingItem};

/// Insertion-ordered list of items. Duplicate names and quantities are
/// allowed; entries are told apart by their `ItemId`.
#[derive(Debug, Default, Clone)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    next_id: u64,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an unchecked item and return a copy of it.
    ///
    /// No validation happens here; callers go through the input form.
    pub fn append(&mut self, name: impl Into<String>, quantity: impl Into<String>) -> ShoppingItem {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        let item = ShoppingItem::new(id, name, quantity);
        self.items.push(item.clone());
        debug!(id = %id, name = %item.name, quantity = %item.quantity, "Item appended");
        item
    }

    /// Replace the item with `id` by a copy with `checked` set.
    ///
    /// Returns `false` (and changes nothing) when no such item exists.
    pub fn toggle(&mut self, id: ItemId, checked: bool) -> bool {
        let Some(pos) = self.items.iter().position(|i| i.id == id) else {
            return false;
        };
        self.items[pos] = self.items[pos].with_checked(checked);
        debug!(id = %id, checked, "Item toggled");
        true
    }

    /// Drop every checked item, keeping survivors in order.
    /// Returns the number of items removed.
    pub fn remove_checked(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|i| !i.checked);
        let removed = before - self.items.len();
        if removed > 0 {
            debug!(removed, remaining = self.items.len(), "Checked items removed");
        }
        removed
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&ShoppingItem> {
        self.items.get(index)
    }

    pub fn find(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }
}
