//! Core types — ItemId and ShoppingItem.

use serde::{Deserialize, Serialize};

/// Stable identity of a list entry, assigned by the store on append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One shopping-list entry.
///
/// Treated as an immutable value: changing the checked flag produces a
/// replacement record via [`ShoppingItem::with_checked`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: String,
    #[serde(default)]
    pub checked: bool,
}

impl ShoppingItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            quantity: quantity.into(),
            checked: false,
        }
    }

    /// Copy of this item with `checked` replaced.
    pub fn with_checked(&self, checked: bool) -> Self {
        Self {
            checked,
            ..self.clone()
        }
    }
}
