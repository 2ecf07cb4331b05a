//! ScreenEvent enum — queued by the screen view-model for the frontend.

use serde::{Deserialize, Serialize};

use crate::item::{ItemId, ShoppingItem};

/// Events produced by screen actions, drained by the frontend after each one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ScreenEvent {
    /// Add passed validation and the item was appended
    #[serde(rename = "item_added")]
    ItemAdded(ShoppingItem),

    /// An existing item's checked flag was replaced
    #[serde(rename = "item_toggled")]
    ItemToggled { id: ItemId, checked: bool },

    /// Remove Selected Items ran
    #[serde(rename = "checked_removed")]
    CheckedRemoved { removed: usize, remaining: usize },

    /// Add was rejected; `message` is what the form now shows
    #[serde(rename = "validation_failed")]
    ValidationFailed { message: String },
}

impl ScreenEvent {
    /// `{"event": "...", "data": {...}}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let event = ScreenEvent::ItemToggled {
            id: ItemId(3),
            checked: true,
        };
        let json = event.to_json();
        assert_eq!(json["event"], "item_toggled");
        assert_eq!(json["data"]["id"], 3);
        assert_eq!(json["data"]["checked"], true);
    }

    #[test]
    fn test_item_added_carries_item() {
        let event = ScreenEvent::ItemAdded(ShoppingItem::new(ItemId(0), "Milk", "2"));
        let json = event.to_json();
        assert_eq!(json["event"], "item_added");
        assert_eq!(json["data"]["name"], "Milk");
        assert_eq!(json["data"]["checked"], false);
    }
}
