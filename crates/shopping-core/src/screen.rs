//! Screen view-model — one input form plus one list store.
//!
//! Every action runs synchronously and queues at most one `ScreenEvent`.
//! The frontend reads state through the accessors and drains events after
//! each key press.

use crate::events::ScreenEvent;
use crate::form::{Field, InputForm};
use crate::item::{ItemId, ShoppingItem};
use crate::store::ShoppingList;

#[derive(Debug, Default)]
pub struct ShoppingScreen {
    form: InputForm,
    list: ShoppingList,
    pending: Vec<ScreenEvent>,
}

impl ShoppingScreen {
    /// A fresh screen: empty fields, empty list, focus on the name field.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut InputForm {
        &mut self.form
    }

    pub fn list(&self) -> &ShoppingList {
        &self.list
    }

    /// "Next" input action on the focused field.
    pub fn next_field(&mut self) -> Field {
        self.form.focus_next();
        self.form.focus
    }

    /// Validate the form and, if it passes, append a new item.
    ///
    /// On success the fields and error are cleared and focus returns to the
    /// name field. On failure only `error_message` changes.
    pub fn add(&mut self) -> Option<ShoppingItem> {
        if let Err(err) = self.form.validate() {
            self.form.fail(err);
            self.pending.push(ScreenEvent::ValidationFailed {
                message: self.form.error_message.clone(),
            });
            return None;
        }

        let item = self.list.append(self.form.name.clone(), self.form.quantity.clone());
        self.form.reset();
        self.pending.push(ScreenEvent::ItemAdded(item.clone()));
        Some(item)
    }

    /// Set the checked flag of the item with `id`. Unknown ids are ignored.
    pub fn toggle(&mut self, id: ItemId, checked: bool) -> bool {
        let changed = self.list.toggle(id, checked);
        if changed {
            self.pending.push(ScreenEvent::ItemToggled { id, checked });
        }
        changed
    }

    /// Drop all checked items. Returns how many were removed.
    pub fn remove_checked(&mut self) -> usize {
        let removed = self.list.remove_checked();
        self.pending.push(ScreenEvent::CheckedRemoved {
            removed,
            remaining: self.list.len(),
        });
        removed
    }

    pub fn drain_events(&mut self) -> Vec<ScreenEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(screen: &mut ShoppingScreen, name: &str, quantity: &str) -> Option<ShoppingItem> {
        screen.form_mut().set_name(name);
        screen.form_mut().set_quantity(quantity);
        screen.add()
    }

    fn snapshot(screen: &ShoppingScreen) -> Vec<(String, String, bool)> {
        screen
            .list()
            .items()
            .iter()
            .map(|i| (i.name.clone(), i.quantity.clone(), i.checked))
            .collect()
    }

    fn row(name: &str, qty: &str, checked: bool) -> (String, String, bool) {
        (name.to_string(), qty.to_string(), checked)
    }

    #[test]
    fn test_add_toggle_remove_flow() {
        let mut screen = ShoppingScreen::new();
        let milk = fill(&mut screen, "Milk", "2").unwrap();
        fill(&mut screen, "Bread", "1").unwrap();
        assert_eq!(
            snapshot(&screen),
            vec![row("Milk", "2", false), row("Bread", "1", false)]
        );

        assert!(screen.toggle(milk.id, true));
        assert_eq!(
            snapshot(&screen),
            vec![row("Milk", "2", true), row("Bread", "1", false)]
        );

        assert_eq!(screen.remove_checked(), 1);
        assert_eq!(snapshot(&screen), vec![row("Bread", "1", false)]);
    }

    #[test]
    fn test_add_with_empty_name() {
        let mut screen = ShoppingScreen::new();
        assert!(fill(&mut screen, "", "3").is_none());
        assert!(screen.list().is_empty());
        assert_eq!(
            screen.form().error_message,
            "Both name and quantity must be filled!"
        );
        // Fields keep their text after a failed add
        assert_eq!(screen.form().quantity, "3");
    }

    #[test]
    fn test_add_with_non_numeric_quantity() {
        let mut screen = ShoppingScreen::new();
        assert!(fill(&mut screen, "Eggs", "abc").is_none());
        assert!(screen.list().is_empty());
        assert_eq!(screen.form().error_message, "Quantity must be a number!");
        assert_eq!(screen.form().name, "Eggs");
        assert_eq!(screen.form().quantity, "abc");
    }

    #[test]
    fn test_successful_add_resets_form() {
        let mut screen = ShoppingScreen::new();
        fill(&mut screen, "Eggs", "abc");
        screen.next_field();
        assert_eq!(screen.form().focus, Field::Quantity);

        let item = fill(&mut screen, "Eggs", "12").unwrap();
        assert!(!item.checked);
        assert_eq!(screen.list().len(), 1);
        assert!(screen.form().name.is_empty());
        assert!(screen.form().quantity.is_empty());
        assert!(!screen.form().has_error());
        assert_eq!(screen.form().focus, Field::Name);
    }

    #[test]
    fn test_failed_add_replaces_previous_error() {
        let mut screen = ShoppingScreen::new();
        fill(&mut screen, "", "");
        fill(&mut screen, "Eggs", "x");
        assert_eq!(screen.form().error_message, "Quantity must be a number!");
    }

    #[test]
    fn test_toggle_removed_item_is_noop() {
        let mut screen = ShoppingScreen::new();
        let milk = fill(&mut screen, "Milk", "2").unwrap();
        screen.toggle(milk.id, true);
        screen.remove_checked();
        screen.drain_events();

        assert!(!screen.toggle(milk.id, false));
        assert!(screen.drain_events().is_empty());
    }

    #[test]
    fn test_events_queued_per_action() {
        let mut screen = ShoppingScreen::new();
        fill(&mut screen, "", "1");
        let milk = fill(&mut screen, "Milk", "2").unwrap();
        screen.toggle(milk.id, true);
        screen.remove_checked();

        let events = screen.drain_events();
        assert_eq!(
            events,
            vec![
                ScreenEvent::ValidationFailed {
                    message: "Both name and quantity must be filled!".into()
                },
                ScreenEvent::ItemAdded(milk.clone()),
                ScreenEvent::ItemToggled {
                    id: milk.id,
                    checked: true
                },
                ScreenEvent::CheckedRemoved {
                    removed: 1,
                    remaining: 0
                },
            ]
        );
        assert!(screen.drain_events().is_empty());
    }
}
