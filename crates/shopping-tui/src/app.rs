//! App state, key handling, screen event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use shopping_core::config::Config;
use shopping_core::events::ScreenEvent;
use shopping_core::screen::ShoppingScreen;

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Form,
    List,
}

/// The main application state.
pub struct App {
    pub screen: ShoppingScreen,
    pub config: Config,
    pub pane: Pane,
    /// Cursor row in the list pane
    pub selected: usize,
    /// Last action summary for the status bar
    pub status: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        App {
            screen: ShoppingScreen::new(),
            config,
            pane: Pane::Form,
            selected: 0,
            status: String::new(),
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            // Quit
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            // Buttons
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => self.add(),
            (KeyCode::Char('x'), KeyModifiers::CONTROL) => self.remove_checked(),
            // Pane switch
            (KeyCode::Esc, _) | (KeyCode::BackTab, _) => self.switch_pane(),
            // Form
            (KeyCode::Enter, _) | (KeyCode::Tab, _) if self.pane == Pane::Form => {
                self.screen.next_field();
            }
            (KeyCode::Backspace, _) if self.pane == Pane::Form => {
                self.screen.form_mut().pop_char();
            }
            (KeyCode::Char(c), m)
                if self.pane == Pane::Form && !m.contains(KeyModifiers::CONTROL) =>
            {
                self.screen.form_mut().push_char(c);
            }
            // List
            (KeyCode::Up, _) if self.pane == Pane::List => self.select_prev(),
            (KeyCode::Down, _) if self.pane == Pane::List => self.select_next(),
            (KeyCode::Char(' '), _) | (KeyCode::Enter, _) if self.pane == Pane::List => {
                self.toggle_selected();
            }
            _ => {}
        }

        for event in self.screen.drain_events() {
            self.handle_event(event);
        }
    }

    /// Update frontend state from a screen event.
    pub fn handle_event(&mut self, event: ScreenEvent) {
        match &event {
            ScreenEvent::ItemAdded(item) => {
                self.status = format!("Added {} ({})", item.name, item.quantity);
            }
            ScreenEvent::ItemToggled { id, checked } => {
                let Some(item) = self.screen.list().find(*id) else {
                    return;
                };
                let mark = if *checked { "Selected" } else { "Unselected" };
                self.status = format!("{} {}", mark, item.name);
            }
            ScreenEvent::CheckedRemoved { removed, .. } => {
                self.status = format!("Removed {} item(s)", removed);
                self.clamp_selection();
            }
            // The form already shows the message
            ScreenEvent::ValidationFailed { .. } => {
                self.status.clear();
                return;
            }
        }
        info!(event = %event.to_json(), "Screen event");
    }

    fn add(&mut self) {
        self.screen.add();
    }

    fn remove_checked(&mut self) {
        self.screen.remove_checked();
    }

    fn switch_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Form => Pane::List,
            Pane::List => Pane::Form,
        };
        self.clamp_selection();
    }

    fn toggle_selected(&mut self) {
        let Some(item) = self.screen.list().get(self.selected) else {
            return;
        };
        let (id, checked) = (item.id, item.checked);
        self.screen.toggle(id, !checked);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.screen.list().len() {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.screen.list().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
