//! TUI layout compositing — assembles all UI panels.

mod form;
mod list;
mod status;

use ratatui::prelude::*;

use crate::app::App;

/// Render the full TUI layout.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // ┌──────────────────────────────────┐
    // │ Title                            │
    // │ Name input                       │
    // │ Quantity input                   │
    // │ Error (when set)                 │
    // │ Buttons                          │
    // ├──────────────────────────────────┤
    // │ Items                            │
    // │                                  │
    // ├──────────────────────────────────┤
    // │ Status bar                       │
    // └──────────────────────────────────┘

    let error_height = if app.screen.form().has_error() { 1 } else { 0 };

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // title
            Constraint::Length(3),            // name
            Constraint::Length(3),            // quantity
            Constraint::Length(error_height), // error
            Constraint::Length(1),            // buttons
            Constraint::Min(4),               // list
            Constraint::Length(1),            // status
        ])
        .split(area);

    form::draw_title(frame, app, main_layout[0]);
    form::draw_fields(frame, app, [main_layout[1], main_layout[2]]);
    form::draw_error(frame, app, main_layout[3]);
    form::draw_buttons(frame, main_layout[4]);
    list::draw(frame, app, main_layout[5]);
    status::draw(frame, app, main_layout[6]);
}
