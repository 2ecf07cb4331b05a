//! Title, the two input fields, the inline error, and the button bar.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use shopping_core::form::Field;

use crate::app::{App, Pane};

pub fn draw_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(Line::styled(
        format!(" {}", app.config.title),
        Style::default().fg(Color::Cyan).bold(),
    ));
    frame.render_widget(title, area);
}

pub fn draw_fields(frame: &mut Frame, app: &App, areas: [Rect; 2]) {
    for (field, area) in [Field::Name, Field::Quantity].into_iter().zip(areas) {
        draw_field(frame, app, field, area);
    }
}

fn draw_field(frame: &mut Frame, app: &App, field: Field, area: Rect) {
    let form = app.screen.form();
    let focused = app.pane == Pane::Form && form.focus == field;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = form.value(field);
    let input = if value.is_empty() {
        Paragraph::new(field.placeholder()).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(value).style(Style::default().fg(Color::White))
    };
    frame.render_widget(input, inner);

    if focused {
        frame.set_cursor_position(Position::new(cursor_x(inner, value), inner.y));
    }
}

/// Column of the text cursor, pinned to the last cell once the text overflows.
fn cursor_x(inner: Rect, value: &str) -> u16 {
    let len = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
    inner
        .x
        .saturating_add(len.min(inner.width.saturating_sub(1)))
}

pub fn draw_error(frame: &mut Frame, app: &App, area: Rect) {
    let form = app.screen.form();
    if !form.has_error() {
        return;
    }
    let error = Paragraph::new(format!(" {}", form.error_message))
        .style(Style::default().fg(Color::Red));
    frame.render_widget(error, area);
}

pub fn draw_buttons(frame: &mut Frame, area: Rect) {
    let button = Style::default().fg(Color::Black).bg(Color::Cyan);
    let hint = Style::default().fg(Color::DarkGray);
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(" Add to List ", button),
        Span::styled(" ^A ", hint),
        Span::raw("  "),
        Span::styled(" Remove Selected Items ", button),
        Span::styled(" ^X ", hint),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_follows_text() {
        let inner = Rect::new(1, 1, 20, 1);
        assert_eq!(cursor_x(inner, ""), 1);
        assert_eq!(cursor_x(inner, "Milk"), 5);
    }

    #[test]
    fn test_cursor_stays_inside_field() {
        let inner = Rect::new(1, 1, 10, 1);
        assert_eq!(cursor_x(inner, &"x".repeat(50)), 10);
        assert_eq!(cursor_x(inner, &"x".repeat(70_000)), 10);
    }

    #[test]
    fn test_cursor_at_right_edge_of_screen() {
        let inner = Rect::new(u16::MAX - 3, 0, 3, 1);
        assert_eq!(cursor_x(inner, "abcdef"), u16::MAX - 1);
    }
}
