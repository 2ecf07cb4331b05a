//! Status bar — item counts, last action, key hints.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{App, Pane};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let list = app.screen.list();
    let (pane, color) = match app.pane {
        Pane::Form => ("form", Color::Cyan),
        Pane::List => ("list", Color::Yellow),
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", pane),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::raw(format!(
            " items: {}  selected: {} ",
            list.len(),
            list.checked_count()
        )),
    ];

    if !app.status.is_empty() {
        spans.push(Span::styled(
            format!(" {} ", app.status),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::styled(
        " ^Q quit ",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
