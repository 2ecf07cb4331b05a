//! Scrollable item list — checkbox, name, quantity per row.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use shopping_core::config::Config;
use shopping_core::item::ShoppingItem;

use crate::app::{App, Pane};

/// Lines each row takes before its gap.
const ROW_HEIGHT: usize = 2;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.pane == Pane::List;
    let block = Block::default()
        .title(" Items (Esc to switch focus) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items = app.screen.list().items();
    if items.is_empty() {
        let empty = Paragraph::new("Nothing on the list yet.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let selected = focused.then_some(app.selected);
    let (lines, starts) = build_lines(items, &app.config, selected);

    // Keep the selected row in view
    let height = inner.height as usize;
    let cursor_end = starts.get(app.selected).map_or(0, |s| s + ROW_HEIGHT);
    let scroll = cursor_end.saturating_sub(height);

    let paragraph = Paragraph::new(lines).scroll((scroll as u16, 0));
    frame.render_widget(paragraph, inner);
}

/// Render rows to lines. Also returns the first line index of each row.
fn build_lines(
    items: &[ShoppingItem],
    config: &Config,
    selected: Option<usize>,
) -> (Vec<Line<'static>>, Vec<usize>) {
    let mut lines = Vec::new();
    let mut starts = Vec::with_capacity(items.len());

    for (idx, item) in items.iter().enumerate() {
        starts.push(lines.len());

        let mut style = Style::default();
        if item.checked {
            style = style.fg(Color::Green);
        }
        if selected == Some(idx) {
            style = style.bg(Color::Rgb(40, 40, 40)).bold();
        }

        let checkbox = if item.checked { "[x] " } else { "[ ] " };
        lines.push(Line::styled(format!("{}{}", checkbox, item.name), style));
        lines.push(Line::styled(
            format!("    Quantity: {}", item.quantity),
            style.fg(Color::DarkGray),
        ));

        for _ in 0..config.gap_after(idx + 1) {
            lines.push(Line::raw(""));
        }
    }

    (lines, starts)
}
