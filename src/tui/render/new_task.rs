use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};

pub const PLACEHOLDER: &str = "Adicionar novo todo...";

/// Render the new-task input box
pub fn render_new_task(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Compose;
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);

    let line = if app.new_task.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from(Span::styled(
            app.new_task.text().to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    };

    // Scroll horizontally to keep the caret inside the box
    let caret_col = app.new_task.cursor_col();
    let inner_w = inner.width as usize;
    let h_scroll = caret_col.saturating_sub(inner_w.saturating_sub(1));

    let paragraph = Paragraph::new(line)
        .block(block)
        .scroll((0, h_scroll as u16));
    frame.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        let x = inner.x + (caret_col - h_scroll) as u16;
        frame.set_cursor_position((x, inner.y));
    }
}
