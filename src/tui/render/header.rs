use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// "Você tem N tarefas", singular for one
pub fn task_count_label(count: usize) -> String {
    if count == 1 {
        "Você tem 1 tarefa".to_string()
    } else {
        format!("Você tem {} tarefas", count)
    }
}

/// Render the header: app name and task count, with a separator line below
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let bg = app.theme.background;
    let width = area.width as usize;

    let brand = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            "to.",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "do",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    let count = format!("{} ", task_count_label(app.tasks.len()));

    let brand_width: usize = brand.iter().map(|s| unicode::display_width(&s.content)).sum();
    let count_width = unicode::display_width(&count);

    let mut spans = brand;
    if brand_width + count_width < width {
        spans.push(Span::styled(
            " ".repeat(width - brand_width - count_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(count, Style::default().fg(app.theme.text).bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        chunks[0],
    );

    let separator = Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    );
    frame.render_widget(Paragraph::new(Line::from(separator)), chunks[1]);
}
