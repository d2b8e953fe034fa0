use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Key hints for the current mode
pub fn key_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "a nova  espaço concluir  e editar  d remover  q sair",
        Mode::Compose => "Enter adicionar  Esc lista",
        Mode::Edit => "Enter salvar  Esc cancelar  ^T concluir",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(ref message) = app.status_message {
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    } else if app.show_key_hints {
        // Right-aligned, dimmed
        let hint = format!("{} ", key_hints(app.mode));
        let hint_width = unicode::display_width(&hint);
        let padding = width.saturating_sub(hint_width);
        Line::from(vec![
            Span::styled(" ".repeat(padding), Style::default().bg(bg)),
            Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)),
        ])
    } else {
        Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn hints_follow_mode() {
        let mut app = app_with_titles(&[]);
        app.mode = Mode::Edit;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.ends_with("Esc cancelar  ^T concluir"));
    }

    #[test]
    fn hints_end_one_cell_from_the_edge() {
        let app = app_with_titles(&[]);
        let output = render_to_string(60, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.ends_with("q sair"));
        assert_eq!(unicode::display_width(&output), 59);
    }

    #[test]
    fn message_replaces_hints() {
        let mut app = app_with_titles(&[]);
        app.status_message = Some("Tarefa removida".into());
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, " Tarefa removida");
    }

    #[test]
    fn hints_can_be_turned_off() {
        let mut app = app_with_titles(&[]);
        app.show_key_hints = false;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, "");
    }
}
