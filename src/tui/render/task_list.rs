use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

use crate::tui::app::App;
use crate::tui::row::TaskRow;
use crate::tui::theme::Theme;
use crate::util::unicode;

/// Cells taken by the leading `" [x] "`
const MARKER_WIDTH: usize = 5;
/// Cells taken by the trailing `" ✎ │ ⌫ "`
const CONTROLS_WIDTH: usize = 7;

const EDIT_ICON: &str = "\u{270E}";
const CANCEL_ICON: &str = "\u{2715}";
const DELETE_ICON: &str = "\u{232B}";

fn marker(done: bool) -> &'static str {
    if done { "[x]" } else { "[ ]" }
}

/// Render the task rows
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible_height = area.height as usize;
    if visible_height == 0 {
        return;
    }

    if app.rows.is_empty() {
        let empty = Paragraph::new(" Nenhuma tarefa por aqui")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor row on screen
    let cursor = app.cursor.min(app.rows.len() - 1);
    app.cursor = cursor;
    if cursor < app.scroll_offset {
        app.scroll_offset = cursor;
    } else if cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = cursor + 1 - visible_height;
    }

    let scroll = app.scroll_offset;
    let end = app.rows.len().min(scroll + visible_height);
    let width = area.width as usize;
    let title_width = width.saturating_sub(MARKER_WIDTH + CONTROLS_WIDTH);

    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);
    let mut caret: Option<(u16, u16)> = None;

    for (index, row) in app.rows[scroll..end].iter().enumerate().map(|(i, r)| (i + scroll, r)) {
        let done = app.is_done(row.id());
        let is_cursor = index == cursor;
        let (line, caret_col) = row_line(&app.theme, row, done, is_cursor, title_width);
        if let Some(col) = caret_col {
            caret = Some((
                area.x + (MARKER_WIDTH + col) as u16,
                area.y + (index - scroll) as u16,
            ));
        }
        lines.push(line);
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);

    if let Some(pos) = caret {
        frame.set_cursor_position(pos);
    }
}

/// Build one row. Returns the caret column within the title area when the
/// row holds input focus.
fn row_line(
    theme: &Theme,
    row: &TaskRow,
    done: bool,
    is_cursor: bool,
    title_width: usize,
) -> (Line<'static>, Option<usize>) {
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(bg);

    let marker_style = if done {
        base.fg(theme.done).add_modifier(Modifier::BOLD)
    } else {
        base.fg(theme.dim)
    };
    // Done styling holds in both modes; editing only adds emphasis
    let mut title_style = if done {
        base.fg(theme.done).add_modifier(Modifier::CROSSED_OUT)
    } else if row.is_editing() {
        base.fg(theme.text_bright)
    } else {
        base.fg(theme.text)
    };
    if row.is_editing() {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let mut spans = vec![
        Span::styled(" ", base),
        Span::styled(marker(done), marker_style),
        Span::styled(" ", base),
    ];

    let mut caret_col = None;
    let title = if row.is_focused() {
        // Editing: show the window of the draft around the caret
        let input = row.draft_input();
        let col = input.cursor_col();
        let h_scroll = col.saturating_sub(title_width.saturating_sub(1));
        caret_col = Some(col - h_scroll);
        visible_window(input.text(), h_scroll, title_width)
    } else {
        unicode::truncate_to_width(row.draft(), title_width)
    };
    let title_cells = unicode::display_width(&title);
    spans.push(Span::styled(title, title_style));
    if title_cells < title_width {
        spans.push(Span::styled(" ".repeat(title_width - title_cells), base));
    }

    let (edit_icon, delete_style) = if row.is_editing() {
        (CANCEL_ICON, base.fg(theme.dim).add_modifier(Modifier::DIM))
    } else {
        (EDIT_ICON, base.fg(theme.text))
    };
    spans.push(Span::styled(" ", base));
    spans.push(Span::styled(edit_icon, base.fg(theme.dim)));
    spans.push(Span::styled(" ", base));
    spans.push(Span::styled("\u{2502}", base.fg(theme.dim)));
    spans.push(Span::styled(" ", base));
    spans.push(Span::styled(DELETE_ICON, delete_style));
    spans.push(Span::styled(" ", base));

    (Line::from(spans), caret_col)
}

/// Slice of `text` starting `skip` cells in, at most `width` cells wide.
/// A wide character cut by `skip` leaves blanks for its visible half so the
/// window still starts exactly `skip` cells in.
fn visible_window(text: &str, skip: usize, width: usize) -> String {
    let mut col = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        let end = col + w;
        if col < skip && end > skip {
            out.push_str(&" ".repeat((end - skip).min(width)));
        } else if col >= skip {
            if end > skip + width {
                break;
            }
            out.push(c);
        }
        col = end;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskId;
    use crate::ops::ScriptedDialogs;
    use crate::tui::render::test_helpers::*;
    use crate::tui::row::Intent;
    use pretty_assertions::assert_eq;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Position;

    #[test]
    fn empty_list() {
        let mut app = app_with_titles(&[]);
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(output, " Nenhuma tarefa por aqui");
    }

    #[test]
    fn rows_with_done_marker() {
        let mut app = app_with_titles(&["Buy milk", "Walk dog"]);
        let mut dialogs = ScriptedDialogs::new();
        app.apply(Intent::Toggle(TaskId(1)), &mut dialogs);
        let output = render_to_string(30, 2, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(
            output,
            " [x] Buy milk           \u{270E} \u{2502} \u{232B}\n [ ] Walk dog           \u{270E} \u{2502} \u{232B}"
        );
    }

    #[test]
    fn editing_row_shows_cancel_and_draft() {
        let mut app = app_with_titles(&["Walk dog"]);
        app.rows[0].start_edit();
        app.rows[0].draft_mut().unwrap().insert_str("!");
        let output = render_to_string(30, 1, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert!(output.contains("[ ] Walk dog!"));
        assert!(output.contains("\u{2715}"));
        assert!(!output.contains("\u{270E}"));
    }

    #[test]
    fn long_titles_are_truncated() {
        let mut app = app_with_titles(&["Renew the passport before the trip"]);
        let output = render_to_string(30, 1, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert!(output.contains("Renew the passpor\u{2026}"));
    }

    #[test]
    fn scroll_follows_cursor() {
        let mut app = app_with_titles(&["a", "b", "c", "d", "e"]);
        app.cursor = 4;
        let output = render_to_string(30, 2, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(app.scroll_offset, 3);
        assert!(output.lines().next().unwrap().contains("[ ] d"));
        assert!(output.lines().nth(1).unwrap().contains("[ ] e"));
    }

    #[test]
    fn visible_window_skips_cells() {
        assert_eq!(visible_window("abcdef", 2, 3), "cde");
        assert_eq!(visible_window("牛乳を", 2, 3), "乳");
        assert_eq!(visible_window("ab", 0, 10), "ab");
    }

    #[test]
    fn visible_window_pads_cut_wide_char() {
        // 買 spans cells 6-7; skipping 7 leaves its right half blank
        assert_eq!(visible_window("牛乳を買う", 7, 4), " う");
        assert_eq!(visible_window("牛乳", 1, 3), " 乳");
        assert_eq!(visible_window("牛", 1, 0), "");
    }

    /// Render the list into a buffer so cell styles can be checked
    fn render_buffer(app: &mut App, w: u16, h: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_task_list(frame, app, area);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    // 30 wide: title starts at x=5, delete control sits at x=28
    const TITLE_X: u16 = 5;
    const DELETE_X: u16 = 28;

    #[test]
    fn done_title_is_crossed_out_in_both_modes() {
        let mut app = app_with_titles(&["Buy milk"]);
        let mut dialogs = ScriptedDialogs::new();
        app.apply(Intent::Toggle(TaskId(1)), &mut dialogs);
        let done = app.theme.done;

        let buf = render_buffer(&mut app, 30, 1);
        let title = &buf[(TITLE_X, 0)];
        assert_eq!(title.symbol(), "B");
        assert!(title.modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(title.fg, done);

        app.rows[0].start_edit();
        let buf = render_buffer(&mut app, 30, 1);
        let title = &buf[(TITLE_X, 0)];
        assert_eq!(title.symbol(), "B");
        assert!(title.modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(title.fg, done);
    }

    #[test]
    fn toggling_while_editing_updates_title_style() {
        let mut app = app_with_titles(&["Walk dog"]);
        let mut dialogs = ScriptedDialogs::new();
        app.rows[0].start_edit();

        let buf = render_buffer(&mut app, 30, 1);
        assert!(!buf[(TITLE_X, 0)].modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(buf[(TITLE_X, 0)].fg, app.theme.text_bright);

        app.apply(Intent::Toggle(TaskId(1)), &mut dialogs);
        assert!(app.rows[0].is_editing());
        let buf = render_buffer(&mut app, 30, 1);
        assert!(buf[(TITLE_X, 0)].modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(buf[(TITLE_X, 0)].fg, app.theme.done);
    }

    #[test]
    fn delete_control_dims_while_editing() {
        let mut app = app_with_titles(&["Buy milk"]);

        let buf = render_buffer(&mut app, 30, 1);
        let delete = &buf[(DELETE_X, 0)];
        assert_eq!(delete.symbol(), DELETE_ICON);
        assert!(!delete.modifier.contains(Modifier::DIM));
        assert_eq!(delete.fg, app.theme.text);

        app.rows[0].start_edit();
        let buf = render_buffer(&mut app, 30, 1);
        let delete = &buf[(DELETE_X, 0)];
        assert_eq!(delete.symbol(), DELETE_ICON);
        assert!(delete.modifier.contains(Modifier::DIM));
        assert_eq!(delete.fg, app.theme.dim);
    }

    #[test]
    fn caret_lines_up_with_scrolled_wide_text() {
        // 16 wide leaves a 4-cell title area
        let mut app = app_with_titles(&["牛乳を買う"]);
        app.rows[0].start_edit();
        let mut terminal = Terminal::new(TestBackend::new(16, 1)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_task_list(frame, &mut app, area);
            })
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        assert_eq!(buf[(TITLE_X, 0)].symbol(), " ");
        assert_eq!(buf[(TITLE_X + 1, 0)].symbol(), "う");
        assert_eq!(
            terminal.get_cursor_position().unwrap(),
            Position::new(TITLE_X + 3, 0)
        );
    }
}
