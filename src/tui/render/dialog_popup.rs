use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ops::{ButtonStyle, Prompt};
use crate::tui::input::dialog::DialogState;
use crate::tui::theme::Theme;
use crate::util::unicode;

/// Render a modal dialog centered in `area`
pub fn render_dialog(
    frame: &mut Frame,
    theme: &Theme,
    prompt: &Prompt,
    state: &DialogState,
    area: Rect,
) {
    let bg = theme.background;
    let header_style = Style::default()
        .fg(theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(theme.text).bg(bg);

    let popup_w: u16 = 50.min(area.width.saturating_sub(2));
    let text_w = (popup_w as usize).saturating_sub(6).max(1);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(" {}", prompt.title),
        header_style,
    )));
    lines.push(Line::from(Span::styled("", text_style)));
    for chunk in wrap_words(&prompt.message, text_w) {
        lines.push(Line::from(Span::styled(format!("  {}", chunk), text_style)));
    }
    lines.push(Line::from(Span::styled("", text_style)));

    // Buttons, right-aligned
    let mut buttons: Vec<Span> = Vec::new();
    let mut buttons_w = 0;
    for (i, button) in prompt.buttons.iter().enumerate() {
        let label = format!("[ {} ]", button.label);
        buttons_w += unicode::display_width(&label) + 2;
        let fg = match button.style {
            ButtonStyle::Destructive => theme.red,
            ButtonStyle::Cancel | ButtonStyle::Default => theme.text,
        };
        let style = if i == state.selected {
            Style::default()
                .fg(fg)
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(fg).bg(bg)
        };
        buttons.push(Span::styled("  ", text_style));
        buttons.push(Span::styled(label, style));
    }
    let inner_w = (popup_w as usize).saturating_sub(2);
    let pad = inner_w.saturating_sub(buttons_w + 1);
    let mut button_line = vec![Span::styled(" ".repeat(pad), text_style)];
    button_line.extend(buttons);
    lines.push(Line::from(button_line));

    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));

    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let border_color = if prompt
        .buttons
        .iter()
        .any(|b| b.style == ButtonStyle::Destructive)
    {
        theme.red
    } else {
        theme.highlight
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

/// Greedy word wrap by display width. Words wider than `width` get a line
/// of their own.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            unicode::display_width(word)
        } else {
            unicode::display_width(&current) + 1 + unicode::display_width(word)
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
