use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::Dialogs;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent, dialogs: &mut dyn Dialogs) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => move_cursor(app, -1),
        (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => move_cursor(app, 1),
        (_, KeyCode::Home) | (KeyModifiers::NONE, KeyCode::Char('g')) => {
            app.cursor = 0;
        }
        (_, KeyCode::End) | (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('G')) => {
            app.cursor = app.rows.len().saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x')) => {
            if let Some(intent) = app.cursor_row().map(|row| row.press_marker()) {
                app.apply(intent, dialogs);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('e')) => {
            if let Some(row) = app.cursor_row_mut() {
                row.start_edit();
                app.mode = Mode::Edit;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('d')) | (_, KeyCode::Delete) => {
            if let Some(intent) = app.cursor_row().and_then(|row| row.press_delete()) {
                app.apply(intent, dialogs);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('a' | 'i')) | (_, KeyCode::Tab) => {
            app.mode = Mode::Compose;
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: i32) {
    if app.rows.is_empty() {
        app.cursor = 0;
        return;
    }
    let last = app.rows.len() - 1;
    app.cursor = if delta < 0 {
        app.cursor.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        (app.cursor + delta as usize).min(last)
    };
}
