use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::Dialogs;
use crate::tui::app::{App, Mode};

use super::edit_line;

/// Editing the title of the row under the cursor
pub(super) fn handle_edit(app: &mut App, key: KeyEvent, dialogs: &mut dyn Dialogs) {
    let Some(index) = app.editing_index() else {
        app.mode = Mode::Navigate;
        return;
    };

    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => {
            if let Some(intent) = app.rows[index].commit() {
                app.mode = Mode::Navigate;
                app.apply(intent, dialogs);
            }
        }
        (_, KeyCode::Esc) => {
            let id = app.rows[index].id();
            let title = app.stored_title(id).unwrap_or_default().to_string();
            app.rows[index].cancel(&title);
            app.mode = Mode::Navigate;
        }
        // Marker stays live while editing
        (KeyModifiers::CONTROL, KeyCode::Char('t')) => {
            let intent = app.rows[index].press_marker();
            app.apply(intent, dialogs);
        }
        _ => {
            if let Some(draft) = app.rows[index].draft_mut() {
                edit_line(draft, key);
            }
        }
    }
}
