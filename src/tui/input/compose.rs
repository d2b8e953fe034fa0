use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::Dialogs;
use crate::tui::app::{App, Mode};

use super::edit_line;

/// Typing into the new-task line
pub(super) fn handle_compose(app: &mut App, key: KeyEvent, dialogs: &mut dyn Dialogs) {
    match key.code {
        KeyCode::Enter => app.submit_new_task(dialogs),
        // Leave the line, keeping whatever was typed
        KeyCode::Esc | KeyCode::Tab => app.mode = Mode::Navigate,
        _ => {
            edit_line(&mut app.new_task, key);
        }
    }
}
