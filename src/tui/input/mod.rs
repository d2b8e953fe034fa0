mod compose;
pub mod dialog;
mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::Dialogs;

use super::app::{App, Mode};
use super::line_input::LineInput;

use compose::handle_compose;
use edit::handle_edit;
use navigate::handle_navigate;

/// Handle a key event in the current mode.
///
/// `dialogs` answers the confirmations and alerts the store raises while
/// the key is being handled.
pub fn handle_key(app: &mut App, key: KeyEvent, dialogs: &mut dyn Dialogs) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key, dialogs),
        Mode::Compose => handle_compose(app, key, dialogs),
        Mode::Edit => handle_edit(app, key, dialogs),
    }
}

/// Handle a bracketed paste. Goes to whichever line has focus; ignored while navigating.
pub fn handle_paste(app: &mut App, text: &str) {
    match app.mode {
        Mode::Navigate => {}
        Mode::Compose => app.new_task.insert_str(text),
        Mode::Edit => {
            if let Some(draft) = app
                .editing_index()
                .and_then(|i| app.rows.get_mut(i))
                .and_then(|row| row.draft_mut())
            {
                draft.insert_str(text);
            }
        }
    }
}

/// Kitty protocol sends `Char(lowercase) + SHIFT` for capitals; fold it back
/// into `Char(UPPERCASE)` so bindings like `G` match on every terminal.
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}

/// Shared line-editing keys. Returns false if the key is not a text key.
fn edit_line(input: &mut LineInput, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('w')) | (KeyModifiers::ALT, KeyCode::Backspace) => {
            input.delete_word_back()
        }
        (KeyModifiers::CONTROL, KeyCode::Char('a')) | (_, KeyCode::Home) => input.move_home(),
        (KeyModifiers::CONTROL, KeyCode::Char('e')) | (_, KeyCode::End) => input.move_end(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => input.insert_char(c),
        (_, KeyCode::Backspace) => input.backspace(),
        (_, KeyCode::Delete) => input.delete(),
        (_, KeyCode::Left) => input.move_left(),
        (_, KeyCode::Right) => input.move_right(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TaskId, UiConfig};
    use crate::ops::{ScriptedDialogs, SequentialIds, TaskStore};
    use pretty_assertions::assert_eq;

    pub(super) fn app_with(titles: &[&str]) -> App {
        let mut store = TaskStore::with_ids(Box::new(SequentialIds::default()));
        let mut dialogs = ScriptedDialogs::new();
        for title in titles {
            store.add(title, &mut dialogs);
        }
        App::new(store, &UiConfig::default())
    }

    pub(super) fn press(app: &mut App, code: KeyCode, dialogs: &mut ScriptedDialogs) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), dialogs);
    }

    pub(super) fn type_text(app: &mut App, text: &str, dialogs: &mut ScriptedDialogs) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), dialogs);
        }
    }

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let mut app = app_with(&["Buy milk"]);
        app.mode = Mode::Compose;
        let mut dialogs = ScriptedDialogs::new();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut dialogs,
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_key_clears_status_message() {
        let mut app = app_with(&["Buy milk"]);
        app.status_message = Some("Tarefa removida".into());
        let mut dialogs = ScriptedDialogs::new();
        press(&mut app, KeyCode::Down, &mut dialogs);
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn test_paste_into_focused_line() {
        let mut app = app_with(&["Buy milk"]);
        handle_paste(&mut app, "ignored");
        assert!(app.new_task.is_empty());

        app.mode = Mode::Compose;
        handle_paste(&mut app, "Walk\ndog");
        assert_eq!(app.new_task.text(), "Walk dog");

        app.mode = Mode::Edit;
        app.rows[0].start_edit();
        handle_paste(&mut app, " now");
        assert_eq!(app.rows[0].draft(), "Buy milk now");
        assert_eq!(app.stored_title(TaskId(1)), Some("Buy milk"));
    }

    #[test]
    fn test_normalize_shifted_letter() {
        let key = normalize_key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::SHIFT));
        assert_eq!(key.code, KeyCode::Char('G'));
        let key = normalize_key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE));
        assert_eq!(key.code, KeyCode::Char('g'));
    }

    #[test]
    fn test_edit_line_keys() {
        let mut input = LineInput::default();
        for c in "walk dog".chars() {
            assert!(edit_line(&mut input, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
        }
        edit_line(&mut input, KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert_eq!(input.text(), "walk ");
        edit_line(&mut input, KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        edit_line(&mut input, KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT));
        assert_eq!(input.text(), "Wwalk ");
        assert!(!edit_line(&mut input, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!edit_line(&mut input, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
    }
}
