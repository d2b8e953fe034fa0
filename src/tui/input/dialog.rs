use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::{ButtonStyle, Choice, Prompt};

/// Button selection inside an open dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogState {
    pub selected: usize,
}

impl DialogState {
    /// Start on the non-destructive way out
    pub fn new(prompt: &Prompt) -> Self {
        DialogState {
            selected: prompt.cancel_index(),
        }
    }
}

/// Handle a key inside a dialog. Returns the choice once the user has made one.
pub fn handle_dialog_key(state: &mut DialogState, prompt: &Prompt, key: KeyEvent) -> Option<Choice> {
    let count = prompt.buttons.len().max(1);
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
            Some(Choice(state.selected))
        }
        (_, KeyCode::Esc) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            Some(Choice(prompt.cancel_index()))
        }
        (_, KeyCode::Right) | (_, KeyCode::Tab) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
            state.selected = (state.selected + 1) % count;
            None
        }
        (_, KeyCode::Left) | (_, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
            state.selected = (state.selected + count - 1) % count;
            None
        }
        (KeyModifiers::NONE, KeyCode::Char('s' | 'y')) => {
            button_with_style(prompt, ButtonStyle::Destructive).map(Choice)
        }
        (KeyModifiers::NONE, KeyCode::Char('n')) => Some(Choice(prompt.cancel_index())),
        _ => None,
    }
}

fn button_with_style(prompt: &Prompt, style: ButtonStyle) -> Option<usize> {
    prompt.buttons.iter().position(|b| b.style == style)
}
