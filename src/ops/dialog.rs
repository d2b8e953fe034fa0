//! Blocking user dialogs.
//!
//! The store never talks to a terminal. It asks a [`Dialogs`] implementation
//! to show an alert or a confirmation and gets the answer back synchronously.

/// How a dialog button should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Default,
    /// Non-destructive way out
    Cancel,
    /// Confirms something that cannot be taken back
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub style: ButtonStyle,
}

impl Button {
    pub fn new(label: impl Into<String>, style: ButtonStyle) -> Self {
        Button {
            label: label.into(),
            style,
        }
    }
}

/// Content of a modal dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub message: String,
    /// Buttons in display order. Never empty.
    pub buttons: Vec<Button>,
}

/// Index into [`Prompt::buttons`] of the button the user picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice(pub usize);

pub const DUPLICATE_TITLE: &str = "Task já cadastrada";
pub const DUPLICATE_MESSAGE: &str = "Você não pode cadastrar uma task com o mesmo nome";
pub const REMOVE_TITLE: &str = "Remover item";
pub const REMOVE_MESSAGE: &str = "Tem certeza que você deseja remover esse item?";
pub const REMOVE_NO: &str = "Não";
pub const REMOVE_YES: &str = "Sim";
pub const ALERT_OK: &str = "OK";

impl Prompt {
    /// Single-button notice
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Prompt {
            title: title.into(),
            message: message.into(),
            buttons: vec![Button::new(ALERT_OK, ButtonStyle::Default)],
        }
    }

    /// Notice shown when adding a title that is already in the list
    pub fn duplicate_title() -> Self {
        Prompt::alert(DUPLICATE_TITLE, DUPLICATE_MESSAGE)
    }

    /// Yes/no question asked before removing a task.
    /// Button 0 is "Não" (cancel), button 1 is "Sim" (destructive).
    pub fn confirm_remove() -> Self {
        Prompt {
            title: REMOVE_TITLE.to_string(),
            message: REMOVE_MESSAGE.to_string(),
            buttons: vec![
                Button::new(REMOVE_NO, ButtonStyle::Cancel),
                Button::new(REMOVE_YES, ButtonStyle::Destructive),
            ],
        }
    }

    /// Whether `choice` picked a destructive button
    pub fn is_destructive(&self, choice: Choice) -> bool {
        self.buttons
            .get(choice.0)
            .is_some_and(|b| b.style == ButtonStyle::Destructive)
    }

    /// Index of the first cancel-style button, falling back to the first button
    pub fn cancel_index(&self) -> usize {
        self.buttons
            .iter()
            .position(|b| b.style == ButtonStyle::Cancel)
            .unwrap_or(0)
    }
}

/// Modal dialogs presented to the user.
///
/// Both calls block until the user has answered; there is no way to leave
/// a dialog without picking one of its buttons.
pub trait Dialogs {
    /// Show a notice with a single acknowledgement button.
    fn alert(&mut self, prompt: &Prompt);

    /// Ask the user to pick one of `prompt.buttons`.
    fn confirm(&mut self, prompt: &Prompt) -> Choice;
}

/// Dialogs that answer from a prepared script. Used by tests and headless callers.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    /// Answers handed out to `confirm`, front first. When exhausted the
    /// cancel button is picked.
    pub answers: std::collections::VecDeque<Choice>,
    /// Every prompt shown, alerts included, in order
    pub shown: Vec<Prompt>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the next confirmation with the button labelled `label`
    pub fn answer(mut self, label: &str) -> Self {
        let index = Prompt::confirm_remove()
            .buttons
            .iter()
            .position(|b| b.label == label)
            .unwrap_or(0);
        self.answers.push_back(Choice(index));
        self
    }

    /// Number of alerts (single-button prompts) shown so far
    pub fn alerts(&self) -> usize {
        self.shown.iter().filter(|p| p.buttons.len() == 1).count()
    }
}

impl Dialogs for ScriptedDialogs {
    fn alert(&mut self, prompt: &Prompt) {
        self.shown.push(prompt.clone());
    }

    fn confirm(&mut self, prompt: &Prompt) -> Choice {
        self.shown.push(prompt.clone());
        match self.answers.pop_front() {
            Some(choice) if choice.0 < prompt.buttons.len() => choice,
            _ => Choice(prompt.cancel_index()),
        }
    }
}
