use crossterm::event::{self, Event, KeyEventKind};
use ratatui::buffer::Buffer;
use tracing::warn;

use crate::ops::{Choice, Dialogs, Prompt};

use super::app::Term;
use super::input::dialog::{DialogState, handle_dialog_key};
use super::render::dialog_popup::render_dialog;
use super::theme::Theme;

/// Dialogs drawn as a popup over the last rendered screen.
///
/// Each call runs its own read loop and returns only once the user has
/// picked a button, so the caller sees a plain synchronous answer.
pub struct ModalDialogs<'t> {
    terminal: &'t mut Term,
    /// Screen contents to show behind the popup
    backdrop: Buffer,
    theme: Theme,
}

impl<'t> ModalDialogs<'t> {
    pub fn new(terminal: &'t mut Term, backdrop: Buffer, theme: Theme) -> Self {
        ModalDialogs {
            terminal,
            backdrop,
            theme,
        }
    }

    fn run(&mut self, prompt: &Prompt) -> Choice {
        let mut state = DialogState::new(prompt);
        loop {
            if let Err(e) = self.draw(prompt, &state) {
                warn!(error = %e, "dialog draw failed; cancelling");
                return Choice(prompt.cancel_index());
            }
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(choice) = handle_dialog_key(&mut state, prompt, key) {
                        return choice;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "dialog input failed; cancelling");
                    return Choice(prompt.cancel_index());
                }
            }
        }
    }

    fn draw(&mut self, prompt: &Prompt, state: &DialogState) -> std::io::Result<()> {
        let ModalDialogs {
            terminal,
            backdrop,
            theme,
        } = self;
        terminal.draw(|frame| {
            let area = frame.area();
            let shared = area.intersection(backdrop.area);
            let buf = frame.buffer_mut();
            for y in shared.top()..shared.bottom() {
                for x in shared.left()..shared.right() {
                    if let (Some(dst), Some(src)) = (buf.cell_mut((x, y)), backdrop.cell((x, y))) {
                        *dst = src.clone();
                    }
                }
            }
            render_dialog(frame, theme, prompt, state, area);
        })?;
        Ok(())
    }
}

impl Dialogs for ModalDialogs<'_> {
    fn alert(&mut self, prompt: &Prompt) {
        self.run(prompt);
    }

    fn confirm(&mut self, prompt: &Prompt) -> Choice {
        self.run(prompt)
    }
}
