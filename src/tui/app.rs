use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::model::{Config, TaskId, TaskList, UiConfig};
use crate::ops::{AddOutcome, Dialogs, TaskStore};

use super::input;
use super::line_input::LineInput;
use super::modal::ModalDialogs;
use super::render;
use super::row::{Intent, TaskRow};
use super::theme::Theme;

pub type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving through the list
    Navigate,
    /// Typing a new task title
    Compose,
    /// The row under the cursor is editing its title
    Edit,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    /// Latest snapshot received from the store
    pub tasks: TaskList,
    /// One presenter per task, same order as `tasks`
    pub rows: Vec<TaskRow>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor index into `rows`
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// New-task input line
    pub new_task: LineInput,
    /// One-shot message for the status row, cleared on the next key
    pub status_message: Option<String>,
    /// Snapshot delivered by the store observer, not yet applied
    pending: Rc<RefCell<Option<TaskList>>>,
}

impl App {
    pub fn new(mut store: TaskStore, ui: &UiConfig) -> Self {
        let pending = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&pending);
        store.subscribe(move |tasks: &TaskList| {
            *sink.borrow_mut() = Some(Rc::clone(tasks));
        });

        let tasks = store.tasks();
        let rows = tasks.iter().map(TaskRow::new).collect();

        App {
            store,
            tasks,
            rows,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(ui),
            show_key_hints: ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            new_task: LineInput::default(),
            status_message: None,
            pending,
        }
    }

    /// Apply the snapshot the store last published, if any.
    ///
    /// Rows are matched by task id so a row keeps its draft and mode across
    /// snapshots; rows whose task is gone are dropped, new tasks get a
    /// freshly mounted row.
    pub fn sync_rows(&mut self) {
        let Some(tasks) = self.pending.borrow_mut().take() else {
            return;
        };
        let mut old: Vec<TaskRow> = std::mem::take(&mut self.rows);
        self.rows = tasks
            .iter()
            .map(|task| match old.iter().position(|r| r.id() == task.id) {
                Some(i) => old.swap_remove(i),
                None => TaskRow::new(task),
            })
            .collect();
        self.tasks = tasks;

        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
        if self.mode == Mode::Edit && self.editing_index().is_none() {
            self.mode = Mode::Navigate;
        }
    }

    /// Row under the cursor
    pub fn cursor_row(&self) -> Option<&TaskRow> {
        self.rows.get(self.cursor)
    }

    pub fn cursor_row_mut(&mut self) -> Option<&mut TaskRow> {
        self.rows.get_mut(self.cursor)
    }

    /// Index of the row currently editing
    pub fn editing_index(&self) -> Option<usize> {
        self.rows.iter().position(|r| r.is_editing())
    }

    /// Title the store holds for `id`
    pub fn stored_title(&self, id: TaskId) -> Option<&str> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.title.as_str())
    }

    /// Whether task `id` is completed
    pub fn is_done(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id && t.done)
    }

    /// Hand a row intent to the store
    pub fn apply(&mut self, intent: Intent, dialogs: &mut dyn Dialogs) {
        debug!(?intent, "applying intent");
        match intent {
            Intent::Toggle(id) => {
                self.store.toggle(id);
            }
            Intent::Edit { id, title } => {
                self.store.edit(id, &title);
            }
            Intent::Remove(id) => {
                if self.store.remove(id, dialogs) {
                    self.status_message = Some("Tarefa removida".to_string());
                }
            }
        }
        self.sync_rows();
    }

    /// Submit the new-task line. Empty input is ignored; otherwise the line
    /// is cleared whether or not the store accepted the title.
    pub fn submit_new_task(&mut self, dialogs: &mut dyn Dialogs) {
        if self.new_task.is_empty() {
            return;
        }
        let title = self.new_task.take();
        if let AddOutcome::Added(_) = self.store.add(&title, dialogs) {
            self.sync_rows();
            self.cursor = self.rows.len().saturating_sub(1);
        }
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(TaskStore::new(), &config.ui);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    info!("session started");
    let result = run_event_loop(&mut terminal, &mut app);
    info!(tasks = app.tasks.len(), "session ended");

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(terminal: &mut Term, app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let backdrop = terminal
            .draw(|frame| render::render(frame, app))?
            .buffer
            .clone();

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let mut dialogs = ModalDialogs::new(terminal, backdrop, app.theme.clone());
                input::handle_key(app, key, &mut dialogs);
            }
            Event::Paste(text) => input::handle_paste(app, &text),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
