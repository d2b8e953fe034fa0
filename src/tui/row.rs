//! Per-row presenter: the viewing/editing state machine of one task row.
//!
//! A row keeps its own draft of the title. The draft is taken from the task
//! when the row is created and afterwards only changes through typing while
//! editing or through an explicit cancel. The row never touches the store;
//! it returns [`Intent`]s for the caller to apply.

use crate::model::{Task, TaskId};

use super::line_input::LineInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    Viewing,
    Editing,
}

/// A change a row asks the store to make
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Toggle(TaskId),
    Edit { id: TaskId, title: String },
    Remove(TaskId),
}

#[derive(Debug, Clone)]
pub struct TaskRow {
    id: TaskId,
    mode: RowMode,
    draft: LineInput,
    /// Whether the title field holds input focus
    focused: bool,
}

impl TaskRow {
    /// Mount a row for `task`
    pub fn new(task: &Task) -> Self {
        TaskRow {
            id: task.id,
            mode: RowMode::Viewing,
            draft: LineInput::new(task.title.as_str()),
            focused: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Editing
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Title text shown by the row
    pub fn draft(&self) -> &str {
        self.draft.text()
    }

    pub fn draft_input(&self) -> &LineInput {
        &self.draft
    }

    /// Whether the delete control accepts presses
    pub fn delete_enabled(&self) -> bool {
        self.mode == RowMode::Viewing
    }

    /// Viewing → Editing, focusing the title field
    pub fn start_edit(&mut self) {
        if self.mode == RowMode::Editing {
            return;
        }
        self.mode = RowMode::Editing;
        self.focused = true;
        self.draft.move_end();
    }

    /// Editing → Viewing, asking the store to take the draft as the new title
    pub fn commit(&mut self) -> Option<Intent> {
        if self.mode != RowMode::Editing {
            return None;
        }
        self.mode = RowMode::Viewing;
        self.focused = false;
        Some(Intent::Edit {
            id: self.id,
            title: self.draft.text().to_string(),
        })
    }

    /// Editing → Viewing, throwing the draft away in favor of `title`
    pub fn cancel(&mut self, title: &str) {
        if self.mode != RowMode::Editing {
            return;
        }
        self.draft.set(title);
        self.mode = RowMode::Viewing;
        self.focused = false;
    }

    /// The completion marker works in both modes
    pub fn press_marker(&self) -> Intent {
        Intent::Toggle(self.id)
    }

    /// Delete request, or None while editing
    pub fn press_delete(&self) -> Option<Intent> {
        self.delete_enabled().then_some(Intent::Remove(self.id))
    }

    /// Mutable access to the draft, only while editing
    pub fn draft_mut(&mut self) -> Option<&mut LineInput> {
        match self.mode {
            RowMode::Editing => Some(&mut self.draft),
            RowMode::Viewing => None,
        }
    }
}
