use std::fmt;
use std::rc::Rc;

/// Identifier of a task, unique within one list and never reassigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Title text, stored exactly as typed
    pub title: String,
    /// Completion flag
    pub done: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Task {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Copy of this task with `done` flipped
    pub fn toggled(&self) -> Self {
        Task {
            done: !self.done,
            ..self.clone()
        }
    }

    /// Copy of this task with a new title
    pub fn retitled(&self, title: &str) -> Self {
        Task {
            title: title.to_string(),
            ..self.clone()
        }
    }
}

/// Immutable snapshot of the task collection, in insertion order.
///
/// Cloning is cheap: snapshots share their storage, and every mutation of
/// the store builds a fresh one instead of touching the old.
pub type TaskList = Rc<[Task]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_not_done() {
        let task = Task::new(TaskId(7), "Buy milk");
        assert_eq!(task.id, TaskId(7));
        assert_eq!(task.title, "Buy milk");
        assert!(!task.done);
    }

    #[test]
    fn test_toggled_leaves_original_untouched() {
        let task = Task::new(TaskId(1), "Walk dog");
        let flipped = task.toggled();
        assert!(flipped.done);
        assert!(!task.done);
        assert_eq!(flipped.toggled(), task);
    }

    #[test]
    fn test_retitled_keeps_id_and_state() {
        let mut task = Task::new(TaskId(3), "Walk dog");
        task.done = true;
        let renamed = task.retitled("Walk the dog");
        assert_eq!(renamed.id, TaskId(3));
        assert!(renamed.done);
        assert_eq!(renamed.title, "Walk the dog");
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId(1700000000000).to_string(), "1700000000000");
    }
}
