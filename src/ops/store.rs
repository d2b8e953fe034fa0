use std::fmt;
use std::rc::Rc;

use tracing::{debug, info};

use crate::model::{Task, TaskId, TaskList};
use crate::ops::dialog::{Dialogs, Prompt};
use crate::ops::ids::{ClockIds, IdSource};

/// Result of [`TaskStore::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Appended with this id
    Added(TaskId),
    /// Rejected: a task with the same title already exists
    Duplicate,
}

/// Handle returned by [`TaskStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Observer = Box<dyn FnMut(&TaskList)>;

/// Owner of the task list.
///
/// Every mutation swaps in a new [`TaskList`] snapshot built from the old
/// one. Snapshots already handed out never change. Operations on an id that
/// is not in the list leave it as it is and report `false`.
pub struct TaskStore {
    tasks: TaskList,
    ids: Box<dyn IdSource>,
    observers: Vec<(Subscription, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore::new()
    }
}

impl TaskStore {
    /// Empty store handing out clock-based ids
    pub fn new() -> Self {
        TaskStore::with_ids(Box::new(ClockIds::new()))
    }

    pub fn with_ids(ids: Box<dyn IdSource>) -> Self {
        TaskStore {
            tasks: Rc::from(Vec::new()),
            ids,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current snapshot
    pub fn tasks(&self) -> TaskList {
        Rc::clone(&self.tasks)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Register `observer` to be called with the new snapshot after every
    /// mutation that changed the list.
    pub fn subscribe(&mut self, observer: impl FnMut(&TaskList) + 'static) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((subscription, Box::new(observer)));
        subscription
    }

    /// Drop an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(s, _)| *s != subscription);
        self.observers.len() != before
    }

    /// Append a new task titled `title`.
    ///
    /// The title is compared and stored as given (no trimming or case
    /// folding). An exact match with an existing title is rejected with an
    /// alert and the list stays as it is.
    pub fn add(&mut self, title: &str, dialogs: &mut dyn Dialogs) -> AddOutcome {
        if self.tasks.iter().any(|t| t.title == title) {
            info!(title, "add rejected: duplicate title");
            dialogs.alert(&Prompt::duplicate_title());
            return AddOutcome::Duplicate;
        }

        let id = self.ids.next_id();
        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .cloned()
            .chain(std::iter::once(Task::new(id, title)))
            .collect();
        debug!(%id, title, "task added");
        self.replace(tasks);
        AddOutcome::Added(id)
    }

    /// Flip the completion flag of task `id`
    pub fn toggle(&mut self, id: TaskId) -> bool {
        if self.find(id).is_none() {
            debug!(%id, "toggle ignored: no such task");
            return false;
        }
        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .map(|t| if t.id == id { t.toggled() } else { t.clone() })
            .collect();
        debug!(%id, "task toggled");
        self.replace(tasks);
        true
    }

    /// Replace the title of task `id`. Duplicate titles are allowed here.
    pub fn edit(&mut self, id: TaskId, new_title: &str) -> bool {
        if self.find(id).is_none() {
            debug!(%id, "edit ignored: no such task");
            return false;
        }
        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .map(|t| {
                if t.id == id {
                    t.retitled(new_title)
                } else {
                    t.clone()
                }
            })
            .collect();
        debug!(%id, title = new_title, "task edited");
        self.replace(tasks);
        true
    }

    /// Ask for confirmation, then remove task `id`.
    ///
    /// The question is asked before looking the task up, so an unknown id
    /// still prompts; answering "Sim" then changes nothing.
    pub fn remove(&mut self, id: TaskId, dialogs: &mut dyn Dialogs) -> bool {
        let prompt = Prompt::confirm_remove();
        let choice = dialogs.confirm(&prompt);
        if !prompt.is_destructive(choice) {
            info!(%id, "remove declined");
            return false;
        }
        if self.find(id).is_none() {
            debug!(%id, "remove ignored: no such task");
            return false;
        }
        let tasks: Vec<Task> = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        debug!(%id, "task removed");
        self.replace(tasks);
        true
    }

    fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = Rc::from(tasks);
        for (_, observer) in &mut self.observers {
            observer(&self.tasks);
        }
    }
}
