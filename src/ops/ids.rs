use chrono::Utc;

use crate::model::TaskId;

/// Source of fresh task ids. Every id handed out is greater than the last.
pub trait IdSource {
    fn next_id(&mut self) -> TaskId;
}

/// Ids taken from the wall clock (milliseconds since the Unix epoch).
///
/// Two adds within the same millisecond, or a clock that steps backwards,
/// get `last + 1` instead of a repeated value.
#[derive(Debug, Default)]
pub struct ClockIds {
    last: Option<i64>,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue(&mut self, now_millis: i64) -> TaskId {
        let id = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(id);
        TaskId(id)
    }
}

impl IdSource for ClockIds {
    fn next_id(&mut self) -> TaskId {
        self.issue(Utc::now().timestamp_millis())
    }
}

/// Ids counting up from a fixed start
#[derive(Debug)]
pub struct SequentialIds {
    next: i64,
}

impl SequentialIds {
    pub fn starting_at(start: i64) -> Self {
        SequentialIds { next: start }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        SequentialIds::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        id
    }
}
