use serde::{Deserialize, Serialize};

/// Text used by the "Add a note" quick action
pub const NOTE_TEXT: &str = "Reflect later";

/// A checklist item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Creation timestamp in milliseconds, bumped if needed to stay unique
    pub id: u64,
    pub text: String,
    pub done: bool,
}

/// Ordered task list. New tasks are prepended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    last_id: u64,
}

impl TaskList {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from persisted tasks, remembering the highest id seen
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let last_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        Self { tasks, last_id }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Next unique id: the current time in ms, or one past the last id if
    /// the clock has not moved on. A loaded id at `u64::MAX` leaves no room
    /// above it, so the search falls back to the first free id from now.
    fn next_id(&mut self) -> u64 {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        let mut id = match self.last_id.checked_add(1) {
            Some(next) => now.max(next),
            None => now,
        };
        while self.tasks.iter().any(|t| t.id == id) {
            id = id.wrapping_add(1);
        }
        self.last_id = self.last_id.max(id);
        id
    }

    /// Prepend a task with trimmed text. Blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id();
        self.tasks.insert(
            0,
            Task {
                id,
                text: text.to_string(),
                done: false,
            },
        );
        Some(id)
    }

    /// Append a task verbatim at the end of the list
    pub fn append(&mut self, text: &str) -> u64 {
        let id = self.next_id();
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            done: false,
        });
        id
    }

    /// Flip `done`. Returns false if no task has this id.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Replace the text verbatim: no trimming, empty text allowed
    pub fn edit(&mut self, id: u64, text: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Done / total, 0 for an empty list
    pub fn completion_ratio(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        self.done_count() as f64 / self.tasks.len() as f64
    }

    /// Completion ratio as a whole percentage (rounded)
    pub fn completion_percent(&self) -> u16 {
        (self.completion_ratio() * 100.0).round() as u16
    }
}
