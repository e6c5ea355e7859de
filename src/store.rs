//! The in-memory task store.
//!
//! The store owns the ordered task sequence and the operations that mutate
//! it. It does no I/O of its own; the `persist` module mirrors snapshots to
//! disk after mutations. Display order is insertion order, and a task never
//! moves when it is toggled.

use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// `id` is assigned at creation and never reused or mutated. `text` is
/// immutable after creation and is never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Counters derived from the current task sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub open: usize,
    pub completed: usize,
    pub completion_rate: u32,
}

/// Ordered task sequence plus the id counter for new tasks.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Create a store containing the single default task.
    ///
    /// Used when the persisted slot is absent or unreadable.
    pub fn seed(text: &str) -> Self {
        let task = Task {
            id: 1,
            text: text.trim().to_string(),
            completed: false,
        };
        Self {
            tasks: vec![task],
            next_id: 2,
        }
    }

    /// Create a store from a previously persisted sequence.
    ///
    /// The id counter resumes past the highest existing id, so ids stay
    /// unique across restarts even after deletes.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|task| task.id).max().map_or(1, |id| id + 1);
        Self { tasks, next_id }
    }

    /// Append a new task with the trimmed text.
    ///
    /// Empty or whitespace-only input is a no-op and returns `None`; no
    /// state changes and no error is raised.
    pub fn add(&mut self, raw_text: &str) -> Option<&Task> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }

        let task = Task {
            id: self.next_id,
            text: text.to_string(),
            completed: false,
        };
        self.next_id += 1;
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Flip the completed flag of the matching task.
    ///
    /// Returns `false` when the id is unknown; that is a tolerated no-op,
    /// not an error.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the matching task, preserving the order of the survivors.
    ///
    /// Returns `false` when the id is unknown.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// The current snapshot, used for rendering and persistence.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Counters computed fresh from the current sequence.
    pub fn stats(&self) -> TaskStats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        let completion_rate = if total == 0 {
            0
        } else {
            (completed as f64 / total as f64 * 100.0).round() as u32
        };
        TaskStats {
            total,
            open: total - completed,
            completed,
            completion_rate,
        }
    }
}
