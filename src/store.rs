use crate::domain::{max_id, next_id, visible_tasks, Filter, Task};
use crate::persistence::{backup_file, load_tasks, save_tasks};
use chrono::Utc;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by store mutations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Rejected before any state change
    #[error("Please enter a task description.")]
    EmptyText,
    /// The change applied in memory but could not be written out
    #[error("Could not save tasks: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Owns the task list, the active filter, and the file they persist to.
///
/// Every successful mutation rewrites the whole store file, so the file
/// always matches memory. A failed write leaves the in-memory change in
/// place and reports `StoreError::Storage`.
pub struct TodoStore {
    tasks: Vec<Task>,
    filter: Filter,
    last_id: i64,
    path: PathBuf,
}

impl TodoStore {
    /// Load the store from disk, starting empty when the file is missing.
    ///
    /// An unreadable file never aborts startup: the old file is backed up,
    /// the list starts empty, and the returned warning tells the user.
    pub fn load(path: PathBuf) -> (Self, Option<String>) {
        let (tasks, warning) = match load_tasks(&path) {
            Ok(tasks) => (tasks, None),
            Err(_) => {
                // Keep the unreadable file around before the next save replaces it
                let warning = match backup_file(&path) {
                    Ok(_) => {
                        "Could not read saved tasks; backed up the old file and started with an empty list"
                    }
                    Err(_) => "Could not read saved tasks; started with an empty list",
                };
                (Vec::new(), Some(warning.to_string()))
            }
        };

        let last_id = max_id(&tasks);
        let store = Self {
            tasks,
            filter: Filter::All,
            last_id,
            path,
        };
        (store, warning)
    }

    /// Add a new task to the front of the list and persist.
    ///
    /// Text is trimmed first; empty text is rejected with no state change.
    /// An empty date means the task has no due date.
    pub fn add_task(&mut self, text: &str, date: &str) -> Result<(), StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }

        let date = date.trim();
        let date = if date.is_empty() {
            None
        } else {
            Some(date.to_string())
        };

        let id = next_id(self.last_id, Utc::now().timestamp_millis());
        self.last_id = id;

        // Newest first
        self.tasks.insert(0, Task::new(id, text.to_string(), date));
        self.persist()
    }

    /// Flip a task's completed flag and persist.
    ///
    /// An unknown id is a no-op and skips the write.
    pub fn toggle_complete(&mut self, id: i64) -> Result<(), StoreError> {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.persist()
            }
            None => Ok(()),
        }
    }

    /// Remove a task and persist, returning the removed task.
    ///
    /// An unknown id is a no-op, skips the write, and returns `None`.
    pub fn delete_task(&mut self, id: i64) -> Result<Option<Task>, StoreError> {
        let index = match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => index,
            None => return Ok(None),
        };

        let removed = self.tasks.remove(index);
        self.persist()?;
        Ok(Some(removed))
    }

    /// Switch the active filter. View state only, never persisted.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Tasks the active filter lets through, in list order
    pub fn visible(&self) -> Vec<&Task> {
        visible_tasks(&self.tasks, self.filter)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn persist(&self) -> Result<(), StoreError> {
        save_tasks(&self.path, &self.tasks)?;
        Ok(())
    }
}
