use serde::{Deserialize, Serialize};

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, derived from the creation timestamp in milliseconds
    pub id: i64,
    /// User-supplied description (non-empty after trimming)
    pub text: String,
    /// Optional calendar date ("YYYY-MM-DD"), kept for display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Completion flag
    pub completed: bool,
}

impl Task {
    pub fn new(id: i64, text: String, date: Option<String>) -> Self {
        Self {
            id,
            text,
            date,
            completed: false,
        }
    }
}

/// Allocate the next task id from the current timestamp.
///
/// Ids follow the creation time in milliseconds but are bumped past the
/// previous id, so back-to-back adds within one millisecond stay unique
/// and the sequence is strictly increasing.
pub fn next_id(last_id: i64, now_ms: i64) -> i64 {
    now_ms.max(last_id + 1)
}

/// Highest id present in a task list (0 when empty)
pub fn max_id(tasks: &[Task]) -> i64 {
    tasks.iter().map(|task| task.id).max().unwrap_or(0)
}
