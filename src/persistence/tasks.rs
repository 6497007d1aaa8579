use crate::domain::Task;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File holding the full task list inside the slate directory
pub const STORE_FILE: &str = "todos.json";

/// Get path to the task store in the resolved slate directory
pub fn tasks_file() -> Result<PathBuf> {
    Ok(super::ensure_slate_dir()?.join(STORE_FILE))
}

/// Get path to the task store inside an explicit data directory
pub fn tasks_file_in<P: AsRef<Path>>(dir: P) -> Result<PathBuf> {
    let dir = dir.as_ref();
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir.join(STORE_FILE))
}

/// Load the task list from the store file
///
/// A missing file is a fresh start and loads as an empty list. A file
/// that exists but does not parse is an error; the caller decides how
/// to recover.
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Result<Vec<Task>> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = crate::persistence::read_file(path)?;
    let tasks: Vec<Task> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse task store: {}", path.display()))?;
    Ok(tasks)
}

/// Save the full task list to the store file, replacing previous content
pub fn save_tasks<P: AsRef<Path>>(path: P, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}
