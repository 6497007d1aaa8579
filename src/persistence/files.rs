use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the slate directory - checks for local .slate first, then falls back to global ~/.slate
pub fn get_slate_dir() -> Result<PathBuf> {
    // Check for local .slate directory
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let local_slate = find_local_slate(&current_dir);

    if let Some(local_dir) = local_slate {
        return Ok(local_dir);
    }

    // Fall back to global ~/.slate
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".slate"))
}

/// Find local .slate directory by walking up the directory tree
fn find_local_slate(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let slate_dir = current.join(".slate");
        if slate_dir.exists() && slate_dir.is_dir() {
            return Some(slate_dir);
        }

        // Move up to parent directory
        current = current.parent()?;
    }
}

/// Ensure the slate directory exists
pub fn ensure_slate_dir() -> Result<PathBuf> {
    let dir = get_slate_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    // Create temp file in the same directory
    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    // Write content
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    // Sync to disk
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    // Atomically rename temp file to target
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Create a backup of a file with timestamp
pub fn backup_file<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(path.to_path_buf());
    }

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let backup_path = path.with_extension(format!("bak.{}.json", timestamp));

    fs::copy(path, &backup_path)
        .with_context(|| format!("Failed to backup file: {}", path.display()))?;

    Ok(backup_path)
}
