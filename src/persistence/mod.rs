pub mod files;
pub mod tasks;

pub use files::{atomic_write, backup_file, ensure_slate_dir, read_file};
pub use tasks::{load_tasks, save_tasks, tasks_file, tasks_file_in, STORE_FILE};
