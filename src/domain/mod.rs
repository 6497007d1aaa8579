pub mod enums;
pub mod task;
pub mod views;

pub use enums::{Filter, UiMode};
pub use task::{max_id, next_id, Task};
pub use views::{filter_counts, format_date, visible_tasks, EMPTY_STATE};
