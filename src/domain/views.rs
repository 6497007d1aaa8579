use super::enums::Filter;
use super::task::Task;
use chrono::NaiveDate;

/// Message shown in the list pane when the current view has no tasks
pub const EMPTY_STATE: &str = "No tasks found. Add one to get started!";

/// Project the task list through a filter, preserving list order.
///
/// This is a pure read: calling it any number of times with the same
/// list and filter yields the same rows.
pub fn visible_tasks<'a>(tasks: &'a [Task], filter: Filter) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| filter.accepts(task.completed))
        .collect()
}

/// Count tasks per view: (all, active, completed)
pub fn filter_counts(tasks: &[Task]) -> (usize, usize, usize) {
    let active = tasks.iter().filter(|task| !task.completed).count();
    (tasks.len(), active, tasks.len() - active)
}

/// Format a stored calendar date for display ("Jun 1, 2024" style).
///
/// Empty input maps to an empty string. Anything that is not a
/// YYYY-MM-DD calendar date is display-only data and passes through
/// unchanged rather than erroring.
pub fn format_date(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }

    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
