use crate::domain::{Filter, Task, UiMode};
use crate::store::{StoreError, TodoStore};
use crate::ticker;
use std::time::Instant;

/// Transient banner shown at the bottom of the screen
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub expires_at: Instant,
}

/// Input form state for adding tasks
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub text: String,
    pub date: String,
    pub editing_field: usize, // 0 = text, 1 = date
}

/// A deleted task still drawn in place while it fades out
#[derive(Debug, Clone)]
pub struct FadingRow {
    pub task: Task,
    pub row_index: usize,
    pub expires_at: Instant,
}

/// Main application state
pub struct AppState {
    pub store: TodoStore,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub selected_index: usize,
    pub notice: Option<Notice>,
    pub fading_rows: Vec<FadingRow>,
}

impl AppState {
    pub fn new(store: TodoStore, load_warning: Option<String>) -> Self {
        let mut app = Self {
            store,
            ui_mode: UiMode::Normal,
            input_form: None,
            selected_index: 0,
            notice: None,
            fading_rows: Vec::new(),
        };

        if let Some(message) = load_warning {
            app.show_notice(message);
        }

        app
    }

    /// Show a banner that dismisses itself after a few seconds.
    /// A newer notice replaces the current one and restarts the clock.
    pub fn show_notice(&mut self, message: String) {
        self.notice = Some(Notice {
            message,
            expires_at: Instant::now() + ticker::notice_duration(),
        });
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        let row_count = self.store.visible().len();
        if self.selected_index + 1 < row_count {
            self.selected_index += 1;
        }
    }

    /// Id of the task under the cursor in the current view
    pub fn selected_task_id(&self) -> Option<i64> {
        self.store
            .visible()
            .get(self.selected_index)
            .map(|task| task.id)
    }

    /// Pull the cursor back inside the current view after it shrinks
    fn clamp_selection(&mut self) {
        let row_count = self.store.visible().len();
        if row_count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= row_count {
            self.selected_index = row_count - 1;
        }
    }

    /// Switch to a view and reset the cursor to the top
    pub fn set_filter(&mut self, filter: Filter) {
        self.store.set_filter(filter);
        self.selected_index = 0;
        // Switching views redraws the list from data, dropping any ghosts
        self.fading_rows.clear();
    }

    /// Step to the next view in order
    pub fn cycle_filter(&mut self) {
        let next = self.store.filter().next();
        self.set_filter(next);
    }

    /// Open the add-task form
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState {
            text: String::new(),
            date: String::new(),
            editing_field: 0,
        });
        self.ui_mode = UiMode::AddingTask;
    }

    /// Toggle between editing fields (text -> date)
    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = (form.editing_field + 1) % 2;
        }
    }

    /// Add character to input form (current field)
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => form.text.push(c),
                1 => form.date.push(c),
                _ => {}
            }
        }
    }

    /// Backspace in input form (current field)
    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => {
                    form.text.pop();
                }
                1 => {
                    form.date.pop();
                }
                _ => {}
            }
        }
    }

    /// Submit the form and create the task.
    ///
    /// Empty text keeps the form open so it can be fixed. A storage
    /// failure still adds the task to the list and reports the problem
    /// in a notice.
    pub fn submit_input_form(&mut self) {
        let form = match self.input_form.take() {
            Some(form) => form,
            None => return,
        };

        match self.store.add_task(&form.text, &form.date) {
            Ok(()) => {
                self.ui_mode = UiMode::Normal;
                self.fading_rows.clear();
                self.selected_index = 0;
            }
            Err(StoreError::EmptyText) => {
                let message = StoreError::EmptyText.to_string();
                self.input_form = Some(form);
                self.show_notice(message);
            }
            Err(err) => {
                self.ui_mode = UiMode::Normal;
                self.fading_rows.clear();
                self.selected_index = 0;
                self.show_notice(err.to_string());
            }
        }
    }

    /// Cancel input form
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Toggle completion for the task under the cursor
    pub fn toggle_selected(&mut self) {
        let id = match self.selected_task_id() {
            Some(id) => id,
            None => return,
        };

        if let Err(err) = self.store.toggle_complete(id) {
            self.show_notice(err.to_string());
        }

        // The row may have left the current view
        self.fading_rows.clear();
        self.clamp_selection();
    }

    /// Delete the task under the cursor, leaving a fading row behind
    pub fn delete_selected(&mut self) {
        let id = match self.selected_task_id() {
            Some(id) => id,
            None => return,
        };
        let row_index = self.selected_index;

        match self.store.delete_task(id) {
            Ok(Some(task)) => {
                self.fading_rows.push(FadingRow {
                    task,
                    row_index,
                    expires_at: Instant::now() + ticker::fade_duration(),
                });
            }
            Ok(None) => {}
            Err(err) => self.show_notice(err.to_string()),
        }

        self.clamp_selection();
    }

    /// Expire timed UI state: the notice banner and fading rows
    pub fn tick(&mut self) {
        let now = Instant::now();

        // Keep the banner and ghosts only while their deadlines are ahead
        self.notice = self.notice.take().filter(|notice| now < notice.expires_at);
        self.fading_rows.retain(|row| now < row.expires_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::STORE_FILE;
    use tempfile::TempDir;

    fn create_test_app() -> (AppState, TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let (store, warning) = TodoStore::load(temp_dir.path().join(STORE_FILE));
        assert!(warning.is_none());
        (AppState::new(store, None), temp_dir)
    }

    fn add(app: &mut AppState, text: &str) {
        app.store.add_task(text, "").unwrap();
    }

    #[test]
    fn test_app_state_new() {
        let (app, _dir) = create_test_app();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.selected_index, 0);
        assert!(app.input_form.is_none());
        assert!(app.notice.is_none());
        assert!(app.fading_rows.is_empty());
    }

    #[test]
    fn test_load_warning_becomes_notice() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (store, _) = TodoStore::load(temp_dir.path().join(STORE_FILE));
        let app = AppState::new(store, Some("old file was unreadable".to_string()));

        let notice = app.notice.unwrap();
        assert_eq!(notice.message, "old file was unreadable");
    }

    #[test]
    fn test_move_selection() {
        let (mut app, _dir) = create_test_app();
        add(&mut app, "Task 1");
        add(&mut app, "Task 2");

        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        // Can't go past the last row
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        app.move_selection_up();
        assert_eq!(app.selected_index, 0);

        // Can't go below 0
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_move_selection_on_empty_list() {
        let (mut app, _dir) = create_test_app();
        app.move_selection_down();
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_start_and_cancel_input_form() {
        let (mut app, _dir) = create_test_app();

        app.start_add_task();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert!(app.input_form.is_some());

        app.cancel_input_form();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
        assert!(app.store.tasks().is_empty());
    }

    #[test]
    fn test_input_form_editing() {
        let (mut app, _dir) = create_test_app();
        app.start_add_task();

        for c in "Buy milk".chars() {
            app.input_form_add_char(c);
        }
        app.input_form_toggle_field();
        for c in "2024-06-01".chars() {
            app.input_form_add_char(c);
        }
        app.input_form_backspace();

        let form = app.input_form.as_ref().unwrap();
        assert_eq!(form.text, "Buy milk");
        assert_eq!(form.date, "2024-06-0");
        assert_eq!(form.editing_field, 1);

        // Backspace on the text field after toggling back around
        app.input_form_toggle_field();
        app.input_form_backspace();
        let form = app.input_form.as_ref().unwrap();
        assert_eq!(form.text, "Buy mil");
        assert_eq!(form.editing_field, 0);
    }

    #[test]
    fn test_submit_input_form_adds_task() {
        let (mut app, _dir) = create_test_app();

        app.start_add_task();
        for c in "Ship release".chars() {
            app.input_form_add_char(c);
        }
        app.input_form_toggle_field();
        for c in "2024-06-01".chars() {
            app.input_form_add_char(c);
        }
        app.submit_input_form();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
        assert_eq!(app.store.tasks().len(), 1);
        assert_eq!(app.store.tasks()[0].text, "Ship release");
        assert_eq!(app.store.tasks()[0].date.as_deref(), Some("2024-06-01"));
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_submit_empty_form_keeps_form_open() {
        let (mut app, _dir) = create_test_app();

        app.start_add_task();
        app.input_form_add_char(' ');
        app.submit_input_form();

        // Still in the form, with a notice explaining why
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert!(app.input_form.is_some());
        assert!(app.store.tasks().is_empty());
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.message, "Please enter a task description.");
    }

    #[test]
    fn test_toggle_selected() {
        let (mut app, _dir) = create_test_app();
        add(&mut app, "Buy milk");

        app.toggle_selected();
        assert!(app.store.tasks()[0].completed);

        app.toggle_selected();
        assert!(!app.store.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_clamps_selection_when_row_leaves_view() {
        let (mut app, _dir) = create_test_app();
        add(&mut app, "Task 1");
        add(&mut app, "Task 2");
        app.set_filter(Filter::Active);

        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        // Completing the last active row shrinks the view under the cursor
        app.toggle_selected();
        assert_eq!(app.store.visible().len(), 1);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_delete_selected_leaves_fading_row() {
        let (mut app, _dir) = create_test_app();
        add(&mut app, "Buy milk");
        add(&mut app, "Ship release");

        app.move_selection_down();
        app.delete_selected();

        assert_eq!(app.store.tasks().len(), 1);
        assert_eq!(app.store.tasks()[0].text, "Ship release");
        assert_eq!(app.fading_rows.len(), 1);
        assert_eq!(app.fading_rows[0].task.text, "Buy milk");
        assert_eq!(app.fading_rows[0].row_index, 1);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_delete_on_empty_list_is_noop() {
        let (mut app, _dir) = create_test_app();
        app.delete_selected();
        assert!(app.fading_rows.is_empty());
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_fading_row_expires_on_tick() {
        let (mut app, _dir) = create_test_app();
        add(&mut app, "Buy milk");
        app.delete_selected();
        assert_eq!(app.fading_rows.len(), 1);

        // Not expired yet
        app.tick();
        assert_eq!(app.fading_rows.len(), 1);

        app.fading_rows[0].expires_at = Instant::now();
        app.tick();
        assert!(app.fading_rows.is_empty());
    }

    #[test]
    fn test_notice_expires_on_tick() {
        let (mut app, _dir) = create_test_app();
        app.show_notice("heads up".to_string());

        app.tick();
        assert!(app.notice.is_some());

        if let Some(notice) = &mut app.notice {
            notice.expires_at = Instant::now();
        }
        app.tick();
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_newer_notice_replaces_older() {
        let (mut app, _dir) = create_test_app();
        app.show_notice("first".to_string());
        app.show_notice("second".to_string());

        assert_eq!(app.notice.as_ref().unwrap().message, "second");
    }

    #[test]
    fn test_set_filter_resets_selection_and_ghosts() {
        let (mut app, _dir) = create_test_app();
        add(&mut app, "Task 1");
        add(&mut app, "Task 2");
        add(&mut app, "Task 3");

        app.move_selection_down();
        app.delete_selected();
        assert_eq!(app.fading_rows.len(), 1);

        app.set_filter(Filter::Completed);
        assert_eq!(app.selected_index, 0);
        assert!(app.fading_rows.is_empty());
    }

    #[test]
    fn test_cycle_filter() {
        let (mut app, _dir) = create_test_app();
        assert_eq!(app.store.filter(), Filter::All);

        app.cycle_filter();
        assert_eq!(app.store.filter(), Filter::Active);

        app.cycle_filter();
        assert_eq!(app.store.filter(), Filter::Completed);

        app.cycle_filter();
        assert_eq!(app.store.filter(), Filter::All);
    }
}
