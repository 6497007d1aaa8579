pub mod filter_bar;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod notice;
pub mod styles;

use crate::app::AppState;
use filter_bar::render_filter_bar;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use notice::render_notice;
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size, app.notice.is_some());

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render filter tabs and the task list
    render_filter_bar(f, app, layout.filter_area);
    render_list_pane(f, app, layout.list_area);

    // Render notice banner while one is up
    if let Some(notice_area) = layout.notice_area {
        render_notice(f, app, notice_area);
    }

    // Render input form if active
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}
