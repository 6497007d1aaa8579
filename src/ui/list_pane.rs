use crate::app::AppState;
use crate::domain::{format_date, Task, EMPTY_STATE};
use crate::ui::styles::{
    border_style, date_style, default_style, done_style, fading_style, hint_style, selected_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let visible = app.store.visible();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(
            format!(" Tasks ({}) ", visible.len()),
            title_style(),
        ));

    if visible.is_empty() && app.fading_rows.is_empty() {
        let empty = Paragraph::new(Line::from(EMPTY_STATE))
            .style(hint_style())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Deleted rows keep their slot until the fade deadline passes, so the
    // rows below them don't jump early
    let mut items: Vec<ListItem> = Vec::new();
    for (index, task) in visible.iter().enumerate() {
        for ghost in app.fading_rows.iter().filter(|g| g.row_index == index) {
            items.push(ListItem::new(create_ghost_line(&ghost.task)));
        }

        let style = if index == app.selected_index {
            selected_style()
        } else {
            default_style()
        };
        items.push(ListItem::new(create_task_line(task)).style(style));
    }
    for ghost in app
        .fading_rows
        .iter()
        .filter(|g| g.row_index >= visible.len())
    {
        items.push(ListItem::new(create_ghost_line(&ghost.task)));
    }

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

/// Create a single line for a task
/// Format: ○ Buy milk  [Jun 1, 2024]
fn create_task_line(task: &Task) -> Line<'static> {
    let mut spans = Vec::new();

    // Completion glyph
    if task.completed {
        spans.push(Span::styled("✓ ".to_string(), done_style()));
        spans.push(Span::styled(task.text.clone(), done_style()));
    } else {
        spans.push(Span::raw("○ ".to_string()));
        spans.push(Span::raw(task.text.clone()));
    }

    // Due date chip
    if let Some(date) = &task.date {
        spans.push(Span::raw("  ".to_string()));
        spans.push(Span::styled(
            format!("[{}]", format_date(date)),
            date_style(),
        ));
    }

    Line::from(spans)
}

/// Create the line for a row mid-deletion, everything dimmed
fn create_ghost_line(task: &Task) -> Line<'static> {
    let mut spans = Vec::new();

    let glyph = if task.completed { "✓ " } else { "○ " };
    spans.push(Span::styled(glyph.to_string(), fading_style()));
    spans.push(Span::styled(task.text.clone(), fading_style()));

    if let Some(date) = &task.date {
        spans.push(Span::raw("  ".to_string()));
        spans.push(Span::styled(
            format!("[{}]", format_date(date)),
            fading_style(),
        ));
    }

    Line::from(spans)
}
