use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the input form for adding a task
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        // Description field
        lines.push(Line::raw(""));
        let text_label = if form.editing_field == 0 {
            "Description: (editing)"
        } else {
            "Description:"
        };
        lines.push(Line::raw(text_label));

        let text_line = Line::from(vec![
            Span::raw("> "),
            Span::styled(&form.text, modal_title_style()),
            if form.editing_field == 0 {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]);
        lines.push(text_line);
        lines.push(Line::raw(""));

        // Due date field
        let date_label = if form.editing_field == 1 {
            "Due date (YYYY-MM-DD): (editing)"
        } else {
            "Due date (YYYY-MM-DD):"
        };
        lines.push(Line::raw(date_label));

        let date_line = Line::from(vec![
            Span::raw("> "),
            Span::styled(&form.date, modal_title_style()),
            if form.editing_field == 1 {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]);
        lines.push(date_line);
        lines.push(Line::raw(""));

        // Instructions
        lines.push(Line::raw("Tab to switch fields  ·  Enter to add  ·  Esc to cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Add Task ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
