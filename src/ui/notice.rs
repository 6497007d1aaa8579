use crate::app::AppState;
use crate::ui::styles::error_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Render the transient notice banner at the bottom of the screen
pub fn render_notice(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(notice) = &app.notice {
        let paragraph =
            Paragraph::new(Line::from(format!(" {} ", notice.message))).style(error_style());
        f.render_widget(paragraph, area);
    }
}
