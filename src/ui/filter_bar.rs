use crate::app::AppState;
use crate::domain::{filter_counts, Filter};
use crate::ui::styles::{active_filter_style, hint_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the filter tab row with per-view counts
pub fn render_filter_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let (all, active, completed) = filter_counts(app.store.tasks());

    let mut spans = vec![Span::raw(" ")];
    for filter in Filter::all() {
        let count = match filter {
            Filter::All => all,
            Filter::Active => active,
            Filter::Completed => completed,
        };

        let style = if *filter == app.store.filter() {
            active_filter_style()
        } else {
            hint_style()
        };
        spans.push(Span::styled(format!(" {} ({}) ", filter.label(), count), style));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    f.render_widget(paragraph, area);
}
