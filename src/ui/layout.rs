use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub filter_area: Rect,
    pub list_area: Rect,
    pub notice_area: Option<Rect>,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Filter tabs (1 row)
/// - Task list fills the rest
/// - Bottom bar: notice banner (1 row, only while a notice is up)
pub fn create_layout(area: Rect, show_notice: bool) -> MainLayout {
    if show_notice {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Keybindings bar
                Constraint::Length(1), // Filter tabs
                Constraint::Min(0),    // Task list
                Constraint::Length(1), // Notice banner
            ])
            .split(area);

        MainLayout {
            keybindings_area: chunks[0],
            filter_area: chunks[1],
            list_area: chunks[2],
            notice_area: Some(chunks[3]),
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Keybindings bar
                Constraint::Length(1), // Filter tabs
                Constraint::Min(0),    // Task list
            ])
            .split(area);

        MainLayout {
            keybindings_area: chunks[0],
            filter_area: chunks[1],
            list_area: chunks[2],
            notice_area: None,
        }
    }
}

/// Create centered modal area (for the add-task form)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(10),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
