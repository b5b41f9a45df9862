use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions for the suggester UI
pub struct AppLayout {
    pub header_area: Rect,
    pub categories_area: Rect,
    pub result_area: Rect,
    pub side_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create layout:
    /// - Header: top row
    /// - Categories: 35% width (left)
    /// - Result panel over history/favorites: 65% width (right)
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(vertical_chunks[1]);

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Result + timer
                Constraint::Min(0),    // History / favorites
            ])
            .split(horizontal_chunks[1]);

        Self {
            header_area: vertical_chunks[0],
            categories_area: horizontal_chunks[0],
            result_area: right_chunks[0],
            side_area: right_chunks[1],
            status_area: vertical_chunks[2],
        }
    }
}
