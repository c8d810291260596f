use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::indexer::MAX_SUGGESTIONS;

/// Dashboard layout:
/// - Search input: top, 3 rows
/// - Categories: 40% width (left)
/// - Question preview: 60% width (right)
/// - Status bar: bottom row
pub struct AppLayout {
    pub search_area: Rect,
    pub categories_area: Rect,
    pub preview_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search input
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(vertical_chunks[1]);

        Self {
            search_area: vertical_chunks[0],
            categories_area: horizontal_chunks[0],
            preview_area: horizontal_chunks[1],
            status_area: vertical_chunks[2],
        }
    }

    /// Dropdown overlay directly under the search input, sized to `rows` suggestions
    pub fn dropdown_area(&self, rows: usize) -> Rect {
        let rows = rows.clamp(1, MAX_SUGGESTIONS) as u16 + 2;
        let top = self.search_area.y + self.search_area.height;
        let available = self.status_area.y.saturating_sub(top);

        Rect::new(self.search_area.x, top, self.search_area.width, rows.min(available))
    }
}
