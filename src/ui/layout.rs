use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Most candidate rows shown at once; the list scrolls past this.
pub const MAX_VISIBLE_ROWS: u16 = 10;

pub struct PromptLayout {
    pub title: Rect,
    pub list: Rect,
    pub hint: Rect,
}

/// Inline viewport height for `item_count` candidates.
pub fn viewport_height(item_count: usize) -> u16 {
    let rows = u16::try_from(item_count).unwrap_or(u16::MAX);
    rows.clamp(1, MAX_VISIBLE_ROWS) + 2
}

pub fn create_layout(area: Rect) -> PromptLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(1),    // Candidates
            Constraint::Length(1), // Key hint
        ])
        .split(area);

    PromptLayout {
        title: chunks[0],
        list: chunks[1],
        hint: chunks[2],
    }
}
