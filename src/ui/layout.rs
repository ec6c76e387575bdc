use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub navbar: Rect,
    pub page: Rect,
    pub status: Rect,
}

/// The navbar shrinks to a single row once the page is scrolled.
pub fn split_layout(area: Rect, navbar_condensed: bool) -> UiLayout {
    let navbar_height = if navbar_condensed { 1 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(navbar_height),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let page = chunks[1];
    UiLayout {
        navbar: chunks[0],
        page: Rect::new(
            page.x.saturating_add(2),
            page.y,
            page.width.saturating_sub(4),
            page.height,
        ),
        status: chunks[2],
    }
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
