use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::page::{LineKind, PageLayout};

use super::chrome::ACCENT;

fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Title => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        LineKind::SectionLabel => Style::default().fg(ACCENT),
        LineKind::Heading => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        LineKind::Body => Style::default().fg(Color::Gray),
        LineKind::Meta => Style::default().fg(Color::DarkGray),
        LineKind::Link => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
        LineKind::Blank => Style::default(),
    }
}

/// Draws the rows of `layout` starting at document row `offset`.
pub fn draw_page(frame: &mut Frame<'_>, area: Rect, layout: Option<&PageLayout>, offset: u32) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let Some(layout) = layout else {
        return;
    };

    let skip = usize::try_from(offset).unwrap_or(usize::MAX);
    let lines: Vec<Line<'_>> = layout
        .lines
        .iter()
        .skip(skip)
        .take(usize::from(area.height))
        .map(|line| Line::styled(line.text.as_str(), line_style(line.kind)))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
