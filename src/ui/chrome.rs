use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::page::truncate_to_width;
use crate::route::{Location, Route};
use crate::scroll::{ActiveSection, SectionId};

pub(crate) const ACCENT: Color = Color::Rgb(201, 162, 39);
const GAP: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Section(SectionId),
    Page(Location),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: NavTarget,
    pub area: Rect,
}

#[derive(Debug, Clone, Copy)]
pub struct NavbarView<'a> {
    pub location: &'a Location,
    pub on_home: bool,
    pub active_section: ActiveSection,
    pub condensed: bool,
    pub hovered: Option<(u16, u16)>,
}

#[derive(Debug, Clone, Copy)]
pub struct StatusView<'a> {
    pub page_name: &'a str,
    pub location: &'a Location,
    pub phase: &'a str,
    pub mode: &'a str,
    pub message: &'a str,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

fn label_width(label: &str) -> u16 {
    u16::try_from(label.width()).unwrap_or(u16::MAX)
}

/// Link hit regions for a navbar drawn in `area`. Drawing and mouse hit
/// testing both go through this so they always agree.
pub fn navbar_links(area: Rect) -> Vec<NavLink> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }
    let row = if area.height >= 3 { area.y + 1 } else { area.y };
    let right_edge = area.x.saturating_add(area.width);
    let mut links = Vec::new();

    let sections: [(&'static str, SectionId); 4] = [
        ("Hamza.", SectionId::Home),
        ("About", SectionId::About),
        ("Work", SectionId::Projects),
        ("Contact", SectionId::Contact),
    ];
    let mut x = area.x.saturating_add(1);
    for (label, id) in sections {
        let width = label_width(label);
        if x.saturating_add(width) > right_edge {
            break;
        }
        links.push(NavLink {
            label,
            target: NavTarget::Section(id),
            area: Rect::new(x, row, width, 1),
        });
        x = x.saturating_add(width + GAP);
    }
    let left_end = x;

    let pages = Route::top_level();
    let pages_width: u16 = pages
        .iter()
        .map(|(_, path)| label_width(path) + GAP)
        .sum();
    let mut x = right_edge.saturating_sub(pages_width);
    if x < left_end {
        return links;
    }
    for (_, path) in pages {
        let width = label_width(path);
        links.push(NavLink {
            label: path,
            target: NavTarget::Page(Location::new(path)),
            area: Rect::new(x, row, width, 1),
        });
        x = x.saturating_add(width + GAP);
    }
    links
}

pub fn link_at(links: &[NavLink], column: u16, row: u16) -> Option<&NavLink> {
    links.iter().find(|link| {
        row == link.area.y
            && column >= link.area.x
            && column < link.area.x.saturating_add(link.area.width)
    })
}

fn is_active(link: &NavLink, view: &NavbarView<'_>) -> bool {
    match &link.target {
        NavTarget::Section(id) => view.on_home && view.active_section == ActiveSection::Section(*id),
        NavTarget::Page(location) => location == view.location,
    }
}

pub fn draw_navbar(frame: &mut Frame<'_>, area: Rect, view: NavbarView<'_>) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let background = if view.condensed {
        Style::default().bg(Color::Rgb(12, 12, 12))
    } else {
        Style::default()
    };
    let block = if area.height >= 3 {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(background)
    } else {
        Block::default().style(background)
    };
    frame.render_widget(block, area);

    let links = navbar_links(area);
    let hovered = view
        .hovered
        .and_then(|(column, row)| link_at(&links, column, row));
    for link in &links {
        let mut style = Style::default().fg(Color::Gray);
        if is_active(link, &view) {
            style = style.fg(ACCENT).add_modifier(Modifier::BOLD);
        } else if hovered == Some(link) {
            style = style.fg(Color::White);
        }
        frame.render_widget(Paragraph::new(link.label).style(style), link.area);
    }
}

pub fn draw_status(frame: &mut Frame<'_>, area: Rect, view: StatusView<'_>) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let history = match (view.can_go_back, view.can_go_forward) {
        (true, true) => "<>",
        (true, false) => "< ",
        (false, true) => " >",
        (false, false) => "  ",
    };
    let message = if view.message.is_empty() {
        "-"
    } else {
        view.message
    };
    let text = format!(
        "{} | {} {} | {} | {} | {}",
        view.page_name, history, view.location, view.phase, view.mode, message
    );
    let text = truncate_to_width(&text, usize::from(area.width));
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Gray)),
        area,
    );
}
