use crate::content::{HOME_SECTIONS, PROJECTS, about_page_body, project_by_id};
use crate::route::{Location, PageName, Route, resolve_page_name};
use crate::scroll::SectionId;

use super::wrap::wrap_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    SectionLabel,
    Heading,
    Body,
    Meta,
    Link,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLine {
    pub kind: LineKind,
    pub text: String,
    /// Destination when the line is a link.
    pub link: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Block {
    anchor: Option<SectionId>,
    kind: LineKind,
    text: String,
    link: Option<Location>,
}

/// Width-independent content of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    location: Location,
    route: Route,
    name: PageName,
    blocks: Vec<Block>,
}

/// A page wrapped to a concrete width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    pub lines: Vec<PageLine>,
    pub section_starts: Vec<(SectionId, u32)>,
}

impl PageLayout {
    pub fn rows(&self) -> u32 {
        u32::try_from(self.lines.len()).unwrap_or(u32::MAX)
    }

    pub fn link_at(&self, row: u32) -> Option<&Location> {
        let index = usize::try_from(row).ok()?;
        self.lines.get(index)?.link.as_ref()
    }

    pub fn section_start(&self, id: SectionId) -> Option<u32> {
        self.section_starts
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, start)| *start)
    }
}

impl PageModel {
    pub fn for_location(location: &Location) -> Self {
        let route = Route::parse(location);
        let mut builder = BlockBuilder::default();
        match &route {
            Route::Home => build_home(&mut builder),
            Route::About => build_about(&mut builder),
            Route::Work => build_work(&mut builder),
            Route::Project(id) => build_project(&mut builder, id),
            Route::NotFound => build_not_found(&mut builder),
        }
        Self {
            location: location.clone(),
            route,
            name: resolve_page_name(location),
            blocks: builder.blocks,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn name(&self) -> PageName {
        self.name
    }

    pub fn lay_out(&self, width: u16) -> PageLayout {
        let mut lines = Vec::new();
        let mut section_starts = Vec::new();
        for block in &self.blocks {
            if let Some(anchor) = block.anchor {
                section_starts.push((anchor, u32::try_from(lines.len()).unwrap_or(u32::MAX)));
            }
            if block.kind == LineKind::Blank {
                lines.push(PageLine {
                    kind: LineKind::Blank,
                    text: String::new(),
                    link: None,
                });
                continue;
            }
            for text in wrap_text(&block.text, usize::from(width.max(1))) {
                lines.push(PageLine {
                    kind: block.kind,
                    text,
                    link: block.link.clone(),
                });
            }
        }
        PageLayout {
            width,
            lines,
            section_starts,
        }
    }
}

#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
}

impl BlockBuilder {
    fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.blocks.push(Block {
            anchor: None,
            kind,
            text: text.into(),
            link: None,
        });
    }

    fn link(&mut self, path: &str, label: &str) {
        let location = Location::new(path);
        self.blocks.push(Block {
            anchor: None,
            kind: LineKind::Link,
            text: format!("→ {location}  {label}"),
            link: Some(location),
        });
    }

    fn anchor(&mut self, id: SectionId, kind: LineKind, text: impl Into<String>) {
        self.blocks.push(Block {
            anchor: Some(id),
            kind,
            text: text.into(),
            link: None,
        });
    }

    fn blank(&mut self, count: usize) {
        for _ in 0..count {
            self.push(LineKind::Blank, "");
        }
    }
}

fn build_home(out: &mut BlockBuilder) {
    for section in HOME_SECTIONS {
        out.anchor(
            section.id,
            LineKind::SectionLabel,
            format!("{} / {}", section.label, section.id.anchor().to_uppercase()),
        );
        out.push(LineKind::Heading, section.heading);
        out.blank(1);
        for paragraph in section.paragraphs {
            out.push(LineKind::Body, *paragraph);
            out.blank(1);
        }
        out.blank(4);
    }
}

fn build_about(out: &mut BlockBuilder) {
    out.push(LineKind::Title, "About");
    out.blank(1);
    for paragraph in about_page_body() {
        out.push(LineKind::Body, *paragraph);
        out.blank(1);
    }
    out.link("/work", "see selected work");
}

fn build_work(out: &mut BlockBuilder) {
    out.push(LineKind::Title, "Selected Work");
    out.blank(1);
    for (index, project) in PROJECTS.iter().enumerate() {
        out.push(
            LineKind::Heading,
            format!("{:02}  {}", index + 1, project.title),
        );
        out.push(
            LineKind::Meta,
            format!("{} · {}", project.category, project.year),
        );
        out.push(LineKind::Body, project.summary);
        out.link(&format!("/work/{}", project.id), "case study");
        out.blank(1);
    }
}

fn build_project(out: &mut BlockBuilder, id: &str) {
    let Some(project) = project_by_id(id) else {
        out.push(LineKind::Title, "Project not found");
        out.blank(1);
        out.link("/work", "back to work");
        return;
    };

    out.link("/work", "back to work");
    out.blank(1);
    out.push(LineKind::Title, project.title);
    out.push(
        LineKind::Meta,
        format!("{} · {}", project.category, project.year),
    );
    out.blank(1);
    out.push(LineKind::Meta, format!("Client: {}", project.client));
    out.push(LineKind::Meta, format!("Role: {}", project.role));
    out.blank(1);
    out.push(LineKind::Body, project.summary);
    out.blank(1);
    out.push(
        LineKind::Meta,
        format!("Technologies: {}", project.technologies.join(", ")),
    );
}

fn build_not_found(out: &mut BlockBuilder) {
    out.push(LineKind::Title, "Page not found");
    out.blank(1);
    out.link("/", "back home");
}
