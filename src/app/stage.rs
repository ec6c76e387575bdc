use crate::nav::PageHost;
use crate::page::{PageLayout, PageModel};
use crate::route::{Location, Route};
use crate::scroll::{ActiveSection, ScrollTracker, SectionChange, SectionId};

const DEFAULT_VIEWPORT: (u16, u16) = (80, 20);

/// The mounted page plus its scroll state. The navigator mounts into this on
/// the initial observation and on every transition commit.
#[derive(Debug, Clone)]
pub struct PageStage {
    model: Option<PageModel>,
    layout: Option<PageLayout>,
    viewport: (u16, u16),
    scroll: ScrollTracker,
    pending_section: Option<SectionId>,
    mounts: u64,
}

impl PageStage {
    pub fn new(condensed_after: u32) -> Self {
        Self {
            model: None,
            layout: None,
            viewport: DEFAULT_VIEWPORT,
            scroll: ScrollTracker::new(condensed_after),
            pending_section: None,
            mounts: 0,
        }
    }

    pub fn model(&self) -> Option<&PageModel> {
        self.model.as_ref()
    }

    pub fn layout(&self) -> Option<&PageLayout> {
        self.layout.as_ref()
    }

    pub fn location(&self) -> Option<&Location> {
        self.model.as_ref().map(PageModel::location)
    }

    pub fn is_home(&self) -> bool {
        self.model
            .as_ref()
            .is_some_and(|model| *model.route() == Route::Home)
    }

    pub fn scroll(&self) -> &ScrollTracker {
        &self.scroll
    }

    pub fn offset(&self) -> u32 {
        self.scroll.offset()
    }

    pub fn active_section(&self) -> ActiveSection {
        self.scroll.active()
    }

    pub fn is_condensed(&self) -> bool {
        self.scroll.is_condensed()
    }

    pub fn mounts(&self) -> u64 {
        self.mounts
    }

    pub fn pending_section(&self) -> Option<SectionId> {
        self.pending_section
    }

    /// Section to jump to once the home page is mounted.
    pub fn set_pending_section(&mut self, id: SectionId) {
        self.pending_section = Some(id);
    }

    /// Returns `true` when the page had to be re-laid out.
    pub fn resize(&mut self, width: u16, rows: u16) -> bool {
        let next = (width.max(1), rows);
        if next == self.viewport && self.layout.is_some() {
            return false;
        }
        let relayout = next.0 != self.viewport.0 || self.layout.is_none();
        self.viewport = next;
        if relayout {
            self.relayout();
        } else {
            self.apply_extent();
        }
        true
    }

    pub fn scroll_by(&mut self, rows: i32) -> bool {
        self.scroll.scroll_by(rows)
    }

    pub fn scroll_to_section(&mut self, id: SectionId) -> bool {
        let Some(start) = self
            .layout
            .as_ref()
            .and_then(|layout| layout.section_start(id))
        else {
            return false;
        };
        self.scroll.scroll_to(start);
        true
    }

    pub fn next_section(&self) -> Option<SectionId> {
        self.neighbour_section(1)
    }

    pub fn prev_section(&self) -> Option<SectionId> {
        self.neighbour_section(-1)
    }

    pub fn on_frame(&mut self, activation_offset: i32) -> Option<SectionChange> {
        let layout = self.layout.as_ref()?;
        self.scroll.on_frame(&layout.section_starts, activation_offset)
    }

    fn neighbour_section(&self, step: isize) -> Option<SectionId> {
        let layout = self.layout.as_ref()?;
        let ids: Vec<SectionId> = layout.section_starts.iter().map(|(id, _)| *id).collect();
        let current = self
            .scroll
            .active()
            .id()
            .and_then(|active| ids.iter().position(|id| *id == active))
            .unwrap_or(0);
        let next = current.checked_add_signed(step)?;
        ids.get(next).copied()
    }

    fn relayout(&mut self) {
        self.layout = self
            .model
            .as_ref()
            .map(|model| model.lay_out(self.viewport.0));
        self.apply_extent();
    }

    fn apply_extent(&mut self) {
        let rows = self.layout.as_ref().map_or(0, PageLayout::rows);
        self.scroll.set_extent(rows, u32::from(self.viewport.1));
    }
}

impl PageHost for PageStage {
    fn mount(&mut self, location: &Location) -> bool {
        self.model = Some(PageModel::for_location(location));
        self.scroll.reset();
        self.relayout();
        self.mounts += 1;
        if self.is_home()
            && let Some(id) = self.pending_section.take()
        {
            self.scroll_to_section(id);
        } else if !self.is_home() {
            self.pending_section = None;
        }
        tracing::debug!(location = %location, mounts = self.mounts, "page mounted");
        true
    }
}
