use super::section::{ActiveSection, SectionGeometry, SectionId, compute_active_section};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionChange {
    pub from: ActiveSection,
    pub to: ActiveSection,
}

/// Scroll offset of the current page plus the section it highlights.
///
/// Scroll input only marks the tracker dirty; the active section is
/// recomputed at most once per frame in `on_frame`.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    offset: u32,
    max_offset: u32,
    dirty: bool,
    active: ActiveSection,
    condensed_after: u32,
    recomputations: u64,
}

impl ScrollTracker {
    pub fn new(condensed_after: u32) -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            dirty: true,
            active: ActiveSection::None,
            condensed_after,
            recomputations: 0,
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn active(&self) -> ActiveSection {
        self.active
    }

    pub fn is_condensed(&self) -> bool {
        self.offset > self.condensed_after
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Called after a page mounts.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.max_offset = 0;
        self.active = ActiveSection::None;
        self.dirty = true;
    }

    pub fn set_extent(&mut self, content_rows: u32, viewport_rows: u32) {
        let max_offset = content_rows.saturating_sub(viewport_rows);
        if max_offset != self.max_offset {
            self.max_offset = max_offset;
            self.dirty = true;
        }
        if self.offset > self.max_offset {
            self.offset = self.max_offset;
            self.dirty = true;
        }
    }

    pub fn scroll_by(&mut self, rows: i32) -> bool {
        let target = i64::from(self.offset) + i64::from(rows);
        let clamped = target.clamp(0, i64::from(self.max_offset));
        self.scroll_to(u32::try_from(clamped).unwrap_or(self.max_offset))
    }

    pub fn scroll_to(&mut self, row: u32) -> bool {
        let row = row.min(self.max_offset);
        if row == self.offset {
            return false;
        }
        self.offset = row;
        self.dirty = true;
        true
    }

    /// `starts` are document rows of each section, in document order.
    pub fn on_frame(
        &mut self,
        starts: &[(SectionId, u32)],
        threshold: i32,
    ) -> Option<SectionChange> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        self.recomputations += 1;

        let offset = i64::from(self.offset);
        let geometry: Vec<SectionGeometry> = starts
            .iter()
            .map(|(id, start)| SectionGeometry {
                id: *id,
                top: clamp_to_i32(i64::from(*start) - offset),
            })
            .collect();
        let next = compute_active_section(&geometry, threshold);
        if next == self.active {
            return None;
        }
        let change = SectionChange {
            from: self.active,
            to: next,
        };
        self.active = next;
        Some(change)
    }
}

fn clamp_to_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::ScrollTracker;
    use crate::scroll::{ActiveSection, SectionId};

    const STARTS: [(SectionId, u32); 3] = [
        (SectionId::Home, 0),
        (SectionId::About, 20),
        (SectionId::Skills, 40),
    ];

    #[test]
    fn recomputes_once_per_frame_after_scrolling() {
        let mut tracker = ScrollTracker::new(4);
        tracker.set_extent(60, 10);
        let first = tracker.on_frame(&STARTS, 3).expect("initial frame activates");
        assert_eq!(first.to, ActiveSection::Section(SectionId::Home));
        assert_eq!(tracker.recomputations(), 1);

        for _ in 0..10 {
            tracker.scroll_by(2);
        }
        assert!(tracker.on_frame(&STARTS, 3).is_some());
        assert!(tracker.on_frame(&STARTS, 3).is_none());
        assert_eq!(tracker.recomputations(), 2);
        assert_eq!(tracker.active(), ActiveSection::Section(SectionId::About));
    }

    #[test]
    fn scroll_is_clamped_to_extent() {
        let mut tracker = ScrollTracker::new(4);
        tracker.set_extent(30, 10);
        assert!(!tracker.scroll_by(-5));
        assert!(tracker.scroll_by(100));
        assert_eq!(tracker.offset(), 20);

        tracker.set_extent(15, 10);
        assert_eq!(tracker.offset(), 5);
    }

    #[test]
    fn condensed_after_threshold_rows() {
        let mut tracker = ScrollTracker::new(4);
        tracker.set_extent(100, 10);
        tracker.scroll_to(4);
        assert!(!tracker.is_condensed());
        tracker.scroll_by(1);
        assert!(tracker.is_condensed());
    }

    #[test]
    fn reset_returns_to_top_and_clears_active() {
        let mut tracker = ScrollTracker::new(4);
        tracker.set_extent(100, 10);
        tracker.scroll_to(45);
        tracker.on_frame(&STARTS, 3);
        assert_eq!(tracker.active(), ActiveSection::Section(SectionId::Skills));

        tracker.reset();
        assert_eq!(tracker.offset(), 0);
        assert_eq!(tracker.active(), ActiveSection::None);
        assert!(tracker.on_frame(&[], 3).is_none());
    }
}
