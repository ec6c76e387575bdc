use std::time::{Duration, Instant};

/// Session time for the loop. Everything below the app layer works on
/// `Duration` since session start; this is the only place touching the
/// wall clock.
pub(crate) struct SessionClock {
    started_at: Instant,
}

impl SessionClock {
    pub(crate) fn new(started_at: Instant) -> Self {
        Self { started_at }
    }

    pub(crate) fn now(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub(crate) fn instant_at(&self, at: Duration) -> tokio::time::Instant {
        tokio::time::Instant::from_std(self.started_at + at)
    }
}

pub(crate) struct UiActor {
    needs_redraw: bool,
    frames_drawn: u64,
}

impl UiActor {
    pub(crate) fn new() -> Self {
        Self {
            needs_redraw: true,
            frames_drawn: 0,
        }
    }

    pub(crate) fn mark_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub(crate) fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub(crate) fn on_drawn(&mut self) {
        self.needs_redraw = false;
        self.frames_drawn += 1;
    }

    pub(crate) fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}
