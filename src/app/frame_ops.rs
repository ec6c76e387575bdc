use std::time::Duration;

use ratatui::layout::Rect;

use crate::transition::{TransitionEffect, TransitionPhase};
use crate::ui::split_layout;

use super::core::App;

impl App {
    /// One host frame: observe the router location, fire due transition
    /// timers, recompute the active section, ease the cursor and expire
    /// notices. Returns `true` when anything visible changed.
    pub fn sync_frame(&mut self, now: Duration, area: Rect) -> bool {
        let layout = split_layout(area, self.stage.is_condensed());
        let mut changed = self.stage.resize(layout.page.width, layout.page.height);

        let mounts = self.stage.mounts();
        let location = self.state.router.location().clone();
        let mut effects = self.navigator.observe(&location, now, &mut self.stage);
        effects.extend(self.navigator.advance(now, &mut self.stage));
        for effect in &effects {
            log_effect(effect);
        }
        if !effects.is_empty() || self.stage.mounts() != mounts {
            changed = true;
        }
        if self.navigator.overlay(now).is_some() {
            changed = true;
        }

        if let Some(change) = self
            .stage
            .on_frame(self.config.scroll.activation_offset_rows)
        {
            tracing::debug!(from = ?change.from, to = ?change.to, "active section changed");
            changed = true;
        }
        if self.config.ui.cursor_enabled && self.cursor.step() {
            changed = true;
        }
        if self.state.status.expire(now) {
            changed = true;
        }
        changed
    }

    /// Whether the next frame must come from the frame tick rather than
    /// from input or a timer deadline.
    pub fn is_animating(&self) -> bool {
        self.navigator.phase() != TransitionPhase::Idle
            || (self.config.ui.cursor_enabled && !self.cursor.is_settled())
    }

    /// Earliest session time at which a timer needs servicing.
    pub fn next_wake(&self) -> Option<Duration> {
        match (self.navigator.next_deadline(), self.state.status.expires_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

fn log_effect(effect: &TransitionEffect) {
    match effect {
        TransitionEffect::Commit {
            generation,
            location,
        } => tracing::debug!(generation, location = %location, "content committed"),
        TransitionEffect::Detach { generation } => {
            tracing::debug!(generation, "overlay detached")
        }
        TransitionEffect::Phase { .. } | TransitionEffect::Superseded { .. } => {}
    }
}
