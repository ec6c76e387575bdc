use std::time::Duration;

use crate::route::{Location, PageName, resolve_page_name};
use crate::transition::{
    OverlayFrame, TransitionEffect, TransitionPhase, TransitionSequencer, TransitionTiming,
};

use super::session::{NavSignal, NavigationSession};

/// Whatever renders page content. `mount` returns `false` when the page
/// could not be built; the sequencer then falls back to its deadline.
pub trait PageHost {
    fn mount(&mut self, location: &Location) -> bool;
}

/// Couples the session tracker with the transition sequencer and owns the
/// location whose content is currently on screen.
#[derive(Debug, Clone)]
pub struct Navigator {
    session: NavigationSession,
    sequencer: TransitionSequencer,
    transitions_enabled: bool,
    displayed: Option<Location>,
}

impl Navigator {
    pub fn new(timing: TransitionTiming, transitions_enabled: bool) -> Self {
        Self {
            session: NavigationSession::default(),
            sequencer: TransitionSequencer::new(timing),
            transitions_enabled,
            displayed: None,
        }
    }

    pub fn session(&self) -> &NavigationSession {
        &self.session
    }

    pub fn sequencer(&self) -> &TransitionSequencer {
        &self.sequencer
    }

    pub fn phase(&self) -> TransitionPhase {
        self.sequencer.phase()
    }

    pub fn displayed(&self) -> Option<&Location> {
        self.displayed.as_ref()
    }

    pub fn page_name(&self) -> Option<PageName> {
        self.displayed.as_ref().map(resolve_page_name)
    }

    pub fn overlay(&self, now: Duration) -> Option<OverlayFrame> {
        self.sequencer.overlay(now)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.sequencer.next_deadline()
    }

    /// Called on every render pass with the router's location.
    pub fn observe(
        &mut self,
        location: &Location,
        now: Duration,
        host: &mut impl PageHost,
    ) -> Vec<TransitionEffect> {
        let signal = self.session.observe(location);
        match &signal {
            NavSignal::Unchanged => Vec::new(),
            NavSignal::Initial(initial) => {
                tracing::info!(location = %initial, "initial location");
                self.mount_now(initial, host);
                Vec::new()
            }
            NavSignal::Navigated { from, to } if !self.transitions_enabled => {
                tracing::info!(from = %from, to = %to, "navigation without transition");
                self.mount_now(to, host);
                Vec::new()
            }
            NavSignal::Navigated { .. } => self.sequencer.start(&signal, now),
        }
    }

    /// Fires due transition timers, mounting content on each commit.
    pub fn advance(&mut self, now: Duration, host: &mut impl PageHost) -> Vec<TransitionEffect> {
        let mut emitted = Vec::new();
        loop {
            let effects = self.sequencer.advance(now);
            if effects.is_empty() {
                break;
            }
            for effect in &effects {
                if let TransitionEffect::Commit {
                    generation,
                    location,
                } = effect
                {
                    if host.mount(location) {
                        self.displayed = Some(location.clone());
                        self.sequencer.content_mounted(*generation, now);
                    } else {
                        tracing::warn!(generation, location = %location, "page failed to mount");
                    }
                }
            }
            emitted.extend(effects);
        }
        emitted
    }

    fn mount_now(&mut self, location: &Location, host: &mut impl PageHost) {
        if host.mount(location) {
            self.displayed = Some(location.clone());
        } else {
            tracing::warn!(location = %location, "page failed to mount");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Navigator, PageHost};
    use crate::route::Location;
    use crate::transition::{TransitionEffect, TransitionPhase, TransitionTiming};

    #[derive(Default)]
    struct RecordingHost {
        mounted: Vec<String>,
        fail: bool,
    }

    impl PageHost for RecordingHost {
        fn mount(&mut self, location: &Location) -> bool {
            if self.fail {
                return false;
            }
            self.mounted.push(location.as_str().to_string());
            true
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn initial_observation_mounts_without_transition() {
        let mut navigator = Navigator::new(TransitionTiming::default(), true);
        let mut host = RecordingHost::default();

        let effects = navigator.observe(&Location::new("/work"), ms(0), &mut host);
        assert!(effects.is_empty());
        assert_eq!(navigator.phase(), TransitionPhase::Idle);
        assert_eq!(host.mounted, vec!["/work"]);
        assert_eq!(navigator.page_name().map(|name| name.as_str()), Some("Work"));
        assert!(navigator.session().has_navigated_once());
    }

    #[test]
    fn displayed_location_changes_only_on_commit() {
        let mut navigator = Navigator::new(TransitionTiming::default(), true);
        let mut host = RecordingHost::default();
        navigator.observe(&Location::root(), ms(0), &mut host);
        navigator.observe(&Location::new("/about"), ms(10), &mut host);

        navigator.advance(ms(200), &mut host);
        assert_eq!(navigator.displayed().map(Location::as_str), Some("/"));

        let effects = navigator.advance(ms(410), &mut host);
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, TransitionEffect::Commit { .. }))
        );
        assert_eq!(navigator.displayed().map(Location::as_str), Some("/about"));
        assert_eq!(navigator.phase(), TransitionPhase::Committing);
    }

    #[test]
    fn disabled_transitions_mount_immediately() {
        let mut navigator = Navigator::new(TransitionTiming::default(), false);
        let mut host = RecordingHost::default();
        navigator.observe(&Location::root(), ms(0), &mut host);
        navigator.observe(&Location::new("/work"), ms(1), &mut host);

        assert_eq!(navigator.phase(), TransitionPhase::Idle);
        assert_eq!(host.mounted, vec!["/", "/work"]);
        assert!(navigator.overlay(ms(1)).is_none());
    }

    #[test]
    fn failed_mount_still_reaches_idle_via_deadline() {
        let timing = TransitionTiming {
            cover: ms(100),
            reveal_delay: ms(100),
            reveal: ms(100),
            max_duration: ms(1000),
        };
        let mut navigator = Navigator::new(timing, true);
        let mut host = RecordingHost::default();
        navigator.observe(&Location::root(), ms(0), &mut host);
        host.fail = true;
        navigator.observe(&Location::new("/work"), ms(0), &mut host);

        let mut now = ms(0);
        while navigator.phase() != TransitionPhase::Idle && now < ms(5000) {
            now += ms(10);
            navigator.advance(now, &mut host);
        }
        assert_eq!(navigator.phase(), TransitionPhase::Idle);
        assert!(now <= ms(1100));
        assert_eq!(navigator.displayed().map(Location::as_str), Some("/"));
        assert_eq!(navigator.sequencer().pending_timers(), 0);
    }
}
