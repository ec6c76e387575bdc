use std::time::Duration;

use crate::nav::NavSignal;
use crate::route::Location;

use super::timers::{FiredTimer, TimerQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionPhase {
    Idle,
    Covering,
    Committing,
    Revealing,
}

impl TransitionPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Covering => "covering",
            Self::Committing => "committing",
            Self::Revealing => "revealing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionTimer {
    CoverComplete,
    RevealStart,
    RevealComplete,
    /// Upper bound for the whole sequence; forces progress if mounting never
    /// acknowledges.
    Deadline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    pub cover: Duration,
    pub reveal_delay: Duration,
    pub reveal: Duration,
    pub max_duration: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            cover: Duration::from_millis(400),
            reveal_delay: Duration::from_millis(300),
            reveal: Duration::from_millis(600),
            max_duration: Duration::from_millis(3000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionEffect {
    Phase {
        generation: u64,
        from: TransitionPhase,
        to: TransitionPhase,
    },
    /// Swap the displayed content now; the overlay fully covers the viewport.
    Commit { generation: u64, location: Location },
    /// Overlay is gone; nothing of this generation remains scheduled.
    Detach { generation: u64 },
    /// A newer navigation replaced this generation before it finished.
    Superseded {
        generation: u64,
        cancelled_timers: usize,
    },
}

impl TransitionEffect {
    pub fn generation(&self) -> u64 {
        match self {
            Self::Phase { generation, .. }
            | Self::Commit { generation, .. }
            | Self::Detach { generation }
            | Self::Superseded { generation, .. } => *generation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    pub generation: u64,
    pub phase: TransitionPhase,
    /// Fraction of the viewport hidden by the overlay, `0.0..=1.0`.
    pub coverage: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionStats {
    pub started: u64,
    pub completed: u64,
    pub superseded: u64,
    pub forced: u64,
    pub cancelled_timers: u64,
    pub stale_timers: u64,
}

#[derive(Debug, Clone)]
struct ActiveTransition {
    generation: u64,
    origin: Location,
    target: Location,
    phase: TransitionPhase,
    phase_started_at: Duration,
    committed: bool,
    mounted: bool,
}

/// Overlay-in, content swap, overlay-out.
///
/// Only one sequence is in flight. Starting a new one cancels every timer
/// owned by the previous generation before anything else is scheduled.
#[derive(Debug, Clone)]
pub struct TransitionSequencer {
    timing: TransitionTiming,
    generation: u64,
    active: Option<ActiveTransition>,
    timers: TimerQueue<TransitionTimer>,
    stats: TransitionStats,
}

impl TransitionSequencer {
    pub fn new(timing: TransitionTiming) -> Self {
        Self {
            timing,
            generation: 0,
            active: None,
            timers: TimerQueue::default(),
            stats: TransitionStats::default(),
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.active
            .as_ref()
            .map_or(TransitionPhase::Idle, |active| active.phase)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stats(&self) -> TransitionStats {
        self.stats
    }

    /// `(origin, target)` of the sequence in flight.
    pub fn active_route(&self) -> Option<(&Location, &Location)> {
        self.active
            .as_ref()
            .map(|active| (&active.origin, &active.target))
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending_len()
    }

    /// Starts a sequence for a real navigation. Initial and unchanged
    /// observations never leave `Idle`.
    pub fn start(&mut self, signal: &NavSignal, now: Duration) -> Vec<TransitionEffect> {
        let NavSignal::Navigated { from, to } = signal else {
            return Vec::new();
        };

        let mut effects = Vec::new();
        let origin = match self.active.take() {
            Some(prior) => {
                let cancelled = self.timers.cancel_owner(prior.generation);
                self.stats.superseded += 1;
                self.stats.cancelled_timers += cancelled as u64;
                tracing::debug!(
                    generation = prior.generation,
                    phase = prior.phase.as_str(),
                    cancelled,
                    "transition superseded"
                );
                effects.push(TransitionEffect::Superseded {
                    generation: prior.generation,
                    cancelled_timers: cancelled,
                });
                prior.origin
            }
            None => from.clone(),
        };

        self.generation = self.generation.saturating_add(1);
        let generation = self.generation;
        self.stats.started += 1;
        tracing::info!(generation, from = %origin, to = %to, "transition started");

        self.active = Some(ActiveTransition {
            generation,
            origin,
            target: to.clone(),
            phase: TransitionPhase::Covering,
            phase_started_at: now,
            committed: false,
            mounted: false,
        });
        self.timers.schedule(
            generation,
            now + self.timing.cover,
            TransitionTimer::CoverComplete,
        );
        self.timers.schedule(
            generation,
            now + self.timing.max_duration,
            TransitionTimer::Deadline,
        );
        effects.push(TransitionEffect::Phase {
            generation,
            from: TransitionPhase::Idle,
            to: TransitionPhase::Covering,
        });
        effects
    }

    /// Host acknowledgement that the committed content is on screen.
    /// Returns `false` for stale generations or repeated acknowledgements.
    pub fn content_mounted(&mut self, generation: u64, now: Duration) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if active.generation != generation
            || active.phase != TransitionPhase::Committing
            || active.mounted
        {
            return false;
        }

        active.mounted = true;
        self.timers.schedule(
            generation,
            now + self.timing.reveal_delay,
            TransitionTimer::RevealStart,
        );
        true
    }

    /// Fires due timers. Stops right after a `Commit` so the host can mount
    /// and acknowledge before later timers are considered.
    pub fn advance(&mut self, now: Duration) -> Vec<TransitionEffect> {
        let mut effects = Vec::new();
        while let Some(fired) = self.timers.pop_due(now) {
            if self.fire(fired, &mut effects) {
                break;
            }
        }
        effects
    }

    pub fn overlay(&self, now: Duration) -> Option<OverlayFrame> {
        let active = self.active.as_ref()?;
        let elapsed = now.saturating_sub(active.phase_started_at);
        let coverage = match active.phase {
            TransitionPhase::Idle => return None,
            TransitionPhase::Covering => ease_in_out(progress(elapsed, self.timing.cover)),
            TransitionPhase::Committing => 1.0,
            TransitionPhase::Revealing => 1.0 - ease_in_out(progress(elapsed, self.timing.reveal)),
        };
        Some(OverlayFrame {
            generation: active.generation,
            phase: active.phase,
            coverage,
        })
    }

    fn fire(
        &mut self,
        fired: FiredTimer<TransitionTimer>,
        effects: &mut Vec<TransitionEffect>,
    ) -> bool {
        let Some((generation, phase, committed)) = self
            .active
            .as_ref()
            .map(|active| (active.generation, active.phase, active.committed))
        else {
            self.stats.stale_timers += 1;
            return false;
        };
        if generation != fired.owner {
            self.stats.stale_timers += 1;
            return false;
        }

        match (fired.payload, phase) {
            (TransitionTimer::CoverComplete, TransitionPhase::Covering) => {
                self.enter(TransitionPhase::Committing, fired.due_at, effects);
                self.commit(effects)
            }
            (TransitionTimer::RevealStart, TransitionPhase::Committing) => {
                self.begin_reveal(fired.due_at, effects);
                false
            }
            (TransitionTimer::RevealComplete, TransitionPhase::Revealing) => {
                self.finish(effects);
                false
            }
            (TransitionTimer::Deadline, TransitionPhase::Covering | TransitionPhase::Committing) => {
                self.stats.forced += 1;
                tracing::warn!(
                    generation,
                    phase = phase.as_str(),
                    "transition deadline reached before reveal; forcing reveal"
                );
                self.timers.cancel_owner(generation);
                if phase == TransitionPhase::Covering {
                    self.enter(TransitionPhase::Committing, fired.due_at, effects);
                }
                let needs_commit = !committed;
                if needs_commit {
                    self.commit(effects);
                }
                self.begin_reveal(fired.due_at, effects);
                needs_commit
            }
            (TransitionTimer::Deadline, TransitionPhase::Revealing) => {
                self.stats.forced += 1;
                tracing::warn!(generation, "transition deadline reached while revealing");
                self.finish(effects);
                false
            }
            (timer, phase) => {
                tracing::debug!(?timer, phase = phase.as_str(), "ignoring out-of-phase timer");
                self.stats.stale_timers += 1;
                false
            }
        }
    }

    fn enter(&mut self, to: TransitionPhase, at: Duration, effects: &mut Vec<TransitionEffect>) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let from = active.phase;
        active.phase = to;
        active.phase_started_at = at;
        tracing::debug!(
            generation = active.generation,
            from = from.as_str(),
            to = to.as_str(),
            "transition phase"
        );
        effects.push(TransitionEffect::Phase {
            generation: active.generation,
            from,
            to,
        });
    }

    fn commit(&mut self, effects: &mut Vec<TransitionEffect>) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        active.committed = true;
        effects.push(TransitionEffect::Commit {
            generation: active.generation,
            location: active.target.clone(),
        });
        true
    }

    fn begin_reveal(&mut self, at: Duration, effects: &mut Vec<TransitionEffect>) {
        self.enter(TransitionPhase::Revealing, at, effects);
        if let Some(active) = self.active.as_ref() {
            self.timers.schedule(
                active.generation,
                at + self.timing.reveal,
                TransitionTimer::RevealComplete,
            );
        }
    }

    fn finish(&mut self, effects: &mut Vec<TransitionEffect>) {
        let Some(active) = self.active.as_ref() else {
            return;
        };
        let generation = active.generation;
        let from = active.phase;
        self.timers.cancel_owner(generation);
        self.active = None;
        self.stats.completed += 1;
        tracing::info!(generation, "transition finished");
        effects.push(TransitionEffect::Phase {
            generation,
            from,
            to: TransitionPhase::Idle,
        });
        effects.push(TransitionEffect::Detach { generation });
    }
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
