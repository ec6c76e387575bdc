mod sequencer;
mod timers;

pub use sequencer::{
    OverlayFrame, TransitionEffect, TransitionPhase, TransitionSequencer, TransitionStats,
    TransitionTimer, TransitionTiming,
};
pub use timers::{FiredTimer, TimerId, TimerQueue};
