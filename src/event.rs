use crossterm::event::Event;

use crate::app::Mode;
use crate::command::{ActionId, Command, CommandOutcome};
use crate::route::Location;

/// Describes *why* the router location changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavReason {
    /// Link, key binding, or prompt `go`.
    Link,
    /// Section jump from another page back to home.
    Section,
    /// Back/forward traversal.
    History,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    CommandExecuted {
        id: ActionId,
        outcome: CommandOutcome,
    },
    LocationChanged {
        from: Location,
        to: Location,
        reason: NavReason,
    },
    ModeChanged {
        from: Mode,
        to: Mode,
    },
}

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    Command(Command),
    App(AppEvent),
    ContactDelivered(Result<(), String>),
}
