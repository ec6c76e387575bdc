use tui_input::Input;

use crate::app::{AppState, Mode, PageStage};
use crate::contact::ContactField;
use crate::error::AppResult;
use crate::event::{AppEvent, NavReason};
use crate::route::Location;
use crate::scroll::SectionId;

use super::types::{ActionId, Command, CommandOutcome};

#[derive(Debug, Clone)]
pub struct CommandDispatchResult {
    pub outcome: CommandOutcome,
    pub emitted_events: Vec<AppEvent>,
}

pub fn dispatch(
    app: &mut AppState,
    stage: &mut PageStage,
    cmd: Command,
) -> AppResult<CommandDispatchResult> {
    let previous_location = app.router.location().clone();
    let prev_mode = app.mode;
    let action_id = cmd.action_id();

    let (outcome, reason) = match cmd {
        Command::Navigate { location } => {
            let pushed = app.router.push(location.clone());
            app.status.set(action_id, format!("go {location}"));
            (applied_if(pushed), NavReason::Link)
        }
        Command::Back => {
            let moved = app.router.back();
            app.status.set(
                action_id,
                if moved { "history back" } else { "no earlier page" },
            );
            (applied_if(moved), NavReason::History)
        }
        Command::Forward => {
            let moved = app.router.forward();
            app.status.set(
                action_id,
                if moved { "history forward" } else { "no later page" },
            );
            (applied_if(moved), NavReason::History)
        }
        Command::ScrollBy { rows } => (applied_if(stage.scroll_by(rows)), NavReason::Link),
        Command::ScrollToSection { id } => (jump_to_section(app, stage, id), NavReason::Section),
        Command::NextSection => match stage.next_section().filter(|_| stage.is_home()) {
            Some(id) => (jump_to_section(app, stage, id), NavReason::Section),
            None => (CommandOutcome::Noop, NavReason::Section),
        },
        Command::PrevSection => match stage.prev_section().filter(|_| stage.is_home()) {
            Some(id) => (jump_to_section(app, stage, id), NavReason::Section),
            None => (CommandOutcome::Noop, NavReason::Section),
        },
        Command::OpenPrompt => {
            app.prompt = Input::default();
            app.mode = Mode::Prompt;
            app.status.set(action_id, "command prompt");
            (CommandOutcome::Applied, NavReason::Link)
        }
        Command::OpenContact => {
            app.contact.focus(ContactField::Name);
            app.mode = Mode::Compose;
            app.status.set(action_id, "write a message");
            (CommandOutcome::Applied, NavReason::Link)
        }
        Command::Cancel => {
            let outcome = applied_if(app.mode != Mode::Normal);
            app.mode = Mode::Normal;
            app.status.set(action_id, "canceled current mode");
            (outcome, NavReason::Link)
        }
        Command::Quit => {
            app.status.set(action_id, "quit requested");
            (CommandOutcome::QuitRequested, NavReason::Link)
        }
    };

    let mut emitted_events = Vec::new();
    if *app.router.location() != previous_location {
        emitted_events.push(AppEvent::LocationChanged {
            from: previous_location,
            to: app.router.location().clone(),
            reason,
        });
    }
    if app.mode != prev_mode {
        emitted_events.push(AppEvent::ModeChanged {
            from: prev_mode,
            to: app.mode,
        });
    }
    emitted_events.push(AppEvent::CommandExecuted {
        id: action_id,
        outcome,
    });

    Ok(CommandDispatchResult {
        outcome,
        emitted_events,
    })
}

fn applied_if(changed: bool) -> CommandOutcome {
    if changed {
        CommandOutcome::Applied
    } else {
        CommandOutcome::Noop
    }
}

/// Sections live on the home page. From anywhere else the jump is deferred
/// until home has been mounted.
fn jump_to_section(app: &mut AppState, stage: &mut PageStage, id: SectionId) -> CommandOutcome {
    let home = Location::root();
    if stage.is_home() && *app.router.location() == home {
        stage.scroll_to_section(id);
        app.status
            .set(ActionId::ScrollToSection, format!("section #{}", id.anchor()));
        return CommandOutcome::Applied;
    }

    stage.set_pending_section(id);
    app.router.push(home);
    app.status.set(
        ActionId::ScrollToSection,
        format!("section #{} after returning home", id.anchor()),
    );
    CommandOutcome::Applied
}

#[cfg(test)]
mod tests {
    use crate::app::{AppState, Mode, PageStage};
    use crate::command::{ActionId, Command, CommandOutcome};
    use crate::event::{AppEvent, NavReason};
    use crate::nav::PageHost;
    use crate::route::Location;
    use crate::scroll::SectionId;

    use super::dispatch;

    fn mounted(location: &str) -> (AppState, PageStage) {
        let location = Location::new(location);
        let mut stage = PageStage::new(4);
        stage.resize(60, 12);
        stage.mount(&location);
        (AppState::new(location), stage)
    }

    #[test]
    fn navigate_emits_location_changed_and_command_executed() {
        let (mut app, mut stage) = mounted("/");
        let result = dispatch(
            &mut app,
            &mut stage,
            Command::Navigate {
                location: Location::new("/work"),
            },
        )
        .expect("dispatch should succeed");

        assert_eq!(result.outcome, CommandOutcome::Applied);
        assert_eq!(result.emitted_events.len(), 2);
        assert_eq!(
            result.emitted_events[0],
            AppEvent::LocationChanged {
                from: Location::root(),
                to: Location::new("/work"),
                reason: NavReason::Link,
            }
        );
        assert!(matches!(
            result.emitted_events[1],
            AppEvent::CommandExecuted {
                id: ActionId::Navigate,
                outcome: CommandOutcome::Applied
            }
        ));
    }

    #[test]
    fn navigate_to_current_location_is_noop() {
        let (mut app, mut stage) = mounted("/about");
        let result = dispatch(
            &mut app,
            &mut stage,
            Command::Navigate {
                location: Location::new("/about/"),
            },
        )
        .expect("dispatch should succeed");
        assert_eq!(result.outcome, CommandOutcome::Noop);
        assert_eq!(result.emitted_events.len(), 1);
    }

    #[test]
    fn back_reports_history_reason() {
        let (mut app, mut stage) = mounted("/");
        app.router.push(Location::new("/work"));
        let result = dispatch(&mut app, &mut stage, Command::Back).expect("dispatch should succeed");
        assert!(matches!(
            result.emitted_events[0],
            AppEvent::LocationChanged {
                reason: NavReason::History,
                ..
            }
        ));
        assert_eq!(app.router.location(), &Location::root());
    }

    #[test]
    fn section_jump_on_home_scrolls_in_place() {
        let (mut app, mut stage) = mounted("/");
        let result = dispatch(
            &mut app,
            &mut stage,
            Command::ScrollToSection {
                id: SectionId::Skills,
            },
        )
        .expect("dispatch should succeed");
        assert_eq!(result.outcome, CommandOutcome::Applied);
        assert!(stage.offset() > 0);
        assert_eq!(app.router.location(), &Location::root());
        assert_eq!(stage.pending_section(), None);
    }

    #[test]
    fn section_jump_elsewhere_returns_home_first() {
        let (mut app, mut stage) = mounted("/work/portfolio");
        dispatch(
            &mut app,
            &mut stage,
            Command::ScrollToSection {
                id: SectionId::Contact,
            },
        )
        .expect("dispatch should succeed");
        assert_eq!(app.router.location(), &Location::root());
        assert_eq!(stage.pending_section(), Some(SectionId::Contact));
        assert_eq!(stage.offset(), 0);
    }

    #[test]
    fn prompt_and_cancel_emit_mode_changes() {
        let (mut app, mut stage) = mounted("/");
        let opened =
            dispatch(&mut app, &mut stage, Command::OpenPrompt).expect("dispatch should succeed");
        assert_eq!(app.mode, Mode::Prompt);
        assert!(matches!(
            opened.emitted_events[0],
            AppEvent::ModeChanged {
                from: Mode::Normal,
                to: Mode::Prompt
            }
        ));

        let canceled =
            dispatch(&mut app, &mut stage, Command::Cancel).expect("dispatch should succeed");
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(canceled.outcome, CommandOutcome::Applied);
    }

    #[test]
    fn quit_requests_shutdown() {
        let (mut app, mut stage) = mounted("/");
        let result = dispatch(&mut app, &mut stage, Command::Quit).expect("dispatch should succeed");
        assert_eq!(result.outcome, CommandOutcome::QuitRequested);
    }
}
