use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{self, MissedTickBehavior};

use crate::command::{ActionId, Command, CommandDispatchResult, CommandOutcome, dispatch};
use crate::error::AppResult;
use crate::event::{AppEvent, DomainEvent};

use super::actors::{SessionClock, UiActor};
use super::core::App;
use super::event_bus::EventBus;
use super::terminal_session::{TerminalSession, TerminalSurface};

struct LoopRuntime {
    clock: SessionClock,
    ui_actor: UiActor,
    session: TerminalSession,
    frame_tick: time::Interval,
    bus: EventBus,
    loop_event_rx: UnboundedReceiver<DomainEvent>,
}

enum WaitEvent {
    Event(DomainEvent),
    FrameTick,
    Deadline,
    Closed,
}

enum LoopControl {
    Continue,
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut runtime = self.initialize_loop_runtime()?;
        let result = self.drive(&mut runtime).await;

        runtime.bus.shutdown();
        runtime.session.restore()?;
        tracing::info!(frames = runtime.ui_actor.frames_drawn(), "session ended");
        result
    }

    fn initialize_loop_runtime(&mut self) -> AppResult<LoopRuntime> {
        let session = TerminalSession::enter(true)?;
        let (bus, loop_event_rx) = EventBus::spawn(true);
        let mut frame_tick = time::interval(Duration::from_millis(self.config.ui.frame_ms));
        frame_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Ok(LoopRuntime {
            clock: SessionClock::new(Instant::now()),
            ui_actor: UiActor::new(),
            session,
            frame_tick,
            bus,
            loop_event_rx,
        })
    }

    async fn drive(&mut self, runtime: &mut LoopRuntime) -> AppResult<()> {
        loop {
            let now = runtime.clock.now();
            let area = runtime.session.area()?;
            if self.sync_frame(now, area) {
                runtime.ui_actor.mark_redraw();
            }
            if runtime.ui_actor.needs_redraw() {
                runtime.session.draw(|frame| self.render(frame, now))?;
                runtime.ui_actor.on_drawn();
            }

            let deadline = self.next_wake().map(|at| runtime.clock.instant_at(at));
            let waited = wait_next_event(
                &mut runtime.loop_event_rx,
                &mut runtime.frame_tick,
                self.is_animating(),
                deadline,
            )
            .await;
            if matches!(
                self.handle_waited_event(waited, runtime)?,
                LoopControl::Break
            ) {
                return Ok(());
            }
        }
    }

    fn handle_waited_event(
        &mut self,
        waited: WaitEvent,
        runtime: &mut LoopRuntime,
    ) -> AppResult<LoopControl> {
        match waited {
            WaitEvent::Event(DomainEvent::Input(event)) => {
                let area = runtime.session.area()?;
                let outcome = self.handle_input_event(event, area);
                if outcome.quit_requested {
                    tracing::info!("quit requested");
                    return Ok(LoopControl::Break);
                }
                if outcome.redraw {
                    runtime.ui_actor.mark_redraw();
                }
                if let Some(command) = outcome.command {
                    runtime.bus.post(DomainEvent::Command(command));
                }
                if outcome.submit_contact
                    && let Some(payload) = self.begin_contact_submit()
                {
                    self.spawn_contact_delivery(payload, runtime.bus.sender());
                }
            }
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                tracing::warn!(error = %message, "terminal input error");
                self.state
                    .status
                    .set(ActionId::Input, format!("input error: {message}"));
                runtime.ui_actor.mark_redraw();
            }
            WaitEvent::Event(DomainEvent::Command(command)) => {
                let dispatched = self.apply_command(command)?;
                for event in dispatched.emitted_events {
                    runtime.bus.post(DomainEvent::App(event));
                }
                runtime.ui_actor.mark_redraw();
                if dispatched.outcome == CommandOutcome::QuitRequested {
                    return Ok(LoopControl::Break);
                }
            }
            WaitEvent::Event(DomainEvent::App(event)) => {
                self.handle_app_event(&event);
            }
            WaitEvent::Event(DomainEvent::ContactDelivered(result)) => {
                self.finish_contact_delivery(result, runtime.clock.now());
                runtime.ui_actor.mark_redraw();
            }
            // Both only exist to get the loop back to `sync_frame`.
            WaitEvent::FrameTick | WaitEvent::Deadline => {}
            WaitEvent::Closed => return Ok(LoopControl::Break),
        }
        Ok(LoopControl::Continue)
    }

    /// Runs a command against the app state. The navigation it causes is
    /// picked up by the next `sync_frame`.
    pub fn apply_command(&mut self, command: Command) -> AppResult<CommandDispatchResult> {
        dispatch(&mut self.state, &mut self.stage, command)
    }

    pub fn handle_app_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::LocationChanged { from, to, reason } => {
                tracing::info!(from = %from, to = %to, reason = ?reason, "location changed");
            }
            AppEvent::ModeChanged { from, to } => {
                tracing::debug!(from = from.as_str(), to = to.as_str(), "mode changed");
            }
            AppEvent::CommandExecuted { id, outcome } => {
                tracing::debug!(action = id.as_str(), outcome = ?outcome, "command executed");
            }
        }
    }
}

async fn wait_next_event(
    loop_event_rx: &mut UnboundedReceiver<DomainEvent>,
    frame_tick: &mut time::Interval,
    animating: bool,
    deadline: Option<time::Instant>,
) -> WaitEvent {
    tokio::select! {
        biased;
        maybe_loop = loop_event_rx.recv() => {
            match maybe_loop {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = frame_tick.tick(), if animating => WaitEvent::FrameTick,
        _ = sleep_until_deadline(deadline) => WaitEvent::Deadline,
    }
}

async fn sleep_until_deadline(deadline: Option<time::Instant>) {
    match deadline {
        Some(at) => time::sleep_until(at).await,
        None => std::future::pending::<()>().await,
    }
}
