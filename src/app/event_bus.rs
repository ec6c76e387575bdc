use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

use crate::event::DomainEvent;

/// Single queue feeding the loop: terminal input from a background task plus
/// whatever the loop posts to itself (commands, app events, relay results).
pub(crate) struct EventBus {
    tx: UnboundedSender<DomainEvent>,
    tasks: Vec<JoinHandle<()>>,
}

impl EventBus {
    pub(crate) fn spawn(capture_input: bool) -> (Self, UnboundedReceiver<DomainEvent>) {
        let (tx, rx) = unbounded_channel();
        let mut tasks = Vec::new();
        if capture_input {
            tasks.push(spawn_input_task(tx.clone()));
        }
        (Self { tx, tasks }, rx)
    }

    pub(crate) fn sender(&self) -> UnboundedSender<DomainEvent> {
        self.tx.clone()
    }

    pub(crate) fn post(&self, event: DomainEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    pub(crate) fn shutdown(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

fn forwards(event: &Event) -> bool {
    matches!(event, Event::Key(_) | Event::Mouse(_) | Event::Resize(_, _))
}

fn spawn_input_task(tx: UnboundedSender<DomainEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut input_stream = EventStream::new();
        while let Some(event) = input_stream.next().await {
            let loop_event = match event {
                Ok(event) if forwards(&event) => DomainEvent::Input(event),
                Ok(_) => continue,
                Err(err) => DomainEvent::InputError(err.to_string()),
            };
            if tx.send(loop_event).is_err() {
                return;
            }
        }
    })
}
