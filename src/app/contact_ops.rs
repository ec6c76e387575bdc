use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use crate::command::ActionId;
use crate::contact::ContactPayload;
use crate::event::DomainEvent;

use super::core::App;
use super::state::Mode;

impl App {
    /// Validates the form and marks it as submitting. Validation errors end
    /// up in the status line and leave the form open.
    pub fn begin_contact_submit(&mut self) -> Option<ContactPayload> {
        if self.state.contact.is_submitting() {
            return None;
        }
        match self.state.contact.payload(&self.config.contact.recipient) {
            Ok(payload) => {
                self.state.contact.set_submitting(true);
                self.state.status.set(ActionId::SubmitContact, "sending message");
                Some(payload)
            }
            Err(err) => {
                self.state.status.set(ActionId::SubmitContact, err.to_string());
                None
            }
        }
    }

    pub fn finish_contact_delivery(&mut self, result: Result<(), String>, now: Duration) {
        self.state.contact.set_submitting(false);
        let until = now + Duration::from_millis(self.config.ui.notice_ms);
        match result {
            Ok(()) => {
                tracing::info!(relay = self.relay.name(), "contact message delivered");
                self.state.contact.reset();
                self.state.mode = Mode::Normal;
                self.state
                    .status
                    .notice(ActionId::ContactDelivery, "message sent", until);
            }
            Err(message) => {
                tracing::warn!(relay = self.relay.name(), error = %message, "contact delivery failed");
                self.state.status.notice(
                    ActionId::ContactDelivery,
                    format!("message not sent: {message}"),
                    until,
                );
            }
        }
    }

    /// Relay I/O is blocking; the result comes back through the bus.
    pub(crate) fn spawn_contact_delivery(
        &self,
        payload: ContactPayload,
        tx: UnboundedSender<DomainEvent>,
    ) {
        let relay = Arc::clone(&self.relay);
        tokio::task::spawn_blocking(move || {
            let result = relay.deliver(&payload).map_err(|err| err.to_string());
            let _ = tx.send(DomainEvent::ContactDelivered(result));
        });
    }
}
