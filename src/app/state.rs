use std::time::Duration;

use tui_input::Input;

use crate::command::ActionId;
use crate::contact::ContactForm;
use crate::route::{Location, Router};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Prompt,
    Compose,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Prompt => "PROMPT",
            Self::Compose => "COMPOSE",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action_id: Option<ActionId>,
    /// Session time after which `message` is cleared.
    pub expires_at: Option<Duration>,
}

impl StatusState {
    pub fn set(&mut self, id: ActionId, message: impl Into<String>) {
        self.last_action_id = Some(id);
        self.message = message.into();
        self.expires_at = None;
    }

    pub fn notice(&mut self, id: ActionId, message: impl Into<String>, until: Duration) {
        self.set(id, message);
        self.expires_at = Some(until);
    }

    /// Clears an expired notice. Returns `true` when something was cleared.
    pub fn expire(&mut self, now: Duration) -> bool {
        match self.expires_at {
            Some(until) if now >= until => {
                self.message.clear();
                self.expires_at = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub router: Router,
    pub mode: Mode,
    pub status: StatusState,
    pub prompt: Input,
    pub contact: ContactForm,
}

impl AppState {
    pub fn new(initial: Location) -> Self {
        Self {
            router: Router::new(initial),
            mode: Mode::Normal,
            status: StatusState::default(),
            prompt: Input::default(),
            contact: ContactForm::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Location::root())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::StatusState;
    use crate::command::ActionId;

    #[test]
    fn notice_expires_at_deadline() {
        let mut status = StatusState::default();
        status.notice(
            ActionId::ContactDelivery,
            "message sent",
            Duration::from_secs(5),
        );
        assert!(!status.expire(Duration::from_millis(4999)));
        assert_eq!(status.message, "message sent");
        assert!(status.expire(Duration::from_secs(5)));
        assert!(status.message.is_empty());
        assert!(!status.expire(Duration::from_secs(6)));
    }

    #[test]
    fn plain_status_never_expires() {
        let mut status = StatusState::default();
        status.set(ActionId::Back, "history back");
        assert!(!status.expire(Duration::from_secs(3600)));
        assert_eq!(status.last_action_id, Some(ActionId::Back));
    }
}
