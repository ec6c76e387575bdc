use std::sync::Arc;

use crate::config::Config;
use crate::contact::{ContactRelay, OutboxRelay};
use crate::cursor::CursorFollower;
use crate::error::AppResult;
use crate::input::KeymapPreset;
use crate::nav::Navigator;
use crate::route::Location;

use super::stage::PageStage;
use super::state::AppState;

pub struct App {
    pub state: AppState,
    pub stage: PageStage,
    pub navigator: Navigator,
    pub cursor: CursorFollower,
    pub config: Config,
    pub(crate) relay: Arc<dyn ContactRelay>,
    pub(crate) keymap: KeymapPreset,
}

impl App {
    pub fn new(initial: Location) -> AppResult<Self> {
        let config = Config::load()?;
        Ok(Self::new_with_config(config, initial))
    }

    pub fn new_with_config(config: Config, initial: Location) -> Self {
        let relay: Arc<dyn ContactRelay> =
            Arc::new(OutboxRelay::new(config.contact.resolved_outbox_path()));
        Self::with_relay(config, initial, relay)
    }

    pub fn with_relay(config: Config, initial: Location, relay: Arc<dyn ContactRelay>) -> Self {
        let config = config.sanitized();
        tracing::info!(
            location = %initial,
            transitions = config.transition.enabled,
            relay = relay.name(),
            "app initialized"
        );
        Self {
            state: AppState::new(initial),
            stage: PageStage::new(u32::from(config.scroll.condensed_after_rows)),
            navigator: Navigator::new(config.transition.timing(), config.transition.enabled),
            cursor: CursorFollower::new(config.ui.cursor_smoothing),
            keymap: KeymapPreset::parse(&config.keymap.preset),
            relay,
            config,
        }
    }
}
