mod actors;
mod contact_ops;
mod core;
mod event_bus;
mod event_loop;
mod frame_ops;
mod input_ops;
mod render_ops;
mod stage;
mod state;
pub(crate) mod terminal_session;

#[cfg(test)]
mod tests;

pub use core::App;
pub use stage::PageStage;
pub use state::{AppState, Mode, StatusState};
