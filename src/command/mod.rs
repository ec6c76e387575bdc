mod dispatch;
mod parse;
mod spec;
mod types;

pub use dispatch::{CommandDispatchResult, dispatch};
pub use parse::parse_command_text;
pub use spec::{all_command_specs, command_spec};
pub use types::{ActionId, Command, CommandOutcome, CommandSpec};
