pub mod keymap;

pub use keymap::{KeymapPreset, map_key_to_command_with_preset};
