use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Mode;
use crate::command::Command;
use crate::route::{Location, Route};
use crate::scroll::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Emacs,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "emacs" => Self::Emacs,
            _ => Self::Default,
        }
    }
}

/// Only normal mode is mapped here; prompt and compose modes edit text and
/// handle their own keys.
pub fn map_key_to_command_with_preset(
    key: KeyEvent,
    mode: Mode,
    preset: KeymapPreset,
    step_rows: u16,
) -> Option<Command> {
    let step = i32::from(step_rows.max(1));
    match mode {
        Mode::Normal => match preset {
            KeymapPreset::Default => map_normal_mode_key_default(key, step),
            KeymapPreset::Emacs => map_normal_mode_key_emacs(key, step),
        },
        Mode::Prompt | Mode::Compose => None,
    }
}

fn page_shortcut(index: usize) -> Option<Command> {
    Route::top_level()
        .get(index)
        .map(|(_, path)| Command::Navigate {
            location: Location::new(path),
        })
}

fn map_normal_mode_key_default(key: KeyEvent, step: i32) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('o') => Some(Command::Back),
            KeyCode::Char('i') => Some(Command::Forward),
            KeyCode::Char('d') => Some(Command::ScrollBy { rows: step * 5 }),
            KeyCode::Char('u') => Some(Command::ScrollBy { rows: -step * 5 }),
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(':') => Some(Command::OpenPrompt),
        KeyCode::Char('j') | KeyCode::Down => Some(Command::ScrollBy { rows: step }),
        KeyCode::Char('k') | KeyCode::Up => Some(Command::ScrollBy { rows: -step }),
        KeyCode::Char('h') | KeyCode::Left => Some(Command::Back),
        KeyCode::Char('l') | KeyCode::Right => Some(Command::Forward),
        KeyCode::Char('1') => page_shortcut(0),
        KeyCode::Char('2') => page_shortcut(1),
        KeyCode::Char('3') => page_shortcut(2),
        KeyCode::Char('4') => Some(Command::ScrollToSection {
            id: SectionId::Contact,
        }),
        KeyCode::Char(']') => Some(Command::NextSection),
        KeyCode::Char('[') => Some(Command::PrevSection),
        KeyCode::Char('g') | KeyCode::Home => Some(Command::ScrollToSection {
            id: SectionId::Home,
        }),
        KeyCode::Char('c') => Some(Command::OpenContact),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Cancel),
        _ => None,
    }
}

fn map_normal_mode_key_emacs(key: KeyEvent, step: i32) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('x') => Some(Command::OpenPrompt),
            KeyCode::Char('v') => Some(Command::ScrollBy { rows: -step * 5 }),
            KeyCode::Char('}') => Some(Command::NextSection),
            KeyCode::Char('{') => Some(Command::PrevSection),
            KeyCode::Char('<') => Some(Command::ScrollToSection {
                id: SectionId::Home,
            }),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => Some(Command::ScrollBy { rows: step }),
            KeyCode::Char('p') => Some(Command::ScrollBy { rows: -step }),
            KeyCode::Char('v') => Some(Command::ScrollBy { rows: step * 5 }),
            KeyCode::Char('b') => Some(Command::Back),
            KeyCode::Char('f') => Some(Command::Forward),
            KeyCode::Char('g') => Some(Command::Cancel),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::PageDown => Some(Command::ScrollBy { rows: step * 5 }),
        KeyCode::PageUp => Some(Command::ScrollBy { rows: -step * 5 }),
        _ => map_normal_mode_key_default(key, step),
    }
}
