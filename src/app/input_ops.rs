use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tui_input::backend::crossterm::EventHandler;

use crate::command::{ActionId, Command, parse_command_text};
use crate::input::map_key_to_command_with_preset;
use crate::route::Location;
use crate::ui::{NavTarget, link_at, navbar_links, split_layout};

use super::core::App;
use super::state::Mode;

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct InputEventOutcome {
    pub(crate) redraw: bool,
    pub(crate) quit_requested: bool,
    pub(crate) command: Option<Command>,
    pub(crate) submit_contact: bool,
}

impl InputEventOutcome {
    fn redraw() -> Self {
        Self {
            redraw: true,
            ..Self::default()
        }
    }

    fn command(command: Command) -> Self {
        Self {
            command: Some(command),
            ..Self::default()
        }
    }
}

impl App {
    /// Translates a terminal event into state edits or a command to
    /// dispatch. `area` is the full terminal area used for hit testing.
    pub(crate) fn handle_input_event(&mut self, event: Event, area: Rect) -> InputEventOutcome {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                self.handle_key_event(key)
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, area),
            Event::Resize(_, _) => InputEventOutcome::redraw(),
            _ => InputEventOutcome::default(),
        }
    }

    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) -> InputEventOutcome {
        match self.state.mode {
            Mode::Normal => {
                let command = map_key_to_command_with_preset(
                    key,
                    self.state.mode,
                    self.keymap,
                    self.config.scroll.step_rows,
                );
                match command {
                    Some(Command::Quit) => InputEventOutcome {
                        quit_requested: true,
                        ..InputEventOutcome::default()
                    },
                    Some(command) => InputEventOutcome::command(command),
                    None => InputEventOutcome::default(),
                }
            }
            Mode::Prompt => self.handle_prompt_key(key),
            Mode::Compose => self.handle_compose_key(key),
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) -> InputEventOutcome {
        match key.code {
            KeyCode::Esc => InputEventOutcome::command(Command::Cancel),
            KeyCode::Enter => {
                let text = self.state.prompt.value().to_string();
                self.state.mode = Mode::Normal;
                match parse_command_text(&text) {
                    Ok(command) => InputEventOutcome::command(command),
                    Err(err) => {
                        self.state.status.set(ActionId::SubmitPrompt, err.to_string());
                        InputEventOutcome::redraw()
                    }
                }
            }
            _ => {
                let changed = self.state.prompt.handle_event(&Event::Key(key)).is_some();
                InputEventOutcome {
                    redraw: changed,
                    ..InputEventOutcome::default()
                }
            }
        }
    }

    fn handle_compose_key(&mut self, key: KeyEvent) -> InputEventOutcome {
        if key.code == KeyCode::Esc {
            return InputEventOutcome::command(Command::Cancel);
        }
        if self.state.contact.is_submitting() {
            return InputEventOutcome::default();
        }
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.state.contact.focus_next();
                InputEventOutcome::redraw()
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.contact.focus_prev();
                InputEventOutcome::redraw()
            }
            KeyCode::Enter if self.state.contact.focused().is_last() => InputEventOutcome {
                redraw: true,
                submit_contact: true,
                ..InputEventOutcome::default()
            },
            KeyCode::Enter => {
                self.state.contact.focus_next();
                InputEventOutcome::redraw()
            }
            _ => InputEventOutcome {
                redraw: self.state.contact.handle_key(key),
                ..InputEventOutcome::default()
            },
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent, area: Rect) -> InputEventOutcome {
        let layout = split_layout(area, self.stage.is_condensed());
        let links = navbar_links(layout.navbar);
        let nav_hit = link_at(&links, mouse.column, mouse.row).map(|link| link.target.clone());
        let page_hit = self.page_link_at(layout.page, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if !self.config.ui.cursor_enabled {
                    return InputEventOutcome::default();
                }
                self.cursor.pointer_moved(mouse.column, mouse.row);
                self.cursor
                    .set_hovering(nav_hit.is_some() || page_hit.is_some());
                InputEventOutcome::redraw()
            }
            _ if self.state.mode != Mode::Normal => InputEventOutcome::default(),
            MouseEventKind::Down(MouseButton::Left) => {
                let command = match (nav_hit, page_hit) {
                    (Some(NavTarget::Section(id)), _) => Some(Command::ScrollToSection { id }),
                    (Some(NavTarget::Page(location)), _) | (None, Some(location)) => {
                        Some(Command::Navigate { location })
                    }
                    (None, None) => None,
                };
                command.map_or_else(InputEventOutcome::default, InputEventOutcome::command)
            }
            MouseEventKind::ScrollDown => InputEventOutcome::command(Command::ScrollBy {
                rows: i32::from(self.config.scroll.step_rows),
            }),
            MouseEventKind::ScrollUp => InputEventOutcome::command(Command::ScrollBy {
                rows: -i32::from(self.config.scroll.step_rows),
            }),
            _ => InputEventOutcome::default(),
        }
    }

    fn page_link_at(&self, page: Rect, column: u16, row: u16) -> Option<Location> {
        if column < page.x
            || row < page.y
            || column >= page.x.saturating_add(page.width)
            || row >= page.y.saturating_add(page.height)
        {
            return None;
        }
        let document_row = self.stage.offset() + u32::from(row - page.y);
        self.stage.layout()?.link_at(document_row).cloned()
    }
}
