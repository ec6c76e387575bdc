use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::command::all_command_specs;
use crate::route::resolve_page_name;
use crate::ui::{
    NavbarView, StatusView, draw_contact_overlay, draw_cursor, draw_navbar, draw_page,
    draw_prompt_overlay, draw_status, draw_transition_overlay, split_layout,
};

use super::core::App;
use super::state::Mode;

impl App {
    pub fn render(&self, frame: &mut Frame<'_>, now: Duration) {
        let area = frame.area();
        let layout = split_layout(area, self.stage.is_condensed());
        let location = self.state.router.location();

        draw_navbar(
            frame,
            layout.navbar,
            NavbarView {
                location,
                on_home: self.stage.is_home(),
                active_section: self.stage.active_section(),
                condensed: self.stage.is_condensed(),
                hovered: self.cursor.pointer(),
            },
        );
        draw_page(frame, layout.page, self.stage.layout(), self.stage.offset());

        // Name and path both follow the mounted page; the router moves ahead
        // of it while the overlay is covering.
        let page_name = self.navigator.page_name().map_or("", |name| name.as_str());
        let displayed = self.navigator.displayed().unwrap_or(location);
        draw_status(
            frame,
            layout.status,
            StatusView {
                page_name,
                location: displayed,
                phase: self.navigator.phase().as_str(),
                mode: self.state.mode.as_str(),
                message: &self.state.status.message,
                can_go_back: self.state.router.can_go_back(),
                can_go_forward: self.state.router.can_go_forward(),
            },
        );

        let viewport = Rect::new(
            area.x,
            area.y,
            area.width,
            area.height.saturating_sub(layout.status.height),
        );
        if let Some(overlay) = self.navigator.overlay(now) {
            let destination = self
                .navigator
                .sequencer()
                .active_route()
                .map_or("", |(_, to)| resolve_page_name(to).as_str());
            draw_transition_overlay(frame, viewport, overlay, destination);
        }

        match self.state.mode {
            Mode::Normal => {}
            Mode::Prompt => draw_prompt_overlay(
                frame,
                viewport,
                self.state.prompt.value(),
                self.state.prompt.visual_cursor(),
                all_command_specs(),
            ),
            Mode::Compose => draw_contact_overlay(
                frame,
                viewport,
                &self.state.contact,
                &self.config.contact.recipient,
            ),
        }

        if self.config.ui.cursor_enabled
            && let Some(cell) = self.cursor.cell()
        {
            draw_cursor(frame, area, cell, self.cursor.glyph());
        }
    }
}
