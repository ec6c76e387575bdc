use std::time::Duration;

use crate::app::App;
use crate::command::Command;
use crate::config::Config;
use crate::input::KeymapPreset;
use crate::route::Location;
use crate::transition::TransitionPhase;
use ratatui::layout::Rect;

const AREA: Rect = Rect::new(0, 0, 80, 24);

#[test]
fn new_with_config_applies_keymap_preset() {
    let mut config = Config::default();
    config.keymap.preset = "emacs".to_string();

    let app = App::new_with_config(config, Location::root());
    assert_eq!(app.keymap, KeymapPreset::Emacs);
}

#[test]
fn new_with_config_sanitizes_values() {
    let mut config = Config::default();
    config.ui.frame_ms = 0;
    config.scroll.step_rows = 0;
    config.transition.max_duration_ms = 10;

    let app = App::new_with_config(config, Location::root());
    assert_eq!(app.config.ui.frame_ms, 1);
    assert_eq!(app.config.scroll.step_rows, 1);
    assert!(app.config.transition.max_duration_ms > 1300);
}

#[test]
fn disabled_transitions_swap_pages_without_overlay() {
    let mut config = Config::default();
    config.transition.enabled = false;
    let mut app = App::new_with_config(config, Location::root());
    app.sync_frame(Duration::ZERO, AREA);

    app.apply_command(Command::Navigate {
        location: Location::new("/about"),
    })
    .expect("navigate should dispatch");
    app.sync_frame(Duration::from_millis(16), AREA);

    assert_eq!(app.navigator.phase(), TransitionPhase::Idle);
    assert!(app.navigator.overlay(Duration::from_millis(16)).is_none());
    assert_eq!(app.stage.location(), Some(&Location::new("/about")));
    assert_eq!(app.navigator.sequencer().stats().started, 0);
}
