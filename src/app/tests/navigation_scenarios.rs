use std::time::Duration;

use ratatui::layout::Rect;

use crate::app::App;
use crate::command::Command;
use crate::config::Config;
use crate::route::Location;
use crate::scroll::SectionId;
use crate::transition::{TransitionEffect, TransitionPhase};

const AREA: Rect = Rect::new(0, 0, 80, 24);

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn started_app(initial: &str) -> App {
    let mut app = App::new_with_config(Config::default(), Location::new(initial));
    app.sync_frame(Duration::ZERO, AREA);
    app
}

fn navigate(app: &mut App, path: &str) {
    app.apply_command(Command::Navigate {
        location: Location::new(path),
    })
    .expect("navigate should dispatch");
}

/// Frames at a fixed step, recording each phase change, until idle or the
/// limit is reached. Returns the time of the last frame.
fn run_frames(
    app: &mut App,
    from: Duration,
    until: Duration,
    phases: &mut Vec<TransitionPhase>,
) -> Duration {
    let mut now = from;
    while now <= until {
        app.sync_frame(now, AREA);
        let phase = app.navigator.phase();
        if phases.last() != Some(&phase) {
            phases.push(phase);
        }
        if phase == TransitionPhase::Idle && now > from {
            break;
        }
        now += ms(16);
    }
    now
}

#[test]
fn first_load_mounts_without_transition_for_any_location() {
    for path in ["/", "/work", "/about", "/work/mon-cabinet", "/nowhere"] {
        let mut app = started_app(path);
        assert!(app.navigator.session().has_navigated_once());
        assert_eq!(app.navigator.phase(), TransitionPhase::Idle);
        assert_eq!(app.navigator.displayed(), Some(&Location::new(path)));

        app.sync_frame(ms(500), AREA);
        assert_eq!(app.navigator.phase(), TransitionPhase::Idle);
        assert_eq!(app.navigator.sequencer().stats().started, 0);
    }
}

#[test]
fn link_to_work_runs_the_full_sequence_once_and_detaches() {
    let mut app = started_app("/");
    navigate(&mut app, "/work");

    let mut phases = Vec::new();
    run_frames(&mut app, Duration::ZERO, ms(5_000), &mut phases);

    assert_eq!(
        phases,
        vec![
            TransitionPhase::Covering,
            TransitionPhase::Committing,
            TransitionPhase::Revealing,
            TransitionPhase::Idle,
        ]
    );
    assert_eq!(app.stage.location(), Some(&Location::new("/work")));
    assert!(app.navigator.overlay(ms(5_000)).is_none());
    assert_eq!(app.navigator.sequencer().pending_timers(), 0);
    assert_eq!(app.navigator.sequencer().stats().completed, 1);
}

#[test]
fn content_swaps_only_while_fully_covered() {
    let mut app = started_app("/");
    navigate(&mut app, "/work");

    app.sync_frame(Duration::ZERO, AREA);
    app.sync_frame(ms(200), AREA);
    assert_eq!(app.stage.location(), Some(&Location::root()));

    app.sync_frame(ms(400), AREA);
    assert_eq!(app.stage.location(), Some(&Location::new("/work")));
    let overlay = app.navigator.overlay(ms(400)).expect("overlay present");
    assert_eq!(overlay.phase, TransitionPhase::Committing);
    assert!((overlay.coverage - 1.0).abs() < f32::EPSILON);
}

#[test]
fn rerender_with_same_location_never_starts_a_transition() {
    let mut app = started_app("/about");
    for frame in 1..20 {
        app.sync_frame(ms(frame * 16), AREA);
    }
    navigate(&mut app, "/about");
    app.sync_frame(ms(400), AREA);

    assert_eq!(app.navigator.phase(), TransitionPhase::Idle);
    assert_eq!(app.navigator.sequencer().stats().started, 0);
}

#[test]
fn second_click_before_reveal_supersedes_first_sequence() {
    let mut app = started_app("/");
    navigate(&mut app, "/work");
    app.sync_frame(Duration::ZERO, AREA);
    app.sync_frame(ms(100), AREA);
    assert_eq!(app.navigator.phase(), TransitionPhase::Covering);
    let first = app.navigator.sequencer().generation();

    navigate(&mut app, "/about");
    app.sync_frame(ms(120), AREA);
    let second = app.navigator.sequencer().generation();
    assert_ne!(first, second);
    assert_eq!(
        app.navigator.sequencer().active_route(),
        Some((&Location::root(), &Location::new("/about")))
    );

    let mut mounted = Vec::new();
    let mut now = ms(120);
    while app.navigator.phase() != TransitionPhase::Idle && now < ms(5_000) {
        now += ms(16);
        app.sync_frame(now, AREA);
        if let Some(location) = app.stage.location()
            && mounted.last() != Some(location)
        {
            mounted.push(location.clone());
        }
    }

    assert_eq!(app.stage.location(), Some(&Location::new("/about")));
    assert!(!mounted.contains(&Location::new("/work")));
    let stats = app.navigator.sequencer().stats();
    assert_eq!(stats.superseded, 1);
    assert_eq!(stats.completed, 1);
    assert_eq!(app.navigator.sequencer().pending_timers(), 0);
}

#[test]
fn stale_generation_effects_never_follow_supersession() {
    let mut app = started_app("/");
    navigate(&mut app, "/work");
    let mut effects = app
        .navigator
        .observe(&Location::new("/work"), Duration::ZERO, &mut app.stage);
    let first = app.navigator.sequencer().generation();

    navigate(&mut app, "/about");
    effects.extend(
        app.navigator
            .observe(&Location::new("/about"), ms(50), &mut app.stage),
    );
    let cut = effects.len();
    let mut now = ms(50);
    while now < ms(5_000) {
        now += ms(10);
        effects.extend(app.navigator.advance(now, &mut app.stage));
    }

    assert!(effects.iter().any(|effect| matches!(
        effect,
        TransitionEffect::Superseded { generation, .. } if *generation == first
    )));
    assert!(
        effects[cut..]
            .iter()
            .all(|effect| effect.generation() != first)
    );
}

#[test]
fn back_during_reveal_starts_a_fresh_sequence() {
    let mut app = started_app("/");
    navigate(&mut app, "/work");
    app.sync_frame(Duration::ZERO, AREA);
    app.sync_frame(ms(400), AREA);
    app.sync_frame(ms(700), AREA);
    assert_eq!(app.navigator.phase(), TransitionPhase::Revealing);

    app.apply_command(Command::Back).expect("back should dispatch");
    let mut phases = Vec::new();
    run_frames(&mut app, ms(710), ms(5_000), &mut phases);

    assert_eq!(app.stage.location(), Some(&Location::root()));
    assert_eq!(phases.first(), Some(&TransitionPhase::Covering));
    assert_eq!(phases.last(), Some(&TransitionPhase::Idle));
    assert!(app.state.router.can_go_forward());
    assert_eq!(app.navigator.sequencer().pending_timers(), 0);
}

#[test]
fn section_jump_from_another_page_lands_after_home_mounts() {
    let mut app = started_app("/work");
    app.apply_command(Command::ScrollToSection {
        id: SectionId::Projects,
    })
    .expect("section jump should dispatch");
    assert_eq!(app.stage.pending_section(), Some(SectionId::Projects));
    assert_eq!(app.state.router.location(), &Location::root());

    let mut phases = Vec::new();
    run_frames(&mut app, Duration::ZERO, ms(5_000), &mut phases);

    assert!(app.stage.is_home());
    assert_eq!(app.stage.pending_section(), None);
    let start = app
        .stage
        .layout()
        .and_then(|layout| layout.section_start(SectionId::Projects))
        .expect("home lays out the projects section");
    assert!(app.stage.offset() > 0);
    assert!(app.stage.offset() <= start);
}

#[test]
fn scrolling_home_moves_active_section_forward_only() {
    let mut app = started_app("/");
    let mut seen: Vec<SectionId> = Vec::new();
    for frame in 0..200u64 {
        app.apply_command(Command::ScrollBy { rows: 1 })
            .expect("scroll should dispatch");
        app.sync_frame(ms(frame * 16), AREA);
        if let Some(id) = app.stage.active_section().id()
            && seen.last() != Some(&id)
        {
            seen.push(id);
        }
    }

    let order: Vec<usize> = seen
        .iter()
        .map(|id| {
            crate::content::HOME_SECTIONS
                .iter()
                .position(|section| section.id == *id)
                .expect("active section is a home section")
        })
        .collect();
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(seen.len() > 1);
}
