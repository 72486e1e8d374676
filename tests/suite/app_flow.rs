//! Key-driven flows through the terminal app state.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sentience_engine::{Verdict, VerdictFilter};
use sentience_tui::{App, Screen, handle_key};

use crate::common::{builtin_app, press, press_chars};

fn current(app: &App) -> &str {
    app.session().current_id().as_str()
}

#[test]
fn number_then_yes_keys_reach_iit() {
    let mut app = builtin_app();
    press_chars(&mut app, "1yyyy");
    assert_eq!(current(&app), "iit");
    assert_eq!(app.session().subject_term(), "this AI system");
    assert!(app.notice().is_none());
}

#[test]
fn arrows_and_enter_pick_the_highlighted_option() {
    let mut app = builtin_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.cursor(), 2);
    press(&mut app, KeyCode::Enter);

    assert_eq!(current(&app), "q0");
    assert_eq!(app.session().subject_term(), "this robot");
    assert_eq!(app.cursor(), 0);
}

#[test]
fn vim_keys_move_the_cursor() {
    let mut app = builtin_app();
    press_chars(&mut app, "jjjk");
    assert_eq!(app.cursor(), 2);
}

#[test]
fn yes_no_keys_are_ignored_without_matching_options() {
    let mut app = builtin_app();
    press_chars(&mut app, "yn");
    assert_eq!(current(&app), "target_select");
    assert!(!app.session().can_go_back());
}

#[test]
fn digit_past_the_last_option_is_ignored() {
    let mut app = builtin_app();
    press_chars(&mut app, "1");
    assert_eq!(current(&app), "q0");
    press_chars(&mut app, "7");
    assert_eq!(current(&app), "q0");
    press_chars(&mut app, "3");
    assert_eq!(current(&app), "q1");
}

#[test]
fn back_keys_undo_one_step_each() {
    let mut app = builtin_app();
    press_chars(&mut app, "1yy");
    assert_eq!(current(&app), "q2");

    press(&mut app, KeyCode::Backspace);
    assert_eq!(current(&app), "q1");
    press(&mut app, KeyCode::Left);
    assert_eq!(current(&app), "q0");
    press_chars(&mut app, "b");
    assert_eq!(current(&app), "target_select");
    assert!(app.session().subject().is_none());

    // Nothing left to undo.
    press_chars(&mut app, "b");
    assert_eq!(current(&app), "target_select");
    assert!(app.notice().is_none());
}

#[test]
fn path_panel_toggles_on_result_and_closes_on_back() {
    let mut app = builtin_app();
    press_chars(&mut app, "1yyyy");
    assert!(!app.show_path());
    press_chars(&mut app, "p");
    assert!(app.show_path());
    press_chars(&mut app, "p");
    assert!(!app.show_path());
    press_chars(&mut app, "pb");
    assert!(!app.show_path());
    assert_eq!(current(&app), "q2a1");
}

#[test]
fn detail_toggle_resets_after_a_choice() {
    let mut app = builtin_app();
    press_chars(&mut app, "d");
    assert!(app.show_detail());
    press_chars(&mut app, "1");
    assert!(!app.show_detail());
}

#[test]
fn restart_returns_to_the_start() {
    let mut app = builtin_app();
    press_chars(&mut app, "2nyny");
    assert_eq!(current(&app), "mysterian");
    press_chars(&mut app, "r");
    assert_eq!(current(&app), "target_select");
    assert!(app.session().history().is_empty());
    assert!(app.session().subject().is_none());
}

#[test]
fn positions_screen_filters_and_closes() {
    let mut app = builtin_app();
    press_chars(&mut app, "1a");
    assert_eq!(app.screen(), Screen::Positions);

    // Quiz keys do nothing here.
    press_chars(&mut app, "y");
    assert_eq!(current(&app), "q0");

    press_chars(&mut app, "ff");
    assert_eq!(app.filter(), VerdictFilter::Only(Verdict::Not));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen(), Screen::Quiz);
    assert_eq!(current(&app), "q0");
}

#[test]
fn quit_keys() {
    let mut app = builtin_app();
    press_chars(&mut app, "q");
    assert!(app.should_quit());

    let mut app = builtin_app();
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}

#[test]
fn key_releases_are_ignored() {
    let mut app = builtin_app();
    handle_key(
        &mut app,
        KeyEvent::new_with_kind(KeyCode::Char('1'), KeyModifiers::NONE, KeyEventKind::Release),
    );
    assert_eq!(current(&app), "target_select");
}
