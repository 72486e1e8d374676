//! Input handling for the Sentience TUI.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::app::{App, PAGE_SCROLL, Screen};

/// Poll for one terminal event and apply it.
///
/// Returns `true` when something happened that needs a redraw.
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<bool> {
    if !event::poll(timeout)? {
        return Ok(false);
    }
    match event::read()? {
        Event::Key(key) => {
            handle_key(app, key);
            Ok(true)
        }
        Event::Resize(..) => Ok(true),
        _ => Ok(false),
    }
}

/// Apply a single key press to the app.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Handle press + repeat events (ignore releases)
    if matches!(key.kind, KeyEventKind::Release) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    debug!(code = ?key.code, screen = ?app.screen(), "Key");

    match app.screen() {
        Screen::Quiz => handle_quiz_key(app, key),
        Screen::Positions => handle_positions_key(app, key),
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('k') | KeyCode::Up => {
            if app.at_question() {
                app.cursor_up();
            } else {
                app.scroll_up(1);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.at_question() {
                app.cursor_down();
            } else {
                app.scroll_down(1);
            }
        }
        KeyCode::Enter => app.choose_selected(),
        KeyCode::Char(digit @ '1'..='9') => {
            // '1'..='9' are ASCII digits
            let index = usize::from(digit as u8 - b'1');
            app.choose_index(index);
        }
        KeyCode::Char('y') => app.choose_id("yes"),
        KeyCode::Char('n') => app.choose_id("no"),
        KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Left => app.back(),
        KeyCode::Char('r') => app.restart(),
        KeyCode::Char('d') => app.toggle_detail(),
        KeyCode::Char('p') => app.toggle_path(),
        KeyCode::Char('a') => app.open_positions(),
        KeyCode::PageUp => app.scroll_up(PAGE_SCROLL),
        KeyCode::PageDown => app.scroll_down(PAGE_SCROLL),
        _ => {}
    }
}

fn handle_positions_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc | KeyCode::Char('a') => app.close_positions(),
        KeyCode::Char('f') => app.cycle_filter(),
        KeyCode::Char('r') => app.restart(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(1),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(PAGE_SCROLL),
        KeyCode::PageDown => app.scroll_down(PAGE_SCROLL),
        _ => {}
    }
}
