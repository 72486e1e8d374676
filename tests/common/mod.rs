//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sentience_engine::{NodeGraph, QuizSession};
use sentience_tui::{App, handle_key};
use sentience_types::ui::UiOptions;

/// The built-in quiz, shared by every session a test creates.
pub fn builtin_graph() -> Arc<NodeGraph> {
    Arc::new(sentience_content::builtin().expect("built-in graph is valid"))
}

pub fn builtin_session() -> QuizSession {
    QuizSession::new(builtin_graph())
}

pub fn builtin_app() -> App {
    App::new(builtin_session(), UiOptions::default())
}

/// Apply `choices` in order, panicking on the first rejected one.
pub fn walk(session: &mut QuizSession, choices: &[&str]) {
    for choice in choices {
        session
            .choose(choice)
            .unwrap_or_else(|err| panic!("choice {choice:?} rejected: {err}"));
    }
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn press_chars(app: &mut App, keys: &str) {
    for c in keys.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Choices that lead from the start node to the named end position.
pub mod paths {
    pub const IIT: &[&str] = &["ai", "yes", "yes", "yes", "yes"];
    pub const MYSTERIAN: &[&str] = &["ai", "no", "yes", "no", "yes"];
    pub const HUMAN_EXCEPTION: &[&str] = &["ai", "yes", "yes", "no", "yes", "no"];
    pub const QUANTUM: &[&str] = &["ai", "yes", "no", "no", "no", "yes"];
}
