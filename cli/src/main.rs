//! Sentience CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`sentience_engine`] (quiz state) and [`sentience_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed
//! cleanup.
//!
//! ```text
//! main() -> load config -> load graph -> TerminalSession::new() -> run_app() -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! The loop is synchronous. It polls the terminal for one event with a short
//! timeout, applies it, and redraws whenever the event changed something.

use std::{
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use sentience_config::{QuizConfig, config_dir};
use sentience_engine::{NodeGraph, QuizSession};
use sentience_tui::{App, draw, handle_events};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Logs go to a file only; the terminal belongs to the TUI.
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (log_file, init_warnings) = open_log_file(&log_file_candidates());

    let Some((log_path, file)) = log_file else {
        tracing_subscriber::registry().with(env_filter).init();
        return;
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .init();

    tracing::info!(path = %log_path.display(), "Logging initialized");
    for warning in init_warnings {
        tracing::warn!("{warning}");
    }
}

/// Open the first candidate that can be appended to.
fn open_log_file(candidates: &[PathBuf]) -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in candidates {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!("Failed to create log dir {}: {e}", parent.display()));
            continue;
        }
        match OpenOptions::new().create(true).append(true).open(candidate) {
            Ok(file) => return (Some((candidate.clone(), file)), warnings),
            Err(e) => warnings.push(format!("Failed to open log file {}: {e}", candidate.display())),
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let local = PathBuf::from(".sentience").join("logs").join("sentience.log");
    match config_dir() {
        Some(dir) => vec![dir.join("logs").join("sentience.log"), local],
        None => vec![local],
    }
}

/// Custom content when configured, the built-in quiz otherwise.
fn load_graph(config: Option<&QuizConfig>) -> Result<NodeGraph> {
    let Some(graph_path) = config.and_then(QuizConfig::graph_path) else {
        return sentience_content::builtin().context("built-in quiz content is invalid");
    };
    let details_path = config.and_then(QuizConfig::details_path);
    sentience_content::load(&graph_path, details_path.as_deref())
        .with_context(|| format!("failed to load quiz graph from {}", graph_path.display()))
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Enables raw mode and the alternate screen. On drop both are restored,
/// so the terminal stays usable even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = match QuizConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "Ignoring config, using defaults");
            None
        }
    };

    let graph = Arc::new(load_graph(config.as_ref())?);
    let mut session = QuizSession::new(graph);
    if let Some(term) = config.as_ref().and_then(QuizConfig::default_subject) {
        session = session.with_default_term(term);
    }
    let options = config
        .as_ref()
        .map(QuizConfig::ui_options)
        .unwrap_or_default();
    let mut app = App::new(session, options);

    let result = {
        let mut session = TerminalSession::new().context("failed to set up terminal")?;
        run_app(&mut session.terminal, &mut app)
    };

    if let Err(err) = &result {
        tracing::error!(error = %err, "Quiz exited with an error");
    }
    result
}

fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    terminal.draw(|frame| draw(frame, app))?;

    loop {
        let changed = handle_events(app, POLL_TIMEOUT)?;
        if app.should_quit() {
            return Ok(());
        }
        if changed {
            terminal.draw(|frame| draw(frame, app))?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_falls_back_to_next_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let fallback = dir.path().join("logs").join("sentience.log");

        let (opened, warnings) =
            open_log_file(&[blocker.join("logs").join("sentience.log"), fallback.clone()]);

        let (path, _file) = opened.unwrap();
        assert_eq!(path, fallback);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Failed to create log dir"));
    }

    #[test]
    fn no_writable_candidate_opens_nothing() {
        let (opened, warnings) = open_log_file(&[]);
        assert!(opened.is_none());
        assert!(warnings.is_empty());
    }

    #[test]
    fn local_log_file_is_always_a_candidate() {
        let candidates = log_file_candidates();
        assert_eq!(
            candidates.last(),
            Some(&PathBuf::from(".sentience").join("logs").join("sentience.log"))
        );
    }
}
