//! Application state wrapped around a [`QuizSession`].
//!
//! The session stays the only owner of traversal state. `App` adds what the
//! screen needs on top of it: which screen is shown, the option cursor,
//! toggles and scroll offsets. Engine errors are logged and surfaced as a
//! notice line, never propagated.

use sentience_engine::positions::VerdictFilter;
use sentience_engine::{EngineError, Node, Phase, QuizSession};
use sentience_types::ui::UiOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Quiz,
    Positions,
}

/// Lines moved by `PageUp`/`PageDown`.
pub const PAGE_SCROLL: u16 = 10;

#[derive(Debug)]
pub struct App {
    session: QuizSession,
    options: UiOptions,
    screen: Screen,
    cursor: usize,
    show_detail: bool,
    show_path: bool,
    scroll: u16,
    max_scroll: u16,
    filter: VerdictFilter,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(session: QuizSession, options: UiOptions) -> Self {
        Self {
            session,
            options,
            screen: Screen::Quiz,
            cursor: 0,
            show_detail: false,
            show_path: false,
            scroll: 0,
            max_scroll: u16::MAX,
            filter: VerdictFilter::All,
            notice: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn show_detail(&self) -> bool {
        self.show_detail
    }

    #[must_use]
    pub fn show_path(&self) -> bool {
        self.show_path
    }

    #[must_use]
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    #[must_use]
    pub fn filter(&self) -> VerdictFilter {
        self.filter
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Options offered at the current node. Zero at an end or a missing node.
    #[must_use]
    pub fn option_count(&self) -> usize {
        match self.session.current_node() {
            Ok(Node::Question(question)) => question.options.len(),
            _ => 0,
        }
    }

    #[must_use]
    pub fn at_question(&self) -> bool {
        matches!(self.session.phase(), Ok(Phase::AtQuestion(_)))
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + 1).min(count - 1);
        }
    }

    /// Choose the option under the cursor.
    pub fn choose_selected(&mut self) {
        self.choose_index(self.cursor);
    }

    /// Choose the option at `index` (0-based). Out of range is ignored.
    pub fn choose_index(&mut self, index: usize) {
        let option_id = match self.session.current_node() {
            Ok(Node::Question(question)) => match question.options.get(index) {
                Some(option) => option.id.clone(),
                None => return,
            },
            _ => return,
        };
        self.choose(option_id.as_str());
    }

    /// Choose by option id when the current question offers it.
    pub fn choose_id(&mut self, option_id: &str) {
        let offered = matches!(
            self.session.current_node(),
            Ok(Node::Question(question)) if question.option(option_id).is_some()
        );
        if offered {
            self.choose(option_id);
        }
    }

    fn choose(&mut self, option_id: &str) {
        match self.session.choose(option_id) {
            Ok(()) => self.after_transition(),
            Err(err) => self.report(&err),
        }
    }

    pub fn back(&mut self) {
        if !self.session.can_go_back() {
            return;
        }
        match self.session.back() {
            Ok(()) => self.after_transition(),
            Err(err) => self.report(&err),
        }
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.screen = Screen::Quiz;
        self.after_transition();
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    /// Only meaningful on an end position.
    pub fn toggle_path(&mut self) {
        if matches!(self.session.phase(), Ok(Phase::AtEnd(_))) {
            self.show_path = !self.show_path;
        }
    }

    pub fn open_positions(&mut self) {
        self.screen = Screen::Positions;
        self.reset_scroll();
    }

    pub fn close_positions(&mut self) {
        self.screen = Screen::Quiz;
        self.reset_scroll();
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.reset_scroll();
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll);
    }

    /// Called by the renderer once it knows how far the content can scroll.
    pub fn set_max_scroll(&mut self, max: u16) {
        self.max_scroll = max;
        self.scroll = self.scroll.min(max);
    }

    fn reset_scroll(&mut self) {
        self.scroll = 0;
        self.max_scroll = u16::MAX;
    }

    fn after_transition(&mut self) {
        self.cursor = 0;
        self.show_detail = false;
        self.show_path = false;
        self.notice = None;
        self.reset_scroll();
    }

    fn report(&mut self, err: &EngineError) {
        tracing::warn!(error = %err, node = %self.session.current_id(), "Engine rejected operation");
        self.notice = Some(format!("Error: {err}"));
    }
}
