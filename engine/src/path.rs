//! Path reconstruction for display.

use std::iter::FusedIterator;

use sentience_types::{Node, Tone, Verdict};

use crate::QuizSession;

/// Prompt shown on the closing step of a finished path.
pub const RESULT_PROMPT: &str = "Result";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A question answered with an option of this tone.
    Answer(Tone),
    /// The end position reached.
    Result(Verdict),
}

/// One rendered line of the path taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    /// 1-based.
    pub number: usize,
    /// Question text with the subject substituted, or `Result`.
    pub prompt: String,
    /// Chosen option label, or the end title, with the subject substituted.
    pub answer: String,
    pub outcome: StepOutcome,
}

/// Lazy iterator over [`PathStep`]s, created by
/// [`QuizSession::path_so_far`]. A clone continues from the same point;
/// call `path_so_far()` again to start over.
#[derive(Debug, Clone)]
pub struct PathSoFar<'a> {
    session: &'a QuizSession,
    cursor: usize,
    emitted: usize,
    finished: bool,
}

impl<'a> PathSoFar<'a> {
    pub(crate) fn new(session: &'a QuizSession) -> Self {
        Self {
            session,
            cursor: 0,
            emitted: 0,
            finished: false,
        }
    }
}

impl Iterator for PathSoFar<'_> {
    type Item = PathStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let history = self.session.history();
        while let Some(entry) = history.get(self.cursor) {
            self.cursor += 1;
            match self.session.graph().get(entry.node.as_str()) {
                Some(Node::Question(question)) => {
                    self.emitted += 1;
                    return Some(PathStep {
                        number: self.emitted,
                        prompt: self.session.render(&question.text).into_owned(),
                        answer: self.session.render(&entry.label).into_owned(),
                        outcome: StepOutcome::Answer(entry.tone),
                    });
                }
                _ => {
                    tracing::warn!(node = %entry.node, "History entry does not name a question");
                }
            }
        }

        self.finished = true;
        match self.session.current_node() {
            Ok(Node::End(end)) => {
                self.emitted += 1;
                Some(PathStep {
                    number: self.emitted,
                    prompt: RESULT_PROMPT.to_string(),
                    answer: self.session.render(&end.title).into_owned(),
                    outcome: StepOutcome::Result(end.verdict),
                })
            }
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let remaining = self.session.history().len().saturating_sub(self.cursor);
        (0, Some(remaining + 1))
    }
}

impl FusedIterator for PathSoFar<'_> {}
