//! Traversal state machine.

use std::borrow::Cow;
use std::sync::Arc;

use sentience_types::{
    DEFAULT_SUBJECT_TERM, Node, NodeId, OptionId, Subject, Tone, substitute_subject,
};

use crate::{EngineError, NodeGraph, PathSoFar};

/// One step taken: the node the user was at and the option they chose there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub node: NodeId,
    pub option: OptionId,
    pub label: String,
    pub tone: Tone,
    /// Whether this step captured the session subject. `back()` over this
    /// entry clears it again.
    pub captured_subject: bool,
}

/// Derived position of a session. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AtQuestion(NodeId),
    AtEnd(NodeId),
}

/// A single walk through the graph.
///
/// `choose`, `back` and `restart` are the only mutators. Every other accessor
/// derives its answer from the current id and the history.
#[derive(Debug, Clone)]
pub struct QuizSession {
    graph: Arc<NodeGraph>,
    current: NodeId,
    history: Vec<HistoryEntry>,
    subject: Option<Subject>,
    default_term: String,
}

impl QuizSession {
    #[must_use]
    pub fn new(graph: Arc<NodeGraph>) -> Self {
        let current = graph.start_id().clone();
        Self {
            graph,
            current,
            history: Vec::new(),
            subject: None,
            default_term: DEFAULT_SUBJECT_TERM.to_string(),
        }
    }

    /// Replace the term substituted while no subject is selected.
    pub fn with_default_term(mut self, term: impl Into<String>) -> Self {
        self.default_term = term.into();
        self
    }

    #[must_use]
    pub fn graph(&self) -> &Arc<NodeGraph> {
        &self.graph
    }

    #[must_use]
    pub fn current_id(&self) -> &NodeId {
        &self.current
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    /// The term placeholders currently resolve to.
    #[must_use]
    pub fn subject_term(&self) -> &str {
        self.subject
            .as_ref()
            .map_or(self.default_term.as_str(), |subject| subject.term.as_str())
    }

    /// Substitute the subject placeholder in `text`.
    #[must_use]
    pub fn render<'a>(&self, text: &'a str) -> Cow<'a, str> {
        substitute_subject(text, self.subject_term())
    }

    /// Resolve the current node.
    pub fn current_node(&self) -> Result<&Node, EngineError> {
        self.graph.resolve(&self.current)
    }

    pub fn phase(&self) -> Result<Phase, EngineError> {
        Ok(match self.current_node()? {
            Node::Question(question) => Phase::AtQuestion(question.id.clone()),
            Node::End(end) => Phase::AtEnd(end.id.clone()),
        })
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Take the option `option_id` of the current question.
    ///
    /// The id is matched exactly. On failure the session is unchanged.
    pub fn choose(&mut self, option_id: &str) -> Result<(), EngineError> {
        let question = match self.graph.resolve(&self.current)? {
            Node::Question(question) => question,
            Node::End(end) => {
                tracing::debug!(node = %end.id, option = option_id, "Choice rejected at end node");
                return Err(EngineError::InvalidChoice(end.id.clone()));
            }
        };
        let Some(option) = question.option(option_id) else {
            tracing::debug!(node = %question.id, option = option_id, "Unknown option");
            return Err(EngineError::UnknownOption {
                node: question.id.clone(),
                option: option_id.to_string(),
            });
        };

        // One-time capture, only on the first step away from the start node.
        let captured_subject = self.history.is_empty()
            && self.subject.is_none()
            && self.current == *self.graph.start_id()
            && option.subject.is_some();
        if captured_subject && let Some(term) = &option.subject {
            self.subject = Some(Subject {
                id: option.id.clone(),
                label: option.label.clone(),
                term: term.clone(),
            });
        }

        self.history.push(HistoryEntry {
            node: question.id.clone(),
            option: option.id.clone(),
            label: option.label.clone(),
            tone: option.tone,
            captured_subject,
        });
        tracing::debug!(
            from = %question.id,
            option = %option.id,
            to = %option.target,
            step = self.history.len(),
            "Advanced"
        );
        self.current = option.target.clone();
        Ok(())
    }

    /// Undo the most recent choice.
    pub fn back(&mut self) -> Result<(), EngineError> {
        let Some(entry) = self.history.pop() else {
            tracing::debug!("Back rejected: empty history");
            return Err(EngineError::NoHistory);
        };
        if entry.captured_subject {
            self.subject = None;
        }
        tracing::debug!(from = %self.current, to = %entry.node, "Stepped back");
        self.current = entry.node;
        Ok(())
    }

    /// Return to the start node, forgetting history and subject.
    pub fn restart(&mut self) {
        self.current = self.graph.start_id().clone();
        self.history.clear();
        self.subject = None;
        tracing::debug!(start = %self.current, "Restarted");
    }

    /// The steps taken so far, followed by the result once an end is reached.
    ///
    /// Computed lazily on every call.
    #[must_use]
    pub fn path_so_far(&self) -> PathSoFar<'_> {
        PathSoFar::new(self)
    }
}

impl PartialEq for QuizSession {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.graph, &other.graph)
            && self.current == other.current
            && self.history == other.history
            && self.subject == other.subject
            && self.default_term == other.default_term
    }
}

impl Eq for QuizSession {}
