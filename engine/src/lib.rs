//! Core engine for Sentience - node graph registry and traversal state machine.
//!
//! The graph is built once through [`GraphBuilder`], validated, and then
//! shared read-only. A [`QuizSession`] is the only mutable state: it walks the
//! graph one user action at a time and derives everything a renderer needs
//! (current node, back availability, the path taken) from its current id and
//! history.
//!
//! ```text
//! GraphBuilder --build()--> Arc<NodeGraph> --> QuizSession
//!                                               |  choose / back / restart
//!                                               v
//!                               current_node() / path_so_far()
//! ```

mod error;
mod graph;
mod path;
pub mod positions;
mod session;

pub use error::EngineError;
pub use graph::{GraphBuilder, GraphError, NodeGraph};
pub use path::{PathSoFar, PathStep, RESULT_PROMPT, StepOutcome};
pub use positions::{VerdictCounts, VerdictFilter};
pub use session::{HistoryEntry, Phase, QuizSession};

pub use sentience_types::{
    End, Node, NodeId, NodeKind, OptionId, Question, QuestionOption, Reference, Subject, Tone,
    Verdict,
};
