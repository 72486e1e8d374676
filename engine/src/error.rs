use thiserror::Error;

use sentience_types::NodeId;

/// Failures of engine operations.
///
/// All of these are local and synchronous. None is transient and none is
/// fatal: the caller can show a fallback and `restart()` is always available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The id does not resolve in the registry.
    #[error("node `{0}` not found")]
    NotFound(NodeId),
    /// The current question offers no option with this id.
    #[error("option `{option}` is not offered by node `{node}`")]
    UnknownOption { node: NodeId, option: String },
    /// Choices are not accepted once an end position is reached.
    #[error("node `{0}` is an end position and accepts no choices")]
    InvalidChoice(NodeId),
    /// `back()` was called with an empty history.
    #[error("no previous step to go back to")]
    NoHistory,
}
