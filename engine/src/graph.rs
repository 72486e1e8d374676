//! Node graph registry.
//!
//! Construction is a single two-pass step: base nodes first, then an overlay
//! of supplementary `detail` text, then validation. The resulting
//! [`NodeGraph`] is immutable; sessions share it through `Arc`.

use std::collections::{HashMap, HashSet, VecDeque};

use thiserror::Error;

use sentience_types::{Node, NodeId};

use crate::EngineError;

/// Construction-time violations of the graph invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node id `{0}` is defined more than once")]
    DuplicateNode(NodeId),
    #[error("question `{node}` defines option `{option}` more than once")]
    DuplicateOption { node: NodeId, option: String },
    #[error("question `{node}` has {count} option(s); at least 2 are required")]
    TooFewOptions { node: NodeId, count: usize },
    #[error("option `{option}` of question `{node}` targets unknown node `{target}`")]
    DanglingTarget {
        node: NodeId,
        option: String,
        target: NodeId,
    },
    #[error("start node `{0}` is not defined")]
    StartNotFound(NodeId),
    #[error("start node `{0}` must be a question")]
    StartNotQuestion(NodeId),
    #[error("detail overlay names unknown node `{0}`")]
    UnknownDetailTarget(NodeId),
}

/// Collects nodes and detail overlays, then validates them into a [`NodeGraph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    details: Vec<(NodeId, String)>,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }

    /// Queue supplementary detail text for `id`, applied during `build`.
    pub fn detail(mut self, id: NodeId, text: impl Into<String>) -> Self {
        self.push_detail(id, text);
        self
    }

    pub fn push_detail(&mut self, id: NodeId, text: impl Into<String>) -> &mut Self {
        self.details.push((id, text.into()));
        self
    }

    /// Validate and freeze the graph.
    ///
    /// Fails on the first violation, checking nodes in insertion order.
    pub fn build(self, start: NodeId) -> Result<NodeGraph, GraphError> {
        let mut nodes = self.nodes;
        let mut index = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            if index.insert(node.id().clone(), position).is_some() {
                return Err(GraphError::DuplicateNode(node.id().clone()));
            }
        }

        for (id, text) in self.details {
            let Some(&position) = index.get(&id) else {
                return Err(GraphError::UnknownDetailTarget(id));
            };
            nodes[position].set_detail(text);
        }

        for question in nodes.iter().filter_map(Node::as_question) {
            if question.options.len() < 2 {
                return Err(GraphError::TooFewOptions {
                    node: question.id.clone(),
                    count: question.options.len(),
                });
            }
            let mut seen = HashSet::with_capacity(question.options.len());
            for option in &question.options {
                if !seen.insert(option.id.as_str()) {
                    return Err(GraphError::DuplicateOption {
                        node: question.id.clone(),
                        option: option.id.to_string(),
                    });
                }
                if !index.contains_key(&option.target) {
                    return Err(GraphError::DanglingTarget {
                        node: question.id.clone(),
                        option: option.id.to_string(),
                        target: option.target.clone(),
                    });
                }
            }
        }

        match index.get(&start).map(|&position| &nodes[position]) {
            None => return Err(GraphError::StartNotFound(start)),
            Some(Node::End(_)) => return Err(GraphError::StartNotQuestion(start)),
            Some(Node::Question(_)) => {}
        }

        let graph = NodeGraph {
            nodes,
            index,
            start,
        };

        let unreachable = graph.unreachable();
        if !unreachable.is_empty() {
            let ids: Vec<&str> = unreachable.iter().map(|id| id.as_str()).collect();
            tracing::warn!(count = ids.len(), ids = ?ids, "Graph has nodes unreachable from start");
        }
        tracing::debug!(
            nodes = graph.len(),
            ends = graph.iter().filter(|node| node.is_end()).count(),
            start = %graph.start,
            "Node graph built"
        );

        Ok(graph)
    }
}

/// Immutable, validated registry of quiz nodes.
///
/// Every option target resolves, the start node is a question, and ids are
/// unique. Iteration follows authoring order.
#[derive(Debug)]
pub struct NodeGraph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    start: NodeId,
}

impl NodeGraph {
    #[must_use]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    #[must_use]
    pub fn start_id(&self) -> &NodeId {
        &self.start
    }

    /// Resolve an id to its node.
    pub fn resolve(&self, id: &NodeId) -> Result<&Node, EngineError> {
        self.get(id.as_str())
            .ok_or_else(|| EngineError::NotFound(id.clone()))
    }

    /// Non-failing lookup for free-form ids.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&position| &self.nodes[position])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Ids of nodes no option path from the start can reach, in authoring order.
    #[must_use]
    pub fn unreachable(&self) -> Vec<&NodeId> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.nodes.len());
        let mut queue = VecDeque::from([self.start.as_str()]);
        while let Some(id) = queue.pop_front() {
            if !seen.insert(id) {
                continue;
            }
            if let Some(Node::Question(question)) = self.get(id) {
                queue.extend(question.options.iter().map(|option| option.target.as_str()));
            }
        }

        self.nodes
            .iter()
            .map(Node::id)
            .filter(|id| !seen.contains(id.as_str()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a NodeGraph {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
