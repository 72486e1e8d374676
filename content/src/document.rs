//! Serialized shapes of graph and overlay files.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sentience_engine::{GraphBuilder, NodeGraph};
use sentience_types::{Node, NodeId, sanitize_display_text};

use crate::ContentError;

/// `{ start, node: [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    pub start: NodeId,
    #[serde(rename = "node", alias = "nodes", default)]
    pub nodes: Vec<Node>,
}

/// `{ detail: { <node id> = "<text>" } }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailOverlay {
    #[serde(default)]
    pub detail: BTreeMap<String, String>,
}

impl GraphDocument {
    /// Apply `overlay` and validate into an immutable graph.
    pub fn into_graph(
        self,
        overlay: DetailOverlay,
        origin: &str,
    ) -> Result<NodeGraph, ContentError> {
        let mut builder = GraphBuilder::new();
        for mut node in self.nodes {
            sanitize_node(&mut node);
            builder.push(node);
        }
        for (raw, text) in overlay.detail {
            let id = NodeId::new(raw.as_str()).map_err(|source| ContentError::InvalidId {
                origin: origin.to_string(),
                id: raw.clone(),
                source,
            })?;
            builder.push_detail(id, clean(text));
        }

        builder.build(self.start).map_err(|source| {
            tracing::warn!(origin, error = %source, "Rejected quiz graph");
            ContentError::Graph {
                origin: origin.to_string(),
                source,
            }
        })
    }
}

fn clean(text: String) -> String {
    if let Cow::Owned(sanitized) = sanitize_display_text(&text) {
        return sanitized;
    }
    text
}

fn clean_in_place(text: &mut String) {
    *text = clean(std::mem::take(text));
}

/// Graph files are untrusted: strip terminal control sequences from every
/// displayed string.
fn sanitize_node(node: &mut Node) {
    match node {
        Node::Question(question) => {
            clean_in_place(&mut question.text);
            if let Some(detail) = question.detail.as_mut() {
                clean_in_place(detail);
            }
            for option in &mut question.options {
                clean_in_place(&mut option.label);
                if let Some(subject) = option.subject.as_mut() {
                    clean_in_place(subject);
                }
            }
        }
        Node::End(end) => {
            clean_in_place(&mut end.title);
            clean_in_place(&mut end.desc);
            if let Some(detail) = end.detail.as_mut() {
                clean_in_place(detail);
            }
            for reference in &mut end.references {
                clean_in_place(&mut reference.thinker);
                clean_in_place(&mut reference.work);
            }
        }
    }
}
