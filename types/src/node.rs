//! The node model: questions branch, end positions terminate.
//!
//! Nodes never own each other. A question names its successors by
//! [`NodeId`] and every lookup goes through the graph registry.

use serde::{Deserialize, Serialize};

use crate::{NodeId, OptionId};

/// Presentation hint for an option. Carries no traversal semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Affirmative,
    Negative,
    #[default]
    Neutral,
}

/// Category of an end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Conscious,
    Not,
    Meta,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [Verdict::Conscious, Verdict::Not, Verdict::Meta];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Conscious => "conscious",
            Verdict::Not => "not",
            Verdict::Meta => "meta",
        }
    }

    /// Label used when listing positions.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Verdict::Conscious => "Conscious",
            Verdict::Not => "Not Conscious",
            Verdict::Meta => "Meta-Position",
        }
    }

    /// Label used on the badge of a reached result.
    #[must_use]
    pub fn badge_label(self) -> &'static str {
        match self {
            Verdict::Conscious => "Conscious",
            Verdict::Not => "Not Conscious",
            Verdict::Meta => "Humans not conscious",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "conscious" => Some(Verdict::Conscious),
            "not" | "not-conscious" => Some(Verdict::Not),
            "meta" => Some(Verdict::Meta),
            _ => None,
        }
    }
}

/// A citation pair shown under an end position. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub thinker: String,
    pub work: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: OptionId,
    pub label: String,
    pub target: NodeId,
    #[serde(default)]
    pub tone: Tone,
    /// Subject term captured when this option is chosen at the start node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: NodeId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Find an option by its raw id. Exact match only.
    #[must_use]
    pub fn option(&self, id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.id.as_str() == id)
    }

    #[must_use]
    pub fn option_index(&self, id: &str) -> Option<usize> {
        self.options
            .iter()
            .position(|option| option.id.as_str() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct End {
    pub id: NodeId,
    pub verdict: Verdict,
    pub title: String,
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Question,
    End,
}

/// A node of the quiz graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Question(Question),
    End(End),
}

impl Node {
    #[must_use]
    pub fn id(&self) -> &NodeId {
        match self {
            Node::Question(question) => &question.id,
            Node::End(end) => &end.id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Question(_) => NodeKind::Question,
            Node::End(_) => NodeKind::End,
        }
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        matches!(self, Node::End(_))
    }

    #[must_use]
    pub fn as_question(&self) -> Option<&Question> {
        match self {
            Node::Question(question) => Some(question),
            Node::End(_) => None,
        }
    }

    #[must_use]
    pub fn as_end(&self) -> Option<&End> {
        match self {
            Node::End(end) => Some(end),
            Node::Question(_) => None,
        }
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Node::Question(question) => question.detail.as_deref(),
            Node::End(end) => end.detail.as_deref(),
        }
    }

    pub fn set_detail(&mut self, detail: String) {
        match self {
            Node::Question(question) => question.detail = Some(detail),
            Node::End(end) => end.detail = Some(detail),
        }
    }
}

impl From<Question> for Node {
    fn from(value: Question) -> Self {
        Node::Question(value)
    }
}

impl From<End> for Node {
    fn from(value: End) -> Self {
        Node::End(value)
    }
}
