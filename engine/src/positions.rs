//! Catalogue of every end position, grouped and filtered by verdict.

use sentience_types::{End, Node, Verdict};

use crate::NodeGraph;

/// Which verdicts the catalogue shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerdictFilter {
    #[default]
    All,
    Only(Verdict),
}

impl VerdictFilter {
    /// Cycle All -> conscious -> not -> meta -> All.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            VerdictFilter::All => VerdictFilter::Only(Verdict::Conscious),
            VerdictFilter::Only(Verdict::Conscious) => VerdictFilter::Only(Verdict::Not),
            VerdictFilter::Only(Verdict::Not) => VerdictFilter::Only(Verdict::Meta),
            VerdictFilter::Only(Verdict::Meta) => VerdictFilter::All,
        }
    }

    #[must_use]
    pub fn matches(self, verdict: Verdict) -> bool {
        match self {
            VerdictFilter::All => true,
            VerdictFilter::Only(only) => only == verdict,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VerdictFilter::All => "All Positions",
            VerdictFilter::Only(verdict) => verdict.display_name(),
        }
    }
}

/// Number of end positions per verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerdictCounts {
    pub conscious: usize,
    pub not: usize,
    pub meta: usize,
}

impl VerdictCounts {
    #[must_use]
    pub fn get(&self, verdict: Verdict) -> usize {
        match verdict {
            Verdict::Conscious => self.conscious,
            Verdict::Not => self.not,
            Verdict::Meta => self.meta,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.conscious + self.not + self.meta
    }

    /// Count shown next to a filter label.
    #[must_use]
    pub fn for_filter(&self, filter: VerdictFilter) -> usize {
        match filter {
            VerdictFilter::All => self.total(),
            VerdictFilter::Only(verdict) => self.get(verdict),
        }
    }
}

/// All end positions in authoring order.
pub fn positions(graph: &NodeGraph) -> impl Iterator<Item = &End> {
    graph.iter().filter_map(Node::as_end)
}

pub fn filtered(graph: &NodeGraph, filter: VerdictFilter) -> impl Iterator<Item = &End> {
    positions(graph).filter(move |end| filter.matches(end.verdict))
}

#[must_use]
pub fn counts(graph: &NodeGraph) -> VerdictCounts {
    positions(graph).fold(VerdictCounts::default(), |mut counts, end| {
        match end.verdict {
            Verdict::Conscious => counts.conscious += 1,
            Verdict::Not => counts.not += 1,
            Verdict::Meta => counts.meta += 1,
        }
        counts
    })
}
