//! Quiz content for Sentience.
//!
//! The built-in consciousness graph ships as TOML data embedded at compile
//! time: `graph.toml` holds the nodes, `details.toml` the long-form `detail`
//! overlay. Custom graphs in the same shape can be loaded from TOML or JSON
//! files.
//!
//! ```toml
//! start = "q0"
//!
//! [[node]]
//! kind = "question"
//! id = "q0"
//! text = "Does {{ENTITY}} feel pain?"
//!
//! [[node.options]]
//! id = "yes"
//! label = "Yes"
//! target = "sentient"
//! tone = "affirmative"
//! ```

mod document;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use sentience_engine::{GraphError, NodeGraph};
use sentience_types::IdError;

pub use document::{DetailOverlay, GraphDocument};

const BUILTIN_GRAPH: &str = include_str!("../data/graph.toml");
const BUILTIN_DETAILS: &str = include_str!("../data/details.toml");
const BUILTIN_ORIGIN: &str = "built-in graph";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid node id `{id}` in {origin}: {source}")]
    InvalidId {
        origin: String,
        id: String,
        #[source]
        source: IdError,
    },
    #[error("invalid graph in {origin}: {source}")]
    Graph {
        origin: String,
        #[source]
        source: GraphError,
    },
}

/// Serialization format of a graph or overlay file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Toml,
    Json,
}

impl GraphFormat {
    /// `.json` files are JSON, everything else is TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => GraphFormat::Json,
            _ => GraphFormat::Toml,
        }
    }
}

/// The consciousness quiz shipped with the binary.
pub fn builtin() -> Result<NodeGraph, ContentError> {
    parse(
        GraphFormat::Toml,
        BUILTIN_GRAPH,
        Some(BUILTIN_DETAILS),
        BUILTIN_ORIGIN,
    )
}

pub fn parse_toml(graph: &str, details: Option<&str>) -> Result<NodeGraph, ContentError> {
    parse(GraphFormat::Toml, graph, details, "TOML input")
}

pub fn parse_json(graph: &str, details: Option<&str>) -> Result<NodeGraph, ContentError> {
    parse(GraphFormat::Json, graph, details, "JSON input")
}

/// Parse a graph document and optional detail overlay in `format`.
///
/// `origin` names the input in error messages.
pub fn parse(
    format: GraphFormat,
    graph: &str,
    details: Option<&str>,
    origin: &str,
) -> Result<NodeGraph, ContentError> {
    let document: GraphDocument = decode(format, graph, origin)?;
    let overlay = match details {
        Some(raw) => decode(format, raw, origin)?,
        None => DetailOverlay::default(),
    };
    document.into_graph(overlay, origin)
}

/// Read and parse graph files. Each file's format follows its extension.
pub fn load(graph_path: &Path, details_path: Option<&Path>) -> Result<NodeGraph, ContentError> {
    let graph_origin = graph_path.display().to_string();
    let document: GraphDocument = decode(
        GraphFormat::from_path(graph_path),
        &read(graph_path)?,
        &graph_origin,
    )?;

    let overlay = match details_path {
        Some(path) => decode(
            GraphFormat::from_path(path),
            &read(path)?,
            &path.display().to_string(),
        )?,
        None => DetailOverlay::default(),
    };

    let graph = document.into_graph(overlay, &graph_origin)?;
    tracing::info!(path = %graph_origin, nodes = graph.len(), "Loaded quiz graph");
    Ok(graph)
}

fn read(path: &Path) -> Result<String, ContentError> {
    fs::read_to_string(path).map_err(|source| {
        tracing::warn!("Failed to read graph file at {:?}: {}", path, source);
        ContentError::Read {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn decode<T>(format: GraphFormat, raw: &str, origin: &str) -> Result<T, ContentError>
where
    T: serde::de::DeserializeOwned,
{
    match format {
        GraphFormat::Toml => toml::from_str(raw).map_err(|source| ContentError::Toml {
            origin: origin.to_string(),
            source,
        }),
        GraphFormat::Json => serde_json::from_str(raw).map_err(|source| ContentError::Json {
            origin: origin.to_string(),
            source,
        }),
    }
}
