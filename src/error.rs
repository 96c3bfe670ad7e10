//! Error kinds surfaced by the graph queries and the loader.

/// Failures produced while loading or querying a graph.
///
/// Query errors aren't recovered internally; callers propagate them to the top level, which
/// reports the message and terminates the invocation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    /// An edge-list line with fewer than two tokens.
    #[error("malformed edge list: line {line} has fewer than two tokens")]
    MalformedLine { line: usize },
    /// A degree or neighbour query for a vertex absent from the graph.
    #[error("node {node} not found in the graph")]
    NotFound { node: String },
    /// A structural query (e.g. diameter) on a graph with no nodes.
    #[error("the graph has no nodes")]
    EmptyGraph,
    /// Average shortest path length requested but no pair of nodes is mutually reachable.
    #[error("no reachable pairs: every node is isolated")]
    NoReachablePairs,
    /// Degree centrality requested on a graph with one node or fewer.
    #[error("degree centrality is undefined for a graph with {nodes} node(s)")]
    UndefinedCentrality { nodes: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
