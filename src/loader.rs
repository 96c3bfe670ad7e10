//! A module for loading graphs from edge-list text.
//!
//! The format is one edge per line: two whitespace-separated node labels, extra tokens ignored,
//! blank lines skipped. Labels are opaque strings; no numeric coercion is attempted. Reading the
//! input (file, socket, ...) is left to the caller, the loader only sees lines.

use crate::{
    edge::Edge,
    error::{GraphError, Result},
    graph::Graph,
};

/// Parses a sequence of edge-list lines into a graph.
///
/// A self-loop line (`a a`) registers the vertex without inserting an edge, so loading never
/// breaks the simple-graph invariant.
///
/// # Errors
///
/// Fails with [`GraphError::MalformedLine`] on the first non-empty line carrying fewer than two
/// tokens; the line number reported is 1-based.
///
/// # Examples
///
/// ```
/// use skein::loader::parse_edge_list;
///
/// let graph = parse_edge_list("a b\nb c".lines()).unwrap();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
pub fn parse_edge_list<'a, I>(lines: I) -> Result<Graph<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut graph = Graph::new();

    for (number, line) in lines.into_iter().enumerate() {
        let mut tokens = line.split_whitespace();

        match (tokens.next(), tokens.next()) {
            // Extra tokens beyond the first two are ignored.
            (Some(a), Some(b)) => {
                graph.insert(Edge::new(a.to_owned(), b.to_owned()));
            }
            // A blank (or whitespace-only) line is skipped.
            (None, _) => continue,
            (Some(_), None) => {
                return Err(GraphError::MalformedLine { line: number + 1 });
            }
        }
    }

    Ok(graph)
}
