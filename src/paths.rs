//! A module for shortest-path statistics.

use std::{fmt::Debug, hash::Hash};

use crate::{
    edge::Edge,
    error::{GraphError, Result},
    graph::Graph,
};

/// Computes the average shortest-path length over all ordered pairs of distinct, mutually
/// reachable vertices.
///
/// Pairs in different components contribute to neither the numerator nor the denominator, so a
/// disconnected graph averages over its components' internal paths only. One breadth-first
/// traversal runs per source vertex; the path from a vertex to itself doesn't count.
///
/// # Errors
///
/// Fails with [`GraphError::NoReachablePairs`] when no pair of vertices is mutually reachable,
/// e.g. a single-vertex graph or a graph with no edges at all.
pub fn average_shortest_path_length<T>(graph: &Graph<T>) -> Result<f64>
where
    Edge<T>: Eq + Hash,
    T: Clone + Eq + Hash + Ord + Debug,
{
    let index = graph.index();

    let mut total_length: u64 = 0;
    let mut pair_count: u64 = 0;

    for source in 0..index.len() {
        for distance in index.distances_from(source).into_iter().flatten() {
            // Distance 0 is the source itself.
            if distance > 0 {
                total_length += u64::from(distance);
                pair_count += 1;
            }
        }
    }

    if pair_count == 0 {
        return Err(GraphError::NoReachablePairs);
    }

    Ok(total_length as f64 / pair_count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&'static str, &'static str)]) -> Graph<&'static str> {
        let mut graph = Graph::new();
        for (a, b) in edges {
            graph.insert(Edge::new(*a, *b));
        }
        graph
    }

    #[test]
    fn path_graph() {
        // a - b - c: ordered pairs (a,b) (b,a) (b,c) (c,b) at 1, (a,c) (c,a) at 2.
        let graph = graph(&[("a", "b"), ("b", "c")]);

        assert_eq!(average_shortest_path_length(&graph), Ok(8.0 / 6.0));
    }

    #[test]
    fn unreachable_pairs_are_excluded() {
        // Triangle plus pair: every in-component pair is at distance 1, cross-component pairs
        // don't count.
        let graph = graph(&[("a", "b"), ("b", "c"), ("c", "a"), ("d", "e")]);

        assert_eq!(average_shortest_path_length(&graph), Ok(1.0));
    }

    #[test]
    fn single_vertex_fails() {
        let mut graph: Graph<&str> = Graph::new();
        graph.insert_vertex("a");

        assert_eq!(
            average_shortest_path_length(&graph),
            Err(GraphError::NoReachablePairs)
        );
    }

    #[test]
    fn edgeless_graph_fails() {
        let mut graph: Graph<&str> = Graph::new();
        graph.insert_vertex("a");
        graph.insert_vertex("b");

        assert_eq!(
            average_shortest_path_length(&graph),
            Err(GraphError::NoReachablePairs)
        );
    }

    #[test]
    fn empty_graph_fails() {
        let graph: Graph<&str> = Graph::new();

        assert_eq!(
            average_shortest_path_length(&graph),
            Err(GraphError::NoReachablePairs)
        );
    }
}
