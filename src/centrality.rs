//! A module for degree centrality and tie-aware rankings.

use std::{collections::BTreeMap, fmt::Debug, hash::Hash};

use itertools::Itertools;

use crate::{
    edge::Edge,
    error::{GraphError, Result},
    graph::Graph,
};

/// A rank bucket: all vertices sharing one centrality score.
///
/// Scores within a graph share the `n - 1` denominator, so bucketing by score is exact; no
/// floating-point tolerance is involved.
#[derive(Clone, Debug, PartialEq)]
pub struct RankGroup<T> {
    pub score: f64,
    pub nodes: Vec<T>,
}

/// Returns a mapping of vertices to their normalized degree centrality, `degree / (n - 1)`.
///
/// # Errors
///
/// Fails with [`GraphError::UndefinedCentrality`] when the graph has one vertex or fewer, as the
/// normalization denominator vanishes.
pub fn degree_centrality<T>(graph: &Graph<T>) -> Result<BTreeMap<T, f64>>
where
    Edge<T>: Eq + Hash,
    T: Clone + Eq + Hash + Ord + Debug,
{
    let n = graph.node_count();
    if n <= 1 {
        return Err(GraphError::UndefinedCentrality { nodes: n });
    }

    let index = graph.index();
    let denominator = (n - 1) as f64;

    Ok((0..index.len())
        .map(|i| (index.label(i).clone(), index.degree(i) as f64 / denominator))
        .collect())
}

/// Returns the highest-centrality vertices as descending rank buckets, emitting buckets until at
/// least `k` vertices have been emitted.
///
/// Vertices with exactly equal scores share a bucket and are never split across the `k`
/// boundary, so the final bucket may push the total past `k`. A graph with fewer than `k`
/// vertices simply yields them all. Within a bucket, vertices are in label order.
///
/// # Errors
///
/// Fails with [`GraphError::UndefinedCentrality`] when the graph has one vertex or fewer.
pub fn top_ranked<T>(graph: &Graph<T>, k: usize) -> Result<Vec<RankGroup<T>>>
where
    Edge<T>: Eq + Hash,
    T: Clone + Eq + Hash + Ord + Debug,
{
    let n = graph.node_count();
    if n <= 1 {
        return Err(GraphError::UndefinedCentrality { nodes: n });
    }

    let index = graph.index();
    let denominator = (n - 1) as f64;

    // Stable sort on descending degree; the index's label order breaks ties within a bucket.
    let mut ranked: Vec<(usize, T)> = (0..index.len())
        .map(|i| (index.degree(i), index.label(i).clone()))
        .collect();
    ranked.sort_by_key(|(degree, _)| std::cmp::Reverse(*degree));

    let mut groups = Vec::new();
    let mut emitted = 0;

    for (degree, bucket) in &ranked.into_iter().chunk_by(|(degree, _)| *degree) {
        if emitted >= k {
            break;
        }

        let nodes: Vec<T> = bucket.map(|(_, label)| label).collect();
        emitted += nodes.len();

        groups.push(RankGroup {
            score: degree as f64 / denominator,
            nodes,
        });
    }

    Ok(groups)
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
    fn normalized_scores() {
        // Triangle plus pair: a, b, c have degree 2 of a possible 4; d, e have 1.
        let graph = graph(&[("a", "b"), ("b", "c"), ("c", "a"), ("d", "e")]);
        let centrality = degree_centrality(&graph).unwrap();

        assert_eq!(centrality["a"], 0.5);
        assert_eq!(centrality["b"], 0.5);
        assert_eq!(centrality["c"], 0.5);
        assert_eq!(centrality["d"], 0.25);
        assert_eq!(centrality["e"], 0.25);
    }

    #[test]
    fn scores_stay_in_unit_range() {
        let graph = graph(&[("hub", "a"), ("hub", "b"), ("hub", "c"), ("a", "b")]);
        let centrality = degree_centrality(&graph).unwrap();

        for score in centrality.values() {
            assert!((0.0..=1.0).contains(score));
        }

        // The hub is connected to every other vertex.
        assert_eq!(centrality["hub"], 1.0);
    }

    #[test]
    fn undefined_for_single_vertex() {
        let mut graph: Graph<&str> = Graph::new();
        graph.insert_vertex("a");

        assert_eq!(
            degree_centrality(&graph),
            Err(GraphError::UndefinedCentrality { nodes: 1 })
        );
        assert!(top_ranked(&graph, 10).is_err());
    }

    #[test]
    fn ties_share_a_bucket() {
        let graph = graph(&[("a", "b"), ("b", "c"), ("c", "a"), ("d", "e")]);
        let groups = top_ranked(&graph, 10).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].nodes, vec!["a", "b", "c"]);
        assert_eq!(groups[0].score, 0.5);
        assert_eq!(groups[1].nodes, vec!["d", "e"]);
        assert_eq!(groups[1].score, 0.25);
    }

    #[test]
    fn boundary_tie_is_not_split() {
        // A star: the hub ranks first, the three leaves tie. Asking for two vertices must
        // return the whole leaf bucket.
        let graph = graph(&[("hub", "a"), ("hub", "b"), ("hub", "c")]);
        let groups = top_ranked(&graph, 2).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].nodes, vec!["hub"]);
        assert_eq!(groups[1].nodes, vec!["a", "b", "c"]);
    }

    #[test]
    fn stops_once_k_vertices_emitted() {
        // Degrees: a = 4, b = 3, c = 2, then d, e, f at 1.
        let graph = graph(&[
            ("a", "b"),
            ("a", "c"),
            ("a", "d"),
            ("a", "e"),
            ("b", "c"),
            ("b", "f"),
        ]);
        let groups = top_ranked(&graph, 3).unwrap();

        // The degree-1 bucket is never reached.
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].nodes, vec!["a"]);
        assert_eq!(groups[1].nodes, vec!["b"]);
        assert_eq!(groups[2].nodes, vec!["c"]);
    }

    #[test]
    fn small_graph_returns_fewer_than_k() {
        let graph = graph(&[("a", "b")]);
        let groups = top_ranked(&graph, 10).unwrap();

        let emitted: usize = groups.iter().map(|g| g.nodes.len()).sum();
        assert_eq!(emitted, 2);
    }

    #[test]
    fn descending_score_order() {
        let graph = graph(&[("a", "b"), ("b", "c"), ("b", "d")]);
        let groups = top_ranked(&graph, 10).unwrap();

        for pair in groups.windows(2) {
            assert!(pair[0].score > pair[1].score);
        }
    }
}
