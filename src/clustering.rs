//! A module for the average clustering coefficient.

use std::{collections::HashSet, fmt::Debug, hash::Hash};

use crate::{edge::Edge, graph::Graph};

/// Computes the average clustering coefficient of the graph.
///
/// A vertex's coefficient is the fraction of its neighbour pairs that are themselves connected;
/// vertices with degree below 2 have no neighbour pair and contribute 0. The average is taken
/// over all vertices. An empty graph yields 0.0.
pub fn average_clustering<T>(graph: &Graph<T>) -> f64
where
    Edge<T>: Eq + Hash,
    T: Clone + Eq + Hash + Ord + Debug,
{
    let index = graph.index();
    let n = index.len();

    if n == 0 {
        return 0.0;
    }

    // Membership sets for the closed-neighbour test below.
    let neighbor_sets: Vec<HashSet<usize>> = (0..n)
        .map(|i| index.neighbors(i).iter().copied().collect())
        .collect();

    let mut total = 0.0;

    for vertex in 0..n {
        let neighbors = index.neighbors(vertex);
        let degree = neighbors.len();

        if degree < 2 {
            continue;
        }

        let mut closed_pairs = 0usize;
        for (i, &a) in neighbors.iter().enumerate() {
            for &b in &neighbors[i + 1..] {
                if neighbor_sets[a].contains(&b) {
                    closed_pairs += 1;
                }
            }
        }

        let possible_pairs = degree * (degree - 1) / 2;
        total += closed_pairs as f64 / possible_pairs as f64;
    }

    total / n as f64
}
