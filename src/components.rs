//! A module for connectivity analysis: connected components and the eccentricity-based
//! diameter.

use std::{collections::BTreeSet, fmt::Debug, hash::Hash};

use crate::{
    edge::Edge,
    error::{GraphError, Result},
    graph::Graph,
};

/// Returns the connected components of the graph.
///
/// Components are discovered with a breadth-first traversal from each unvisited vertex, so they
/// partition the vertex set: every vertex belongs to exactly one component. An isolated vertex
/// forms a singleton component. The components are ordered by their smallest vertex label.
pub fn connected_components<T>(graph: &Graph<T>) -> Vec<BTreeSet<T>>
where
    Edge<T>: Eq + Hash,
    T: Clone + Eq + Hash + Ord + Debug,
{
    let index = graph.index();
    let mut visited = vec![false; index.len()];
    let mut components = Vec::new();

    for start in 0..index.len() {
        if visited[start] {
            continue;
        }

        // The BFS distances from `start` cover exactly its component.
        let distances = index.distances_from(start);
        let mut component = BTreeSet::new();

        for (vertex, distance) in distances.iter().enumerate() {
            if distance.is_some() {
                visited[vertex] = true;
                component.insert(index.label(vertex).clone());
            }
        }

        components.push(component);
    }

    components
}

/// Returns the number of connected components in the graph.
pub fn component_count<T>(graph: &Graph<T>) -> usize
where
    Edge<T>: Eq + Hash,
    T: Clone + Eq + Hash + Ord + Debug,
{
    connected_components(graph).len()
}

/// Returns the diameter of the graph: the maximum over all components of the longest
/// shortest-path distance between any two vertices of that component.
///
/// A singleton component has diameter 0. Since a breadth-first traversal never crosses a
/// component boundary, running one from every vertex and taking the largest finite distance
/// observed yields the maximum per-component eccentricity directly. O(V·E), acceptable at the
/// social-network scales this crate targets.
///
/// # Errors
///
/// Fails with [`GraphError::EmptyGraph`] if the graph has no vertices.
pub fn diameter<T>(graph: &Graph<T>) -> Result<u32>
where
    Edge<T>: Eq + Hash,
    T: Clone + Eq + Hash + Ord + Debug,
{
    if graph.node_count() == 0 {
        return Err(GraphError::EmptyGraph);
    }

    let index = graph.index();
    let mut diameter = 0;

    for source in 0..index.len() {
        let eccentricity = index
            .distances_from(source)
            .into_iter()
            .flatten()
            .max()
            .unwrap_or(0);

        diameter = diameter.max(eccentricity);
    }

    Ok(diameter)
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
    fn components_partition_the_vertex_set() {
        let graph = graph(&[("a", "b"), ("b", "c"), ("d", "e")]);
        let components = connected_components(&graph);

        assert_eq!(components.len(), 2);

        // The union of the components is the vertex set and no vertex appears twice.
        let mut seen = BTreeSet::new();
        for component in &components {
            for vertex in component {
                assert!(seen.insert(*vertex));
            }
        }
        assert_eq!(seen, graph.nodes().copied().collect());
    }

    #[test]
    fn isolated_vertex_is_a_singleton_component() {
        let mut graph = graph(&[("a", "b")]);
        graph.insert_vertex("z");

        let components = connected_components(&graph);

        assert_eq!(components.len(), 2);
        assert!(components.contains(&BTreeSet::from(["z"])));
    }

    #[test]
    fn count_of_empty_graph() {
        let graph: Graph<&str> = Graph::new();

        assert_eq!(component_count(&graph), 0);
    }

    #[test]
    fn diameter_of_triangle_and_pair() {
        // Two components: a triangle and an edge, both with diameter 1.
        let graph = graph(&[("a", "b"), ("b", "c"), ("c", "a"), ("d", "e")]);

        assert_eq!(diameter(&graph), Ok(1));
    }

    #[test]
    fn diameter_takes_component_maximum() {
        // A path of length 3 next to a pair.
        let graph = graph(&[("a", "b"), ("b", "c"), ("c", "d"), ("x", "y")]);

        assert_eq!(diameter(&graph), Ok(3));
    }

    #[test]
    fn diameter_of_singleton() {
        let mut graph: Graph<&str> = Graph::new();
        graph.insert_vertex("a");

        assert_eq!(diameter(&graph), Ok(0));
    }

    #[test]
    fn diameter_at_least_one_when_connected() {
        let graph = graph(&[("a", "b")]);

        assert_eq!(diameter(&graph), Ok(1));
    }

    #[test]
    fn diameter_of_empty_graph_fails() {
        let graph: Graph<&str> = Graph::new();

        assert_eq!(diameter(&graph), Err(GraphError::EmptyGraph));
    }
}
