//! A module for working with graphs.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet, VecDeque},
    fmt::Debug,
    hash::Hash,
};

use crate::{
    edge::Edge,
    error::{GraphError, Result},
};

/// An undirected graph, made up of edges and vertices.
///
/// Vertices are added implicitly when first referenced by an edge, but can also exist in
/// isolation (see [`insert_vertex`](Graph::insert_vertex)). Once constructed, the graph is only
/// read: every analysis in this crate takes a shared reference.
#[derive(Clone, Debug)]
pub struct Graph<T> {
    /// The edges in the graph.
    edges: HashSet<Edge<T>>,
    /// The vertices in the graph, kept separately from the edge set so that isolated vertices
    /// are representable.
    ///
    /// The use of a `BTreeSet` means we need the `Ord` bound on `T`. The sorted collection keeps
    /// vertex order stable between computations, which can be useful for debugging.
    vertices: BTreeSet<T>,
}

impl<T> Default for Graph<T>
where
    Edge<T>: Eq + Hash,
    T: Clone + Eq + Hash + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T>
where
    Edge<T>: Eq + Hash,
    T: Clone + Eq + Hash + Ord + Debug,
{
    /// Creates an empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use skein::graph::Graph;
    ///
    /// let graph: Graph<&str> = Graph::new();
    /// ```
    pub fn new() -> Self {
        Self {
            edges: HashSet::new(),
            vertices: BTreeSet::new(),
        }
    }

    /// Inserts an edge into the graph, registering both endpoints as vertices.
    ///
    /// Returns whether the edge was newly inserted. Self-loops register the vertex but are not
    /// stored as edges, keeping the graph simple.
    ///
    /// # Examples
    ///
    /// ```
    /// use skein::edge::Edge;
    /// use skein::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    ///
    /// assert!(graph.insert(Edge::new("a", "b")));
    /// // Duplicate edges are idempotent, regardless of endpoint order.
    /// assert!(!graph.insert(Edge::new("b", "a")));
    /// ```
    pub fn insert(&mut self, edge: Edge<T>) -> bool {
        if edge.is_loop() {
            let (vertex, _) = edge.into_endpoints();
            self.vertices.insert(vertex);
            return false;
        }

        self.vertices.insert(edge.source().clone());
        self.vertices.insert(edge.target().clone());
        self.edges.insert(edge)
    }

    /// Inserts a vertex with no incident edges.
    ///
    /// Returns whether the vertex was newly inserted.
    pub fn insert_vertex(&mut self, vertex: T) -> bool {
        self.vertices.insert(vertex)
    }

    /// Checks if the graph contains an edge.
    pub fn contains(&self, edge: &Edge<T>) -> bool {
        self.edges.contains(edge)
    }

    /// Returns the vertex count of the graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use skein::edge::Edge;
    /// use skein::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.insert(Edge::new("a", "b"));
    ///
    /// assert_eq!(graph.node_count(), 2);
    /// ```
    pub fn node_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the count of distinct edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over the vertices in sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.vertices.iter()
    }

    /// Returns the set of vertices adjacent to `vertex`.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::NotFound`] if the vertex is absent from the graph.
    pub fn neighbors(&self, vertex: &T) -> Result<BTreeSet<T>> {
        if !self.vertices.contains(vertex) {
            return Err(GraphError::NotFound {
                node: format!("{vertex:?}"),
            });
        }

        let mut neighbors = BTreeSet::new();
        for edge in &self.edges {
            if edge.source() == vertex {
                neighbors.insert(edge.target().clone());
            } else if edge.target() == vertex {
                neighbors.insert(edge.source().clone());
            }
        }

        Ok(neighbors)
    }

    /// Returns the number of edges incident to `vertex`.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::NotFound`] if the vertex is absent from the graph.
    pub fn degree(&self, vertex: &T) -> Result<usize> {
        if !self.vertices.contains(vertex) {
            return Err(GraphError::NotFound {
                node: format!("{vertex:?}"),
            });
        }

        Ok(self
            .edges
            .iter()
            .filter(|edge| edge.contains(vertex))
            .count())
    }

    /// Constructs a dense-index view of the graph for traversal.
    ///
    /// The index is sorted by `T`'s implementation of `Ord`, so repeated calls on the same graph
    /// produce identical vertex numbering.
    pub fn index(&self) -> GraphIndex<T> {
        let labels: Vec<T> = self.vertices.iter().cloned().collect();

        let positions: BTreeMap<&T, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label, i))
            .collect();

        let mut adjacency = vec![Vec::new(); labels.len()];
        for edge in &self.edges {
            // Both endpoints must be present as the vertex set is a superset of the edge
            // endpoints by construction.
            let i = positions[edge.source()];
            let j = positions[edge.target()];

            adjacency[i].push(j);
            adjacency[j].push(i);
        }

        // Sorted adjacency keeps traversal order deterministic.
        for list in &mut adjacency {
            list.sort_unstable();
        }

        GraphIndex { labels, adjacency }
    }
}

/// A compact adjacency-list representation of a graph.
///
/// Vertices are numbered `0..len()` following the sorted order of their labels; all the
/// traversal-based analyses work over these dense indices and map back to labels at the edges of
/// the computation.
#[derive(Clone, Debug)]
pub struct GraphIndex<T> {
    labels: Vec<T>,
    adjacency: Vec<Vec<usize>>,
}

impl<T> GraphIndex<T> {
    /// Returns the number of vertices in the index.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns whether the index contains no vertices.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the vertex labels in index order.
    pub fn labels(&self) -> &[T] {
        &self.labels
    }

    /// Returns the label of the vertex at `index`.
    pub fn label(&self, index: usize) -> &T {
        &self.labels[index]
    }

    /// Returns the indices of the vertices adjacent to `index`.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    /// Returns the degree of the vertex at `index`.
    pub fn degree(&self, index: usize) -> usize {
        self.adjacency[index].len()
    }

    /// Computes the unweighted shortest-path distance from `source` to every vertex with a
    /// breadth-first traversal. Unreachable vertices are `None`.
    pub fn distances_from(&self, source: usize) -> Vec<Option<u32>> {
        let mut distances: Vec<Option<u32>> = vec![None; self.len()];
        let mut queue = VecDeque::new();

        distances[source] = Some(0);
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            // The distance must be set before a vertex is queued.
            let next = distances[current].unwrap() + 1;

            for &neighbor in &self.adjacency[current] {
                if distances[neighbor].is_none() {
                    distances[neighbor] = Some(next);
                    queue.push_back(neighbor);
                }
            }
        }

        distances
    }
}
