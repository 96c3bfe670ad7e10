//! A module for computing 2D force-directed layouts.
//!
//! Implements Fruchterman-Reingold spring embedding: neighbouring vertices attract, all pairs
//! repel, and a falling temperature caps movement so the layout settles. The output carries
//! everything a renderer needs: positions, display sizes, captions and edge segments.

use std::{fmt::Debug, fmt::Display, hash::Hash};

use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{edge::Edge, graph::Graph};

/// Tuning knobs for the spring embedding.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    /// Number of relaxation rounds.
    pub iterations: usize,
    /// Starting temperature, as a fraction of the unit frame. Decays linearly to zero.
    pub temperature: f64,
    /// Seed for the initial random placement. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            iterations: 150,
            temperature: 0.1,
            seed: None,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A vertex placed in the unit square, with its display attributes.
#[derive(Clone, Debug)]
pub struct PlacedNode<T> {
    pub label: T,
    pub position: Vector2<f64>,
    /// Marker size, proportional to the vertex's degree centrality.
    pub size: f64,
    /// Hover caption: the label and the raw degree.
    pub caption: String,
}

/// A computed layout: placed vertices plus edge endpoint segments.
#[derive(Clone, Debug)]
pub struct Layout<T> {
    pub nodes: Vec<PlacedNode<T>>,
    pub edges: Vec<(Vector2<f64>, Vector2<f64>)>,
}

/// Computes a force-directed layout of the graph within the unit square.
pub fn force_directed<T>(graph: &Graph<T>, config: &LayoutConfig) -> Layout<T>
where
    Edge<T>: Eq + Hash,
    T: Clone + Eq + Hash + Ord + Debug + Display,
{
    let index = graph.index();
    let n = index.len();

    if n == 0 {
        return Layout {
            nodes: Vec::new(),
            edges: Vec::new(),
        };
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut positions: Vec<Vector2<f64>> = (0..n)
        .map(|_| Vector2::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();

    // Optimal vertex spacing for a unit-area frame.
    let k = (1.0 / n as f64).sqrt();

    for iteration in 0..config.iterations {
        let temperature =
            config.temperature * (1.0 - iteration as f64 / config.iterations as f64);
        let mut displacements = vec![Vector2::new(0.0, 0.0); n];

        // Repulsion between every vertex pair.
        for i in 0..n {
            for j in (i + 1)..n {
                let delta = positions[i] - positions[j];
                let distance = delta.norm().max(1e-9);
                let push = delta / distance * (k * k / distance);

                displacements[i] += push;
                displacements[j] -= push;
            }
        }

        // Attraction along edges.
        for i in 0..n {
            for &j in index.neighbors(i) {
                if j <= i {
                    continue;
                }

                let delta = positions[i] - positions[j];
                let distance = delta.norm().max(1e-9);
                let pull = delta / distance * (distance * distance / k);

                displacements[i] -= pull;
                displacements[j] += pull;
            }
        }

        // Move by at most the current temperature and stay within the frame.
        for i in 0..n {
            let magnitude = displacements[i].norm();
            if magnitude > 1e-9 {
                let step = displacements[i] / magnitude * magnitude.min(temperature);
                positions[i] += step;
            }

            positions[i].x = positions[i].x.clamp(0.0, 1.0);
            positions[i].y = positions[i].y.clamp(0.0, 1.0);
        }
    }

    // Degree centrality drives the marker size; a single-vertex graph has no defined
    // centrality, so its lone marker keeps the base size.
    let denominator = if n > 1 { (n - 1) as f64 } else { f64::INFINITY };

    let nodes = (0..n)
        .map(|i| {
            let degree = index.degree(i);
            let centrality = degree as f64 / denominator;

            PlacedNode {
                label: index.label(i).clone(),
                position: positions[i],
                size: 4.0 + 150.0 * centrality,
                caption: format!("{} (degree: {})", index.label(i), degree),
            }
        })
        .collect();

    let mut edges = Vec::with_capacity(graph.edge_count());
    for i in 0..n {
        for &j in index.neighbors(i) {
            if i < j {
                edges.push((positions[i], positions[j]));
            }
        }
    }

    Layout { nodes, edges }
}
