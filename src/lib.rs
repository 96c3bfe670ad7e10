//! Skein is a small toolkit for analysing and plotting undirected graphs loaded from edge-list
//! files.
//!
//! # Basic usage
//!
//! The library is centered around the [`Graph`](graph::Graph) structure which can be constructed
//! from one or more [`Edge`](edge::Edge) instances, or parsed from edge-list text with
//! [`loader::parse_edge_list`]. Once constructed, the graph is immutable for the duration of an
//! invocation and every analysis borrows it read-only.
//!
//! ```rust
//! use skein::centrality;
//! use skein::components;
//! use skein::loader::parse_edge_list;
//! use skein::paths;
//!
//! // Parse an edge list: two whitespace-separated labels per line.
//! let graph = parse_edge_list("a b\nb c\nc a\nd e".lines()).unwrap();
//!
//! assert_eq!(graph.node_count(), 5);
//! assert_eq!(graph.edge_count(), 4);
//!
//! // Connectivity-aware statistics aggregate across components.
//! assert_eq!(components::component_count(&graph), 2);
//! assert_eq!(components::diameter(&graph), Ok(1));
//! assert_eq!(paths::average_shortest_path_length(&graph), Ok(1.0));
//!
//! // Normalized degree centrality, with tie-aware rankings.
//! let ranking = centrality::top_ranked(&graph, 10).unwrap();
//! assert_eq!(ranking[0].nodes, vec!["a", "b", "c"]);
//! ```

pub mod centrality;
pub mod clustering;
pub mod components;
pub mod edge;
pub mod error;
pub mod graph;
pub mod layout;
pub mod loader;
pub mod paths;
pub mod render;
