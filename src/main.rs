//! Skein CLI - edge-list graph analysis and plotting.
//!
//! # Usage
//!
//! ```bash
//! # Load an edge list and report its size
//! skein load graph.edges
//!
//! # Print the full analysis report
//! skein analyze graph.edges
//!
//! # Render a force-directed layout
//! skein plot graph.edges -o plot.svg
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use skein::{
    centrality, clustering, components,
    graph::Graph,
    layout::{force_directed, LayoutConfig},
    loader, paths, render,
};

#[derive(Parser)]
#[command(name = "skein")]
#[command(about = "Edge-list graph analysis and plotting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load an edge-list file and report node and edge counts
    Load {
        /// Input file (one `<node_a> <node_b>` pair per line)
        input: PathBuf,
    },

    /// Compute connectivity, path-length, clustering and centrality statistics
    Analyze {
        /// Input file (one `<node_a> <node_b>` pair per line)
        input: PathBuf,
    },

    /// Render a force-directed layout of the graph to an SVG file
    Plot {
        /// Input file (one `<node_a> <node_b>` pair per line)
        input: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "plot.svg")]
        output: PathBuf,

        /// Layout relaxation rounds
        #[arg(long, default_value_t = 150)]
        iterations: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Load { input } => {
            let graph = load_graph(&input)?;
            println!(
                "loaded graph with {} nodes and {} edges",
                graph.node_count(),
                graph.edge_count()
            );
        }
        Commands::Analyze { input } => {
            let graph = load_graph(&input)?;
            analyze(&graph)?;
        }
        Commands::Plot {
            input,
            output,
            iterations,
        } => {
            let graph = load_graph(&input)?;
            plot(&graph, &output, iterations)?;
            println!("wrote {}", output.display());
        }
    }

    Ok(())
}

fn load_graph(path: &Path) -> Result<Graph<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read edge list {}", path.display()))?;
    let graph = loader::parse_edge_list(contents.lines())
        .with_context(|| format!("failed to parse edge list {}", path.display()))?;

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    Ok(graph)
}

fn analyze(graph: &Graph<String>) -> Result<()> {
    let start = Instant::now();

    println!("Number of nodes: {}", graph.node_count());
    println!("Number of edges: {}", graph.edge_count());
    println!("Number of components: {}", components::component_count(graph));
    println!("Graph diameter: {}", components::diameter(graph)?);
    println!(
        "Average shortest path length: {}",
        paths::average_shortest_path_length(graph)?
    );
    println!(
        "Average clustering coefficient: {}",
        clustering::average_clustering(graph)
    );

    println!("Nodes with highest degree centrality:");
    for group in centrality::top_ranked(graph, 10)? {
        println!(
            "  {} (centrality: {})",
            group.nodes.join(" "),
            group.score
        );
    }

    debug!(elapsed = ?start.elapsed(), "analysis complete");

    Ok(())
}

fn plot(graph: &Graph<String>, output: &Path, iterations: usize) -> Result<()> {
    let start = Instant::now();

    let config = LayoutConfig::new().with_iterations(iterations);
    let layout = force_directed(graph, &config);
    debug!(elapsed = ?start.elapsed(), "layout computed");

    let mut file = fs::File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    render::write_svg(&layout, "Social Network", &mut file)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(())
}
