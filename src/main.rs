//! Connectivity query runner.
//!
//! Reads a JSON input file describing a distance threshold, a set of
//! identified points, and query pairs; builds the proximity graph; answers
//! every pair with the selected algorithm; and writes the boolean results,
//! in input order, to `<input stem>_output.json` next to the input file.
//!
//! Input layout:
//!
//! ```json
//! {
//!   "threshold": 6.0,
//!   "points": [{"id": 0, "x": 0.0, "y": 0.0}, ...],
//!   "pairs": [[0, 1], ...]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use proximity_graph::{Algorithm, NodeId, ProximityGraph, connected};

#[derive(Parser)]
#[command(
    name = "proximity-graph",
    version,
    about = "Check connectivity of pairs of nodes in an undirected proximity graph."
)]
struct Cli {
    /// Path to the input JSON file.
    input: PathBuf,

    /// Algorithm used to answer the connectivity queries.
    #[arg(long, value_enum, default_value = "dfs-recursive")]
    method: Method,
}

/// CLI spelling of the algorithm selector.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    DfsRecursive,
    DfsIterative,
    UnionFind,
}

impl From<Method> for Algorithm {
    fn from(method: Method) -> Self {
        match method {
            Method::DfsRecursive => Algorithm::Recursive,
            Method::DfsIterative => Algorithm::Iterative,
            Method::UnionFind => Algorithm::UnionFind,
        }
    }
}

/// Input file layout.
#[derive(Deserialize)]
struct InputFile {
    threshold: f64,
    points: Vec<PointRecord>,
    /// Query pairs; a missing key means no queries.
    #[serde(default)]
    pairs: Vec<(u32, u32)>,
}

#[derive(Deserialize)]
struct PointRecord {
    id: u32,
    x: f64,
    y: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let algorithm = Algorithm::from(cli.method);
    let input = load_input(&cli.input)?;

    let graph = ProximityGraph::from_points(
        input.threshold,
        input.points.iter().map(|p| (NodeId::new(p.id), p.x, p.y)),
    );
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        %algorithm,
        "proximity graph ready"
    );

    let mut results = Vec::with_capacity(input.pairs.len());
    for &(a, b) in &input.pairs {
        let result = connected(&graph, algorithm, NodeId::new(a), NodeId::new(b))?;
        results.push(result);
    }

    let output = output_path(&cli.input);
    save_output(&output, &results)?;
    info!(queries = results.len(), output = %output.display(), "results written");

    Ok(())
}

fn load_input(path: &Path) -> Result<InputFile> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let input =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(input)
}

fn save_output(path: &Path, results: &[bool]) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Derive the output path: `in.json` becomes `in_output.json` alongside the
/// input. An input without the `.json` suffix gets the suffix appended.
fn output_path(input: &Path) -> PathBuf {
    match input.file_stem().and_then(|stem| stem.to_str()) {
        Some(stem) if input.extension().is_some_and(|ext| ext == "json") => {
            input.with_file_name(format!("{stem}_output.json"))
        }
        _ => {
            let mut name = input.as_os_str().to_owned();
            name.push("_output.json");
            PathBuf::from(name)
        }
    }
}
