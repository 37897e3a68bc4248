//! CLI — convert a Joern GraphSON export into LLM-ready views.
//!
//! Writes three artifacts next to each other: `<out>.json` (combined
//! structured document), `<out>_nodes.txt` and `<out>_edges.txt` (flat
//! tab-separated tables). All file I/O lives here; the library core only
//! sees the parsed tree.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use graphson_llm::{CpgGraph, export};

#[derive(Parser)]
#[command(name = "graphson-llm", version)]
#[command(about = "Normalize a GraphSON code property graph into LLM-ready JSON and text tables")]
struct Cli {
    /// Input GraphSON file (e.g. from `joern-export --repr all --format graphson`)
    #[arg(long)]
    graphson: PathBuf,

    /// Output prefix: writes <out>.json, <out>_nodes.txt and <out>_edges.txt
    #[arg(long)]
    out: String,

    /// Free-form source label recorded in the document metadata
    #[arg(long, default_value = "")]
    meta: String,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let text = fs::read_to_string(&cli.graphson)
        .with_context(|| format!("failed to read {}", cli.graphson.display()))?;
    let root: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid GraphSON", cli.graphson.display()))?;

    let graph = CpgGraph::from_graphson(&root);
    info!(nodes = graph.node_count(), edges = graph.edge_count(), "normalized graph");

    let json_path = format!("{}.json", cli.out);
    let nodes_path = format!("{}_nodes.txt", cli.out);
    let edges_path = format!("{}_edges.txt", cli.out);

    write_to(&json_path, |w| export::write_document(w, &graph, &cli.meta))?;
    write_to(&nodes_path, |w| export::write_node_table(w, &graph.nodes))?;
    write_to(&edges_path, |w| export::write_edge_table(w, &graph.edges))?;

    println!(
        "OK — {} nodes, {} edges written to {json_path} / {nodes_path} / {edges_path}",
        graph.node_count(),
        graph.edge_count(),
    );
    Ok(())
}

fn write_to(
    path: &str,
    write: impl FnOnce(&mut dyn Write) -> graphson_llm::Result<()>,
) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {path}"))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer).with_context(|| format!("failed to write {path}"))?;
    writer.flush().with_context(|| format!("failed to flush {path}"))?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
