use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use depviz_core::{build_dependency_graph, ScanConfig};

/// DepViz - Extract a dependency graph from a source tree
#[derive(Parser)]
#[command(name = "depviz")]
#[command(version)]
#[command(about = "Print the import graph of a JavaScript/TypeScript project as JSON", long_about = None)]
struct Cli {
    /// Root directory to analyze
    path: PathBuf,

    /// Emit single-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let graph = build_dependency_graph(&cli.path, &ScanConfig::default())?;
    let data = graph.data();

    let json = if cli.compact {
        serde_json::to_string(&data)?
    } else {
        serde_json::to_string_pretty(&data)?
    };
    println!("{json}");

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
