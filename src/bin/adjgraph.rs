//! CLI entry point for the `adjgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use adjgraph::cli::commands;
use adjgraph::graph::{DfsTieBreak, NeighborOrder};
use adjgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "adjgraph",
    about = "adjgraph CLI — traversals, shortest paths and spanning trees over weighted graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Sort every adjacency list ascending by neighbor index
    #[arg(long)]
    sorted: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display vertex and edge counts of a graph document
    Info {
        /// Path to the JSON graph document
        file: PathBuf,
    },
    /// Print the adjacency list of every vertex
    Show {
        /// Path to the JSON graph document
        file: PathBuf,
    },
    /// Depth-first traversal order
    Dfs {
        /// Path to the JSON graph document
        file: PathBuf,
        /// Start vertex
        start: usize,
        /// Explore neighbors first-to-last instead of last-to-first
        #[arg(long)]
        forward: bool,
    },
    /// Breadth-first traversal order
    Bfs {
        /// Path to the JSON graph document
        file: PathBuf,
        /// Start vertex
        start: usize,
    },
    /// Shortest distances from a source vertex
    Dijkstra {
        /// Path to the JSON graph document
        file: PathBuf,
        /// Source vertex
        start: usize,
    },
    /// Minimum spanning tree
    Mst {
        /// Path to the JSON graph document
        file: PathBuf,
        /// Root vertex
        #[arg(long, default_value = "0")]
        root: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";
    let order = if cli.sorted {
        NeighborOrder::Ascending
    } else {
        NeighborOrder::Insertion
    };

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled (neighbor order: {:?})", order);
    }

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Show { file } => commands::cmd_show(&file, order, json),
        Commands::Dfs {
            file,
            start,
            forward,
        } => {
            let tie_break = if forward {
                DfsTieBreak::Forward
            } else {
                DfsTieBreak::Reverse
            };
            commands::cmd_dfs(&file, order, start, tie_break, json)
        }
        Commands::Bfs { file, start } => commands::cmd_bfs(&file, order, start, json),
        Commands::Dijkstra { file, start } => commands::cmd_dijkstra(&file, order, start, json),
        Commands::Mst { file, root } => commands::cmd_mst(&file, order, root, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) | GraphError::LabelCountMismatch { .. } => 2,
            GraphError::OutOfRange { .. } => 4,
        };
        process::exit(code);
    }
}
