//! EdgeRank CLI — load an edge list, run the solver, dump the ranking.

use anyhow::Context;
use clap::Parser;
use edgerank::{pagerank, read_edges_file, write_graph, write_ranks, Graph, GraphConfig};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "edgerank", version, about = "PageRank over edge-list files")]
struct Cli {
    /// Edge-list input file: one `from<delimiter>to` pair per line
    edges: PathBuf,

    /// Number of nodes; every id in the input must fall in [0, size)
    size: usize,

    /// Damping factor: probability of following a link vs teleporting
    #[arg(long, default_value_t = 0.85)]
    alpha: f64,

    /// Convergence threshold on the L1 change between iterations
    #[arg(long, default_value_t = 1e-5)]
    convergence: f64,

    /// Iteration cap
    #[arg(long, default_value_t = 10_000)]
    max_iterations: u64,

    /// Field delimiter between the two ids on each line
    #[arg(long, default_value = " ")]
    delimiter: String,

    /// Write the rank dump to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the incoming-link structure before solving
    #[arg(long)]
    print_graph: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = GraphConfig {
        alpha: cli.alpha,
        convergence: cli.convergence,
        max_iterations: cli.max_iterations,
        delimiter: cli.delimiter,
        ..GraphConfig::default()
    };

    let mut graph = Graph::new(cli.size, config)?;
    read_edges_file(&cli.edges, &mut graph)?;

    if cli.print_graph {
        write_graph(&graph, &mut io::stdout().lock())?;
    }

    let summary = pagerank(&mut graph)?;
    println!(
        "ran {} iterations, final diff {:e}",
        summary.iterations, summary.diff
    );

    match cli.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("could not create {}", path.display()))?;
            write_ranks(&graph, &mut BufWriter::new(file))?;
        }
        None => {
            write_ranks(&graph, &mut io::stdout().lock())?;
        }
    }

    Ok(())
}
