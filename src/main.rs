//! Command-line driver: computes the MWST weight of every graph in a file or
//! on standard input.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use mwst::{GraphReader, KruskalSolver, MSTAlgorithms};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file with one or more graphs; reads stdin when omitted
    input: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(short = 'l', long = "log-level", default_value = "warn")]
    log_level: String,

    /// Report disconnected graphs instead of their spanning forest weight
    #[arg(short = 'c', long = "require-connected")]
    require_connected: bool,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Open the input named on the command line, or stdin.
///
/// Returns `None` after reporting a file that cannot be opened.
fn open_input<W: Write>(path: Option<&Path>, out: &mut W) -> io::Result<Option<Box<dyn BufRead>>> {
    match path {
        Some(path) => {
            let file = match File::open(path) {
                Ok(file) => file,
                Err(err) => {
                    writeln!(out, "Unable to open {}", path.display())?;
                    warn!(error = %err, "failed to open input");
                    return Ok(None);
                }
            };
            writeln!(out, "Reading input values from {}.", path.display())?;
            Ok(Some(Box::new(BufReader::new(file))))
        }
        None => {
            writeln!(out, "Reading input values from stdin.")?;
            Ok(Some(Box::new(io::stdin().lock())))
        }
    }
}

/// Compute and report every graph in `input`.
///
/// Stops at the end of input or at the first malformed graph. Returns the
/// number of graphs processed.
fn run<R: BufRead, W: Write>(input: R, out: &mut W, require_connected: bool) -> io::Result<usize> {
    let solver = KruskalSolver::default();
    let mut reader = GraphReader::new(input);
    let mut total_time = Duration::ZERO;

    loop {
        let graph_num = reader.graphs_read() + 1;
        match reader.has_next() {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                writeln!(out, "{}", err)?;
                break;
            }
        }
        writeln!(out, "Reading graph {}", graph_num)?;

        let graph = match reader.next() {
            Some(Ok(graph)) => graph,
            Some(Err(err)) => {
                writeln!(out, "{}", err)?;
                break;
            }
            None => break,
        };

        if !graph.is_symmetric() {
            warn!(
                graph = graph_num,
                "adjacency matrix is not symmetric; using upper triangle"
            );
        }

        let start = Instant::now();
        let forest = solver.minimum_spanning_forest(&graph);
        total_time += start.elapsed();

        info!(
            graph = graph_num,
            num_nodes = forest.num_nodes,
            num_components = forest.num_components,
            "computed spanning forest"
        );

        if require_connected && !forest.is_spanning_tree() {
            writeln!(
                out,
                "Graph {}: Disconnected ({} components)",
                graph_num, forest.num_components
            )?;
        } else {
            writeln!(
                out,
                "Graph {}: Total weight is {}",
                graph_num, forest.total_weight
            )?;
        }
    }

    let processed = reader.graphs_read();
    let average = if processed > 0 {
        total_time.as_secs_f64() / processed as f64
    } else {
        0.0
    };
    writeln!(
        out,
        "Processed {} graph{}.\nAverage Time (seconds): {:.2}",
        processed,
        if processed != 1 { "s" } else { "" },
        average
    )?;

    Ok(processed)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(input) = open_input(args.input.as_deref(), &mut out)? else {
        return Ok(());
    };
    run(input, &mut out, args.require_connected)?;

    Ok(())
}
