use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use eval_graph::EvalGraph;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render an evaluation graph from percentages on stdin as a PNG on stdout.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, _) => "debug",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut input = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut input)
        .context("reading stdin")?;
    info!(bytes = input.len(), "read input");

    let text = String::from_utf8_lossy(&input);
    let graph = EvalGraph::from_text(&text).context("building evaluation graph")?;
    let png = graph.render().context("rendering evaluation graph")?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&png).context("writing image to stdout")?;
    stdout.flush().context("flushing stdout")?;
    info!(bytes = png.len(), plies = graph.series().plies(), "wrote graph");

    Ok(())
}
