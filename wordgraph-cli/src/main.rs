//! Wordgraph - word adjacency graph explorer
//!
//! Reads a text file, builds a directed word graph and answers bridge-word,
//! shortest-path and random-walk queries from the command line or an
//! interactive session.

mod cli;
mod config;
mod normalize;
mod render;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG wins over --log-level; logs go to stderr so stdout stays parseable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wordgraph={0},wordgraph_core={0}", cli.log_level)));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
