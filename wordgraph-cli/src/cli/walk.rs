//! Walk command - one random walk over the graph

use anyhow::{Context, Result};
use console::style;
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use wordgraph_core::{random_walk, walk_from, Walk, WalkStop};

use super::{print_json, query_word, OutputFormat, Session};

pub fn run<W: Write>(
    session: &mut Session,
    start: Option<&str>,
    output: Option<PathBuf>,
    out: &mut W,
) -> Result<()> {
    let walk = match start.map(query_word) {
        Some(start) => match walk_from(&session.graph, &start, &mut session.rng) {
            Some(walk) => walk,
            None => {
                writeln!(out, "{}", style(format!("No {start} in the graph!")).yellow())?;
                return Ok(());
            }
        },
        None => random_walk(&session.graph, &mut session.rng),
    };

    if let Some(path) = output.or_else(|| session.config.walk.output.clone()) {
        if !walk.words.is_empty() {
            save_walk(&walk, &path)?;
        }
    }

    if session.format == OutputFormat::Json {
        return print_json(out, &json!(walk));
    }

    if walk.stop == WalkStop::EmptyGraph {
        writeln!(out, "{}", style("The graph is empty").yellow())?;
        return Ok(());
    }
    writeln!(out, "{}", walk.words.join(" "))?;
    writeln!(out, "{}", style(format!("({})", describe_stop(walk.stop))).dim())?;
    Ok(())
}

fn describe_stop(stop: WalkStop) -> &'static str {
    match stop {
        WalkStop::DeadEnd => "stopped at a word with no outgoing edges",
        WalkStop::RepeatedEdge => "stopped at an edge already traversed",
        WalkStop::EmptyGraph => "the graph is empty",
    }
}

/// Write the walk one word per line
fn save_walk(walk: &Walk, path: &Path) -> Result<()> {
    let mut content = walk.words.join("\n");
    content.push('\n');
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write walk to {}", path.display()))?;
    info!(path = %path.display(), words = walk.words.len(), "saved walk");
    Ok(())
}
