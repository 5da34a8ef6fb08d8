//! Stats and export commands - inspect the graph itself

use anyhow::Result;
use console::style;
use serde_json::json;
use std::io::Write;

use super::{print_json, OutputFormat, Session};

/// Show graph statistics
pub fn run<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let stats = session.graph.stats();

    if session.format == OutputFormat::Json {
        return print_json(out, &serde_json::to_value(stats)?);
    }

    writeln!(out, "\n{} Graph Statistics\n", style("#").bold())?;
    writeln!(out, "  {}: {}", style("Words").cyan(), style(stats.nodes).bold())?;
    writeln!(out, "  {}: {}", style("Edges").cyan(), style(stats.edges).bold())?;
    writeln!(
        out,
        "  {}: {}",
        style("Total weight").cyan(),
        style(stats.total_weight).bold()
    )?;
    writeln!(
        out,
        "  {}: {}",
        style("Dead ends").cyan(),
        style(stats.sinks).bold()
    )?;
    Ok(())
}

/// Print every edge as a (source, target, weight) triple
pub fn export<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    if session.format == OutputFormat::Json {
        let edges: Vec<_> = session.graph.edges().collect();
        return print_json(out, &json!({ "edges": edges }));
    }

    for edge in session.graph.edges() {
        writeln!(out, "{} -> {} [{}]", edge.source, edge.target, edge.weight)?;
    }
    Ok(())
}
