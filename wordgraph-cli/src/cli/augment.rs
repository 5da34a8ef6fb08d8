//! Augment command - insert bridge words into new text

use anyhow::Result;
use serde_json::json;
use std::io::Write;
use wordgraph_core::augment;

use super::{print_json, OutputFormat, Session};
use crate::normalize::normalize;

pub fn run<W: Write>(session: &mut Session, text: &str, out: &mut W) -> Result<()> {
    let words = normalize(text);
    let augmented = augment(&session.graph, &words, &mut session.rng);

    if session.format == OutputFormat::Json {
        return print_json(out, &json!({ "input": words, "output": augmented }));
    }

    writeln!(out, "The processed text is: {}", augmented.join(" "))?;
    Ok(())
}
