//! Bridge command - words connecting two words in two steps

use anyhow::Result;
use console::style;
use serde_json::json;
use std::io::Write;
use wordgraph_core::{find_bridge_words, BridgeOutcome};

use super::{print_json, query_word, OutputFormat, Session};

pub fn run<W: Write>(session: &Session, word1: &str, word2: &str, out: &mut W) -> Result<()> {
    let (word1, word2) = (query_word(word1), query_word(word2));
    let outcome = find_bridge_words(&session.graph, &word1, &word2);

    if session.format == OutputFormat::Json {
        return print_json(
            out,
            &json!({ "word1": word1, "word2": word2, "outcome": outcome }),
        );
    }

    match outcome {
        BridgeOutcome::Found(words) => {
            let words: Vec<String> = words.into_iter().collect();
            writeln!(
                out,
                "The bridge words from {} to {} are: {}",
                word1,
                word2,
                style(words.join(", ")).green()
            )?;
        }
        other => {
            if let Err(e) = other.into_result(&word1, &word2) {
                writeln!(out, "{}", style(e).yellow())?;
            }
        }
    }
    Ok(())
}
