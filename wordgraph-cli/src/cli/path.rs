//! Path command - shortest paths between words

use anyhow::Result;
use console::style;
use serde_json::json;
use std::io::Write;
use wordgraph_core::{all_shortest_paths, reachable_from, Reach, Reachability};

use super::{print_json, query_word, OutputFormat, Session};

/// With two words print all shortest paths between them, with one word print
/// a path from it to every other word.
pub fn run<W: Write>(
    session: &Session,
    word1: &str,
    word2: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let word1 = query_word(word1);
    match word2.map(query_word) {
        Some(word2) => between(session, &word1, &word2, out),
        None => from_one(session, &word1, out),
    }
}

fn between<W: Write>(session: &Session, word1: &str, word2: &str, out: &mut W) -> Result<()> {
    let outcome = all_shortest_paths(&session.graph, word1, word2);

    if session.format == OutputFormat::Json {
        let weights: Vec<u64> = outcome
            .paths()
            .iter()
            .map(|p| p.weight(&session.graph))
            .collect();
        return print_json(
            out,
            &json!({
                "word1": word1,
                "word2": word2,
                "length": outcome.distance(),
                "weights": weights,
                "outcome": outcome,
            }),
        );
    }

    match outcome.into_result(word1, word2) {
        Ok(paths) => {
            for path in paths {
                writeln!(
                    out,
                    "One of the shortest paths from {} to {} is: {}",
                    word1,
                    word2,
                    style(&path).cyan()
                )?;
                writeln!(out, "The length of the path is: {}", path.len())?;
            }
        }
        Err(e) => writeln!(out, "{}", style(e).yellow())?,
    }
    Ok(())
}

fn from_one<W: Write>(session: &Session, start: &str, out: &mut W) -> Result<()> {
    let reachability = reachable_from(&session.graph, start);

    if session.format == OutputFormat::Json {
        return print_json(out, &json!({ "start": start, "outcome": reachability }));
    }

    let paths = match reachability {
        Reachability::Paths(paths) => paths,
        Reachability::NodeNotFound { start } => {
            writeln!(out, "{}", style(format!("No {start} in the graph!")).yellow())?;
            return Ok(());
        }
    };

    for (word, reach) in &paths {
        match reach {
            Reach::Path(path) => {
                writeln!(out, "{} (length {})", style(path).cyan(), path.len())?;
            }
            Reach::Unreachable => {
                writeln!(out, "{} {}", word, style(format!("is unreachable from {start}")).dim())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests_support::session;
    use super::*;

    fn output(text: &str, format: OutputFormat, word1: &str, word2: Option<&str>) -> String {
        let session = session(text, format);
        let mut out = Vec::new();
        run(&session, word1, word2, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_between_text() {
        let text = output("the cat sat", OutputFormat::Text, "the", Some("sat"));
        assert_eq!(
            text,
            "One of the shortest paths from the to sat is: the -> cat -> sat\n\
             The length of the path is: 2\n"
        );
    }

    #[test]
    fn test_between_no_path() {
        let text = output("the cat sat", OutputFormat::Text, "sat", Some("the"));
        assert_eq!(text, "No path from sat to the!\n");
    }

    #[test]
    fn test_between_json() {
        let text = output("a b a b c", OutputFormat::Json, "a", Some("c"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["length"], 2);
        assert_eq!(value["weights"][0], 3);
        assert_eq!(value["outcome"]["status"], "found");
        assert_eq!(value["outcome"]["result"][0][2], "c");
    }

    #[test]
    fn test_from_one_text() {
        let text = output("x y z", OutputFormat::Text, "y", None);
        assert_eq!(text, "x is unreachable from y\ny -> z (length 1)\n");
    }

    #[test]
    fn test_from_one_missing() {
        let text = output("x y z", OutputFormat::Text, "q", None);
        assert_eq!(text, "No q in the graph!\n");
    }

    #[test]
    fn test_from_one_json() {
        let text = output("a b a b", OutputFormat::Json, "a", None);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let b = &value["outcome"]["result"]["b"];
        assert_eq!(b["status"], "path");
        assert_eq!(b["path"], json!(["a", "b"]));
    }
}
