//! Interactive session
//!
//! Renders the graph, then walks through one bridge query, one text
//! augmentation, one shortest-path query and one random walk, reading
//! answers line by line. End of input ends the session quietly.

use anyhow::Result;
use console::style;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use super::render::RenderOptions;
use super::{augment, bridge, path, render, walk, Session};

pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    render_options: Option<&RenderOptions>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    if let Some(options) = render_options {
        if let Err(e) = render::run(session, options, out) {
            warn!("Could not render graph: {:#}", e);
            writeln!(out, "{} {:#}", style("!").yellow(), e)?;
        }
    }

    // Bridge words
    let Some(word1) = prompt(input, out, "Please enter the first word:")? else {
        return Ok(());
    };
    let Some(word2) = prompt(input, out, "Please enter the second word:")? else {
        return Ok(());
    };
    bridge::run(session, &word1, &word2, out)?;

    // New text
    let Some(text) = prompt(input, out, "Please enter the new text:")? else {
        return Ok(());
    };
    augment::run(session, &text, out)?;

    // Shortest paths
    let Some(count) = prompt(input, out, "Please enter the number of words:")? else {
        return Ok(());
    };
    match count.trim() {
        "1" => {
            let Some(word) = prompt(input, out, "Please enter a word:")? else {
                return Ok(());
            };
            if word.trim().is_empty() {
                writeln!(out, "No word entered.")?;
            } else {
                path::run(session, &word, None, out)?;
            }
        }
        "2" => {
            let Some(from) = prompt(input, out, "Please enter the first word:")? else {
                return Ok(());
            };
            let Some(to) = prompt(input, out, "Please enter the second word:")? else {
                return Ok(());
            };
            path::run(session, &from, Some(&to), out)?;
        }
        other => {
            debug!(input = other, "rejected word count");
            writeln!(out, "Invalid number of words entered.")?;
        }
    }

    // Random walk
    writeln!(out, "Begin random walk:")?;
    walk::run(session, None, None, out)
}

/// Print `message` and read one line; `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<Option<String>> {
    writeln!(out, "{}", style(message).cyan())?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        debug!("input closed");
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::super::tests_support::session;
    use super::super::OutputFormat;
    use super::*;
    use std::io::Cursor;

    fn drive(corpus: &str, answers: &str) -> String {
        let mut session = session(corpus, OutputFormat::Text);
        let mut input = Cursor::new(answers.to_string());
        let mut out = Vec::new();
        run(&mut session, None, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_full_session() {
        let text = drive(
            "the cat sat on the mat",
            "the\nsat\nthe sat\n2\nthe\nmat\n",
        );
        assert!(text.contains("The bridge words from the to sat are: cat"), "{text}");
        assert!(text.contains("The processed text is: the cat sat"), "{text}");
        assert!(
            text.contains("One of the shortest paths from the to mat is: the -> mat"),
            "{text}"
        );
        assert!(text.contains("The length of the path is: 1"), "{text}");
        assert!(text.contains("Begin random walk:"), "{text}");
    }

    #[test]
    fn test_single_word_paths() {
        let text = drive("a b c", "a\nc\na c\n1\na\n");
        assert!(text.contains("a -> b -> c"), "{text}");
    }

    #[test]
    fn test_empty_single_word() {
        let text = drive("a b c", "a\nc\na c\n1\n\n");
        assert!(text.contains("No word entered."), "{text}");
        assert!(text.contains("Begin random walk:"), "{text}");
    }

    #[test]
    fn test_invalid_word_count() {
        let text = drive("a b c", "a\nc\na c\n3\n");
        assert!(text.contains("Invalid number of words entered."), "{text}");
        assert!(text.contains("Begin random walk:"), "{text}");
    }

    #[test]
    fn test_eof_ends_session() {
        let text = drive("a b c", "a\n");
        assert!(text.contains("Please enter the second word:"), "{text}");
        assert!(!text.contains("Please enter the new text:"), "{text}");
    }
}
