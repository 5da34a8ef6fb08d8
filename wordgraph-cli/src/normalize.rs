//! Text normalization
//!
//! Turns raw text into the lowercase, letters-only tokens the graph is built
//! from. ASCII punctuation and whitespace separate words; any other
//! non-letter character (digits, accents, symbols) is dropped in place, so
//! `"abc123def"` becomes the single token `"abcdef"`.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

static SEPARATORS: OnceLock<Regex> = OnceLock::new();
static NON_LETTERS: OnceLock<Regex> = OnceLock::new();

fn separators() -> &'static Regex {
    SEPARATORS.get_or_init(|| Regex::new(r"[[:punct:]\s]+").expect("valid regex"))
}

fn non_letters() -> &'static Regex {
    NON_LETTERS.get_or_init(|| Regex::new(r"[^a-zA-Z ]").expect("valid regex"))
}

/// Normalize text into word tokens
pub fn normalize(text: &str) -> Vec<String> {
    let spaced = separators().replace_all(text, " ");
    let letters = non_letters().replace_all(&spaced, "");
    letters
        .split_whitespace()
        .map(|word| word.to_ascii_lowercase())
        .collect()
}

/// Read a file and normalize its content
pub fn normalize_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let tokens = normalize(&content);
    debug!(
        path = %path.display(),
        bytes = content.len(),
        tokens = tokens.len(),
        "normalized input"
    );
    Ok(tokens)
}
