//! Bridge word discovery
//!
//! A bridge word between `a` and `b` is any `c` with edges `a -> c` and
//! `c -> b`. Only edge existence matters, weights are ignored.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::trace;

use crate::errors::{QueryError, QueryResult};
use crate::graph::GraphStore;

/// Sorted set of bridge words
pub type BridgeSet = BTreeSet<String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum BridgeOutcome {
    /// At least one endpoint is absent; lists the absent words in argument order
    NodeNotFound { missing: Vec<String> },
    /// Both endpoints exist but nothing connects them in two steps
    NoBridge,
    Found(BridgeSet),
}

impl BridgeOutcome {
    /// Bridge words, or an empty set for either failure variant
    pub fn words(&self) -> impl Iterator<Item = &str> {
        let set = match self {
            BridgeOutcome::Found(set) => Some(set),
            _ => None,
        };
        set.into_iter().flatten().map(String::as_str)
    }

    pub fn is_found(&self) -> bool {
        matches!(self, BridgeOutcome::Found(_))
    }

    pub fn into_result(self, from: &str, to: &str) -> QueryResult<BridgeSet> {
        match self {
            BridgeOutcome::Found(set) => Ok(set),
            BridgeOutcome::NoBridge => Err(QueryError::NoBridge {
                from: from.to_string(),
                to: to.to_string(),
            }),
            BridgeOutcome::NodeNotFound { missing } => {
                Err(QueryError::NodeNotFound { words: missing })
            }
        }
    }
}

/// Find every bridge word from `word1` to `word2`.
pub fn find_bridge_words(graph: &GraphStore, word1: &str, word2: &str) -> BridgeOutcome {
    let (from, to) = match (graph.key(word1), graph.key(word2)) {
        (Some(from), Some(to)) => (from, to),
        (from, to) => {
            let missing = [(word1, from), (word2, to)]
                .into_iter()
                .filter(|(_, key)| key.is_none())
                .map(|(word, _)| word.to_string())
                .collect::<Vec<_>>();
            trace!(?missing, "bridge query endpoint not in graph");
            return BridgeOutcome::NodeNotFound { missing };
        }
    };

    let bridges: BridgeSet = graph
        .out_edges(from)
        .keys()
        .filter(|&&mid| graph.has_edge(mid, to))
        .map(|&mid| graph.word(mid).to_string())
        .collect();

    trace!(word1, word2, count = bridges.len(), "bridge query");
    if bridges.is_empty() {
        BridgeOutcome::NoBridge
    } else {
        BridgeOutcome::Found(bridges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(text: &str) -> GraphStore {
        GraphStore::from_tokens(text.split_whitespace())
    }

    fn found(words: &[&str]) -> BridgeOutcome {
        BridgeOutcome::Found(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_single_bridge() {
        let g = graph("the cat sat");
        assert_eq!(find_bridge_words(&g, "the", "sat"), found(&["cat"]));
    }

    #[test]
    fn test_multiple_bridges_sorted() {
        let g = graph("seek new life and seek out civilizations and seek strange life");
        // seek -> new -> life, seek -> strange -> life
        let outcome = find_bridge_words(&g, "seek", "life");
        assert_eq!(outcome, found(&["new", "strange"]));
        assert_eq!(outcome.words().collect::<Vec<_>>(), vec!["new", "strange"]);
    }

    #[test]
    fn test_not_symmetric() {
        let g = graph("the cat sat");
        assert_eq!(find_bridge_words(&g, "sat", "the"), BridgeOutcome::NoBridge);
    }

    #[test]
    fn test_missing_endpoints_are_distinct_from_no_bridge() {
        let g = graph("the cat sat");

        assert_eq!(
            find_bridge_words(&g, "dog", "sat"),
            BridgeOutcome::NodeNotFound {
                missing: vec!["dog".into()]
            }
        );
        assert_eq!(
            find_bridge_words(&g, "dog", "fish"),
            BridgeOutcome::NodeNotFound {
                missing: vec!["dog".into(), "fish".into()]
            }
        );
        assert_eq!(find_bridge_words(&g, "cat", "the"), BridgeOutcome::NoBridge);
    }

    #[test]
    fn test_same_word_without_self_loop() {
        let g = graph("a b c a");
        assert_eq!(find_bridge_words(&g, "a", "a"), BridgeOutcome::NoBridge);
    }

    #[test]
    fn test_same_word_with_self_loop() {
        // a -> a exists, so a is its own bridge: a -> a -> a
        let g = graph("a a b");
        assert_eq!(find_bridge_words(&g, "a", "a"), found(&["a"]));
        // a -> a -> b also makes a a bridge from a to b
        assert_eq!(find_bridge_words(&g, "a", "b"), found(&["a"]));
    }

    #[test]
    fn test_two_cycle_bridges_back_to_self() {
        let g = graph("a b a");
        assert_eq!(find_bridge_words(&g, "a", "a"), found(&["b"]));
    }

    #[test]
    fn test_weights_do_not_matter() {
        let g = graph("x y z x y z x y z p q z");
        // x -> y -> z has weight 3, p -> q -> z weight 1; only existence counts
        assert_eq!(find_bridge_words(&g, "x", "z"), found(&["y"]));
        assert_eq!(find_bridge_words(&g, "p", "z"), found(&["q"]));
    }

    #[test]
    fn test_into_result() {
        let g = graph("the cat sat");
        let err = find_bridge_words(&g, "sat", "the")
            .into_result("sat", "the")
            .unwrap_err();
        assert_eq!(err.to_string(), "No bridge words from sat to the!");

        let ok = find_bridge_words(&g, "the", "sat")
            .into_result("the", "sat")
            .unwrap();
        assert!(ok.contains("cat"));
    }
}
