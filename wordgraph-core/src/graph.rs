//! Word adjacency graph
//!
//! Built once from a token sequence and immutable afterwards. Each node is an
//! interned word; each directed edge `a -> b` carries the number of times `b`
//! immediately followed `a` in the input.
//!
//! Neighbour maps keep first-occurrence order, so iteration (and therefore any
//! seeded random choice over it) is identical from run to run.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::Serialize;
use tracing::debug;

use crate::interner::{slot, FrozenInterner, WordInterner, WordKey};

/// Outgoing edges of one node: neighbour -> weight
pub type Neighbors = IndexMap<WordKey, u32, FxBuildHasher>;

/// An exported edge triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub weight: u32,
}

/// Summary counts for a graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub total_weight: u64,
    /// Nodes without outgoing edges
    pub sinks: usize,
}

#[derive(Debug)]
pub struct GraphStore {
    interner: FrozenInterner,
    /// Indexed by `slot(key)`
    adjacency: Vec<Neighbors>,
}

impl GraphStore {
    /// Build the graph from a token sequence in a single pass.
    ///
    /// Every token becomes a node (the last one may be a sink). Each
    /// consecutive pair adds 1 to the weight of its edge. Empty tokens are
    /// skipped.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut interner = WordInterner::new();
        let mut adjacency: Vec<Neighbors> = Vec::new();
        let mut prev: Option<WordKey> = None;
        let mut token_count = 0usize;

        for token in tokens {
            let word = token.as_ref();
            if word.is_empty() {
                continue;
            }
            token_count += 1;

            let key = interner.intern(word);
            if slot(key) == adjacency.len() {
                adjacency.push(Neighbors::default());
            }

            if let Some(prev) = prev {
                *adjacency[slot(prev)].entry(key).or_insert(0) += 1;
            }
            prev = Some(key);
        }

        let graph = Self {
            interner: interner.freeze(),
            adjacency,
        };
        debug!(
            tokens = token_count,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built word graph"
        );
        graph
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct directed edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum()
    }

    /// Sum of all edge weights (tokens - 1 for a non-empty input)
    pub fn total_weight(&self) -> u64 {
        self.adjacency
            .iter()
            .flat_map(|n| n.values())
            .map(|&w| u64::from(w))
            .sum()
    }

    pub fn has_node(&self, word: &str) -> bool {
        self.key(word).is_some()
    }

    /// Outgoing neighbours of `word` with their weights, in first-occurrence
    /// order. Empty if the word is absent or a sink.
    pub fn neighbors<'a>(&'a self, word: &str) -> impl Iterator<Item = (&'a str, u32)> + 'a {
        self.key(word)
            .map(|k| self.out_edges(k))
            .into_iter()
            .flat_map(|n| n.iter())
            .map(|(&k, &w)| (self.word(k), w))
    }

    /// Weight of the edge `from -> to`, if it exists
    pub fn weight(&self, from: &str, to: &str) -> Option<u32> {
        let from = self.key(from)?;
        let to = self.key(to)?;
        self.out_edges(from).get(&to).copied()
    }

    /// All words, in first-occurrence order
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.interner.keys().map(|k| self.interner.resolve(k))
    }

    /// Edge triples for export. Source order follows `words()`; targets follow
    /// first occurrence after their source.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        self.interner.keys().flat_map(move |src| {
            self.out_edges(src).iter().map(move |(&dst, &weight)| Edge {
                source: self.word(src),
                target: self.word(dst),
                weight,
            })
        })
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.node_count(),
            edges: self.edge_count(),
            total_weight: self.total_weight(),
            sinks: self.adjacency.iter().filter(|n| n.is_empty()).count(),
        }
    }

    // ---- key-level primitives used by the query modules ----

    #[inline]
    pub(crate) fn key(&self, word: &str) -> Option<WordKey> {
        self.interner.get(word)
    }

    #[inline]
    pub(crate) fn word(&self, key: WordKey) -> &str {
        self.interner.resolve(key)
    }

    #[inline]
    pub(crate) fn out_edges(&self, key: WordKey) -> &Neighbors {
        &self.adjacency[slot(key)]
    }

    #[inline]
    pub(crate) fn has_edge(&self, from: WordKey, to: WordKey) -> bool {
        self.out_edges(from).contains_key(&to)
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = WordKey> + '_ {
        self.interner.keys()
    }
}
