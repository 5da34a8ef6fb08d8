//! Shortest paths over the word graph
//!
//! Both queries are breadth-first and treat every edge as unit cost: edge
//! weights never influence which path is shortest.
//!
//! - `all_shortest_paths`: every minimum-length path between two words that the
//!   path-queue BFS enumerates. A node is expanded only the first time a path
//!   ending in it is dequeued, so shortest paths that converge on a node and
//!   diverge again afterwards are reported through the first arrival only.
//! - `reachable_from`: one BFS-tree path from a start word to every other word.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::{debug, trace};

use crate::errors::{QueryError, QueryResult};
use crate::graph::GraphStore;
use crate::interner::WordKey;

/// A non-empty sequence of words; its length is the number of edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WordPath(Vec<String>);

impl WordPath {
    fn from_keys(graph: &GraphStore, keys: &[WordKey]) -> Self {
        Self(keys.iter().map(|&k| graph.word(k).to_string()).collect())
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    /// Number of edges traversed
    pub fn len(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// True for the zero-edge path from a word to itself
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn start(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or_default()
    }

    pub fn end(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    /// Sum of edge weights along the path. Informational only.
    pub fn weight(&self, graph: &GraphStore) -> u64 {
        self.0
            .windows(2)
            .filter_map(|pair| graph.weight(&pair[0], &pair[1]))
            .map(u64::from)
            .sum()
    }

    pub fn into_words(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for WordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" -> "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum PathOutcome {
    NodeNotFound { missing: Vec<String> },
    NoPath,
    /// All returned paths have the same, minimal length
    Found(Vec<WordPath>),
}

impl PathOutcome {
    pub fn paths(&self) -> &[WordPath] {
        match self {
            PathOutcome::Found(paths) => paths,
            _ => &[],
        }
    }

    /// Length shared by all found paths
    pub fn distance(&self) -> Option<usize> {
        self.paths().first().map(WordPath::len)
    }

    pub fn into_result(self, from: &str, to: &str) -> QueryResult<Vec<WordPath>> {
        match self {
            PathOutcome::Found(paths) => Ok(paths),
            PathOutcome::NoPath => Err(QueryError::NoPath {
                from: from.to_string(),
                to: to.to_string(),
            }),
            PathOutcome::NodeNotFound { missing } => {
                Err(QueryError::NodeNotFound { words: missing })
            }
        }
    }
}

/// Find all shortest paths from `word1` to `word2`.
///
/// Paths are grown breadth-first from `[word1]` by appending each outgoing
/// neighbour of the last word. A path ending in `word2` is kept if it is no
/// longer than the best so far. `word1 == word2` yields the single zero-length
/// path.
pub fn all_shortest_paths(graph: &GraphStore, word1: &str, word2: &str) -> PathOutcome {
    let (from, to) = match (graph.key(word1), graph.key(word2)) {
        (Some(from), Some(to)) => (from, to),
        (from, to) => {
            let missing = [(word1, from), (word2, to)]
                .into_iter()
                .filter(|(_, key)| key.is_none())
                .map(|(word, _)| word.to_string())
                .collect();
            return PathOutcome::NodeNotFound { missing };
        }
    };

    let mut queue: VecDeque<Vec<WordKey>> = VecDeque::new();
    let mut visited: FxHashSet<WordKey> = FxHashSet::default();
    let mut shortest: Vec<Vec<WordKey>> = Vec::new();
    let mut best = usize::MAX;
    let mut dequeued = 0usize;

    queue.push_back(vec![from]);

    while let Some(path) = queue.pop_front() {
        dequeued += 1;
        let length = path.len() - 1;
        // Queue lengths never decrease, nothing after this can tie
        if length > best {
            break;
        }
        let Some(&last) = path.last() else {
            continue;
        };

        if last == to {
            if length < best {
                best = length;
                shortest.clear();
            }
            shortest.push(path.clone());
        }

        if visited.insert(last) {
            for &next in graph.out_edges(last).keys() {
                let mut extended = Vec::with_capacity(path.len() + 1);
                extended.extend_from_slice(&path);
                extended.push(next);
                queue.push_back(extended);
            }
        }
    }

    debug!(word1, word2, dequeued, found = shortest.len(), "all shortest paths");
    if shortest.is_empty() {
        PathOutcome::NoPath
    } else {
        PathOutcome::Found(
            shortest
                .iter()
                .map(|keys| WordPath::from_keys(graph, keys))
                .collect(),
        )
    }
}

/// Result for one destination of a single-source query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum Reach {
    Path(WordPath),
    Unreachable,
}

impl Reach {
    pub fn path(&self) -> Option<&WordPath> {
        match self {
            Reach::Path(path) => Some(path),
            Reach::Unreachable => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum Reachability {
    NodeNotFound { start: String },
    /// Every word other than the start, keyed by word
    Paths(BTreeMap<String, Reach>),
}

impl Reachability {
    pub fn get(&self, word: &str) -> Option<&Reach> {
        match self {
            Reachability::Paths(paths) => paths.get(word),
            Reachability::NodeNotFound { .. } => None,
        }
    }

    pub fn path_to(&self, word: &str) -> Option<&WordPath> {
        self.get(word).and_then(Reach::path)
    }

    pub fn into_result(self) -> QueryResult<BTreeMap<String, Reach>> {
        match self {
            Reachability::Paths(paths) => Ok(paths),
            Reachability::NodeNotFound { start } => {
                Err(QueryError::NodeNotFound { words: vec![start] })
            }
        }
    }
}

/// One BFS path from `start` to every other word in the graph.
///
/// Each destination gets the path through its BFS predecessor chain (the
/// first discovery), not every tied shortest path. Words BFS never reaches
/// are reported as `Reach::Unreachable`.
pub fn reachable_from(graph: &GraphStore, start: &str) -> Reachability {
    let Some(source) = graph.key(start) else {
        return Reachability::NodeNotFound {
            start: start.to_string(),
        };
    };

    let mut predecessor: FxHashMap<WordKey, WordKey> = FxHashMap::default();
    let mut visited: FxHashSet<WordKey> = FxHashSet::default();
    let mut queue: VecDeque<WordKey> = VecDeque::new();

    visited.insert(source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for &neighbor in graph.out_edges(current).keys() {
            if visited.insert(neighbor) {
                predecessor.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    let mut paths = BTreeMap::new();
    for key in graph.keys().filter(|&k| k != source) {
        let reach = if predecessor.contains_key(&key) {
            let mut chain = vec![key];
            let mut cursor = key;
            while let Some(&prev) = predecessor.get(&cursor) {
                chain.push(prev);
                cursor = prev;
            }
            chain.reverse();
            Reach::Path(WordPath::from_keys(graph, &chain))
        } else {
            trace!(word = graph.word(key), "unreachable");
            Reach::Unreachable
        };
        paths.insert(graph.word(key).to_string(), reach);
    }

    debug!(start, reached = predecessor.len(), total = paths.len(), "reachable from");
    Reachability::Paths(paths)
}
