//! Random walks
//!
//! A walk starts at a uniformly random word and keeps following a uniformly
//! random outgoing edge. It stops at a word without outgoing edges, or when
//! the edge it just picked was already traversed during this walk. Every
//! edge can be traversed at most once, so a walk takes at most `|E| + 1`
//! steps.

use rand::Rng;
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::{debug, trace};

use crate::errors::{QueryError, QueryResult};
use crate::graph::GraphStore;
use crate::interner::WordKey;

/// Why a walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkStop {
    /// The current word has no outgoing edges
    DeadEnd,
    /// The chosen edge had already been traversed
    RepeatedEdge,
    /// There was no word to start from
    EmptyGraph,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Walk {
    pub words: Vec<String>,
    pub stop: WalkStop,
}

impl Walk {
    /// Number of edges traversed
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    pub fn into_result(self) -> QueryResult<Vec<String>> {
        match self.stop {
            WalkStop::EmptyGraph => Err(QueryError::EmptyGraph),
            _ => Ok(self.words),
        }
    }
}

/// Walk from a uniformly random start word.
pub fn random_walk<R>(graph: &GraphStore, rng: &mut R) -> Walk
where
    R: Rng + ?Sized,
{
    if graph.is_empty() {
        return Walk {
            words: Vec::new(),
            stop: WalkStop::EmptyGraph,
        };
    }
    let pick = rng.random_range(0..graph.node_count());
    match graph.keys().nth(pick) {
        Some(start) => walk_keys(graph, start, rng),
        None => Walk {
            words: Vec::new(),
            stop: WalkStop::EmptyGraph,
        },
    }
}

/// Walk from a given start word. `None` if the word is not in the graph.
pub fn walk_from<R>(graph: &GraphStore, start: &str, rng: &mut R) -> Option<Walk>
where
    R: Rng + ?Sized,
{
    let start = graph.key(start)?;
    Some(walk_keys(graph, start, rng))
}

fn walk_keys<R>(graph: &GraphStore, start: WordKey, rng: &mut R) -> Walk
where
    R: Rng + ?Sized,
{
    let mut traversed: FxHashSet<(WordKey, WordKey)> = FxHashSet::default();
    let mut words = vec![start];
    let mut current = start;

    let stop = loop {
        let edges = graph.out_edges(current);
        if edges.is_empty() {
            break WalkStop::DeadEnd;
        }
        let pick = rng.random_range(0..edges.len());
        let Some((&next, _)) = edges.get_index(pick) else {
            break WalkStop::DeadEnd;
        };
        if !traversed.insert((current, next)) {
            break WalkStop::RepeatedEdge;
        }
        trace!(from = graph.word(current), to = graph.word(next), "walk step");
        words.push(next);
        current = next;
    };

    debug!(steps = words.len() - 1, ?stop, "random walk");
    Walk {
        words: words.into_iter().map(|k| graph.word(k).to_string()).collect(),
        stop,
    }
}
