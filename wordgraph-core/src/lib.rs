//! Word adjacency graph and its queries
//!
//! A `GraphStore` is built once from a sequence of normalized words. Each
//! directed edge `a -> b` counts how often `b` directly follows `a`. On top of
//! the store sit four query families:
//!
//! - `bridge`: words `c` with `a -> c -> b`
//! - `augment`: insert a random bridge word between adjacent words of a text
//! - `paths`: all shortest paths between two words, or one path to every word
//! - `walk`: a random walk that stops at a dead end or a repeated edge
//!
//! Randomized queries take the caller's `rand::Rng`, so a seeded generator
//! gives reproducible results. Nothing in this crate reads files or prints.
//!
//! ```
//! use wordgraph_core::{all_shortest_paths, find_bridge_words, BridgeOutcome, GraphStore};
//!
//! let graph = GraphStore::from_tokens(["the", "cat", "sat"]);
//!
//! let bridges = find_bridge_words(&graph, "the", "sat");
//! assert!(matches!(bridges, BridgeOutcome::Found(ref words) if words.contains("cat")));
//!
//! let paths = all_shortest_paths(&graph, "the", "sat");
//! assert_eq!(paths.paths()[0].to_string(), "the -> cat -> sat");
//! ```

pub mod augment;
pub mod bridge;
pub mod errors;
pub mod graph;
pub mod interner;
pub mod paths;
pub mod walk;

pub use augment::augment;
pub use bridge::{find_bridge_words, BridgeOutcome, BridgeSet};
pub use errors::{QueryError, QueryResult};
pub use graph::{Edge, GraphStats, GraphStore};
pub use paths::{all_shortest_paths, reachable_from, PathOutcome, Reach, Reachability, WordPath};
pub use walk::{random_walk, walk_from, Walk, WalkStop};
