//! Error taxonomy for graph queries
//!
//! Queries never fail with an error directly. They return tagged outcomes
//! (`BridgeOutcome`, `PathOutcome`, ...) and each outcome can be turned into a
//! `Result<_, QueryError>` when the caller prefers `?`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// One or more query endpoints are absent from the graph
    #[error("No {} in the graph!", join_words(.words))]
    NodeNotFound { words: Vec<String> },

    #[error("No bridge words from {from} to {to}!")]
    NoBridge { from: String, to: String },

    #[error("No path from {from} to {to}!")]
    NoPath { from: String, to: String },

    /// The graph was built from fewer than one token
    #[error("The graph is empty")]
    EmptyGraph,
}

fn join_words(words: &[String]) -> String {
    words.join(" or ")
}

pub type QueryResult<T> = Result<T, QueryError>;
