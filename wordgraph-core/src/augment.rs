//! Bridge-word text augmentation

use rand::Rng;
use tracing::debug;

use crate::bridge::{find_bridge_words, BridgeOutcome};
use crate::graph::GraphStore;

/// Insert one randomly chosen bridge word between every adjacent pair of
/// `words` that has at least one.
///
/// Pairs without a bridge (including pairs with words absent from the graph)
/// are copied unchanged. Input with fewer than two words is returned as is.
pub fn augment<S, R>(graph: &GraphStore, words: &[S], rng: &mut R) -> Vec<String>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut output = Vec::with_capacity(words.len() * 2);
    let mut inserted = 0usize;

    for pair in words.windows(2) {
        let (current, next) = (pair[0].as_ref(), pair[1].as_ref());
        output.push(current.to_string());

        if let BridgeOutcome::Found(bridges) = find_bridge_words(graph, current, next) {
            let pick = rng.random_range(0..bridges.len());
            if let Some(bridge) = bridges.into_iter().nth(pick) {
                output.push(bridge);
                inserted += 1;
            }
        }
    }
    if let Some(last) = words.last() {
        output.push(last.as_ref().to_string());
    }

    debug!(input = words.len(), inserted, "augmented text");
    output
}
