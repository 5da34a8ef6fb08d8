//! String interning for the word graph
//!
//! Every distinct word is stored once and referenced by a small key. Keys are
//! handed out sequentially, so `key.into_usize()` doubles as the node's slot in
//! the adjacency table.

use lasso::{Key, Rodeo, RodeoReader, Spur};

/// A word key - small (4 bytes) reference to an interned word
pub type WordKey = Spur;

/// Interner used while the graph is being built
#[derive(Debug, Default)]
pub struct WordInterner {
    inner: Rodeo,
}

impl WordInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a word, returning its key
    /// If the word was already interned, returns the existing key
    #[inline]
    pub fn intern(&mut self, word: &str) -> WordKey {
        self.inner.get_or_intern(word)
    }

    #[inline]
    pub fn get(&self, word: &str) -> Option<WordKey> {
        self.inner.get(word)
    }

    /// Number of unique words interned
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Freeze into a read-only interner once building is complete
    pub fn freeze(self) -> FrozenInterner {
        FrozenInterner {
            inner: self.inner.into_reader(),
        }
    }
}

/// Read-only interner for a finished graph
#[derive(Debug)]
pub struct FrozenInterner {
    inner: RodeoReader,
}

impl FrozenInterner {
    /// Resolve a key to its word
    #[inline]
    pub fn resolve(&self, key: WordKey) -> &str {
        self.inner.resolve(&key)
    }

    /// Try to get the key of a word
    #[inline]
    pub fn get(&self, word: &str) -> Option<WordKey> {
        self.inner.get(word)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Keys in interning order
    pub fn keys(&self) -> impl Iterator<Item = WordKey> + '_ {
        (0..self.inner.len()).filter_map(WordKey::try_from_usize)
    }
}

/// Adjacency slot for a key
#[inline]
pub fn slot(key: WordKey) -> usize {
    key.into_usize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interner_deduplication() {
        let mut interner = WordInterner::new();

        let k1 = interner.intern("cat");
        let k2 = interner.intern("cat");
        let k3 = interner.intern("sat");

        assert_eq!(k1, k2);
        assert_ne!(k1, k3);
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_keys_are_sequential_slots() {
        let mut interner = WordInterner::new();
        let words = ["the", "cat", "sat", "the"];
        let slots: Vec<usize> = words.iter().map(|w| slot(interner.intern(w))).collect();
        assert_eq!(slots, vec![0, 1, 2, 0]);

        let frozen = interner.freeze();
        let resolved: Vec<&str> = frozen.keys().map(|k| frozen.resolve(k)).collect();
        assert_eq!(resolved, vec!["the", "cat", "sat"]);
    }
}
