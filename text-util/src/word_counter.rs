//! Per-document word occurrence counts

use std::collections::HashMap;

/// Word-occurrence multiset for a single document.
///
/// Built once from the tokenizer output and read-only afterwards. Every word
/// stored here has a count of at least one; anything else counts as zero.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    counts: HashMap<String, u32>,
}

impl WordCounter {
    /// Count the tokens of one document.
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts = HashMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `word` in the document, 0 if it never appeared.
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// The distinct words of the document, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Number of distinct words.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
