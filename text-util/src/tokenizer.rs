//! Document tokenization
//!
//! Turns raw document text into the token stream counted by
//! [`WordCounter`](crate::word_counter::WordCounter): lowercase, split on
//! anything that is not alphanumeric, drop purely numeric fragments, then
//! optionally remove stopwords and apply Porter stemming.

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

/// Common English stopwords, removed when stopword filtering is enabled.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an",
    "and", "any", "are", "as", "at", "be", "because", "been", "before",
    "being", "below", "between", "both", "but", "by", "can", "cannot",
    "could", "did", "do", "does", "doing", "down", "during", "each", "few",
    "for", "from", "further", "had", "has", "have", "having", "he", "her",
    "here", "hers", "herself", "him", "himself", "his", "how", "i", "if",
    "in", "into", "is", "it", "its", "itself", "me", "more", "most", "my",
    "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
    "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shall", "she", "should", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "upon", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Tokenizer configured once per run and reused for every document.
pub struct Tokenizer {
    stop_words: Option<HashSet<&'static str>>,
    stemmer: Option<Stemmer>,
}

impl Tokenizer {
    pub fn new(remove_stopwords: bool, stem: bool) -> Self {
        let stop_words = if remove_stopwords {
            Some(STOP_WORDS.iter().copied().collect())
        } else {
            None
        };
        let stemmer = if stem {
            Some(Stemmer::create(Algorithm::English))
        } else {
            None
        };
        Self { stop_words, stemmer }
    }

    /// Tokenize one document's text.
    ///
    /// Tokens that contain no letter at all (bill numbers, session years)
    /// carry no topical signal and are dropped.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .filter(|s| s.chars().any(|c| c.is_alphabetic()))
            .filter(|s| match &self.stop_words {
                Some(stop) => !stop.contains(*s),
                None => true,
            })
            .map(|s| match &self.stemmer {
                Some(stemmer) => stemmer.stem(s).to_string(),
                None => s.to_string(),
            })
            .collect()
    }
}
