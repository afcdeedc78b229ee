//! Stopword filtering
//!
//! This module provides the stopword set used by the normalization pipeline:
//! the base English list from the `stop-words` crate, a small domain list of
//! news-boilerplate terms, and — for a given corpus — the most frequent
//! corpus tokens, folded in by [`StopwordFilter::for_corpus`].

use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use stop_words::{get, LANGUAGE};

use crate::nlp::tokenizer::basic_clean;

/// News-boilerplate terms that carry no topical signal in article bodies.
pub static DOMAIN_STOPWORDS: &[&str] = &[
    "breaking", "read", "news", "said", "say", "says", "according", "report", "reported",
    "reports", "reuters", "published", "article", "update", "updated", "latest", "live",
    "share", "subscribe", "advertisement", "click", "story", "editor", "caption", "image",
    "getty", "photo", "video", "watch", "follow", "comment", "comments", "copyright", "via",
];

/// A filter for removing stopwords from text
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Base English stopwords plus the news-domain list.
    pub fn english() -> Self {
        let mut stopwords: FxHashSet<String> =
            get(LANGUAGE::English).iter().map(|s| s.to_lowercase()).collect();
        stopwords.extend(DOMAIN_STOPWORDS.iter().map(|s| s.to_string()));
        Self { stopwords }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Build the corpus stopword set.
    ///
    /// Absent documents are skipped. Each present document is basic-cleaned
    /// (lowercase, non-word characters and digit runs to spaces) and
    /// tokenized; tokens shorter than `min_len` are ignored. The `cutoff`
    /// most frequent tokens across the corpus are added to the base English
    /// and domain lists.
    ///
    /// Deterministic per corpus: ties are broken by count descending, then
    /// token ascending, so the included set never varies between runs.
    pub fn for_corpus<'a, I>(documents: I, cutoff: usize, min_len: usize) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut counts: FxHashMap<String, u64> = FxHashMap::default();
        for doc in documents {
            let Some(text) = doc else { continue };
            for token in basic_clean(text).split_whitespace() {
                if token.chars().count() >= min_len {
                    *counts.entry(token.to_string()).or_default() += 1;
                }
            }
        }

        let mut filter = Self::english();
        let top = counts
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
            .take(cutoff);
        for (token, _) in top {
            filter.stopwords.insert(token);
        }
        filter
    }

    /// Add additional stopwords to the filter
    pub fn add_words(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word) || self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::english();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("is"));
        assert!(filter.is_stopword("a"));
        assert!(!filter.is_stopword("machine"));
        assert!(!filter.is_stopword("chip"));
    }

    #[test]
    fn test_domain_stopwords_included() {
        let filter = StopwordFilter::english();

        assert!(filter.is_stopword("breaking"));
        assert!(filter.is_stopword("read"));
        assert!(filter.is_stopword("reuters"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_words(&["extra"]);
        assert!(filter.is_stopword("extra"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_for_corpus_adds_frequent_tokens() {
        let docs = [
            Some("blockchain blockchain blockchain markets"),
            None,
            Some("blockchain markets economy"),
        ];
        let filter = StopwordFilter::for_corpus(docs, 1, 3);

        // "blockchain" is the single most frequent token.
        assert!(filter.is_stopword("blockchain"));
        assert!(!filter.is_stopword("markets"));
        assert!(!filter.is_stopword("economy"));
    }

    #[test]
    fn test_for_corpus_min_len_filter() {
        let docs = [Some("ai ai ai ai chip chip")];
        let filter = StopwordFilter::for_corpus(docs, 1, 3);

        // "ai" is frequent but too short to enter the counts.
        assert!(!filter.is_stopword("ai"));
        assert!(filter.is_stopword("chip"));
    }

    #[test]
    fn test_for_corpus_tie_break_deterministic() {
        // "beta" and "alpha" both occur twice; the cutoff of 1 admits the
        // lexicographically smaller one.
        let docs = [Some("beta alpha"), Some("alpha beta")];
        let filter = StopwordFilter::for_corpus(docs, 1, 3);
        assert!(filter.is_stopword("alpha"));
        assert!(!filter.is_stopword("beta"));

        // Same corpus, same result.
        let again = StopwordFilter::for_corpus(docs, 1, 3);
        assert_eq!(filter.is_stopword("alpha"), again.is_stopword("alpha"));
        assert_eq!(filter.is_stopword("beta"), again.is_stopword("beta"));
    }

    #[test]
    fn test_for_corpus_skips_absent_documents() {
        let docs: [Option<&str>; 2] = [None, None];
        let filter = StopwordFilter::for_corpus(docs, 10, 3);
        // Only the base + domain lists remain.
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("breaking"));
    }
}
