//! Document normalization.
//!
//! [`DocumentNormalizer`] turns one raw document into its normalized form:
//! cleaned, tokenized, stopword-filtered, POS-tagged, and lemmatized.
//!
//! # Contract
//!
//! - **Input**: one document (possibly absent) plus the completed stopword
//!   set. The stopword set must be fully built before any document is
//!   normalized.
//! - **Output**: a single space-joined string of surviving lemmas; empty
//!   when the document is absent or nothing survives filtering.
//! - **Deterministic**: output is a pure function of the document and the
//!   stopword set.
//! - **Fixed point**: normalizing an output again (with the same stopword
//!   set) removes no further tokens — cleaning is a no-op on already-clean
//!   text and every surviving lemma already satisfies the length and
//!   stopword filters.

use crate::nlp::lemmatizer::Lemmatizer;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tagger::tag_tokens;
use crate::nlp::tokenizer::clean_text;

/// Residual ordinal-suffix artifact excluded from final output.
const ORDINAL_ARTIFACT: &str = "th";

/// Per-document normalizer over a completed stopword set.
#[derive(Debug, Clone)]
pub struct DocumentNormalizer {
    stopwords: StopwordFilter,
    lemmatizer: Lemmatizer,
    min_token_len: usize,
}

impl DocumentNormalizer {
    pub fn new(stopwords: StopwordFilter, min_token_len: usize) -> Self {
        Self {
            stopwords,
            lemmatizer: Lemmatizer::new(),
            min_token_len,
        }
    }

    /// Normalize one document.
    ///
    /// Steps, in order: absent → empty string; lowercase; strip URLs,
    /// ordinal suffixes, non-word characters, and standalone digits;
    /// collapse whitespace; tokenize; drop stopwords and short tokens;
    /// POS-tag; lemmatize each token by its tag's category; final filter
    /// re-applying the length and stopword checks to the lemmas plus the
    /// literal "th" exclusion; join with spaces.
    ///
    /// The stopword check runs on lemmas as well as surface tokens: an
    /// inflected form can lemmatize into the stopword set ("markets" →
    /// "market"), and without the re-check such lemmas would survive one
    /// pass only to be removed on the next, breaking the fixed-point
    /// guarantee.
    pub fn normalize(&self, document: Option<&str>) -> String {
        let Some(text) = document else {
            return String::new();
        };

        let cleaned = clean_text(text);
        let tokens: Vec<&str> = cleaned
            .split_whitespace()
            .filter(|t| t.chars().count() >= self.min_token_len && !self.stopwords.is_stopword(t))
            .collect();
        if tokens.is_empty() {
            return String::new();
        }

        let tags = tag_tokens(&tokens);
        let lemmas = tokens
            .iter()
            .zip(&tags)
            .map(|(token, tag)| self.lemmatizer.lemmatize(token, tag.lemma_category()))
            .filter(|lemma| {
                lemma.chars().count() >= self.min_token_len
                    && lemma.as_str() != ORDINAL_ARTIFACT
                    && !self.stopwords.is_stopword(lemma)
            });

        lemmas.collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> DocumentNormalizer {
        DocumentNormalizer::new(StopwordFilter::english(), 3)
    }

    #[test]
    fn test_absent_document_is_empty() {
        assert_eq!(normalizer().normalize(None), "");
    }

    #[test]
    fn test_news_sentence() {
        let out = normalizer().normalize(Some(
            "Breaking: Apple's new AI chip costs $999 (read more at https://example.com)!",
        ));

        // URLs, punctuation, and digits are gone; domain stopwords
        // ("breaking", "read") are filtered; substantive lemmas remain.
        assert!(out.contains("apple"));
        assert!(out.contains("chip"));
        assert!(out.contains("cost"));
        assert!(!out.contains("breaking"));
        assert!(!out.contains("999"));
        assert!(!out.contains("http"));
        assert!(!out.contains("example"));
        assert!(!out.split_whitespace().any(|t| t == "th"));
    }

    #[test]
    fn test_stopword_only_document_is_empty() {
        assert_eq!(normalizer().normalize(Some("the and of but")), "");
        assert_eq!(normalizer().normalize(Some("a an it")), "");
    }

    #[test]
    fn test_short_tokens_removed() {
        // "ox" is below the minimum length of 3.
        let out = normalizer().normalize(Some("ox wagon journey"));
        assert!(!out.contains("ox "));
        assert!(out.contains("wagon"));
    }

    #[test]
    fn test_no_residual_th_token() {
        let out = normalizer().normalize(Some("the 4 th quarter results"));
        assert!(!out.split_whitespace().any(|t| t == "th"));
        assert!(out.contains("quarter"));
    }

    #[test]
    fn test_normalization_fixed_point() {
        let n = normalizer();
        for raw in [
            "Breaking: Apple's new AI chip costs $999 (read more at https://example.com)!",
            "Yoga and meditation improved wellness outcomes in the 21st century.",
            "Markets rallied as investors bought technology stocks on Tuesday.",
        ] {
            let once = n.normalize(Some(raw));
            let twice = n.normalize(Some(&once));
            assert_eq!(once, twice, "not a fixed point for {raw:?}");
        }
    }

    #[test]
    fn test_fixed_point_when_lemma_enters_stopword_set() {
        // A corpus-frequent token swallows its own inflections: "markets"
        // lemmatizes to "market", which the corpus stopword set contains.
        // The lemma must be dropped on the first pass, not the second.
        let corpus = [Some("market market market rally")];
        let stopwords = StopwordFilter::for_corpus(corpus, 1, 3);
        assert!(stopwords.is_stopword("market"));
        assert!(!stopwords.is_stopword("markets"));

        let n = DocumentNormalizer::new(stopwords, 3);
        let once = n.normalize(Some("markets rally strongly"));
        assert!(!once.split_whitespace().any(|t| t == "market"));

        let twice = n.normalize(Some(&once));
        assert_eq!(once, twice, "not a fixed point: {once:?} -> {twice:?}");
    }

    #[test]
    fn test_deterministic() {
        let n = normalizer();
        let doc = Some("Scientists reported rising temperatures across Europe.");
        assert_eq!(n.normalize(doc), n.normalize(doc));
    }
}
