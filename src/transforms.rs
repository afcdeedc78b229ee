//! Standalone reusable token transforms (legacy pipeline stages).
//!
//! Independent, composable, stateless transforms over sequences of strings
//! or token lists. Each one takes a sequence of inputs and returns a
//! sequence of outputs of equal length and order, and is usable on its own —
//! they are not composed into a single end-to-end function here.
//!
//! The token-list stages share the [`TokenStage`] trait so they can be
//! chained dynamically when callers want to; [`Tokenize`] and [`JoinTokens`]
//! sit at the string boundaries with their own signatures.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::nlp::lemmatizer::Lemmatizer;
use crate::nlp::stemmer::Stemmer;
use crate::nlp::tokenizer::tokenize;
use crate::types::LemmaCategory;

/// A transform over a sequence of token lists.
///
/// # Contract
///
/// - **Input**: a slice of token lists (one per document).
/// - **Output**: a vector of the same length, in the same order.
/// - **Stateless**: no call affects any later call.
pub trait TokenStage {
    fn transform(&self, input: &[Vec<String>]) -> Vec<Vec<String>>;
}

/// Split each string into word tokens.
///
/// Whitespace split; punctuation stays attached to its word
/// (`"The cat is on the mat."` → `["The", "cat", "is", "on", "the", "mat."]`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenize;

impl Tokenize {
    pub fn transform(&self, input: &[String]) -> Vec<Vec<String>> {
        input.iter().map(|text| tokenize(text)).collect()
    }
}

/// Lowercase each token and strip punctuation from it.
///
/// Tokens may come out empty (a token that was all punctuation); positions
/// are preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalize;

impl TokenStage for Normalize {
    fn transform(&self, input: &[Vec<String>]) -> Vec<Vec<String>> {
        input
            .iter()
            .map(|tokens| {
                tokens
                    .iter()
                    .map(|token| {
                        token
                            .to_lowercase()
                            .chars()
                            .filter(|c| c.is_alphanumeric() || *c == '_')
                            .collect()
                    })
                    .collect()
            })
            .collect()
    }
}

/// Remove tokens belonging to a stopword list for a configurable language.
#[derive(Debug, Clone)]
pub struct RemoveStopwords {
    stopwords: FxHashSet<String>,
}

impl Default for RemoveStopwords {
    fn default() -> Self {
        Self::new("english")
    }
}

impl RemoveStopwords {
    /// Create the stage for the given language; unknown languages fall back
    /// to English.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            _ => LANGUAGE::English,
        };
        let stopwords = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Self { stopwords }
    }
}

impl TokenStage for RemoveStopwords {
    fn transform(&self, input: &[Vec<String>]) -> Vec<Vec<String>> {
        input
            .iter()
            .map(|tokens| {
                tokens
                    .iter()
                    .filter(|token| !self.stopwords.contains(*token))
                    .cloned()
                    .collect()
            })
            .collect()
    }
}

/// Lemmatize each token to its dictionary base form (noun category).
#[derive(Debug, Clone, Copy, Default)]
pub struct Lemmatize {
    lemmatizer: Lemmatizer,
}

impl TokenStage for Lemmatize {
    fn transform(&self, input: &[Vec<String>]) -> Vec<Vec<String>> {
        input
            .iter()
            .map(|tokens| {
                tokens
                    .iter()
                    .map(|token| self.lemmatizer.lemmatize(token, LemmaCategory::Noun))
                    .collect()
            })
            .collect()
    }
}

/// Stem each token to its morphological root (English Snowball).
#[derive(Debug, Default)]
pub struct Stem {
    stemmer: Stemmer,
}

impl TokenStage for Stem {
    fn transform(&self, input: &[Vec<String>]) -> Vec<Vec<String>> {
        input
            .iter()
            .map(|tokens| tokens.iter().map(|token| self.stemmer.stem(token)).collect())
            .collect()
    }
}

/// Join each token list back into a single space-joined string.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinTokens;

impl JoinTokens {
    pub fn transform(&self, input: &[Vec<String>]) -> Vec<String> {
        input.iter().map(|tokens| tokens.join(" ")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn token_lists(items: &[&[&str]]) -> Vec<Vec<String>> {
        items
            .iter()
            .map(|toks| toks.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_tokenize() {
        let out = Tokenize.transform(&docs(&["The cat is on the mat.", "hello world"]));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], vec!["The", "cat", "is", "on", "the", "mat."]);
        assert_eq!(out[1], vec!["hello", "world"]);
    }

    #[test]
    fn test_normalize() {
        let out = Normalize.transform(&token_lists(&[&["The", "cat", "mat."]]));
        assert_eq!(out[0], vec!["the", "cat", "mat"]);
    }

    #[test]
    fn test_normalize_all_punctuation_token() {
        let out = Normalize.transform(&token_lists(&[&["--", "ok"]]));
        // Positions preserved, even for emptied tokens.
        assert_eq!(out[0], vec!["", "ok"]);
    }

    #[test]
    fn test_remove_stopwords_english() {
        let out = RemoveStopwords::default()
            .transform(&token_lists(&[&["the", "cat", "is", "on", "the", "mat"]]));
        assert!(out[0].contains(&"cat".to_string()));
        assert!(out[0].contains(&"mat".to_string()));
        assert!(!out[0].contains(&"the".to_string()));
        assert!(!out[0].contains(&"is".to_string()));
    }

    #[test]
    fn test_remove_stopwords_german() {
        let out =
            RemoveStopwords::new("german").transform(&token_lists(&[&["der", "hund", "und"]]));
        assert_eq!(out[0], vec!["hund"]);
    }

    #[test]
    fn test_lemmatize() {
        let out = Lemmatize::default().transform(&token_lists(&[&["cats", "cities", "women"]]));
        assert_eq!(out[0], vec!["cat", "city", "woman"]);
    }

    #[test]
    fn test_stem() {
        let out = Stem::default().transform(&token_lists(&[&["running", "connections"]]));
        assert_eq!(out[0], vec!["run", "connect"]);
    }

    #[test]
    fn test_join_tokens() {
        let out = JoinTokens.transform(&token_lists(&[&["cat", "mat"], &[]]));
        assert_eq!(out, vec!["cat mat".to_string(), String::new()]);
    }

    #[test]
    fn test_stages_preserve_outer_length_and_order() {
        let input = token_lists(&[&["alpha"], &["beta", "gamma"], &[]]);
        for stage in [
            Box::new(Normalize) as Box<dyn TokenStage>,
            Box::new(RemoveStopwords::default()),
            Box::new(Lemmatize::default()),
            Box::new(Stem::default()),
        ] {
            let out = stage.transform(&input);
            assert_eq!(out.len(), input.len());
        }
    }

    #[test]
    fn test_stages_are_independent() {
        // Stemming without prior normalization still works on raw tokens.
        let out = Stem::default().transform(&token_lists(&[&["Running"]]));
        assert_eq!(out[0].len(), 1);
    }
}
