//! Core types shared across the crate.
//!
//! This module defines the part-of-speech tag set, the grammatical category
//! used for lemmatization, and the pipeline configuration.

use serde::{Deserialize, Serialize};

/// Part-of-speech tag assigned to a token.
///
/// Covers the open classes the lemmatizer cares about plus the closed
/// classes the tagger can recognize. Anything unrecognized is tagged
/// [`PosTag::Noun`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    Preposition,
    Pronoun,
    Conjunction,
}

impl PosTag {
    /// Whether this tag is a noun class (common or proper).
    #[inline]
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    /// Map the tag to the grammatical category fed to the lemmatizer.
    ///
    /// Adjective, verb, noun, and adverb tags map to the corresponding
    /// category; every other tag defaults to the noun category.
    #[inline]
    pub fn lemma_category(&self) -> LemmaCategory {
        match self {
            PosTag::Adjective => LemmaCategory::Adjective,
            PosTag::Verb => LemmaCategory::Verb,
            PosTag::Adverb => LemmaCategory::Adverb,
            _ => LemmaCategory::Noun,
        }
    }
}

/// Grammatical category used to select lemmatization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LemmaCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

/// Configuration for the preprocessing pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Name of the dataset column holding the raw article text.
    pub text_column: String,
    /// How many of the most frequent corpus tokens join the stopword set.
    pub frequency_cutoff: usize,
    /// Minimum token length kept by the normalizer and the stopword builder.
    pub min_token_len: usize,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            text_column: "full_content".to_string(),
            frequency_cutoff: 50,
            min_token_len: 3,
        }
    }
}

impl PrepConfig {
    /// Set the text column name.
    pub fn with_text_column(mut self, name: impl Into<String>) -> Self {
        self.text_column = name.into();
        self
    }

    /// Set the corpus-frequency cutoff.
    pub fn with_frequency_cutoff(mut self, cutoff: usize) -> Self {
        self.frequency_cutoff = cutoff;
        self
    }

    /// Set the minimum token length.
    pub fn with_min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }
}
