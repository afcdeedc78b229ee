//! Snowball stemming.
//!
//! Thin wrapper over `rust-stemmers` for the English Snowball algorithm.
//! Stemming is rule-based suffix stripping, independent of grammatical
//! category — distinct from lemmatization, which targets dictionary forms.

use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};

/// English Snowball stemmer.
pub struct Stemmer {
    inner: SnowballStemmer,
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer {
    pub fn new() -> Self {
        Self {
            inner: SnowballStemmer::create(Algorithm::English),
        }
    }

    /// Stem a single word to its morphological root.
    pub fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

impl std::fmt::Debug for Stemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stemmer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stemming() {
        let stemmer = Stemmer::new();
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("connections"), "connect");
        assert_eq!(stemmer.stem("argued"), "argu");
    }

    #[test]
    fn test_stemming_is_not_lemmatization() {
        let stemmer = Stemmer::new();
        // Snowball strips suffixes without regard for dictionary forms.
        assert_eq!(stemmer.stem("universities"), "univers");
    }
}
