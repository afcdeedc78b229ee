//! Text cleaning and word tokenization.
//!
//! Two cleaning levels are provided:
//!
//! - [`basic_clean`] — the light pass used while building the corpus
//!   stopword set: lowercase, non-word characters and digit runs to spaces,
//!   whitespace collapsed.
//! - [`clean_text`] — the full pass used by the document normalizer:
//!   lowercase, URLs stripped, ordinal-number suffixes stripped, non-word
//!   characters stripped, standalone digit tokens stripped, whitespace
//!   collapsed and trimmed.
//!
//! Both are deterministic and idempotent on their own output.

use std::sync::LazyLock;

use regex::Regex;

/// URLs: http/https schemes or bare `www.` hosts, up to the next whitespace.
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)\S+").unwrap());

/// Ordinal numbers: digit run followed by st/nd/rd/th.
static ORDINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:st|nd|rd|th)\b").unwrap());

/// Anything that is not a word character or whitespace.
static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]+").unwrap());

/// Standalone digit-only tokens.
static STANDALONE_DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+\b").unwrap());

/// Any run of digits, standalone or embedded.
static DIGIT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Collapse repeated whitespace to single spaces and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Light cleaning used by the stopword-set builder.
///
/// Lowercases, replaces non-word characters and digit runs with spaces, and
/// collapses whitespace.
pub fn basic_clean(text: &str) -> String {
    let lowered = text.to_lowercase();
    let no_symbols = NON_WORD_RE.replace_all(&lowered, " ");
    let no_digits = DIGIT_RUN_RE.replace_all(&no_symbols, " ");
    collapse_whitespace(&no_digits)
}

/// Full cleaning used by the document normalizer.
///
/// Order matters: URLs are removed before punctuation stripping so their
/// fragments never survive as tokens, and ordinals are removed before the
/// digit pass so "21st" does not decay into a stray "st".
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let no_urls = URL_RE.replace_all(&lowered, " ");
    let no_ordinals = ORDINAL_RE.replace_all(&no_urls, " ");
    let no_symbols = NON_WORD_RE.replace_all(&no_ordinals, " ");
    let no_digits = STANDALONE_DIGITS_RE.replace_all(&no_symbols, " ");
    collapse_whitespace(&no_digits)
}

/// Split text into word tokens on whitespace.
///
/// Works on cleaned and raw text alike; on raw text punctuation stays
/// attached to its word.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
