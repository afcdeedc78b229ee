//! Rule-based part-of-speech tagging.
//!
//! A lightweight tagger sufficient to pick the lemmatization category for a
//! token: closed-class words come from small static lexicons, open-class
//! words are guessed from suffix shape, and everything else defaults to
//! noun. No context is used; tagging is per-token and deterministic.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

use crate::types::PosTag;

static DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "another", "such",
];

static PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "from", "upon", "over", "under",
    "within", "without", "toward", "towards", "across", "behind", "beyond", "near",
];

static PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
    "mine", "your", "yours", "his", "hers", "its", "our", "ours", "their", "theirs", "who",
    "whom", "whose", "which", "what", "himself", "herself", "itself", "themselves",
];

static CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while",
    "whereas", "unless", "until", "if", "than", "whether",
];

/// Common adverbs that do not carry the "ly" suffix.
static BARE_ADVERBS: &[&str] = &[
    "very", "too", "quite", "rather", "almost", "always", "never", "often", "sometimes",
    "soon", "now", "then", "here", "there", "again", "already", "still", "however",
];

static CLOSED_CLASS: LazyLock<Vec<(PosTag, FxHashSet<&'static str>)>> = LazyLock::new(|| {
    vec![
        (PosTag::Determiner, DETERMINERS.iter().copied().collect()),
        (PosTag::Preposition, PREPOSITIONS.iter().copied().collect()),
        (PosTag::Pronoun, PRONOUNS.iter().copied().collect()),
        (PosTag::Conjunction, CONJUNCTIONS.iter().copied().collect()),
        (PosTag::Adverb, BARE_ADVERBS.iter().copied().collect()),
    ]
});

/// Adjective-forming suffixes, checked after the verb suffixes.
static ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ish", "less", "ical", "ant", "ent",
];

/// Tag a single token.
pub fn tag_token(token: &str) -> PosTag {
    let lower = token.to_lowercase();

    for (tag, lexicon) in CLOSED_CLASS.iter() {
        if lexicon.contains(lower.as_str()) {
            return *tag;
        }
    }

    if lower.len() > 4 && lower.ends_with("ly") {
        return PosTag::Adverb;
    }
    if (lower.len() > 4 && lower.ends_with("ing"))
        || (lower.len() > 3 && lower.ends_with("ed"))
        || lower.ends_with("ize")
        || lower.ends_with("ise")
        || lower.ends_with("ify")
    {
        return PosTag::Verb;
    }
    if lower.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::Adjective;
    }

    // Capitalized surface form: proper noun. The corpus pipeline lowercases
    // before tagging, so this only fires on raw token streams.
    if token.chars().next().is_some_and(char::is_uppercase) {
        return PosTag::ProperNoun;
    }

    PosTag::Noun
}

/// Tag a sequence of tokens, preserving order.
pub fn tag_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<PosTag> {
    tokens.iter().map(|t| tag_token(t.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_class_words() {
        assert_eq!(tag_token("the"), PosTag::Determiner);
        assert_eq!(tag_token("The"), PosTag::Determiner);
        assert_eq!(tag_token("between"), PosTag::Preposition);
        assert_eq!(tag_token("they"), PosTag::Pronoun);
        assert_eq!(tag_token("because"), PosTag::Conjunction);
        assert_eq!(tag_token("always"), PosTag::Adverb);
    }

    #[test]
    fn test_suffix_heuristics() {
        assert_eq!(tag_token("quickly"), PosTag::Adverb);
        assert_eq!(tag_token("running"), PosTag::Verb);
        assert_eq!(tag_token("reported"), PosTag::Verb);
        assert_eq!(tag_token("famous"), PosTag::Adjective);
        assert_eq!(tag_token("valuable"), PosTag::Adjective);
    }

    #[test]
    fn test_default_noun() {
        assert_eq!(tag_token("chip"), PosTag::Noun);
        assert_eq!(tag_token("economy"), PosTag::Noun);
    }

    #[test]
    fn test_proper_noun_on_raw_tokens() {
        assert_eq!(tag_token("France"), PosTag::ProperNoun);
        assert_eq!(tag_token("france"), PosTag::Noun);
    }

    #[test]
    fn test_short_words_not_misfired() {
        // "ring" and "red" are too short for the verb suffix rules.
        assert_eq!(tag_token("ring"), PosTag::Noun);
        assert_eq!(tag_token("red"), PosTag::Noun);
        assert_eq!(tag_token("fly"), PosTag::Noun);
    }

    #[test]
    fn test_tag_tokens_preserves_order() {
        let tags = tag_tokens(&["the", "new", "chip", "costs", "dearly"]);
        assert_eq!(tags.len(), 5);
        assert_eq!(tags[0], PosTag::Determiner);
        assert_eq!(tags[4], PosTag::Adverb);
    }
}
