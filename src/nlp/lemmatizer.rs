//! Rule-based English lemmatization.
//!
//! Reduces inflected forms to dictionary base forms using per-category
//! exception tables for common irregulars and guarded suffix rules for the
//! regular inflections. Vocabulary-free by design, so the rules are
//! conservative: a suffix is only stripped when the remaining stem keeps a
//! plausible length, and outputs are fixed points of the rules themselves
//! (lemmatizing a lemma returns it unchanged).

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::types::LemmaCategory;

/// Minimum stem length left behind by any suffix rule.
const MIN_STEM: usize = 3;

static NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("knives", "knife"),
    ("halves", "half"),
    ("indices", "index"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("media", "medium"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
];

static VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("is", "be"),
    ("am", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("goes", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("said", "say"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("got", "get"),
    ("gotten", "get"),
    ("saw", "see"),
    ("seen", "see"),
    ("came", "come"),
    ("knew", "know"),
    ("known", "know"),
    ("gave", "give"),
    ("given", "give"),
    ("found", "find"),
    ("thought", "think"),
    ("told", "tell"),
    ("became", "become"),
    ("left", "leave"),
    ("felt", "feel"),
    ("brought", "bring"),
    ("began", "begin"),
    ("begun", "begin"),
    ("kept", "keep"),
    ("held", "hold"),
    ("wrote", "write"),
    ("written", "write"),
    ("stood", "stand"),
    ("heard", "hear"),
    ("meant", "mean"),
    ("ran", "run"),
    ("paid", "pay"),
    ("sold", "sell"),
    ("built", "build"),
    ("sent", "send"),
    ("spent", "spend"),
    ("fell", "fall"),
    ("bought", "buy"),
    ("lost", "lose"),
    ("met", "meet"),
    ("led", "lead"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("won", "win"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("broke", "break"),
    ("broken", "break"),
];

static ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("further", "far"),
    ("furthest", "far"),
    ("elder", "old"),
    ("eldest", "old"),
];

static ADVERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "well"),
    ("best", "well"),
    ("further", "far"),
    ("farther", "far"),
];

type ExceptionMap = FxHashMap<&'static str, &'static str>;

static EXCEPTIONS: LazyLock<[ExceptionMap; 4]> = LazyLock::new(|| {
    let build = |pairs: &[(&'static str, &'static str)]| pairs.iter().copied().collect();
    [
        build(NOUN_EXCEPTIONS),
        build(VERB_EXCEPTIONS),
        build(ADJECTIVE_EXCEPTIONS),
        build(ADVERB_EXCEPTIONS),
    ]
});

fn exceptions_for(category: LemmaCategory) -> &'static ExceptionMap {
    let idx = match category {
        LemmaCategory::Noun => 0,
        LemmaCategory::Verb => 1,
        LemmaCategory::Adjective => 2,
        LemmaCategory::Adverb => 3,
    };
    &EXCEPTIONS[idx]
}

/// Consonants that undouble after stripping "ing"/"ed"/"er"/"est"
/// ("running" → "run", "bigger" → "big"). "ll", "ss", "ee", "oo" stay.
fn undouble(stem: &str) -> Option<String> {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 2 && bytes[n - 1] == bytes[n - 2] && matches!(bytes[n - 1], b'b' | b'd' | b'g' | b'm' | b'n' | b'p' | b'r' | b't') {
        return Some(stem[..n - 1].to_string());
    }
    None
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Restore a dropped silent "e" for short consonant–vowel–consonant stems
/// ("mak" → "make", "giv" → "give"). Only fires on three-letter stems so
/// longer stems like "open" are left alone.
fn restore_e(stem: &str) -> Option<String> {
    let bytes = stem.as_bytes();
    if bytes.len() == 3
        && !is_vowel(bytes[0])
        && is_vowel(bytes[1])
        && !is_vowel(bytes[2])
        && !matches!(bytes[2], b'w' | b'x' | b'y')
    {
        return Some(format!("{stem}e"));
    }
    None
}

fn fix_stem(stem: &str) -> String {
    if let Some(fixed) = undouble(stem) {
        return fixed;
    }
    if let Some(fixed) = restore_e(stem) {
        return fixed;
    }
    stem.to_string()
}

fn lemmatize_noun(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("sses") {
        if !stem.is_empty() {
            return format!("{stem}ss");
        }
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }
    for (suffix, replacement) in [("xes", "x"), ("zes", "z"), ("ches", "ch"), ("shes", "sh")] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if !stem.is_empty() {
                return format!("{stem}{replacement}");
            }
        }
    }
    if let Some(stem) = word.strip_suffix('s') {
        if stem.len() >= MIN_STEM
            && !stem.ends_with('s')
            && !stem.ends_with("u")
            && !stem.ends_with("i")
        {
            return stem.to_string();
        }
    }
    word.to_string()
}

fn lemmatize_verb(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("ied") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("ing") {
        if stem.len() >= MIN_STEM {
            return fix_stem(stem);
        }
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if stem.len() >= MIN_STEM {
            return fix_stem(stem);
        }
        // Keep the silent "e" when the short strip would be too greedy
        // ("used" → "use").
        let with_e = &word[..word.len() - 1];
        if with_e.len() >= MIN_STEM {
            return with_e.to_string();
        }
    }
    for (suffix, replacement) in [("ches", "ch"), ("shes", "sh"), ("xes", "x"), ("zes", "z")] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if !stem.is_empty() {
                return format!("{stem}{replacement}");
            }
        }
    }
    if let Some(stem) = word.strip_suffix('s') {
        if stem.len() >= MIN_STEM && !stem.ends_with('s') && !stem.ends_with('i') {
            return stem.to_string();
        }
    }
    word.to_string()
}

fn lemmatize_adjective(word: &str) -> String {
    for suffix in ["est", "er"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() >= MIN_STEM {
                if let Some(without_i) = stem.strip_suffix('i') {
                    return format!("{without_i}y");
                }
                return fix_stem(stem);
            }
        }
    }
    word.to_string()
}

/// POS-aware English lemmatizer.
///
/// Stateless; all tables are static. Construction is free, so it can be
/// cloned into parallel workers without cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    pub fn new() -> Self {
        Self
    }

    /// Lemmatize a word given its grammatical category.
    ///
    /// Words already in base form come back unchanged.
    pub fn lemmatize(&self, word: &str, category: LemmaCategory) -> String {
        if let Some(lemma) = exceptions_for(category).get(word) {
            return (*lemma).to_string();
        }
        match category {
            LemmaCategory::Noun => lemmatize_noun(word),
            LemmaCategory::Verb => lemmatize_verb(word),
            LemmaCategory::Adjective => lemmatize_adjective(word),
            // Regular "-ly" adverbs are their own base form.
            LemmaCategory::Adverb => word.to_string(),
        }
    }
}
