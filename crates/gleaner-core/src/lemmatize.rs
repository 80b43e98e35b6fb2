//! Noun lemmatization
//!
//! WordNet's morphy strips inflectional suffixes and keeps the first candidate
//! found in its dictionary. Here an irregular-form table plus a few guards stand
//! in for the dictionary check, so suffix rules only fire where they are
//! unambiguous.

use std::collections::{HashMap, HashSet};

use crate::tokenize::word_tokenize;

/// Irregular plurals and forms the suffix rules would get wrong
const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "people"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("media", "medium"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("crises", "crisis"),
    ("bases", "basis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("wolves", "wolf"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("selves", "self"),
    ("thieves", "thief"),
    ("loaves", "loaf"),
    ("buses", "bus"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("ties", "tie"),
    ("pies", "pie"),
    ("lies", "lie"),
];

/// Words ending in a plural-looking suffix that are not plurals
const INVARIANT: &[&str] = &[
    "news", "series", "species", "means", "physics", "mathematics", "economics", "politics",
    "always", "perhaps", "towards", "afterwards", "sometimes", "besides", "whereas", "unless",
    "yours", "ours", "hers", "theirs", "bias", "atlas", "canvas", "alias", "gas", "lens",
    "chaos", "cosmos", "ethos", "pathos", "kudos", "pancreas", "christmas", "overseas",
    "diabetes", "herpes", "rabies", "measles", "mumps", "biceps", "triceps", "forceps",
];

/// First halves of `-men` compounds whose singular is `-man`.
/// Other words ending in `men` (amen, semen, specimen) are left alone.
const MAN_COMPOUNDS: &[&str] = &[
    "fire", "police", "sales", "chair", "business", "spokes", "fisher", "crafts", "congress",
    "country", "gentle", "horse", "noble", "trades", "work", "fresh", "states", "clergy",
    "sports", "fore", "middle", "kins", "lay", "alder", "cave", "camera", "foot", "freed",
    "guards", "hench", "jury", "line", "mail", "marks", "news", "oars", "show", "sea", "snow",
    "tribes", "watch", "yeo", "cattle", "coast", "dairy", "ombuds", "rifle", "sword", "towns",
    "weather", "boat", "garbage", "milk", "post", "radio", "wood", "door", "mad", "bats",
];

/// Suffix rules, most specific first
const RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("shes", "sh"),
    ("ches", "ch"),
    ("zzes", "z"),
    ("xes", "x"),
    ("ies", "y"),
    ("s", ""),
];

/// Endings that look plural but are singular
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is"];

const MIN_LEN: usize = 4;

pub struct Lemmatizer {
    exceptions: HashMap<String, String>,
    invariant: HashSet<String>,
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self {
            exceptions: IRREGULAR
                .iter()
                .map(|(form, lemma)| (form.to_string(), lemma.to_string()))
                .collect(),
            invariant: INVARIANT.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add word -> lemma pairs that take priority over the built-in table
    pub fn with_exceptions<I, K, V>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (form, lemma) in exceptions {
            let form = form.into().to_lowercase();
            self.invariant.remove(&form);
            self.exceptions.insert(form, lemma.into().to_lowercase());
        }
        self
    }

    /// Lemmatize a single word as a noun. Lookups are case-insensitive and the
    /// result is always lowercase, whether or not a rule fired.
    pub fn lemmatize_word(&self, word: &str) -> String {
        let lower = word.to_lowercase();

        if let Some(lemma) = self.exceptions.get(&lower) {
            return lemma.clone();
        }

        if self.invariant.contains(&lower)
            || lower.chars().count() < MIN_LEN
            || !lower.chars().all(char::is_alphabetic)
            || SINGULAR_ENDINGS.iter().any(|end| lower.ends_with(end))
        {
            return lower;
        }

        if let Some(base) = lower.strip_suffix("men") {
            if base.ends_with("wo") || MAN_COMPOUNDS.contains(&base) {
                return format!("{base}man");
            }
            return lower;
        }

        for (suffix, replacement) in RULES {
            if let Some(base) = lower.strip_suffix(suffix) {
                return format!("{base}{replacement}");
            }
        }

        lower
    }

    /// Tokenize, lemmatize each token and join back with single spaces
    pub fn lemmatize(&self, text: &str) -> String {
        word_tokenize(text)
            .iter()
            .map(|word| self.lemmatize_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn lemmatize(text: &str) -> String {
    Lemmatizer::new().lemmatize(text)
}
