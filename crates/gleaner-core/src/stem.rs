use rust_stemmers::{Algorithm, Stemmer};

use crate::tokenize::word_tokenize;

/// Porter-family English stemmer (Snowball `english`, aka Porter2)
pub struct PorterStemmer {
    stemmer: Stemmer,
}

impl PorterStemmer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Stem one word. The stemmer expects lowercase input; a word that would stem
    /// to nothing (a bare `'s`) is returned unchanged.
    pub fn stem_word(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        let stemmed = self.stemmer.stem(&lower);

        if stemmed.is_empty() {
            word.to_string()
        } else {
            stemmed.into_owned()
        }
    }

    /// Tokenize, stem each token and join back with single spaces
    pub fn stem(&self, text: &str) -> String {
        word_tokenize(text)
            .iter()
            .map(|word| self.stem_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stem(text: &str) -> String {
    PorterStemmer::new().stem(text)
}
