//! Stopword filtering
//!
//! Base lists are the NLTK corpus lists shipped by the `stop-words` crate;
//! callers can add words to the list or pull words out of it.

use std::collections::HashSet;

use stop_words::{LANGUAGE, get};

use crate::tokenize::word_tokenize;

#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Lowercase stopwords
    stopwords: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("english")
    }
}

impl StopwordFilter {
    /// Build the filter for a language name or ISO 639-1 code.
    /// Unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Language list plus `extra_words`, minus `exclude_words`
    pub fn with_adjustments<S: AsRef<str>>(
        language: &str,
        extra_words: &[S],
        exclude_words: &[S],
    ) -> Self {
        let mut filter = Self::new(language);
        filter.add_stopwords(extra_words);
        filter.remove_stopwords(exclude_words);
        filter
    }

    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Tokenize, drop stopwords and join the rest with single spaces
    pub fn filter(&self, text: &str) -> String {
        word_tokenize(text)
            .into_iter()
            .filter(|word| !self.is_stopword(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> HashSet<String> {
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
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            other => {
                tracing::warn!("No stopword list for {other}, using English");
                LANGUAGE::English
            }
        };

        get(lang)
            .into_iter()
            .filter(|word| !word.is_empty())
            .collect()
    }
}

/// One-shot stopword removal with optional list adjustments
pub fn remove_stopwords(text: &str, extra_words: &[&str], exclude_words: &[&str]) -> String {
    StopwordFilter::with_adjustments("english", extra_words, exclude_words).filter(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list_has_common_words() {
        let filter = StopwordFilter::default();
        assert!(!filter.is_empty());
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("and"));
        assert!(!filter.is_stopword("python"));
    }

    #[test]
    fn english_list_is_the_nltk_one() {
        let filter = StopwordFilter::default();
        assert_eq!(filter.len(), 179);
        assert!(filter.is_stopword("don't"));
        assert!(filter.is_stopword("ourselves"));
        for word in ["new", "research", "information", "us", "economy"] {
            assert!(!filter.is_stopword(word), "{word} should not be a stopword");
        }
    }

    #[test]
    fn content_words_survive() {
        assert_eq!(
            remove_stopwords("New research and information about the economy", &[], &[]),
            "New research information economy"
        );
    }

    #[test]
    fn removes_stopwords_from_text() {
        assert_eq!(remove_stopwords("the cat and the python", &[], &[]), "cat python");
    }

    #[test]
    fn extra_words_are_removed() {
        assert_eq!(remove_stopwords("the cat and the python", &["cat"], &[]), "python");
    }

    #[test]
    fn excluded_words_are_kept() {
        assert_eq!(
            remove_stopwords("the cat and the python", &[], &["the"]),
            "the cat the python"
        );
    }

    #[test]
    fn exclude_beats_extra() {
        let filter = StopwordFilter::with_adjustments("english", &["cat"], &["cat"]);
        assert!(!filter.is_stopword("cat"));
    }

    #[test]
    fn custom_list() {
        let mut filter = StopwordFilter::from_list(&["Foo", "bar"]);
        assert_eq!(filter.len(), 2);
        assert!(filter.is_stopword("foo"));
        filter.remove_stopwords(&["BAR"]);
        assert!(!filter.is_stopword("bar"));
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        assert!(StopwordFilter::new("klingon").is_stopword("the"));
    }
}
