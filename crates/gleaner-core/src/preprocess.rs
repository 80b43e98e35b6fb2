use gleaner_config::prepare::PrepareConfig;

use crate::clean::basic_clean;
use crate::lemmatize::Lemmatizer;
use crate::stem::PorterStemmer;
use crate::stopwords::StopwordFilter;
use crate::tokenize::tokenize;

/// Cleaned text plus its stemmed and lemmatized forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedText {
    pub clean: String,
    pub stemmed: String,
    pub lemmatized: String,
}

pub trait Preprocessor: Send + Sync {
    fn remove_stopwords(&self, text: &str) -> String;

    fn stem(&self, text: &str) -> String;

    fn lemmatize(&self, text: &str) -> String;

    /// Retokenize, basic-clean and drop stopwords
    fn clean(&self, text: &str) -> String {
        self.remove_stopwords(&normalize(text))
    }

    /// Full chain used for a table's `clean` column:
    /// clean, then stem, then lemmatize
    fn process(&self, text: &str) -> String {
        self.lemmatize(&self.stem(&self.clean(text)))
    }

    /// Three-column variant. `clean` is stemmed before stopwords are dropped;
    /// `stemmed` and `lemmatized` are both derived from it.
    fn process_columns(&self, text: &str) -> ProcessedText {
        let clean = self.remove_stopwords(&self.stem(&normalize(text)));
        let stemmed = self.stem(&clean);
        let lemmatized = self.lemmatize(&clean);

        ProcessedText {
            clean,
            stemmed,
            lemmatized,
        }
    }
}

fn normalize(text: &str) -> String {
    basic_clean(&tokenize(text).join(" "))
}

/// English preprocessor; the stopword list, stemmer and lemmatizer are built once
pub struct DefaultPreprocessor {
    stopwords: StopwordFilter,
    stemmer: PorterStemmer,
    lemmatizer: Lemmatizer,
}

impl DefaultPreprocessor {
    pub fn new() -> Self {
        Self::from_config(&PrepareConfig::default())
    }

    pub fn from_config(config: &PrepareConfig) -> Self {
        let stopwords = StopwordFilter::with_adjustments(
            &config.language,
            config.extra_words.as_slice(),
            config.exclude_words.as_slice(),
        );
        tracing::debug!(
            "Stopword list has {} words, {} lemma exceptions",
            stopwords.len(),
            config.lemma_exceptions.len()
        );

        Self {
            stopwords,
            stemmer: PorterStemmer::new(),
            lemmatizer: Lemmatizer::new().with_exceptions(config.lemma_exceptions.clone()),
        }
    }
}

impl Default for DefaultPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor for DefaultPreprocessor {
    fn remove_stopwords(&self, text: &str) -> String {
        self.stopwords.filter(text)
    }

    fn stem(&self, text: &str) -> String {
        self.stemmer.stem(text)
    }

    fn lemmatize(&self, text: &str) -> String {
        self.lemmatizer.lemmatize(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_chain() {
        let preprocessor = DefaultPreprocessor::new();
        let out = preprocessor.process("The CATS were chasing a Python!");
        let words: Vec<&str> = out.split(' ').collect();

        assert!(words.contains(&"cat"));
        assert!(words.contains(&"python"));
        assert!(!words.contains(&"the"));
        assert!(!words.contains(&"a"));
        assert!(!out.contains('!'));
    }

    #[test]
    fn clean_folds_accents_and_drops_stopwords() {
        let preprocessor = DefaultPreprocessor::new();
        assert_eq!(preprocessor.clean("The café and the Python."), "cafe python");
    }

    #[test]
    fn config_adjusts_stopwords() {
        let config = PrepareConfig {
            extra_words: vec!["python".to_string()],
            exclude_words: vec!["the".to_string()],
            ..PrepareConfig::default()
        };
        let preprocessor = DefaultPreprocessor::from_config(&config);
        assert_eq!(preprocessor.clean("The café and the Python."), "the cafe the");
    }

    #[test]
    fn process_columns_derive_from_clean() {
        let preprocessor = DefaultPreprocessor::new();
        let processed = preprocessor.process_columns("The children and their cats");

        assert_eq!(processed.clean, "children cat");
        assert_eq!(processed.stemmed, "children cat");
        assert_eq!(processed.lemmatized, "child cat");
    }

    #[test]
    fn process_columns_stems_before_dropping_stopwords() {
        let preprocessor = DefaultPreprocessor::new();
        let processed = preprocessor.process_columns("The running dogs were jumping");

        assert_eq!(processed.clean, "run dog jump");
        assert_eq!(processed.lemmatized, "run dog jump");
    }

    #[test]
    fn clean_keeps_abbreviations_and_content_words() {
        let preprocessor = DefaultPreprocessor::new();
        assert_eq!(
            preprocessor.clean("The U.S. economy grew. New research followed."),
            "us economy grew new research followed"
        );
    }

    #[test]
    fn config_lemma_exceptions_reach_the_lemmatizer() {
        let mut config = PrepareConfig::default();
        config.lemma_exceptions.insert("data".to_string(), "data".to_string());
        config.lemma_exceptions.insert("Axes".to_string(), "axis".to_string());
        let preprocessor = DefaultPreprocessor::from_config(&config);

        assert_eq!(preprocessor.lemmatize("data axes cats"), "data axis cat");
        assert_eq!(DefaultPreprocessor::new().lemmatize("data"), "datum");
    }

    #[test]
    fn empty_text() {
        let preprocessor = DefaultPreprocessor::new();
        assert_eq!(preprocessor.process(""), "");
        assert_eq!(preprocessor.process("!!! ..."), "");
    }
}
