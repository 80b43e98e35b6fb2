use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "english".to_string()
}

fn default_text_column() -> String {
    "content".to_string()
}

fn default_output_column() -> String {
    "clean".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PrepareConfig {
    /// Stopword list language
    #[serde(default = "default_language")]
    pub language: String,
    /// Added to the stopword list
    #[serde(default)]
    pub extra_words: Vec<String>,
    /// Kept even when the stopword list contains them
    #[serde(default)]
    pub exclude_words: Vec<String>,
    /// word -> lemma overrides for the lemmatizer, e.g. `{"data": "data"}`
    #[serde(default)]
    pub lemma_exceptions: BTreeMap<String, String>,
    #[serde(default = "default_text_column")]
    pub text_column: String,
    #[serde(default = "default_output_column")]
    pub output_column: String,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            extra_words: vec![],
            exclude_words: vec![],
            lemma_exceptions: BTreeMap::new(),
            text_column: default_text_column(),
            output_column: default_output_column(),
        }
    }
}
