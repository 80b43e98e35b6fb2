pub mod clean;
pub mod error;
pub mod lemmatize;
pub mod preprocess;
pub mod stem;
pub mod stopwords;
pub mod table;
pub mod tokenize;

pub use clean::basic_clean;
pub use error::PrepareError;
pub use lemmatize::{Lemmatizer, lemmatize};
pub use preprocess::{DefaultPreprocessor, ProcessedText, Preprocessor};
pub use stem::{PorterStemmer, stem};
pub use stopwords::{StopwordFilter, remove_stopwords};
pub use table::{TextTable, add_cleaned_column, add_processed_columns};
pub use tokenize::{tokenize, word_tokenize};
