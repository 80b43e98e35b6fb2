pub mod types;

pub use types::{BlogArticle, NewsSummary};
