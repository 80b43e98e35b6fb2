use serde::{Deserialize, Serialize};

/// A single scraped blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogArticle {
    pub title: String,
    pub link: String,
    pub date_published: String,
    pub content: String,
}

/// One headline + body pair from a news topic page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSummary {
    /// Topic the summary was scraped under
    pub category: String,
    pub title: String,
    pub content: String,
}
