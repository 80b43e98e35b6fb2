#[derive(Debug, thiserror::Error)]
pub enum AcquireError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("No element matching `{selector}` on {url}")]
    MissingElement { url: String, selector: String },

    #[error("Topic {topic} has {headlines} headlines but only {bodies} article bodies")]
    MismatchedSummaries {
        topic: String,
        headlines: usize,
        bodies: usize,
    },

    #[error("Invalid selector `{0}`")]
    Selector(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
