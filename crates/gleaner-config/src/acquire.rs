use serde::{Deserialize, Serialize};

fn default_user_agent() -> String {
    "Codeup Data Science".to_string()
}

fn default_news_base_url() -> String {
    "https://inshorts.com/en/read/".to_string()
}

fn default_blog_cache_path() -> String {
    "blog_posts.json".to_string()
}

fn default_news_cache_path() -> String {
    "news_articles.json".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AcquireConfig {
    /// Sent as the User-Agent header on every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// News topic pages live at `{news_base_url}{topic}`
    #[serde(default = "default_news_base_url")]
    pub news_base_url: String,
    #[serde(default = "default_blog_cache_path")]
    pub blog_cache_path: String,
    #[serde(default = "default_news_cache_path")]
    pub news_cache_path: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for AcquireConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            news_base_url: default_news_base_url(),
            blog_cache_path: default_blog_cache_path(),
            news_cache_path: default_news_cache_path(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
