use std::env;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use self::acquire::AcquireConfig;
use self::log::LogConfig;
use self::prepare::PrepareConfig;

pub mod acquire;
pub mod log;
pub mod prepare;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub acquire: AcquireConfig,
    pub prepare: PrepareConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Load a JSON config file. Fields missing from the file take their defaults,
    /// environment overrides are applied on top.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.apply_env();
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    fn apply_env(&mut self) {
        if let Ok(user_agent) = env::var("GLEANER_USER_AGENT") {
            self.acquire.user_agent = user_agent;
        }

        if let Ok(base_url) = env::var("GLEANER_NEWS_BASE_URL") {
            self.acquire.news_base_url = base_url;
        }

        if let Some(timeout) = env::var("GLEANER_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.acquire.timeout_seconds = timeout;
        }

        if let Some(json) = env::var("GLEANER_LOG_JSON")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.log.json = json;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"prepare": {"extra_words": ["codeup"]}}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.prepare.extra_words, vec!["codeup".to_string()]);
        assert_eq!(config.prepare.language, "english");
        assert_eq!(config.acquire.blog_cache_path, "blog_posts.json");
        assert_eq!(config.acquire.news_cache_path, "news_articles.json");
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.prepare.exclude_words = vec!["not".to_string()];
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.prepare.exclude_words, vec!["not".to_string()]);
    }

    #[test]
    fn reads_lemma_exceptions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"prepare": {"lemma_exceptions": {"data": "data"}}}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.prepare.lemma_exceptions.get("data").map(String::as_str), Some("data"));
        assert!(Config::default().prepare.lemma_exceptions.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(&dir.path().join("nope.json")).is_err());
    }
}
