use std::time::Duration;

use async_trait::async_trait;
use gleaner_config::acquire::AcquireConfig;
use scraper::{Html, Selector};

use crate::error::AcquireError;

/// Source of raw HTML pages
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET `url` and return the response body
    async fn fetch(&self, url: &str) -> Result<String, AcquireError>;
}

#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Client sending the configured User-Agent on every request
    pub fn new(config: &AcquireConfig) -> Result<Self, AcquireError> {
        Self::from_builder(Self::builder(config))
    }

    fn builder(config: &AcquireConfig) -> reqwest::ClientBuilder {
        reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
    }

    fn from_builder(builder: reqwest::ClientBuilder) -> Result<Self, AcquireError> {
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AcquireError> {
        tracing::debug!("GET {url}");
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(AcquireError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Fetch `url` and parse it as an HTML document
pub async fn get_soup(fetcher: &dyn PageFetcher, url: &str) -> Result<Html, AcquireError> {
    let body = fetcher.fetch(url).await?;
    Ok(Html::parse_document(&body))
}

pub(crate) fn selector(css: &str) -> Result<Selector, AcquireError> {
    Selector::parse(css).map_err(|e| AcquireError::Selector(format!("{css}: {e}")))
}

/// Concatenated text of every node under the first match
pub(crate) fn first_text(document: &Html, css: &str, url: &str) -> Result<String, AcquireError> {
    let selector = selector(css)?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .ok_or_else(|| AcquireError::MissingElement {
            url: url.to_string(),
            selector: css.to_string(),
        })
}

/// Text of every match, in document order
pub(crate) fn all_text(document: &Html, css: &str) -> Result<Vec<String>, AcquireError> {
    let selector = selector(css)?;

    Ok(document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect())
}
