mod blog;
mod cache;
mod client;
mod error;
mod news;

#[cfg(test)]
mod tests;

pub use blog::{parse_blog_article, scrape_blog_article};
pub use cache::{CachePolicy, JsonCache};
pub use client::{HttpFetcher, PageFetcher, get_soup};
pub use error::AcquireError;
pub use news::{parse_news_summaries, scrape_news_summary};

use gleaner_config::acquire::AcquireConfig;
use gleaner_types::{BlogArticle, NewsSummary};

/// Scrape every article in `urls`, in order, unless the cache file already exists
pub async fn get_blog_articles(
    fetcher: &dyn PageFetcher,
    cache: &JsonCache,
    urls: &[String],
    policy: CachePolicy,
) -> Result<Vec<BlogArticle>, AcquireError> {
    cache
        .get_or_build(policy, move || async move {
            let mut articles = Vec::with_capacity(urls.len());
            for url in urls {
                articles.push(scrape_blog_article(fetcher, url).await?);
            }
            tracing::info!("Scraped {} blog articles", articles.len());
            Ok(articles)
        })
        .await
}

/// Scrape and flatten the summaries of every topic, unless the cache file already exists
pub async fn get_news_articles(
    fetcher: &dyn PageFetcher,
    cache: &JsonCache,
    base_url: &str,
    topics: &[String],
    policy: CachePolicy,
) -> Result<Vec<NewsSummary>, AcquireError> {
    cache
        .get_or_build(policy, move || async move {
            let mut summaries = Vec::new();
            for topic in topics {
                summaries.extend(scrape_news_summary(fetcher, base_url, topic).await?);
            }
            tracing::info!(
                "Scraped {} news summaries across {} topics",
                summaries.len(),
                topics.len()
            );
            Ok(summaries)
        })
        .await
}

/// A fetcher bound to its configuration
pub struct Acquirer<F: PageFetcher = HttpFetcher> {
    fetcher: F,
    config: AcquireConfig,
}

impl Acquirer<HttpFetcher> {
    pub fn new(config: AcquireConfig) -> Result<Self, AcquireError> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self { fetcher, config })
    }
}

impl<F: PageFetcher> Acquirer<F> {
    pub fn with_fetcher(fetcher: F, config: AcquireConfig) -> Self {
        Self { fetcher, config }
    }

    pub async fn blog_articles(
        &self,
        urls: &[String],
        policy: CachePolicy,
    ) -> Result<Vec<BlogArticle>, AcquireError> {
        let cache = JsonCache::new(&self.config.blog_cache_path);
        get_blog_articles(&self.fetcher, &cache, urls, policy).await
    }

    pub async fn news_articles(
        &self,
        topics: &[String],
        policy: CachePolicy,
    ) -> Result<Vec<NewsSummary>, AcquireError> {
        let cache = JsonCache::new(&self.config.news_cache_path);
        get_news_articles(
            &self.fetcher,
            &cache,
            &self.config.news_base_url,
            topics,
            policy,
        )
        .await
    }
}
