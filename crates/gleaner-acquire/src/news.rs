use gleaner_types::NewsSummary;
use scraper::Html;

use crate::client::{PageFetcher, all_text, get_soup};
use crate::error::AcquireError;

const HEADLINE: &str = r#"span[itemprop="headline"]"#;
const BODY: &str = r#"div[itemprop="articleBody"]"#;

/// Pair every headline with the article body at the same position.
/// Bodies past the last headline are ignored; fewer bodies than headlines is an error.
pub fn parse_news_summaries(document: &Html, topic: &str) -> Result<Vec<NewsSummary>, AcquireError> {
    let headlines = all_text(document, HEADLINE)?;
    let bodies = all_text(document, BODY)?;

    if bodies.len() < headlines.len() {
        return Err(AcquireError::MismatchedSummaries {
            topic: topic.to_string(),
            headlines: headlines.len(),
            bodies: bodies.len(),
        });
    }

    Ok(headlines
        .into_iter()
        .zip(bodies)
        .map(|(title, content)| NewsSummary {
            category: topic.to_string(),
            title,
            content,
        })
        .collect())
}

/// Scrape the summaries listed on `{base_url}{topic}`
pub async fn scrape_news_summary(
    fetcher: &dyn PageFetcher,
    base_url: &str,
    topic: &str,
) -> Result<Vec<NewsSummary>, AcquireError> {
    let url = format!("{base_url}{topic}");
    let soup = get_soup(fetcher, &url).await?;
    let summaries = parse_news_summaries(&soup, topic)?;
    tracing::debug!("Scraped {} summaries for topic {topic}", summaries.len());
    Ok(summaries)
}
