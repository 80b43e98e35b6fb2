use gleaner_types::BlogArticle;
use scraper::Html;

use crate::client::{PageFetcher, first_text, get_soup};
use crate::error::AcquireError;

const TITLE: &str = "h1";
const PUBLISHED: &str = "span.published";
const CONTENT: &str = "div.entry-content";

/// Pull title, publish date and body out of a blog post page.
/// Each field is the first matching element; a missing one is an error.
pub fn parse_blog_article(document: &Html, url: &str) -> Result<BlogArticle, AcquireError> {
    Ok(BlogArticle {
        title: first_text(document, TITLE, url)?,
        link: url.to_string(),
        date_published: first_text(document, PUBLISHED, url)?,
        content: first_text(document, CONTENT, url)?,
    })
}

pub async fn scrape_blog_article(
    fetcher: &dyn PageFetcher,
    url: &str,
) -> Result<BlogArticle, AcquireError> {
    let soup = get_soup(fetcher, url).await?;
    let article = parse_blog_article(&soup, url)?;
    tracing::debug!("Scraped blog article {:?}", article.title);
    Ok(article)
}
