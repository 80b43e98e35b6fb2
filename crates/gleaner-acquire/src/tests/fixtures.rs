use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::client::PageFetcher;
use crate::error::AcquireError;

pub const BLOG_BASE: &str = "https://blog.test/";
pub const NEWS_BASE: &str = "https://news.test/en/read/";

/// Serves canned pages and counts requests
#[derive(Default)]
pub struct StaticPages {
    pages: HashMap<String, String>,
    requests: AtomicUsize,
}

impl StaticPages {
    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for StaticPages {
    async fn fetch(&self, url: &str) -> Result<String, AcquireError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| AcquireError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

pub fn blog_page(title: &str, date: &str, body: &str) -> String {
    format!(
        r#"<html><body>
<header><h1>{title}</h1></header>
<p class="meta">By staff on <span class="published">{date}</span></p>
<div class="entry-content"><p>{body}</p><p>More <em>text</em>.</p></div>
<h1>Footer heading</h1>
</body></html>"#
    )
}

pub fn news_page(items: &[(&str, &str)]) -> String {
    let cards: String = items
        .iter()
        .map(|(headline, body)| {
            format!(
                r#"<div class="news-card"><span itemprop="headline">{headline}</span><div itemprop="articleBody">{body}</div></div>"#
            )
        })
        .collect();

    format!("<html><body>{cards}</body></html>")
}
