use crate::domain::model::{Article, RawArticle, DEFAULT_AUTHOR};
use crate::utils::error::Result;
use crate::utils::text::{
    calculate_reading_time, extract_excerpt, extract_first_image, format_date,
    DEFAULT_EXCERPT_LENGTH,
};
use reqwest::Client;
use rss::{Channel, Item};

pub const DEFAULT_FEED_URL: &str = "https://medium.com/feed/data-engineering-indonesia";

/// Pulls posts from one external RSS feed. Failures yield an empty list.
#[derive(Debug, Clone)]
pub struct ArticleFeed {
    client: Client,
    feed_url: String,
}

impl ArticleFeed {
    pub fn new(client: Client, feed_url: impl Into<String>) -> Self {
        Self {
            client,
            feed_url: feed_url.into(),
        }
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// First `limit` items in feed order. Any fetch or parse failure is logged
    /// and results in an empty list.
    pub async fn fetch_articles(&self, limit: usize) -> Vec<RawArticle> {
        match self.fetch_channel().await {
            Ok(channel) => {
                let articles: Vec<RawArticle> =
                    channel.items().iter().take(limit).map(raw_article).collect();
                tracing::debug!(
                    "Fetched {} of {} feed items from {}",
                    articles.len(),
                    channel.items().len(),
                    self.feed_url
                );
                articles
            }
            Err(e) => {
                tracing::error!("Failed to fetch articles from {}: {}", self.feed_url, e);
                Vec::new()
            }
        }
    }

    /// Like [`fetch_articles`](Self::fetch_articles) with presentation fields derived.
    pub async fn latest_articles(&self, limit: usize) -> Vec<Article> {
        self.fetch_articles(limit)
            .await
            .into_iter()
            .map(Article::from)
            .collect()
    }

    async fn fetch_channel(&self) -> Result<Channel> {
        let response = self
            .client
            .get(&self.feed_url)
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(Channel::read_from(&bytes[..])?)
    }
}

fn raw_article(item: &Item) -> RawArticle {
    let creator = item
        .dublin_core_ext()
        .and_then(|dc| dc.creators().first())
        .filter(|name| !name.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

    let content = item
        .content()
        .or_else(|| item.description())
        .unwrap_or_default()
        .to_string();

    RawArticle {
        title: item.title().unwrap_or_default().to_string(),
        link: item.link().unwrap_or_default().to_string(),
        pub_date: item.pub_date().unwrap_or_default().to_string(),
        creator,
        content,
        categories: item
            .categories()
            .iter()
            .map(|category| category.name().to_string())
            .collect(),
        guid: item.guid().map(|guid| guid.value().to_string()),
    }
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        let excerpt = extract_excerpt(&raw.content, DEFAULT_EXCERPT_LENGTH);
        let thumbnail = extract_first_image(&raw.content);
        let content = (!raw.content.is_empty()).then_some(raw.content);

        Self {
            title: raw.title,
            url: raw.link,
            published_at: raw.pub_date,
            author: raw.creator,
            excerpt,
            categories: raw.categories,
            thumbnail,
            content,
        }
    }
}

impl Article {
    pub fn reading_time(&self) -> u32 {
        calculate_reading_time(self.content.as_deref().unwrap_or_default())
    }

    pub fn display_date(&self) -> String {
        format_date(&self.published_at)
    }
}
