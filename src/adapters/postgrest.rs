use crate::config::DatabaseConfig;
use crate::domain::model::EventRow;
use crate::domain::ports::EventStore;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use url::Url;

const EVENTS_PATH: &str = "rest/v1/events";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: Option<String>,
}

/// `EventStore` backed by the hosted database's REST interface.
#[derive(Debug, Clone)]
pub struct PostgrestEventStore {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl PostgrestEventStore {
    pub fn new(client: Client, config: &DatabaseConfig) -> Self {
        Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        }
    }

    fn events_url(&self, params: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, EVENTS_PATH)).map_err(|e| {
            SiteError::ConfigError {
                message: format!("invalid database url '{}': {}", self.base_url, e),
            }
        })?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        Ok(url)
    }

    fn get(&self, url: Url) -> RequestBuilder {
        self.client
            .get(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("events query returned status {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<PostgrestErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.message)
            .unwrap_or(body);

        Err(SiteError::Query {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl EventStore for PostgrestEventStore {
    async fn fetch_all(&self) -> Result<Vec<EventRow>> {
        let url = self.events_url(&[("order", "start_date.asc".to_string())])?;
        let response = self.send(self.get(url)).await?;
        Ok(response.json().await?)
    }

    async fn fetch_by_slug(&self, slug: &str) -> Result<EventRow> {
        let url = self.events_url(&[("slug", format!("eq.{}", slug))])?;
        let request = self.get(url).header(reqwest::header::ACCEPT, SINGLE_OBJECT);
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    async fn fetch_featured(&self, limit: usize) -> Result<Vec<EventRow>> {
        let url = self.events_url(&[
            ("is_featured", "eq.true".to_string()),
            ("status", "eq.upcoming".to_string()),
            ("order", "start_date.asc".to_string()),
            ("limit", limit.to_string()),
        ])?;
        let response = self.send(self.get(url)).await?;
        Ok(response.json().await?)
    }
}
