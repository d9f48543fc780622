use crate::adapters::postgrest::PostgrestEventStore;
use crate::config::SiteConfig;
use crate::core::fetched::{FallbackReason, Fetched};
use crate::domain::model::Event;
use crate::domain::ports::EventStore;
use crate::domain::sample::{featured_samples, find_sample_by_slug, sample_events};
use reqwest::Client;

pub const FEATURED_LIMIT: usize = 3;

/// Read access to events that never fails: when the store is missing or
/// errors, the bundled sample events are served instead.
pub struct EventRepository<S: EventStore> {
    store: Option<S>,
}

impl EventRepository<PostgrestEventStore> {
    /// Builds the repository once from startup configuration. Without database
    /// credentials the repository stays in fallback mode for its whole life.
    pub fn from_config(config: &SiteConfig, client: Client) -> Self {
        match &config.database {
            Some(database) => {
                tracing::info!("Event repository using remote store at {}", database.url);
                Self::new(PostgrestEventStore::new(client, database))
            }
            None => {
                tracing::info!("Database credentials not set, serving sample events");
                Self::unconfigured()
            }
        }
    }
}

impl<S: EventStore> EventRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store: Some(store) }
    }

    pub fn unconfigured() -> Self {
        Self { store: None }
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_some()
    }

    pub async fn get_events(&self) -> Fetched<Vec<Event>> {
        let Some(store) = &self.store else {
            tracing::debug!("get_events: not configured, using sample events");
            return Fetched::Fallback(sample_events().to_vec(), FallbackReason::NotConfigured);
        };

        match store.fetch_all().await {
            Ok(rows) if rows.is_empty() => {
                tracing::warn!("get_events: no rows in remote store, using sample events");
                Fetched::Fallback(sample_events().to_vec(), FallbackReason::Empty)
            }
            Ok(rows) => {
                tracing::debug!("get_events: fetched {} events", rows.len());
                Fetched::Live(rows.into_iter().map(Event::from).collect())
            }
            Err(e) => {
                tracing::warn!("get_events: {}, using sample events", e);
                Fetched::Fallback(
                    sample_events().to_vec(),
                    FallbackReason::Unavailable(e.to_string()),
                )
            }
        }
    }

    pub async fn get_event_by_slug(&self, slug: &str) -> Fetched<Option<Event>> {
        let Some(store) = &self.store else {
            tracing::debug!("get_event_by_slug({}): not configured, searching samples", slug);
            return Fetched::Fallback(
                find_sample_by_slug(slug).cloned(),
                FallbackReason::NotConfigured,
            );
        };

        match store.fetch_by_slug(slug).await {
            Ok(row) => Fetched::Live(Some(Event::from(row))),
            Err(e) => {
                tracing::warn!("get_event_by_slug({}): {}, searching samples", slug, e);
                Fetched::Fallback(
                    find_sample_by_slug(slug).cloned(),
                    FallbackReason::Unavailable(e.to_string()),
                )
            }
        }
    }

    /// At most [`FEATURED_LIMIT`] featured upcoming events. The sample fallback
    /// returns every featured sample without applying the limit.
    pub async fn get_featured_events(&self) -> Fetched<Vec<Event>> {
        let Some(store) = &self.store else {
            tracing::debug!("get_featured_events: not configured, using featured samples");
            return Fetched::Fallback(featured_samples(), FallbackReason::NotConfigured);
        };

        match store.fetch_featured(FEATURED_LIMIT).await {
            Ok(rows) if rows.is_empty() => {
                tracing::warn!("get_featured_events: no featured rows, using featured samples");
                Fetched::Fallback(featured_samples(), FallbackReason::Empty)
            }
            Ok(rows) => Fetched::Live(
                rows.into_iter()
                    .take(FEATURED_LIMIT)
                    .map(Event::from)
                    .collect(),
            ),
            Err(e) => {
                tracing::warn!("get_featured_events: {}, using featured samples", e);
                Fetched::Fallback(
                    featured_samples(),
                    FallbackReason::Unavailable(e.to_string()),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::EventRow;
    use crate::utils::error::{Result, SiteError};
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStore {
        rows: Vec<EventRow>,
        fail: bool,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MockStore {
        fn with_rows(rows: Vec<EventRow>) -> Self {
            Self {
                rows,
                ..Default::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn error() -> SiteError {
            SiteError::Query {
                status: 500,
                message: "relation \"events\" does not exist".to_string(),
            }
        }
    }

    #[async_trait]
    impl EventStore for MockStore {
        async fn fetch_all(&self) -> Result<Vec<EventRow>> {
            self.calls.lock().await.push("all".to_string());
            if self.fail {
                return Err(Self::error());
            }
            Ok(self.rows.clone())
        }

        async fn fetch_by_slug(&self, slug: &str) -> Result<EventRow> {
            self.calls.lock().await.push(format!("slug:{}", slug));
            if self.fail {
                return Err(Self::error());
            }
            let matches: Vec<&EventRow> = self
                .rows
                .iter()
                .filter(|row| row.slug.as_deref() == Some(slug))
                .collect();
            match matches.as_slice() {
                [row] => Ok((*row).clone()),
                _ => Err(SiteError::Query {
                    status: 406,
                    message: "JSON object requested, multiple (or no) rows returned".to_string(),
                }),
            }
        }

        async fn fetch_featured(&self, limit: usize) -> Result<Vec<EventRow>> {
            self.calls.lock().await.push(format!("featured:{}", limit));
            if self.fail {
                return Err(Self::error());
            }
            Ok(self
                .rows
                .iter()
                .filter(|row| row.is_featured == Some(true))
                .take(limit)
                .cloned()
                .collect())
        }
    }

    fn row(id: &str, slug: &str, featured: bool) -> EventRow {
        EventRow {
            id: Some(id.to_string()),
            title: Some(format!("Event {}", id)),
            slug: Some(slug.to_string()),
            start_date: Some("2026-11-01T10:00:00+07:00".to_string()),
            is_featured: Some(featured),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_unconfigured_get_events_returns_samples() {
        let repo: EventRepository<MockStore> = EventRepository::unconfigured();
        let fetched = repo.get_events().await;

        assert!(!repo.is_configured());
        assert_eq!(fetched.reason(), Some(&FallbackReason::NotConfigured));
        let ids: Vec<&str> = fetched.data().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_get_events_live() {
        let store = MockStore::with_rows(vec![row("10", "a", false), row("11", "b", true)]);
        let repo = EventRepository::new(store);

        let fetched = repo.get_events().await;
        assert!(!fetched.is_fallback());
        assert_eq!(fetched.data().len(), 2);
        assert_eq!(fetched.data()[0].id, "10");
        assert_eq!(fetched.data()[0].timezone, "Asia/Jakarta");
    }

    #[tokio::test]
    async fn test_get_events_empty_result_falls_back() {
        let repo = EventRepository::new(MockStore::with_rows(vec![]));
        let fetched = repo.get_events().await;

        assert_eq!(fetched.reason(), Some(&FallbackReason::Empty));
        assert_eq!(fetched.data().as_slice(), sample_events());
    }

    #[tokio::test]
    async fn test_get_events_error_falls_back() {
        let repo = EventRepository::new(MockStore::failing());
        let fetched = repo.get_events().await;

        assert!(matches!(
            fetched.reason(),
            Some(FallbackReason::Unavailable(msg)) if msg.contains("does not exist")
        ));
        assert_eq!(fetched.into_inner(), sample_events().to_vec());
    }

    #[tokio::test]
    async fn test_get_event_by_slug_unconfigured() {
        let repo: EventRepository<MockStore> = EventRepository::unconfigured();

        let found = repo.get_event_by_slug("intro-to-data-engineering").await;
        assert_eq!(found.data().as_ref().map(|e| e.id.as_str()), Some("1"));

        let missing = repo.get_event_by_slug("nonexistent").await;
        assert!(missing.is_fallback());
        assert!(missing.data().is_none());
    }

    #[tokio::test]
    async fn test_get_event_by_slug_live() {
        let store = MockStore::with_rows(vec![row("10", "data-mesh", false)]);
        let repo = EventRepository::new(store.clone());

        let fetched = repo.get_event_by_slug("data-mesh").await;
        assert!(!fetched.is_fallback());
        assert_eq!(fetched.into_inner().unwrap().id, "10");
        assert_eq!(store.calls.lock().await.as_slice(), ["slug:data-mesh"]);
    }

    #[tokio::test]
    async fn test_get_event_by_slug_no_row_searches_samples() {
        let repo = EventRepository::new(MockStore::with_rows(vec![row("10", "other", false)]));

        let fetched = repo.get_event_by_slug("intro-to-data-engineering").await;
        assert!(fetched.is_fallback());
        assert_eq!(fetched.into_inner().unwrap().id, "1");

        let missing = repo.get_event_by_slug("nonexistent").await;
        assert!(missing.is_fallback());
        assert!(missing.into_inner().is_none());
    }

    #[tokio::test]
    async fn test_get_featured_events_live_is_limited() {
        let rows = (1..=5)
            .map(|i| row(&format!("f{}", i), &format!("f-{}", i), true))
            .collect();
        let store = MockStore::with_rows(rows);
        let repo = EventRepository::new(store.clone());

        let fetched = repo.get_featured_events().await;
        assert!(!fetched.is_fallback());
        assert_eq!(fetched.data().len(), FEATURED_LIMIT);
        assert_eq!(store.calls.lock().await.as_slice(), ["featured:3"]);
    }

    #[tokio::test]
    async fn test_get_featured_events_empty_falls_back() {
        let repo = EventRepository::new(MockStore::with_rows(vec![row("10", "a", false)]));
        let fetched = repo.get_featured_events().await;

        assert_eq!(fetched.reason(), Some(&FallbackReason::Empty));
        assert_eq!(fetched.data().len(), 2);
        assert!(fetched.data().iter().all(|e| e.is_featured));
    }

    #[tokio::test]
    async fn test_get_featured_events_unconfigured_and_error() {
        let unconfigured: EventRepository<MockStore> = EventRepository::unconfigured();
        let fetched = unconfigured.get_featured_events().await;
        assert!(fetched.data().len() <= FEATURED_LIMIT);
        assert_eq!(fetched.into_inner(), featured_samples());

        let failing = EventRepository::new(MockStore::failing());
        let fetched = failing.get_featured_events().await;
        assert!(matches!(fetched.reason(), Some(FallbackReason::Unavailable(_))));
        assert_eq!(fetched.into_inner(), featured_samples());
    }
}
