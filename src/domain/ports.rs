use crate::domain::model::EventRow;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read access to the remote `events` table.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// All rows ordered by `start_date` ascending.
    async fn fetch_all(&self) -> Result<Vec<EventRow>>;

    /// Exactly one row with the given slug. Zero or several matches are an error.
    async fn fetch_by_slug(&self, slug: &str) -> Result<EventRow>;

    /// Featured, upcoming rows ordered by `start_date` ascending, at most `limit`.
    async fn fetch_featured(&self, limit: usize) -> Result<Vec<EventRow>>;
}
