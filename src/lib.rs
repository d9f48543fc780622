pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::postgrest::PostgrestEventStore;
pub use config::{DatabaseConfig, FeedConfig, SiteConfig};
pub use crate::core::{
    articles::ArticleFeed,
    fetched::{FallbackReason, Fetched},
    repository::EventRepository,
};
pub use domain::model::{Article, Event, EventRow, EventStatus, LocationType, RawArticle};
pub use utils::error::{Result, SiteError};
