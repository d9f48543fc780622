pub mod articles;
pub mod fetched;
pub mod repository;

pub use crate::domain::model::{Article, Event, EventRow, RawArticle};
pub use crate::domain::ports::EventStore;
pub use crate::utils::error::Result;
