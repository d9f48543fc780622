use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_TIMEZONE: &str = "Asia/Jakarta";
pub const DEFAULT_AUTHOR: &str = "DEI Team";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocationType {
    Physical,
    #[default]
    Virtual,
    Hybrid,
    /// Value outside the known set, kept verbatim.
    Other(String),
}

impl LocationType {
    pub fn as_str(&self) -> &str {
        match self {
            LocationType::Physical => "physical",
            LocationType::Virtual => "virtual",
            LocationType::Hybrid => "hybrid",
            LocationType::Other(value) => value,
        }
    }
}

impl From<String> for LocationType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "physical" => LocationType::Physical,
            "virtual" => LocationType::Virtual,
            "hybrid" => LocationType::Hybrid,
            _ => LocationType::Other(value),
        }
    }
}

impl From<LocationType> for String {
    fn from(value: LocationType) -> Self {
        match value {
            LocationType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
    /// Value outside the known set, kept verbatim.
    Other(String),
}

impl EventStatus {
    pub fn as_str(&self) -> &str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
            EventStatus::Other(value) => value,
        }
    }
}

impl From<String> for EventStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "upcoming" => EventStatus::Upcoming,
            "ongoing" => EventStatus::Ongoing,
            "completed" => EventStatus::Completed,
            "cancelled" => EventStatus::Cancelled,
            _ => EventStatus::Other(value),
        }
    }
}

impl From<EventStatus> for String {
    fn from(value: EventStatus) -> Self {
        match value {
            EventStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// One row of the remote `events` table. Every column may be null or missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRow {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub excerpt: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub timezone: Option<String>,
    pub location_type: Option<LocationType>,
    pub venue: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub virtual_link: Option<String>,
    pub cover_image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<EventStatus>,
    pub registration_url: Option<String>,
    pub max_attendees: Option<i64>,
    pub registered_count: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub published_at: Option<String>,
    pub is_featured: Option<bool>,
}

// Integer primary keys are accepted and carried as their decimal text.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub excerpt: String,
    /// RFC 3339 timestamp as stored remotely.
    pub start_date: String,
    pub end_date: String,
    pub timezone: String,
    pub location_type: LocationType,
    pub venue: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub virtual_link: Option<String>,
    pub cover_image: String,
    pub category: String,
    pub tags: Vec<String>,
    pub status: EventStatus,
    pub registration_url: Option<String>,
    /// Counts are carried as stored; out-of-range values are not rejected.
    pub max_attendees: Option<i64>,
    pub registered_count: i64,
    pub created_at: String,
    pub updated_at: String,
    pub published_at: String,
    pub is_featured: bool,
}

impl Event {
    pub fn starts_at(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        chrono::DateTime::parse_from_rfc3339(&self.start_date).ok()
    }

    pub fn ends_at(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        chrono::DateTime::parse_from_rfc3339(&self.end_date).ok()
    }

    /// Seats left under the attendee cap, never below zero; `None` when uncapped.
    pub fn spots_remaining(&self) -> Option<i64> {
        self.max_attendees
            .map(|max| max.saturating_sub(self.registered_count).max(0))
    }
}

// Required columns without a default are not rejected: they surface as empty
// strings and callers must tolerate them.
impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Self {
            id: row.id.unwrap_or_default(),
            title: row.title.unwrap_or_default(),
            slug: row.slug.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            excerpt: row.excerpt.unwrap_or_default(),
            start_date: row.start_date.unwrap_or_default(),
            end_date: row.end_date.unwrap_or_default(),
            timezone: row
                .timezone
                .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
            location_type: row.location_type.unwrap_or_default(),
            venue: row.venue,
            address: row.address,
            city: row.city,
            virtual_link: row.virtual_link,
            cover_image: row.cover_image.unwrap_or_default(),
            category: row.category.unwrap_or_default(),
            tags: row.tags.unwrap_or_default(),
            status: row.status.unwrap_or_default(),
            registration_url: row.registration_url,
            max_attendees: row.max_attendees,
            registered_count: row.registered_count.unwrap_or(0),
            created_at: row.created_at.unwrap_or_default(),
            updated_at: row.updated_at.unwrap_or_default(),
            published_at: row.published_at.unwrap_or_default(),
            is_featured: row.is_featured.unwrap_or(false),
        }
    }
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        Self {
            id: Some(event.id.clone()),
            title: Some(event.title.clone()),
            slug: Some(event.slug.clone()),
            description: Some(event.description.clone()),
            excerpt: Some(event.excerpt.clone()),
            start_date: Some(event.start_date.clone()),
            end_date: Some(event.end_date.clone()),
            timezone: Some(event.timezone.clone()),
            location_type: Some(event.location_type.clone()),
            venue: event.venue.clone(),
            address: event.address.clone(),
            city: event.city.clone(),
            virtual_link: event.virtual_link.clone(),
            cover_image: Some(event.cover_image.clone()),
            category: Some(event.category.clone()),
            tags: Some(event.tags.clone()),
            status: Some(event.status.clone()),
            registration_url: event.registration_url.clone(),
            max_attendees: event.max_attendees,
            registered_count: Some(event.registered_count),
            created_at: Some(event.created_at.clone()),
            updated_at: Some(event.updated_at.clone()),
            published_at: Some(event.published_at.clone()),
            is_featured: Some(event.is_featured),
        }
    }
}

/// One feed item as delivered upstream, before presentation fields are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    pub creator: String,
    pub content: String,
    pub categories: Vec<String>,
    pub guid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub url: String,
    pub published_at: String,
    pub author: String,
    pub excerpt: String,
    pub categories: Vec<String>,
    pub thumbnail: Option<String>,
    pub content: Option<String>,
}
