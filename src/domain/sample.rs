use crate::domain::model::{Event, EventStatus, LocationType, DEFAULT_TIMEZONE};
use once_cell::sync::Lazy;

static SAMPLE_EVENTS: Lazy<Vec<Event>> = Lazy::new(|| {
    vec![
        Event {
            id: "1".to_string(),
            title: "Introduction to Data Engineering".to_string(),
            slug: "intro-to-data-engineering".to_string(),
            description: "Sesi pengenalan data engineering untuk pemula: mulai dari konsep \
                          pipeline, batch vs streaming, hingga tools yang umum dipakai di \
                          industri."
                .to_string(),
            excerpt: "Kenali dasar-dasar data engineering dan tools yang dipakai di industri."
                .to_string(),
            start_date: "2025-02-15T09:00:00+07:00".to_string(),
            end_date: "2025-02-15T12:00:00+07:00".to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            location_type: LocationType::Physical,
            venue: Some("Comma Space".to_string()),
            address: Some("Jl. Jend. Sudirman Kav. 52-53".to_string()),
            city: Some("Jakarta".to_string()),
            virtual_link: None,
            cover_image: "/images/events/intro-data-engineering.jpg".to_string(),
            category: "Workshop".to_string(),
            tags: vec![
                "data-engineering".to_string(),
                "beginner".to_string(),
                "workshop".to_string(),
            ],
            status: EventStatus::Upcoming,
            registration_url: Some("https://forms.gle/dei-intro-data-engineering".to_string()),
            max_attendees: Some(50),
            registered_count: 32,
            created_at: "2025-01-10T08:00:00+07:00".to_string(),
            updated_at: "2025-01-10T08:00:00+07:00".to_string(),
            published_at: "2025-01-10T08:00:00+07:00".to_string(),
            is_featured: true,
        },
        Event {
            id: "2".to_string(),
            title: "Building Modern Data Pipelines with dbt".to_string(),
            slug: "modern-data-pipelines-dbt".to_string(),
            description: "Webinar tentang membangun pipeline transformasi data yang teruji \
                          dan terdokumentasi menggunakan dbt."
                .to_string(),
            excerpt: "Membangun pipeline transformasi data dengan dbt.".to_string(),
            start_date: "2025-03-08T19:00:00+07:00".to_string(),
            end_date: "2025-03-08T21:00:00+07:00".to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            location_type: LocationType::Virtual,
            venue: None,
            address: None,
            city: None,
            virtual_link: Some("https://meet.google.com/dei-dbt-webinar".to_string()),
            cover_image: "/images/events/dbt-pipelines.jpg".to_string(),
            category: "Webinar".to_string(),
            tags: vec![
                "dbt".to_string(),
                "analytics-engineering".to_string(),
                "webinar".to_string(),
            ],
            status: EventStatus::Upcoming,
            registration_url: Some("https://forms.gle/dei-dbt-webinar".to_string()),
            max_attendees: Some(200),
            registered_count: 87,
            created_at: "2025-01-20T08:00:00+07:00".to_string(),
            updated_at: "2025-01-20T08:00:00+07:00".to_string(),
            published_at: "2025-01-20T08:00:00+07:00".to_string(),
            is_featured: true,
        },
    ]
});

/// Fixed events served whenever the remote store cannot be used.
pub fn sample_events() -> &'static [Event] {
    &SAMPLE_EVENTS
}

pub fn find_sample_by_slug(slug: &str) -> Option<&'static Event> {
    SAMPLE_EVENTS.iter().find(|event| event.slug == slug)
}

pub fn featured_samples() -> Vec<Event> {
    SAMPLE_EVENTS
        .iter()
        .filter(|event| event.is_featured)
        .cloned()
        .collect()
}
