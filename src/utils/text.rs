//! Presentation helpers for syndicated article content.
//!
//! Markup handling is pattern based, not a parser: a `>` inside an attribute
//! value ends the tag early.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Asia::Jakarta;
use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_EXCERPT_LENGTH: usize = 200;
pub const WORDS_PER_MINUTE: usize = 200;
const ELLIPSIS: &str = "...";

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static IMG_SRC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<img[^>]+src=["']([^"'>]+)["']"#).expect("valid img regex")
});

pub fn strip_tags(content: &str) -> String {
    TAG_RE.replace_all(content, "").into_owned()
}

/// Plain-text excerpt of at most `max_length` characters, plus `...` when cut.
pub fn extract_excerpt(content: &str, max_length: usize) -> String {
    let stripped = strip_tags(content);
    let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    let text = collapsed.trim();

    if text.chars().count() > max_length {
        let truncated: String = text.chars().take(max_length).collect();
        format!("{}{}", truncated, ELLIPSIS)
    } else {
        text.to_string()
    }
}

pub fn extract_first_image(content: &str) -> Option<String> {
    IMG_SRC_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Renders a date the way the Indonesian locale writes it, e.g. `18 Oktober 2026`.
/// Instants are shown in Jakarta time. Input that does not parse is returned as-is.
pub fn format_date(date_string: &str) -> String {
    match parse_calendar_date(date_string.trim()) {
        Some(date) => format!(
            "{} {} {}",
            date.day(),
            MONTHS_ID[date.month0() as usize],
            date.year()
        ),
        None => date_string.to_string(),
    }
}

fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Jakarta).date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Jakarta).date_naive());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Jakarta
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.date_naive());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Minutes to read at 200 words per minute, rounded up, never below one.
pub fn calculate_reading_time(content: &str) -> u32 {
    let words = strip_tags(content).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}
