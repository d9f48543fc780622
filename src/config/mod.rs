#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::articles::DEFAULT_FEED_URL;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ARTICLE_LIMIT: usize = 6;
pub const MAX_ARTICLE_LIMIT: usize = 50;

pub const ENV_DATABASE_URL: &str = "SUPABASE_URL";
pub const ENV_DATABASE_KEY: &str = "SUPABASE_ANON_KEY";
pub const ENV_FEED_URL: &str = "DEI_FEED_URL";
pub const ENV_ARTICLE_LIMIT: &str = "DEI_ARTICLE_LIMIT";

/// Credentials for the hosted events database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub anon_key: String,
}

impl DatabaseConfig {
    /// Present only when both values are non-empty.
    pub fn from_parts(url: Option<String>, anon_key: Option<String>) -> Option<Self> {
        let url = url.filter(|v| !v.trim().is_empty())?;
        let anon_key = anon_key.filter(|v| !v.trim().is_empty())?;
        Some(Self { url, anon_key })
    }

    pub fn validate(&self) -> Result<()> {
        validate_url("database.url", &self.url)?;
        validate_non_empty_string("database.anon_key", &self.anon_key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    pub url: String,
    pub default_limit: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            default_limit: DEFAULT_ARTICLE_LIMIT,
        }
    }
}

/// Settings resolved once at startup and passed to the data components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// `None` keeps the event repository on sample data.
    pub database: Option<DatabaseConfig>,
    pub feed: FeedConfig,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database =
            DatabaseConfig::from_parts(lookup(ENV_DATABASE_URL), lookup(ENV_DATABASE_KEY));

        let url = lookup(ENV_FEED_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FEED_URL.to_string());
        let default_limit = match lookup(ENV_ARTICLE_LIMIT) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "{} is not a number ('{}'), using {}",
                    ENV_ARTICLE_LIMIT,
                    raw,
                    DEFAULT_ARTICLE_LIMIT
                );
                DEFAULT_ARTICLE_LIMIT
            }),
            None => DEFAULT_ARTICLE_LIMIT,
        };

        Self {
            database,
            feed: FeedConfig { url, default_limit },
        }
    }

    pub fn is_database_configured(&self) -> bool {
        self.database.is_some()
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_url("feed.url", &self.feed.url)?;
        validate_range("feed.limit", self.feed.default_limit, 1, MAX_ARTICLE_LIMIT)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_fully_configured() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            (ENV_DATABASE_URL, "https://abc.supabase.co"),
            (ENV_DATABASE_KEY, "anon-key"),
            (ENV_FEED_URL, "https://blog.example.com/feed"),
            (ENV_ARTICLE_LIMIT, "3"),
        ]));

        assert!(config.is_database_configured());
        assert_eq!(config.feed.url, "https://blog.example.com/feed");
        assert_eq!(config.feed.default_limit, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_key_means_not_configured() {
        let config =
            SiteConfig::from_lookup(lookup_from(&[(ENV_DATABASE_URL, "https://abc.supabase.co")]));
        assert!(!config.is_database_configured());

        let config = SiteConfig::from_lookup(lookup_from(&[
            (ENV_DATABASE_URL, "https://abc.supabase.co"),
            (ENV_DATABASE_KEY, ""),
        ]));
        assert!(!config.is_database_configured());
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.feed.url, DEFAULT_FEED_URL);
        assert_eq!(config.feed.default_limit, DEFAULT_ARTICLE_LIMIT);
    }

    #[test]
    fn test_bad_limit_falls_back_to_default() {
        let config = SiteConfig::from_lookup(lookup_from(&[(ENV_ARTICLE_LIMIT, "lots")]));
        assert_eq!(config.feed.default_limit, DEFAULT_ARTICLE_LIMIT);
    }

    #[test]
    fn test_validation_rejects_out_of_range_limit() {
        let mut config = SiteConfig::default();
        config.feed.default_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_database_validation() {
        let good = DatabaseConfig {
            url: "https://abc.supabase.co".to_string(),
            anon_key: "anon".to_string(),
        };
        assert!(good.validate().is_ok());

        let bad = DatabaseConfig {
            url: "abc.supabase.co".to_string(),
            anon_key: "anon".to_string(),
        };
        assert!(bad.validate().is_err());
    }
}
