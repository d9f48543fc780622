use crate::config::{DatabaseConfig, FeedConfig, SiteConfig, DEFAULT_ARTICLE_LIMIT};
use crate::core::articles::DEFAULT_FEED_URL;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub database: Option<DatabaseSection>,
    #[serde(default)]
    pub feed: FeedSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedSection {
    pub url: Option<String>,
    pub limit: Option<usize>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_RE: once_cell::sync::Lazy<Regex> = once_cell::sync::Lazy::new(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("valid env placeholder regex")
        });

        ENV_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Unresolved `${VAR}` placeholders and empty values leave the database unconfigured.
    pub fn into_site_config(self) -> SiteConfig {
        let database = self.database.and_then(|section| {
            DatabaseConfig::from_parts(
                section.url.filter(|v| !is_placeholder(v)),
                section.anon_key.filter(|v| !is_placeholder(v)),
            )
        });

        SiteConfig {
            database,
            feed: FeedConfig {
                url: self
                    .feed
                    .url
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_FEED_URL.to_string()),
                default_limit: self.feed.limit.unwrap_or(DEFAULT_ARTICLE_LIMIT),
            },
        }
    }
}

fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.starts_with("${") && trimmed.ends_with('}')
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_site_config().validate()
    }
}
