use anyhow::Context;
use clap::Parser;
use dei_content::config::toml_config::TomlConfig;
use dei_content::utils::{logger, validation::Validate};
use dei_content::{ArticleFeed, CliConfig, Command, EventRepository, Fetched, SiteConfig};
use reqwest::Client;
use serde::Serialize;

#[derive(Serialize)]
struct Output<'a, T: Serialize> {
    source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a dei_content::FallbackReason>,
    data: &'a T,
}

fn print_fetched<T: Serialize>(fetched: &Fetched<T>) -> anyhow::Result<()> {
    let output = Output {
        source: if fetched.is_fallback() { "fallback" } else { "live" },
        reason: fetched.reason(),
        data: fetched.data(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn load_config(cli: &CliConfig) -> anyhow::Result<SiteConfig> {
    match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            Ok(config.into_site_config())
        }
        None => Ok(SiteConfig::from_env()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = load_config(&cli)?;

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // A bad database config only degrades events to sample data.
    if let Some(database) = &config.database {
        if let Err(e) = database.validate() {
            tracing::warn!("⚠️ {} (events will fall back to sample data)", e);
        }
    }

    let client = Client::new();

    match cli.command {
        Command::Events => {
            let repository = EventRepository::from_config(&config, client);
            print_fetched(&repository.get_events().await)?;
        }
        Command::Event { slug } => {
            let repository = EventRepository::from_config(&config, client);
            print_fetched(&repository.get_event_by_slug(&slug).await)?;
        }
        Command::Featured => {
            let repository = EventRepository::from_config(&config, client);
            print_fetched(&repository.get_featured_events().await)?;
        }
        Command::Articles { limit } => {
            let feed = ArticleFeed::new(client, config.feed.url.clone());
            let articles = feed
                .latest_articles(limit.unwrap_or(config.feed.default_limit))
                .await;
            tracing::info!("✅ {} articles from {}", articles.len(), feed.feed_url());
            println!("{}", serde_json::to_string_pretty(&articles)?);
        }
    }

    Ok(())
}
