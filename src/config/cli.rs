use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "dei-content")]
#[command(about = "Dump community events and articles as JSON for the site build")]
pub struct CliConfig {
    /// Path to a TOML configuration file (environment variables are used otherwise)
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// All events ordered by start time
    Events,
    /// A single event by its slug
    Event { slug: String },
    /// Up to three featured upcoming events
    Featured,
    /// Latest articles from the community blog feed
    Articles {
        #[arg(short, long)]
        limit: Option<usize>,
    },
}
