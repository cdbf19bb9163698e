mod commands;
mod render;
mod utils;

#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use events_core::EventsClient;
use events_core::config::ClientConfig;
use events_core::filter::EventFilter;
use tracing_subscriber::EnvFilter;

use crate::commands::form::EventArgs;

#[derive(Parser)]
#[command(name = "events")]
#[command(about = "List, filter, create, update and delete events on your events backend")]
struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, optionally filtered
    List {
        /// Only show events whose title contains this text
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only show events in this category (by id)
        #[arg(short, long, default_value = "")]
        category: String,
    },
    /// Show one event with its creator and categories
    Show { id: String },
    /// Add a new event
    New {
        #[command(flatten)]
        fields: EventArgs,

        /// Fail instead of prompting for missing or invalid fields
        #[arg(long)]
        no_input: bool,
    },
    /// Edit an existing event
    Edit {
        id: String,

        #[command(flatten)]
        fields: EventArgs,

        /// Apply the given fields without prompting
        #[arg(long)]
        no_input: bool,
    },
    /// Delete an event
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List available categories
    Categories,
    /// Show config file location and effective settings
    Config {
        /// Persist a new backend base URL
        #[arg(long)]
        set_base_url: Option<String>,
    },
}

/// Loaded configuration plus a client built from it.
pub struct App {
    pub config: ClientConfig,
    pub client: EventsClient,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("events=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::load().context("Failed to load config")?;
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }

    let command = match cli.command {
        Commands::Config { set_base_url } => return commands::config::run(&config, set_base_url),
        command => command,
    };

    let client = EventsClient::from_config(&config)?;
    let app = App { config, client };

    match command {
        Commands::List { search, category } => {
            let filter = EventFilter::from_select(search, &category).map_err(|e| anyhow::anyhow!(e))?;
            commands::list::run(&app, &filter).await
        }
        Commands::Show { id } => commands::show::run(&app, &id).await,
        Commands::New { fields, no_input } => commands::new::run(&app, fields, !no_input).await,
        Commands::Edit { id, fields, no_input } => {
            commands::edit::run(&app, &id, fields, !no_input).await
        }
        Commands::Delete { id, yes } => commands::delete::run(&app, &id, yes).await,
        Commands::Categories => commands::categories::run(&app).await,
        Commands::Config { .. } => Ok(()),
    }
}
