//! Itemdesk - Main Entry Point
//!
//! Command-line front end: loads the item list the way the list view does
//! on startup, then runs one create/edit/delete flow through the store.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use itemdesk_application::{Clock, ItemResource, ItemStore};
use itemdesk_domain::{ItemId, Price};
use itemdesk_infrastructure::{ClientConfig, ReqwestItemClient, SystemClock};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod render;

#[derive(Parser)]
#[command(name = "itemdesk")]
#[command(about = "Manage items on the item REST backend", long_about = None)]
struct Cli {
    /// Backend base URL (overrides ITEMDESK_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all items
    List,

    /// Show one item
    Get {
        /// Item ID
        id: ItemId,
    },

    /// Create a new item
    Create {
        /// Item name
        #[arg(short, long)]
        name: String,

        /// Item description
        #[arg(short, long)]
        description: Option<String>,

        /// Price; non-numeric characters are ignored
        #[arg(short, long, default_value = "0.00")]
        price: String,
    },

    /// Edit an existing item
    Update {
        /// Item ID
        id: ItemId,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New price; non-numeric characters are ignored
        #[arg(short, long)]
        price: Option<String>,
    },

    /// Delete an item
    Delete {
        /// Item ID
        id: ItemId,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = match cli.api_url.as_deref() {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    tracing::debug!(base_url = %config.base_url(), "using backend");

    let client = ReqwestItemClient::new(config).context("failed to create HTTP client")?;
    let store = ItemStore::new(Arc::new(client), SystemClock::new());

    // The list view loads first; a failure there is the only thing shown.
    if store.fetch_items().await.is_err() {
        println!("{}", render::list_view(&store.snapshot()));
        return Ok(ExitCode::FAILURE);
    }

    match cli.command {
        Commands::List => {}

        Commands::Get { id } => {
            let item = store.fetch_item_by_id(id).await?;
            println!("{}", render::item_details(&item));
            return Ok(ExitCode::SUCCESS);
        }

        Commands::Create {
            name,
            description,
            price,
        } => {
            store.new_item();
            store.edit_selected(|item| {
                item.name = name;
                item.description = description;
                item.price = Price::parse_input(&price);
            });
            if !save(&store).await {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Update {
            id,
            name,
            description,
            price,
        } => {
            store.fetch_item_by_id(id).await?;
            store.edit_selected(|item| {
                if let Some(name) = name {
                    item.name = name;
                }
                if let Some(description) = description {
                    item.description = Some(description);
                }
                if let Some(price) = price {
                    item.price = Price::parse_input(&price);
                }
            });
            if !save(&store).await {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Delete { id } => {
            store.fetch_item_by_id(id).await?;
            store.delete_selected().await?;
        }
    }

    println!("{}", render::list_view(&store.snapshot()));
    Ok(ExitCode::SUCCESS)
}

/// Saves the selection, printing any notification the store emits.
///
/// Returns false if the save was rejected.
async fn save<R: ItemResource, C: Clock>(store: &ItemStore<R, C>) -> bool {
    let mut notifications = store.notifications();

    let saved = store.save_selected().await.is_ok();
    while let Ok(note) = notifications.try_recv() {
        eprintln!("{}", note.message);
    }
    saved
}
