use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

use marketplace_client::api::{RequestOutcome, ResilientClient};
use marketplace_client::config::{load_config, ClientConfig};
use marketplace_client::observability::logging;
use marketplace_client::session::SessionResolver;
use marketplace_client::storage::{keys, JsonFileStore, KeyValueStore};

#[derive(Parser)]
#[command(name = "market-cli")]
#[command(about = "Diagnostics CLI for the marketplace client core", long_about = None)]
struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(short, long)]
    url: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path of the JSON file backing the local store
    #[arg(short, long, default_value = "market-store.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write identity state the way the auth/onboarding flows would
    Seed {
        /// Role string as the backend persists it (e.g. student, landlord)
        #[arg(long)]
        role: String,
        /// Backend user id
        #[arg(long)]
        id: Option<String>,
        /// Bearer token for authenticated calls
        #[arg(long)]
        token: Option<String>,
        /// Mark student onboarding as completed
        #[arg(long)]
        onboarded: bool,
    },
    /// Clear persisted session state (what logout does)
    Reset,
    /// Resolve the launch route from persisted state
    Route,
    /// Check whether the backend is reachable
    Probe,
    /// GET an endpoint, serving fallback data for RESOURCE on failure
    Fetch {
        endpoint: String,
        #[arg(short, long)]
        resource: String,
    },
    /// GET an endpoint and print the raw outcome
    Get { endpoint: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    if let Some(url) = &cli.url {
        config.api.base_url = url.clone();
    }

    logging::init(&format!(
        "market_cli=info,marketplace_client={}",
        config.observability.log_level
    ));

    let store = Arc::new(JsonFileStore::open(&cli.store)?);

    match cli.command {
        Commands::Seed {
            role,
            id,
            token,
            onboarded,
        } => {
            let identity = json!({ "id": id, "role": role });
            store.set(keys::USER, &identity.to_string()).await?;
            match token {
                Some(token) => store.set(keys::TOKEN, &token).await?,
                None => store.remove(keys::TOKEN).await?,
            }
            if onboarded {
                store.set(keys::ONBOARDING, "true").await?;
            } else {
                store.remove(keys::ONBOARDING).await?;
            }
            println!("Seeded store at {}", cli.store.display());
        }
        Commands::Reset => {
            for key in [keys::USER, keys::ONBOARDING, keys::TOKEN] {
                store.remove(key).await?;
            }
            println!("Cleared persisted session state");
        }
        Commands::Route => {
            let resolver = SessionResolver::new(store.clone());
            let resolved = resolver.resolve_initial_route().await;
            println!("route: {}", resolved.route);
            match resolved.identity {
                Some(identity) => {
                    println!("identity: {}", serde_json::to_string_pretty(&identity)?);
                }
                None => println!("identity: none"),
            }
        }
        Commands::Probe => {
            let client = ResilientClient::new(config, store);
            let reachable = client.probe_connectivity().await;
            println!("reachable: {reachable}");
        }
        Commands::Fetch { endpoint, resource } => {
            let client = ResilientClient::new(config, store);
            let sourced = client.request_with_fallback(&endpoint, &resource).await;
            println!("{}", serde_json::to_string_pretty(&sourced)?);
        }
        Commands::Get { endpoint } => {
            let client = ResilientClient::new(config, store);
            match client.get(&endpoint).await {
                RequestOutcome::Success { data } => {
                    println!("{}", serde_json::to_string_pretty(&data)?);
                }
                RequestOutcome::Failure { reason } => {
                    eprintln!("request failed: {reason}");
                }
            }
        }
    }

    Ok(())
}
