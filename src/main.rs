use anyhow::Context;
use clap::{Parser, Subcommand};
use roomie_match::config::{LoggingSettings, Settings};
use roomie_match::models::{FindMatchesRequest, UserProfile};
use roomie_match::services::{InMemoryMatchStore, InMemoryProfileStore, MatchService};
use roomie_match::Matcher;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Rank roommate candidates from a JSON profile pool
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// JSON file holding an array of user profiles
    #[arg(long)]
    profiles: PathBuf,

    /// Configuration file (defaults to config/default.toml and config/local.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank compatible users for one user
    Find {
        #[arg(long)]
        user: String,
        #[arg(long)]
        min_score: Option<u8>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        looking_for: Option<String>,
        #[arg(long)]
        limit: Option<u16>,
    },
    /// Compare two users
    Compat {
        #[arg(long)]
        user: String,
        #[arg(long)]
        other: String,
    },
    /// Record interest from one user in another
    Interest {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Also record the interest back, producing a mutual match
        #[arg(long)]
        reciprocate: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("Failed to load configuration")?;

    init_logging(&settings.logging);

    let profiles = load_profiles(&cli.profiles)?;

    let matcher = Matcher::new(settings.scoring.weights.into());
    info!("Matcher initialized with weights: {:?}", matcher.weights());

    let service = MatchService::new(
        InMemoryProfileStore::from_profiles(profiles),
        InMemoryMatchStore::new(),
        matcher,
        settings.matching,
    );

    if service.profiles().is_empty() {
        warn!("Profile pool {} is empty", cli.profiles.display());
    } else {
        info!(
            "Loaded {} profiles from {}",
            service.profiles().len(),
            cli.profiles.display()
        );
    }

    match cli.command {
        Command::Find {
            user,
            min_score,
            city,
            looking_for,
            limit,
        } => {
            let request = FindMatchesRequest {
                user_id: user,
                min_score,
                city,
                looking_for,
                limit,
            };
            print_json(&service.find_matches(&request)?)
        }
        Command::Compat { user, other } => print_json(&service.compatibility(&user, &other)?),
        Command::Interest {
            from,
            to,
            reciprocate,
        } => {
            let mut responses = vec![service.express_interest(&from, &to)?];
            if reciprocate {
                responses.push(service.express_interest(&to, &from)?);
            }
            info!("{} match records held", service.matches().records()?.len());
            print_json(&responses)
        }
    }
}

/// Initialize logging on stderr, leaving stdout for results
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

fn load_profiles(path: &Path) -> anyhow::Result<Vec<UserProfile>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profiles from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid profile JSON in {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
