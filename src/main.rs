use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edh_ledger::calculate::{
    commander_summaries, commander_win_rate_series, head_to_head, player_summaries,
    player_win_rate_series, retain_involving_commander, retain_involving_player, retain_pod_size,
};
use edh_ledger::config::AppConfig;
use edh_ledger::models::{Commander, EntityId, Game, Player, TimeSeries};
use edh_ledger::storage::{EntityType, JsonlReader, SnapshotDir};

#[derive(Parser)]
#[command(name = "edh-ledger")]
#[command(about = "Commander pod tracker with winrate analytics")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory holding the JSONL snapshots
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-player winrate series over a sliding window
    Players {
        /// Trailing window size in games (omit for full history)
        #[arg(long)]
        window: Option<usize>,

        /// Only count games with this many seats
        #[arg(long)]
        pod_size: Option<usize>,

        /// Restrict to games involving this player id
        #[arg(long)]
        player: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Per-commander winrate series over a sliding window
    Commanders {
        /// Trailing window size in games (omit for full history)
        #[arg(long)]
        window: Option<usize>,

        /// Only count games with this many seats
        #[arg(long)]
        pod_size: Option<usize>,

        /// Restrict to games involving this commander id
        #[arg(long)]
        commander: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// All-time winrate totals per player and commander
    Summary {
        /// Only count games with this many seats
        #[arg(long)]
        pod_size: Option<usize>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Pairwise player records over shared games
    HeadToHead {
        /// Only count games with this many seats
        #[arg(long)]
        pod_size: Option<usize>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let config = load_config(&cli)?;
    tracing::info!("Starting edh-ledger v{}", env!("CARGO_PKG_VERSION"));

    let snapshots = SnapshotDir::new(config.data_dir.clone());

    match cli.command {
        Commands::Players {
            window,
            pod_size,
            player,
            pretty,
        } => {
            let mut games = load_games(&snapshots)?;
            let mut players: Vec<Player> = JsonlReader::for_entity(&snapshots, EntityType::Player)
                .read_all()
                .context("Failed to read players snapshot")?;

            if let Some(n) = pod_size.or(config.stats.pod_size) {
                retain_pod_size(&mut games, n);
            }
            if let Some(id) = player {
                let id = EntityId::from(id.as_str());
                retain_involving_player(&mut games, &id);
                players.retain(|p| p.id == id);
            }

            let window = window.or(config.stats.window);
            tracing::info!(
                "Computing player series over {} games (window: {:?})",
                games.len(),
                window
            );
            let series = player_win_rate_series(&games, &players, window)?;
            print_series(series, pretty)?;
        }
        Commands::Commanders {
            window,
            pod_size,
            commander,
            pretty,
        } => {
            let mut games = load_games(&snapshots)?;
            let mut commanders: Vec<Commander> =
                JsonlReader::for_entity(&snapshots, EntityType::Commander)
                    .read_all()
                    .context("Failed to read commanders snapshot")?;

            if let Some(n) = pod_size.or(config.stats.pod_size) {
                retain_pod_size(&mut games, n);
            }
            if let Some(id) = commander {
                let id = EntityId::from(id.as_str());
                retain_involving_commander(&mut games, &id);
                commanders.retain(|c| c.id == id);
            }

            let window = window.or(config.stats.window);
            tracing::info!(
                "Computing commander series over {} games (window: {:?})",
                games.len(),
                window
            );
            let series = commander_win_rate_series(&games, &commanders, window)?;
            print_series(series, pretty)?;
        }
        Commands::Summary { pod_size, pretty } => {
            let mut games = load_games(&snapshots)?;
            let players: Vec<Player> = JsonlReader::for_entity(&snapshots, EntityType::Player)
                .read_all()
                .context("Failed to read players snapshot")?;
            let commanders: Vec<Commander> =
                JsonlReader::for_entity(&snapshots, EntityType::Commander)
                    .read_all()
                    .context("Failed to read commanders snapshot")?;

            if let Some(n) = pod_size.or(config.stats.pod_size) {
                retain_pod_size(&mut games, n);
            }

            let body = json!({
                "players": player_summaries(&games, &players)?,
                "commanders": commander_summaries(&games, &commanders)?,
            });
            print_json(&body, pretty)?;
        }
        Commands::HeadToHead { pod_size, pretty } => {
            let mut games = load_games(&snapshots)?;
            let players: Vec<Player> = JsonlReader::for_entity(&snapshots, EntityType::Player)
                .read_all()
                .context("Failed to read players snapshot")?;

            if let Some(n) = pod_size.or(config.stats.pod_size) {
                retain_pod_size(&mut games, n);
            }

            let records = head_to_head(&games, &players)?;
            print_json(&records, pretty)?;
        }
    }

    Ok(())
}

/// Load config from the given file if it exists, otherwise use defaults.
/// The --data-dir flag overrides the configured directory either way.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let path = Path::new(&cli.config);
    let mut config = if path.exists() {
        AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", cli.config))?
    } else {
        AppConfig::default()
    };

    if let Some(ref dir) = cli.data_dir {
        config.data_dir = PathBuf::from(dir);
    }

    Ok(config)
}

fn load_games(snapshots: &SnapshotDir) -> Result<Vec<Game>> {
    let games: Vec<Game> = JsonlReader::for_entity(snapshots, EntityType::Game)
        .read_all()
        .context("Failed to read games snapshot")?;
    tracing::debug!("Loaded {} games", games.len());
    Ok(games)
}

/// Serialize series to stdout, dropping entities with no data points.
fn print_series(series: Vec<TimeSeries>, pretty: bool) -> Result<()> {
    let series: Vec<TimeSeries> = series.into_iter().filter(|s| !s.points.is_empty()).collect();
    print_json(&series, pretty)
}

fn print_json<T: serde::Serialize>(body: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(body)?
    } else {
        serde_json::to_string(body)?
    };
    println!("{}", out);
    Ok(())
}
