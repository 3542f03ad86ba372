use anyhow::Result;
use clap::{Parser, Subcommand};

use aidenmon::cli::{self, OutputFormat, SessionOverrides};
use aidenmon::clock::{Clock, SystemClock};
use aidenmon::config;
use aidenmon::generators::random;
use aidenmon::session::EngineSession;
use aidenmon::web;

#[derive(Debug, Parser)]
#[command(name = "aidenmon")]
#[command(about = "AIDEN engine monitor — simulated session metrics in your terminal")]
struct App {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Drive a live session and render the dashboard in the terminal
    Run {
        /// Stop after this many seconds (default: run until Ctrl+C)
        #[arg(long)]
        duration_secs: Option<u64>,
        /// Fixed RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
        /// Feed variant: thought-stream (default) or log-only
        #[arg(long)]
        variant: Option<String>,
    },
    /// Advance a fresh session through virtual ticks and print the snapshot
    Snapshot {
        /// Number of metric ticks to simulate
        #[arg(long, default_value = "30")]
        ticks: u64,
        /// Output format: table (default), json, csv
        #[arg(long, default_value = "table")]
        format: String,
        /// Fixed RNG seed for a reproducible snapshot
        #[arg(long)]
        seed: Option<u64>,
        /// Feed variant: thought-stream (default) or log-only
        #[arg(long)]
        variant: Option<String>,
    },
    /// Serve the live dashboard over HTTP
    Web {
        /// Listen address
        #[arg(long, default_value = web::DEFAULT_ADDR)]
        addr: String,
        /// Fixed RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
        /// Feed variant: thought-stream (default) or log-only
        #[arg(long)]
        variant: Option<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Print the effective merged configuration
    Show,
    /// Write the default config to ~/.aidenmon/config.toml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file search paths
    Path,
}

fn overrides(seed: Option<u64>, variant: Option<&str>) -> Result<SessionOverrides> {
    let variant = match variant {
        Some(raw) => Some(
            config::parse_variant(raw)
                .ok_or_else(|| anyhow::anyhow!("unknown variant '{raw}' (expected thought-stream or log-only)"))?,
        ),
        None => None,
    };
    Ok(SessionOverrides { seed, variant })
}

fn main() -> Result<()> {
    let app = App::parse();

    match app.command {
        Commands::Run {
            duration_secs,
            seed,
            variant,
        } => cli::run_live(duration_secs, overrides(seed, variant.as_deref())?),
        Commands::Snapshot {
            ticks,
            format,
            seed,
            variant,
        } => {
            let fmt = OutputFormat::from_str_opt(Some(&format));
            cli::run_snapshot(ticks, fmt, overrides(seed, variant.as_deref())?)
        }
        Commands::Web {
            addr,
            seed,
            variant,
        } => {
            let over = overrides(seed, variant.as_deref())?;
            let mut cfg = config::load();
            if let Some(v) = over.variant {
                cfg.session.variant = v;
            }
            let seed = over.seed.or(cfg.session.seed);
            let session = EngineSession::new(
                cfg.session_settings(),
                random::make_source(seed),
                SystemClock.now(),
            );
            web::serve(&addr, session)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => cli::run_config_show(),
            ConfigAction::Init { force } => cli::run_config_init(force),
            ConfigAction::Path => cli::run_config_path(),
        },
    }
}
