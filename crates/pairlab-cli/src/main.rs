use anyhow::Result;
use clap::{Parser, Subcommand};
use pairlab_application::AdminConsole;
use pairlab_core::matching::BatchPolicy;
use pairlab_core::timeslot::TimeSlot;
use pairlab_infrastructure::{AppConfig, LocalStore, PairlabPaths};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod notice;

use commands::export::ExportTarget;
use commands::selection::SelectionAction;
use commands::status::MatchAction;

#[derive(Parser)]
#[command(name = "pairlab")]
#[command(about = "PairLab Admin Console - operator tools for the pairing service", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the JSON collections (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the participant queue
    Queue {
        /// Substring filter over email and name
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,
        /// Keep only participants available at this slot (e.g. mon-19)
        #[arg(long, value_name = "CODE")]
        slot: Option<TimeSlot>,
    },
    /// Toggle a participant in the pairing selection
    Select {
        /// Participant ID as shown by `queue`
        participant_id: String,
    },
    /// Show the current selection
    Selection {
        #[command(subcommand)]
        action: Option<SelectionAction>,
    },
    /// Create a match from the two selected participants
    Pair,
    /// Match the first compatible pair in queue order
    Auto,
    /// Propose a whole round of matches, commit with --execute
    Batch {
        /// Pairing policy: common-time, similar-count or new-users
        #[arg(long, value_name = "POLICY")]
        policy: BatchPolicy,
        /// Restrict pairs to this slot
        #[arg(long, value_name = "CODE")]
        slot: Option<TimeSlot>,
        /// Commit the proposals instead of previewing them
        #[arg(long)]
        execute: bool,
    },
    /// Show scheduled matches on a week grid
    Calendar {
        /// Weeks away from the current one (negative for past weeks)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true, value_name = "N")]
        week_offset: i64,
    },
    /// Show the live sessions board
    Sessions,
    /// Inspect and update match records
    Match {
        #[command(subcommand)]
        action: MatchAction,
    },
    /// Show dashboard statistics
    Stats,
    /// Show the recent action log
    Log,
    /// Write collection snapshots to disk
    Export {
        #[command(subcommand)]
        target: ExportTarget,
    },
    /// Ask the concierge a question
    Chat {
        /// The message to send
        message: String,
    },
    /// Seed the demo participants
    Seed {
        /// Also seed an active match with a live and a finished session
        #[arg(long)]
        with_sessions: bool,
    },
    /// Delete every stored collection
    Reset {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_env("PAIRLAB_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    if let Err(err) = run(cli).await {
        notice::failure(&format!("{err:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load_default()?;
    let data_dir = match cli.data_dir.or_else(|| config.storage.data_dir.clone()) {
        Some(dir) => dir,
        None => PairlabPaths::data_dir()?,
    };
    tracing::debug!("[pairlab] Using data dir {}", data_dir.display());

    let store = LocalStore::open(&data_dir)?;
    let console = AdminConsole::open(store).await?;

    match cli.command {
        Commands::Queue { search, slot } => {
            commands::queue::run(&console, search.as_deref(), slot).await
        }
        Commands::Select { participant_id } => {
            commands::selection::toggle(&console, &participant_id).await
        }
        Commands::Selection { action } => match action {
            Some(SelectionAction::Clear) => commands::selection::clear(&console).await,
            None => commands::selection::show(&console).await,
        },
        Commands::Pair => commands::pairing::pair(&console).await,
        Commands::Auto => commands::pairing::auto(&console).await,
        Commands::Batch {
            policy,
            slot,
            execute,
        } => commands::pairing::batch(&console, policy, slot, execute).await,
        Commands::Calendar { week_offset } => commands::calendar::run(&console, week_offset).await,
        Commands::Sessions => commands::sessions::run(&console).await,
        Commands::Match { action } => match action {
            MatchAction::SetStatus { match_id, status } => {
                commands::status::set_status(&console, &match_id, status).await
            }
        },
        Commands::Stats => commands::overview::stats(&console).await,
        Commands::Log => commands::overview::log(&console).await,
        Commands::Export { target } => commands::export::run(&console, target).await,
        Commands::Chat { message } => commands::chat::run(&config, &message).await,
        Commands::Seed { with_sessions } => commands::admin::seed(&console, with_sessions).await,
        Commands::Reset { yes } => commands::admin::reset(&console, yes).await,
    }
}
