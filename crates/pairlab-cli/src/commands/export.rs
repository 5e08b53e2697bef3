use anyhow::{Context, Result};
use chrono::Utc;
use clap::Subcommand;
use pairlab_application::{AdminConsole, export};
use std::fs;
use std::path::PathBuf;

use crate::notice;

#[derive(Subcommand)]
pub enum ExportTarget {
    /// Participants as CSV
    Users {
        /// Output path (defaults to pairlab-users-<date>.csv)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Match records as CSV
    Matches {
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Session records as CSV
    Sessions {
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Every collection in one JSON document
    Dump {
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

pub async fn run(console: &AdminConsole, target: ExportTarget) -> Result<()> {
    let data = console.dashboard().await;
    let today = Utc::now().date_naive();

    let (path, contents, logged, done) = match target {
        ExportTarget::Users { out } => (
            out.unwrap_or_else(|| export::export_file_name("users", "csv", today).into()),
            export::users_csv(&data.participants),
            Some("User data exported to CSV"),
            "CSV exported successfully",
        ),
        ExportTarget::Matches { out } => (
            out.unwrap_or_else(|| export::export_file_name("matches", "csv", today).into()),
            export::matches_csv(&data.matches),
            Some("Match data exported to CSV"),
            "CSV exported successfully",
        ),
        ExportTarget::Sessions { out } => (
            out.unwrap_or_else(|| export::export_file_name("sessions", "csv", today).into()),
            export::sessions_csv(&data.sessions),
            Some("Session data exported to CSV"),
            "CSV exported successfully",
        ),
        ExportTarget::Dump { out } => {
            let waitlist = console.waitlist().await?;
            let logs = console.registration_logs().await?;
            (
                out.unwrap_or_else(|| export::export_file_name("data", "json", today).into()),
                export::full_state_json(
                    &data.participants,
                    &waitlist,
                    &data.matches,
                    &data.sessions,
                    &logs,
                )?,
                None,
                "Data exported to JSON file",
            )
        }
    };

    fs::write(&path, &contents)
        .with_context(|| format!("cannot write export to {}", path.display()))?;
    if let Some(message) = logged {
        console.log_action(message).await?;
    }

    notice::success(done);
    println!("  {}", path.display());
    Ok(())
}
