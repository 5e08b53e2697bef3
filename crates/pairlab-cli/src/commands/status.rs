use anyhow::Result;
use clap::Subcommand;
use pairlab_application::AdminConsole;
use pairlab_core::matching::MatchStatus;

use crate::notice;

#[derive(Subcommand)]
pub enum MatchAction {
    /// Move a match to a new lifecycle status
    SetStatus {
        /// Match ID as shown by the calendar and the exports
        match_id: String,
        /// One of scheduled, active, completed, cancelled
        status: MatchStatus,
    },
}

pub async fn set_status(
    console: &AdminConsole,
    match_id: &str,
    status: MatchStatus,
) -> Result<()> {
    let record = console.set_match_status(match_id, status).await?;
    notice::success(&format!(
        "Match status updated: {} → {}",
        record.id, record.status
    ));
    Ok(())
}
