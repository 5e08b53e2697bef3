use anyhow::Result;
use clap::Subcommand;
use pairlab_application::AdminConsole;
use pairlab_core::matching::{MAX_SELECTED, SelectionChange};

use super::utils::slot_codes;
use crate::notice;

#[derive(Subcommand)]
pub enum SelectionAction {
    /// Empty the selection
    Clear,
}

pub async fn toggle(console: &AdminConsole, participant_id: &str) -> Result<()> {
    let data = console.dashboard().await;
    let label = data
        .participants
        .iter()
        .find(|p| p.id == participant_id)
        .map(|p| p.email.as_str())
        .unwrap_or(participant_id);

    match console.toggle_selection(participant_id).await {
        Ok(SelectionChange::Added) => notice::success(&format!("Selected {label}")),
        Ok(SelectionChange::Removed) => notice::success(&format!("Deselected {label}")),
        Err(err) if err.is_warning() => {
            notice::warning(&err.to_string());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    let selected = console.selection_ids().await.len();
    println!("Selection: {selected}/{MAX_SELECTED}");
    Ok(())
}

pub async fn show(console: &AdminConsole) -> Result<()> {
    let selected = console.selected_participants().await;
    if selected.is_empty() {
        println!("Selection is empty.");
        return Ok(());
    }

    println!("Selected participants ({}/{}):", selected.len(), MAX_SELECTED);
    for participant in &selected {
        println!(
            "  {}  {}  {}",
            participant.id,
            participant.email,
            slot_codes(&participant.times)
        );
    }
    Ok(())
}

pub async fn clear(console: &AdminConsole) -> Result<()> {
    console.clear_selection().await?;
    notice::success("Selection cleared");
    Ok(())
}
