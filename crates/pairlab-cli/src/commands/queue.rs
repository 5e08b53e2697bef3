use anyhow::Result;
use pairlab_application::AdminConsole;
use pairlab_core::timeslot::TimeSlot;

use super::utils::slot_codes;

/// Prints the queue table; selected participants carry a `*` marker.
pub async fn run(
    console: &AdminConsole,
    search: Option<&str>,
    slot: Option<TimeSlot>,
) -> Result<()> {
    let rows = console.queue_view(search, slot).await;
    if rows.is_empty() {
        println!("No participants in the queue.");
        return Ok(());
    }

    println!(
        "{:<2} {:<38} {:<34} {:<24} {:>7}",
        "", "ID", "PARTICIPANT", "AVAILABLE", "MATCHES"
    );
    println!("{}", "-".repeat(108));
    for row in &rows {
        let participant = &row.participant;
        let marker = if row.selected { "*" } else { "" };
        let who = match &participant.name {
            Some(name) => format!("{} ({})", participant.email, name),
            None => participant.email.clone(),
        };
        println!(
            "{:<2} {:<38} {:<34} {:<24} {:>7}",
            marker,
            participant.id,
            who,
            slot_codes(&participant.times),
            participant.match_count
        );
    }
    println!("\n{} participant(s)", rows.len());
    Ok(())
}
