use anyhow::Result;
use pairlab_application::AdminConsole;
use pairlab_core::matching::{BatchPolicy, MatchRecord};
use pairlab_core::timeslot::TimeSlot;

use crate::notice;

pub async fn pair(console: &AdminConsole) -> Result<()> {
    match console.create_pair().await {
        Ok(record) => announce(&record),
        Err(err) if err.is_warning() => notice::warning(&err.to_string()),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

pub async fn auto(console: &AdminConsole) -> Result<()> {
    match console.auto_match().await {
        Ok(record) => announce(&record),
        Err(err) if err.is_warning() => notice::warning(&err.to_string()),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

pub async fn batch(
    console: &AdminConsole,
    policy: BatchPolicy,
    slot: Option<TimeSlot>,
    execute: bool,
) -> Result<()> {
    if !execute {
        let proposals = console.preview_batch(slot, policy).await;
        if proposals.is_empty() {
            notice::warning("No matches to create");
            return Ok(());
        }

        println!("{} proposed pair(s) [{}]:", proposals.len(), policy);
        for proposal in &proposals {
            println!(
                "  {} ↔ {}  {}",
                proposal.email_a,
                proposal.email_b,
                proposal.time_slot.label()
            );
        }
        println!("\nRun again with --execute to commit.");
        return Ok(());
    }

    match console.execute_batch(slot, policy).await {
        Ok(records) => {
            notice::success(&format!("Created {} matches successfully", records.len()));
            for record in &records {
                println!(
                    "  {} ↔ {}  {}",
                    record.email_a,
                    record.email_b,
                    record.time_slot.label()
                );
            }
        }
        Err(err) if err.is_warning() => notice::warning(&err.to_string()),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn announce(record: &MatchRecord) {
    notice::success(&format!(
        "Connection created between {} and {}",
        record.email_a, record.email_b
    ));
    println!(
        "  {}  {}  scheduled {}",
        record.id,
        record.time_slot.label(),
        record.scheduled_date
    );
}
