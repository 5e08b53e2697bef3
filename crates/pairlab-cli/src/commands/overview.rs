use anyhow::Result;
use pairlab_application::AdminConsole;

use super::utils::short_time;

pub async fn stats(console: &AdminConsole) -> Result<()> {
    let stats = console.stats().await?;
    println!("PairLab dashboard");
    println!("{}", "━".repeat(40));
    println!("Participants:    {}", stats.total_participants);
    println!("Waitlist:        {}", stats.total_waitlist);
    println!("Matches made:    {}", stats.matches_made);
    println!("Completed:       {}", stats.completed_matches);
    println!("Active sessions: {}", stats.active_sessions);
    println!("Avg match count: {:.1}", stats.avg_match_count);
    Ok(())
}

pub async fn log(console: &AdminConsole) -> Result<()> {
    let entries = console.recent_actions().await;
    if entries.is_empty() {
        println!("No actions logged.");
        return Ok(());
    }
    for entry in &entries {
        println!("[{}] {}", short_time(&entry.created_at), entry.message);
    }
    Ok(())
}
