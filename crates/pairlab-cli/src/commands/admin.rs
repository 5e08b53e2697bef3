use anyhow::Result;
use pairlab_application::AdminConsole;
use std::io::{self, Write};

use super::utils::slot_codes;
use crate::notice;

pub async fn seed(console: &AdminConsole, with_sessions: bool) -> Result<()> {
    let seeded = console.seed_demo_data(with_sessions).await?;
    notice::success(&format!("Demo data seeded: {} participants", seeded.len()));
    for participant in &seeded {
        println!("  {}  {}", participant.email, slot_codes(&participant.times));
    }
    if with_sessions {
        println!("  plus one active match with a live and a finished session");
    }
    Ok(())
}

pub async fn reset(console: &AdminConsole, yes: bool) -> Result<()> {
    if !yes {
        print!("Delete ALL pairlab data? [y/N] ");
        io::stdout().flush().ok();
        let mut input = String::new();
        io::stdin().read_line(&mut input).ok();
        if !matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    console.clear_all_data().await?;
    notice::success("All data cleared");
    Ok(())
}
