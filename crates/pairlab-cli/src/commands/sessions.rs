use anyhow::Result;
use pairlab_application::AdminConsole;
use pairlab_core::session::SessionRecord;

use super::utils::short_time;

pub async fn run(console: &AdminConsole) -> Result<()> {
    let board = console.sessions_board().await;

    println!("Active sessions ({})", board.active.len());
    if board.active.is_empty() {
        println!("  none");
    }
    for session in &board.active {
        println!(
            "  {}  started {}  {:>3} msgs  depth {}  ai {}",
            session.id,
            short_time(&session.started_at),
            session.message_count,
            depth_label(session),
            session.ai_interventions
        );
    }

    println!();
    println!("Recently completed ({})", board.recent.len());
    if board.recent.is_empty() {
        println!("  none");
    }
    for session in &board.recent {
        println!(
            "  {}  {}  {:>3} msgs  depth {}",
            session.id,
            session.duration_label().unwrap_or_else(|| "-".to_string()),
            session.message_count,
            depth_label(session)
        );
    }
    Ok(())
}

fn depth_label(session: &SessionRecord) -> String {
    match (session.depth_score, session.depth_band()) {
        (Some(score), Some(band)) => format!("{} ({})", score, band.label()),
        _ => "-".to_string(),
    }
}
