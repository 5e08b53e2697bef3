use anyhow::Result;
use chrono::Duration;
use pairlab_application::AdminConsole;

/// Prints the week grid, one line per event, empty days marked with `-`.
pub async fn run(console: &AdminConsole, week_offset: i64) -> Result<()> {
    let week = console.calendar_view(week_offset).await;
    let week_end = week.week_start + Duration::days(6);
    println!("Week of {} to {}", week.week_start, week_end);
    println!();

    for day in &week.days {
        let day_label = format!("{} {}", day.date.format("%a"), day.date);
        if day.events.is_empty() {
            println!("{:<15} -", day_label);
            continue;
        }
        for (index, event) in day.events.iter().enumerate() {
            let prefix = if index == 0 { day_label.as_str() } else { "" };
            println!(
                "{:<15} {:02}:00  {}  [{}]",
                prefix,
                event.time_slot.start_hour(),
                event.label,
                event.status
            );
        }
    }
    Ok(())
}
