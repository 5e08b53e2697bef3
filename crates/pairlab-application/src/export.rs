//! CSV and JSON snapshot exports.
//!
//! Every CSV field is quoted, with embedded quotes doubled, headers
//! included, lines joined with `\n` and no trailing newline. The JSON dump
//! is the whole service state in one pretty-printed document.

use chrono::NaiveDate;
use pairlab_core::Result;
use pairlab_core::matching::MatchRecord;
use pairlab_core::participant::Participant;
use pairlab_core::registration::RegistrationLogEntry;
use pairlab_core::session::SessionRecord;
use pairlab_core::waitlist::WaitlistEntry;

const USERS_HEADER: [&str; 7] = [
    "ID",
    "Email",
    "Name",
    "Available Times",
    "Match Count",
    "Created At",
    "Last Active",
];

const MATCHES_HEADER: [&str; 7] = [
    "ID",
    "Participant A",
    "Participant B",
    "Time Slot",
    "Scheduled Date",
    "Status",
    "Created At",
];

const SESSIONS_HEADER: [&str; 8] = [
    "ID",
    "Match ID",
    "Status",
    "Started At",
    "Ended At",
    "Messages",
    "Depth Score",
    "AI Interventions",
];

/// The participant collection as CSV, time slots joined with `;`.
pub fn users_csv(participants: &[Participant]) -> String {
    let mut lines = vec![header_line(&USERS_HEADER)];
    for p in participants {
        let times: Vec<&str> = p.times.iter().map(|slot| slot.code()).collect();
        lines.push(csv_line(&[
            p.id.clone(),
            p.email.clone(),
            p.name.clone().unwrap_or_default(),
            times.join(";"),
            p.match_count.to_string(),
            p.created_at.clone(),
            p.last_active.clone().unwrap_or_default(),
        ]));
    }
    lines.join("\n")
}

/// The match collection as CSV, participants identified by email.
pub fn matches_csv(matches: &[MatchRecord]) -> String {
    let mut lines = vec![header_line(&MATCHES_HEADER)];
    for m in matches {
        lines.push(csv_line(&[
            m.id.clone(),
            m.email_a.clone(),
            m.email_b.clone(),
            m.time_slot.code().to_string(),
            m.scheduled_date.clone(),
            m.status.to_string(),
            m.created_at.clone(),
        ]));
    }
    lines.join("\n")
}

/// The session collection as CSV; absent end times and depth scores stay
/// empty.
pub fn sessions_csv(sessions: &[SessionRecord]) -> String {
    let mut lines = vec![header_line(&SESSIONS_HEADER)];
    for s in sessions {
        lines.push(csv_line(&[
            s.id.clone(),
            s.match_id.clone(),
            s.status.to_string(),
            s.started_at.clone(),
            s.ended_at.clone().unwrap_or_default(),
            s.message_count.to_string(),
            s.depth_score.map(|d| d.to_string()).unwrap_or_default(),
            s.ai_interventions.to_string(),
        ]));
    }
    lines.join("\n")
}

/// Every collection in one pretty-printed JSON document.
pub fn full_state_json(
    users: &[Participant],
    waitlist: &[WaitlistEntry],
    matches: &[MatchRecord],
    sessions: &[SessionRecord],
    logs: &[RegistrationLogEntry],
) -> Result<String> {
    let dump = serde_json::json!({
        "users": users,
        "waitlist": waitlist,
        "matches": matches,
        "sessions": sessions,
        "logs": logs,
    });
    Ok(serde_json::to_string_pretty(&dump)?)
}

/// Dated snapshot file name, e.g. `pairlab-users-2026-08-25.csv`.
pub fn export_file_name(kind: &str, extension: &str, date: NaiveDate) -> String {
    format!("pairlab-{}-{}.{}", kind, date.format("%Y-%m-%d"), extension)
}

fn header_line(header: &[&str]) -> String {
    let fields: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    csv_line(&fields)
}

fn csv_line(fields: &[String]) -> String {
    let quoted: Vec<String> = fields.iter().map(|f| csv_escape(f)).collect();
    quoted.join(",")
}

fn csv_escape(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairlab_core::matching::{MatchStatus, propose_pair};
    use pairlab_core::session::SessionStatus;
    use pairlab_core::timeslot::TimeSlot;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_users_csv_header_and_quoting() {
        let mut p = Participant::new("a@example.com", vec![TimeSlot::Mon19, TimeSlot::Sat15])
            .with_name("Anna \"Ace\" Lee");
        p.created_at = "2026-03-01T10:00:00+00:00".to_string();
        p.match_count = 3;

        let csv = users_csv(&[p.clone()]);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "\"ID\",\"Email\",\"Name\",\"Available Times\",\"Match Count\",\"Created At\",\"Last Active\""
        );
        assert_eq!(
            lines[1],
            format!(
                "\"{}\",\"a@example.com\",\"Anna \"\"Ace\"\" Lee\",\"mon-19;sat-15\",\"3\",\"2026-03-01T10:00:00+00:00\",\"\"",
                p.id
            )
        );
    }

    #[test]
    fn test_users_csv_without_name_or_last_active() {
        let p = Participant::new("a@example.com", vec![]);
        let csv = users_csv(&[p]);
        let row = csv.split('\n').nth(1).unwrap();
        // Name, times and last-active columns are present but empty.
        assert!(row.contains(",\"\",\"\","));
        assert!(row.ends_with(",\"\""));
    }

    #[test]
    fn test_matches_csv_row() {
        let a = Participant::new("a@example.com", vec![TimeSlot::Wed19]);
        let b = Participant::new("b@example.com", vec![TimeSlot::Wed19]);
        let proposal = propose_pair(&a, &b).unwrap();
        let mut record = MatchRecord::from_proposal(&proposal, date(2026, 3, 4));
        record.status = MatchStatus::Active;

        let csv = matches_csv(&[record.clone()]);
        let row = csv.split('\n').nth(1).unwrap();
        assert_eq!(
            row,
            format!(
                "\"{}\",\"a@example.com\",\"b@example.com\",\"wed-19\",\"2026-03-04\",\"active\",\"{}\"",
                record.id, record.created_at
            )
        );
    }

    #[test]
    fn test_sessions_csv_optional_fields() {
        let mut open = SessionRecord::new("match_1");
        open.started_at = "2026-03-04T19:00:00+00:00".to_string();
        open.message_count = 5;

        let mut closed = SessionRecord::new("match_2");
        closed.status = SessionStatus::Completed;
        closed.started_at = "2026-03-04T19:00:00+00:00".to_string();
        closed.ended_at = Some("2026-03-04T20:00:00+00:00".to_string());
        closed.message_count = 40;
        closed.depth_score = Some(8);
        closed.ai_interventions = 2;

        let csv = sessions_csv(&[open.clone(), closed.clone()]);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(
            lines[1],
            format!(
                "\"{}\",\"match_1\",\"active\",\"2026-03-04T19:00:00+00:00\",\"\",\"5\",\"\",\"0\"",
                open.id
            )
        );
        assert_eq!(
            lines[2],
            format!(
                "\"{}\",\"match_2\",\"completed\",\"2026-03-04T19:00:00+00:00\",\"2026-03-04T20:00:00+00:00\",\"40\",\"8\",\"2\"",
                closed.id
            )
        );
    }

    #[test]
    fn test_full_state_json_round_trips() {
        let users = vec![Participant::new("a@example.com", vec![TimeSlot::Mon19])];
        let waitlist = vec![WaitlistEntry {
            email: "queued@example.com".to_string(),
            joined_at: "2026-02-01T10:00:00+00:00".to_string(),
        }];
        let json = full_state_json(&users, &waitlist, &[], &[], &[]).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["users"][0]["email"], "a@example.com");
        assert_eq!(value["waitlist"][0]["email"], "queued@example.com");
        assert!(value["matches"].as_array().unwrap().is_empty());
        assert!(value["sessions"].as_array().unwrap().is_empty());
        assert!(value["logs"].as_array().unwrap().is_empty());
        // Pretty printing, not a single line.
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_export_file_name_carries_the_day() {
        assert_eq!(
            export_file_name("users", "csv", date(2026, 8, 25)),
            "pairlab-users-2026-08-25.csv"
        );
        assert_eq!(
            export_file_name("data", "json", date(2026, 1, 2)),
            "pairlab-data-2026-01-02.json"
        );
    }
}
