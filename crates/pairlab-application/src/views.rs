//! Read-only projections of the cached collections.
//!
//! Pure functions from collection slices to display structures. Rendering
//! (colors, layout, truncation) stays with the caller.

use chrono::{Datelike, Duration, NaiveDate};
use pairlab_core::matching::{MatchRecord, MatchStatus, Selection};
use pairlab_core::participant::Participant;
use pairlab_core::session::{SessionRecord, SessionStatus};
use pairlab_core::timeslot::TimeSlot;

/// How many completed sessions the board keeps visible.
pub const RECENT_SESSIONS_LIMIT: usize = 10;

/// One queue row: a participant plus their selection flag.
#[derive(Debug, Clone)]
pub struct QueueEntry {
    pub participant: Participant,
    pub selected: bool,
}

/// Applies the queue search and slot filters.
///
/// `search` is a case-insensitive substring match over email and name; an
/// empty or absent search keeps everyone. `slot_filter` keeps participants
/// listing that slot. Input order is preserved.
pub fn queue(
    participants: &[Participant],
    selection: &Selection,
    search: Option<&str>,
    slot_filter: Option<TimeSlot>,
) -> Vec<QueueEntry> {
    participants
        .iter()
        .filter(|p| search.is_none_or(|query| p.matches_query(query)))
        .filter(|p| slot_filter.is_none_or(|slot| p.is_available_at(slot)))
        .map(|p| QueueEntry {
            participant: p.clone(),
            selected: selection.contains(&p.id),
        })
        .collect()
}

/// One match placed on the calendar.
#[derive(Debug, Clone)]
pub struct CalendarEvent {
    pub match_id: String,
    /// Both emails, ready for a cell label
    pub label: String,
    pub time_slot: TimeSlot,
    pub status: MatchStatus,
}

/// One day column of the week grid.
#[derive(Debug, Clone)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub events: Vec<CalendarEvent>,
}

/// A Monday-anchored week of scheduled matches.
#[derive(Debug, Clone)]
pub struct CalendarWeek {
    pub week_start: NaiveDate,
    /// Exactly 7 days, Monday through Sunday
    pub days: Vec<CalendarDay>,
}

/// Monday of the week containing `today`, shifted by `week_offset` weeks.
pub fn week_start_for(today: NaiveDate, week_offset: i64) -> NaiveDate {
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    monday + Duration::weeks(week_offset)
}

/// Projects the matches onto one calendar week.
///
/// A match occupies a single cell: the first date on or after its
/// scheduled date that falls on its slot's weekday. Matches whose
/// occurrence lies outside the week, and matches with an unparseable
/// scheduled date, are left out. Events within a day are ordered by start
/// hour.
pub fn calendar_week(
    matches: &[MatchRecord],
    today: NaiveDate,
    week_offset: i64,
) -> CalendarWeek {
    let week_start = week_start_for(today, week_offset);
    let mut days: Vec<CalendarDay> = (0..7)
        .map(|offset| CalendarDay {
            date: week_start + Duration::days(offset),
            events: Vec::new(),
        })
        .collect();

    for record in matches {
        let Some(date) = first_occurrence(record) else {
            continue;
        };
        let offset = (date - week_start).num_days();
        if (0..7).contains(&offset) {
            days[offset as usize].events.push(CalendarEvent {
                match_id: record.id.clone(),
                label: format!("{} ↔ {}", record.email_a, record.email_b),
                time_slot: record.time_slot,
                status: record.status,
            });
        }
    }

    for day in &mut days {
        day.events.sort_by_key(|event| event.time_slot.start_hour());
    }

    CalendarWeek { week_start, days }
}

/// The first date on or after the scheduled date that falls on the slot's
/// weekday.
fn first_occurrence(record: &MatchRecord) -> Option<NaiveDate> {
    let scheduled = record.scheduled_on()?;
    let scheduled_day = i64::from(scheduled.weekday().num_days_from_monday());
    let slot_day = i64::from(record.time_slot.weekday().num_days_from_monday());
    let ahead = (slot_day - scheduled_day).rem_euclid(7);
    Some(scheduled + Duration::days(ahead))
}

/// Live and recently completed sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionsBoard {
    /// Sessions running right now, in stored order
    pub active: Vec<SessionRecord>,
    /// Up to [`RECENT_SESSIONS_LIMIT`] completed sessions, most recently
    /// ended first
    pub recent: Vec<SessionRecord>,
}

/// Splits the session collection for the live board.
pub fn sessions_board(sessions: &[SessionRecord]) -> SessionsBoard {
    let active: Vec<SessionRecord> = sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Active)
        .cloned()
        .collect();

    let mut recent: Vec<SessionRecord> = sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Completed)
        .cloned()
        .collect();
    recent.sort_by(|a, b| b.ended_at.cmp(&a.ended_at));
    recent.truncate(RECENT_SESSIONS_LIMIT);

    SessionsBoard { active, recent }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use pairlab_core::matching::propose_pair;

    fn member(email: &str, times: Vec<TimeSlot>) -> Participant {
        Participant::new(email, times)
    }

    fn match_on(
        email_a: &str,
        email_b: &str,
        slot: TimeSlot,
        scheduled: NaiveDate,
    ) -> MatchRecord {
        let a = member(email_a, vec![slot]);
        let b = member(email_b, vec![slot]);
        let proposal = propose_pair(&a, &b).unwrap();
        MatchRecord::from_proposal(&proposal, scheduled)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_queue_search_is_case_insensitive() {
        let pool = vec![
            member("anna@example.com", vec![TimeSlot::Mon19]),
            member("ben@example.com", vec![TimeSlot::Mon19]),
        ];
        let selection = Selection::new();
        let rows = queue(&pool, &selection, Some("ANNA"), None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].participant.email, "anna@example.com");
        assert_eq!(queue(&pool, &selection, Some(""), None).len(), 2);
    }

    #[test]
    fn test_queue_slot_filter_and_selection_flags() {
        let pool = vec![
            member("anna@example.com", vec![TimeSlot::Mon19, TimeSlot::Sat15]),
            member("ben@example.com", vec![TimeSlot::Sat15]),
        ];
        let mut selection = Selection::new();
        selection.toggle(&pool[1].id).unwrap();

        let rows = queue(&pool, &selection, None, Some(TimeSlot::Sat15));
        assert_eq!(rows.len(), 2);
        assert!(!rows[0].selected);
        assert!(rows[1].selected);

        let rows = queue(&pool, &selection, None, Some(TimeSlot::Mon19));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].participant.email, "anna@example.com");
    }

    #[test]
    fn test_week_start_anchors_on_monday() {
        // 2026-03-04 is a Wednesday.
        let wednesday = date(2026, 3, 4);
        assert_eq!(wednesday.weekday(), Weekday::Wed);
        assert_eq!(week_start_for(wednesday, 0), date(2026, 3, 2));
        assert_eq!(week_start_for(wednesday, -1), date(2026, 2, 23));
        assert_eq!(week_start_for(wednesday, 1), date(2026, 3, 9));
        // A Monday is its own week start.
        assert_eq!(week_start_for(date(2026, 3, 2), 0), date(2026, 3, 2));
    }

    #[test]
    fn test_calendar_places_match_on_slot_weekday() {
        // Scheduled Wednesday for a Wednesday slot: lands the same day.
        let record = match_on(
            "a@example.com",
            "b@example.com",
            TimeSlot::Wed19,
            date(2026, 3, 4),
        );
        let week = calendar_week(&[record.clone()], date(2026, 3, 4), 0);
        assert_eq!(week.week_start, date(2026, 3, 2));
        assert_eq!(week.days.len(), 7);
        assert_eq!(week.days[2].date, date(2026, 3, 4));
        assert_eq!(week.days[2].events.len(), 1);
        assert_eq!(week.days[2].events[0].match_id, record.id);
        assert_eq!(
            week.days[2].events[0].label,
            "a@example.com ↔ b@example.com"
        );
        assert!(week.days.iter().enumerate().all(|(i, d)| i == 2 || d.events.is_empty()));
    }

    #[test]
    fn test_calendar_rolls_past_weekdays_into_next_week() {
        // Scheduled Wednesday for a Monday slot: first occurrence is the
        // following Monday, so the current week shows nothing.
        let record = match_on(
            "a@example.com",
            "b@example.com",
            TimeSlot::Mon19,
            date(2026, 3, 4),
        );
        let current = calendar_week(&[record.clone()], date(2026, 3, 4), 0);
        assert!(current.days.iter().all(|d| d.events.is_empty()));

        let next = calendar_week(&[record], date(2026, 3, 4), 1);
        assert_eq!(next.days[0].date, date(2026, 3, 9));
        assert_eq!(next.days[0].events.len(), 1);
    }

    #[test]
    fn test_calendar_orders_same_day_events_by_hour() {
        let evening = match_on(
            "a@example.com",
            "b@example.com",
            TimeSlot::Sat20,
            date(2026, 3, 2),
        );
        let afternoon = match_on(
            "c@example.com",
            "d@example.com",
            TimeSlot::Sat15,
            date(2026, 3, 2),
        );
        let week = calendar_week(&[evening, afternoon], date(2026, 3, 2), 0);
        let saturday = &week.days[5];
        assert_eq!(saturday.events.len(), 2);
        assert_eq!(saturday.events[0].time_slot, TimeSlot::Sat15);
        assert_eq!(saturday.events[1].time_slot, TimeSlot::Sat20);
    }

    #[test]
    fn test_calendar_skips_unparseable_dates() {
        let mut record = match_on(
            "a@example.com",
            "b@example.com",
            TimeSlot::Wed19,
            date(2026, 3, 4),
        );
        record.scheduled_date = "someday".to_string();
        let week = calendar_week(&[record], date(2026, 3, 4), 0);
        assert!(week.days.iter().all(|d| d.events.is_empty()));
    }

    #[test]
    fn test_sessions_board_split_and_order() {
        let mut live = SessionRecord::new("match_1");
        live.status = SessionStatus::Active;

        let mut older = SessionRecord::new("match_2");
        older.status = SessionStatus::Completed;
        older.ended_at = Some("2026-03-01T10:00:00+00:00".to_string());

        let mut newer = SessionRecord::new("match_3");
        newer.status = SessionStatus::Completed;
        newer.ended_at = Some("2026-03-02T10:00:00+00:00".to_string());

        let board = sessions_board(&[older.clone(), live.clone(), newer.clone()]);
        assert_eq!(board.active.len(), 1);
        assert_eq!(board.active[0].id, live.id);
        assert_eq!(board.recent.len(), 2);
        assert_eq!(board.recent[0].id, newer.id);
        assert_eq!(board.recent[1].id, older.id);
    }

    #[test]
    fn test_sessions_board_caps_recent_list() {
        let mut sessions = Vec::new();
        for day in 1..=12 {
            let mut s = SessionRecord::new(format!("match_{}", day));
            s.status = SessionStatus::Completed;
            s.ended_at = Some(format!("2026-03-{:02}T10:00:00+00:00", day));
            sessions.push(s);
        }
        let board = sessions_board(&sessions);
        assert_eq!(board.recent.len(), RECENT_SESSIONS_LIMIT);
        assert_eq!(board.recent[0].ended_at.as_deref(), Some("2026-03-12T10:00:00+00:00"));
        assert_eq!(board.recent[9].ended_at.as_deref(), Some("2026-03-03T10:00:00+00:00"));
    }
}
