use chrono::{DateTime, Local};
use pairlab_core::timeslot::TimeSlot;

/// Local clock time of an RFC3339 timestamp, or the raw string when it
/// does not parse.
pub fn short_time(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Slot codes joined for a table cell.
pub fn slot_codes(slots: &[TimeSlot]) -> String {
    slots
        .iter()
        .map(|slot| slot.code())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_time_falls_back_on_garbage() {
        assert_eq!(short_time("not a timestamp"), "not a timestamp");
    }

    #[test]
    fn test_slot_codes_joined_in_order() {
        let slots = vec![TimeSlot::Mon19, TimeSlot::Sat15];
        assert_eq!(slot_codes(&slots), "mon-19 sat-15");
    }
}
