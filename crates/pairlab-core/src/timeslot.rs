//! Weekly time slot vocabulary.
//!
//! The service offers a fixed menu of eight recurring one-hour windows.
//! Participants pick any subset of them; pairing only ever happens inside
//! one shared slot. The wire codes (`"mon-19"`, `"sat-15"`, ...) are the
//! stable identifiers used in stored records, exports and CLI flags, so
//! the enum is closed: unknown codes are rejected at parse time.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One recurring weekly availability window.
///
/// Declaration order is chronological (Monday through Sunday), which `Ord`
/// relies on for sorting slot lists for display.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum TimeSlot {
    #[serde(rename = "mon-19")]
    #[strum(serialize = "mon-19")]
    Mon19,
    #[serde(rename = "tue-20")]
    #[strum(serialize = "tue-20")]
    Tue20,
    #[serde(rename = "wed-19")]
    #[strum(serialize = "wed-19")]
    Wed19,
    #[serde(rename = "thu-20")]
    #[strum(serialize = "thu-20")]
    Thu20,
    #[serde(rename = "fri-19")]
    #[strum(serialize = "fri-19")]
    Fri19,
    #[serde(rename = "sat-15")]
    #[strum(serialize = "sat-15")]
    Sat15,
    #[serde(rename = "sat-20")]
    #[strum(serialize = "sat-20")]
    Sat20,
    #[serde(rename = "sun-15")]
    #[strum(serialize = "sun-15")]
    Sun15,
}

impl TimeSlot {
    /// The stable wire code, e.g. `"mon-19"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Mon19 => "mon-19",
            Self::Tue20 => "tue-20",
            Self::Wed19 => "wed-19",
            Self::Thu20 => "thu-20",
            Self::Fri19 => "fri-19",
            Self::Sat15 => "sat-15",
            Self::Sat20 => "sat-20",
            Self::Sun15 => "sun-15",
        }
    }

    /// Short display label, e.g. `"Mon 7-8 PM"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mon19 => "Mon 7-8 PM",
            Self::Tue20 => "Tue 8-9 PM",
            Self::Wed19 => "Wed 7-8 PM",
            Self::Thu20 => "Thu 8-9 PM",
            Self::Fri19 => "Fri 7-8 PM",
            Self::Sat15 => "Sat 3-4 PM",
            Self::Sat20 => "Sat 8-9 PM",
            Self::Sun15 => "Sun 3-4 PM",
        }
    }

    /// Full weekday name, e.g. `"Monday"`.
    pub fn day_name(&self) -> &'static str {
        match self.weekday() {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    /// The weekday this slot recurs on.
    pub fn weekday(&self) -> Weekday {
        match self {
            Self::Mon19 => Weekday::Mon,
            Self::Tue20 => Weekday::Tue,
            Self::Wed19 => Weekday::Wed,
            Self::Thu20 => Weekday::Thu,
            Self::Fri19 => Weekday::Fri,
            Self::Sat15 | Self::Sat20 => Weekday::Sat,
            Self::Sun15 => Weekday::Sun,
        }
    }

    /// Starting hour of the window, 24h clock.
    pub fn start_hour(&self) -> u32 {
        match self {
            Self::Mon19 | Self::Wed19 | Self::Fri19 => 19,
            Self::Tue20 | Self::Thu20 | Self::Sat20 => 20,
            Self::Sat15 | Self::Sun15 => 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_wire_codes_round_trip() {
        for slot in TimeSlot::iter() {
            let json = serde_json::to_string(&slot).unwrap();
            assert_eq!(json, format!("\"{}\"", slot.code()));
            let back: TimeSlot = serde_json::from_str(&json).unwrap();
            assert_eq!(back, slot);
        }
    }

    #[test]
    fn test_from_str_parses_codes() {
        assert_eq!(TimeSlot::from_str("mon-19").unwrap(), TimeSlot::Mon19);
        assert_eq!(TimeSlot::from_str("sat-15").unwrap(), TimeSlot::Sat15);
        assert!(TimeSlot::from_str("mon-21").is_err());
        assert!(TimeSlot::from_str("").is_err());
    }

    #[test]
    fn test_display_matches_code() {
        for slot in TimeSlot::iter() {
            assert_eq!(slot.to_string(), slot.code());
        }
    }

    #[test]
    fn test_chronological_order() {
        let mut slots = vec![TimeSlot::Sun15, TimeSlot::Mon19, TimeSlot::Sat15];
        slots.sort();
        assert_eq!(
            slots,
            vec![TimeSlot::Mon19, TimeSlot::Sat15, TimeSlot::Sun15]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(TimeSlot::Mon19.label(), "Mon 7-8 PM");
        assert_eq!(TimeSlot::Sun15.label(), "Sun 3-4 PM");
        assert_eq!(TimeSlot::Sat20.day_name(), "Saturday");
        assert_eq!(TimeSlot::Sat20.start_hour(), 20);
    }

    #[test]
    fn test_eight_slots_total() {
        assert_eq!(TimeSlot::iter().count(), 8);
    }
}
