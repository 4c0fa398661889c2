//! Default timetable used to populate an empty schedule on first run.
//!
//! Slots are written as `"H:MM-H:MM"` without AM/PM. Each side is converted on
//! its own: hours 1 through 8 are afternoon (add 12), hours 9 through 12 are
//! taken as written. This is kept for compatibility even though a label such
//! as `"8:00-9:00"` comes out as 20:00 to 09:00, ending before it starts.

use log::warn;
use shared::{ClassEntry, DaySchedule, WeekSchedule, Weekday};
use thiserror::Error;

/// Slot label -> subject. A bare "-" marks an empty slot.
pub type TimetableDay = &'static [(&'static str, &'static str)];

/// The built-in weekly timetable, slots in declaration order
pub const DEFAULT_TIMETABLE: &[(Weekday, TimetableDay)] = &[
    (
        Weekday::Monday,
        &[
            ("9:00-10:00", "-"),
            ("10:00-11:00", "KAN (ACB)"),
            ("11:00-12:00", "ENG (VS)"),
            ("12:00-1:00", "LUNCH"),
            ("2:00-5:00", "WEB LAB"),
        ],
    ),
    (
        Weekday::Tuesday,
        &[
            ("9:00-10:00", "SE (MNM)"),
            ("10:00-11:00", "ST (SN)"),
            ("11:00-12:00", "WEB (MSM)"),
            ("12:00-1:00", "Python (AND)"),
            ("1:00-2:00", "LUNCH"),
            ("2:00-3:00", "KAN (ACB)"),
            ("3:00-4:00", "LIBRARY"),
            ("4:00-5:00", "SPORTS"),
        ],
    ),
    (
        Weekday::Wednesday,
        &[
            ("9:00-10:00", "ENG (VS)"),
            ("10:00-11:00", "SE (MNM)"),
            ("11:00-12:00", "KAN (ACB)"),
            ("12:00-1:00", "WEB (MSM)"),
            ("1:00-2:00", "LUNCH"),
            ("2:00-3:00", "Python (AND)"),
            ("3:00-5:00", "MINIPROJECT / SEMINAR"),
        ],
    ),
    (
        Weekday::Thursday,
        &[
            ("9:00-10:00", "SE (MNM)"),
            ("10:00-11:00", "WEB (MSM)"),
            ("11:00-12:00", "ST (SN)"),
            ("12:00-1:00", "Python (AND)"),
            ("1:00-2:00", "LUNCH"),
            ("2:00-3:00", "ENG (VS)"),
            ("3:00-5:00", "MENTORING"),
        ],
    ),
    (
        Weekday::Friday,
        &[
            ("9:00-5:00", "Python LAB"),
            ("1:00-2:00", "LUNCH"),
        ],
    ),
    (
        Weekday::Saturday,
        &[
            ("9:00-10:00", "KAN (ACB)"),
            ("10:00-11:00", "ENG (VS)"),
            ("11:00-12:00", "Python (AND)"),
            ("12:00-1:00", "WEB (MSM)"),
        ],
    ),
];

/// A slot label that could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotParseError {
    #[error("slot '{0}' is not of the form H:MM-H:MM")]
    MissingSeparator(String),
    #[error("'{0}' is not a valid H:MM time")]
    InvalidTime(String),
}

/// Start and end of a parsed slot, both `HH:MM`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTimes {
    pub start: String,
    pub end: String,
}

/// Read one side of a slot label, applying the afternoon rule
fn parse_slot_time(raw: &str) -> Result<String, SlotParseError> {
    let invalid = || SlotParseError::InvalidTime(raw.to_string());
    let (hour, minute) = raw.trim().split_once(':').ok_or_else(invalid)?;
    let mut hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;

    if (1..=8).contains(&hour) {
        hour += 12;
    }

    Ok(format!("{:02}:{:02}", hour, minute))
}

/// Parse a `"H:MM-H:MM"` slot label into 24-hour start and end times
pub fn parse_slot(slot: &str) -> Result<SlotTimes, SlotParseError> {
    let (start, end) = slot
        .split_once('-')
        .ok_or_else(|| SlotParseError::MissingSeparator(slot.to_string()))?;

    Ok(SlotTimes {
        start: parse_slot_time(start)?,
        end: parse_slot_time(end)?,
    })
}

/// Turn one timetable day into classes, skipping placeholders and bad slots
fn build_day(day: Weekday, slots: TimetableDay) -> DaySchedule {
    let classes = slots
        .iter()
        .filter(|(_, subject)| subject.trim() != "-")
        .filter_map(|(slot, subject)| match parse_slot(slot) {
            Ok(times) => Some(ClassEntry::new(subject.trim(), times.start, times.end)),
            Err(e) => {
                warn!("Skipping default {} slot: {}", day, e);
                None
            }
        })
        .collect();

    DaySchedule { day, classes }
}

/// Build a week from a timetable
pub fn build_week(timetable: &[(Weekday, TimetableDay)]) -> WeekSchedule {
    let records = timetable
        .iter()
        .map(|(day, slots)| build_day(*day, slots))
        .collect();
    WeekSchedule::reconcile(records)
}

/// The default week with fresh class ids
pub fn default_week() -> WeekSchedule {
    build_week(DEFAULT_TIMETABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn times(start: &str, end: &str) -> SlotTimes {
        SlotTimes {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    #[test]
    fn test_parse_slot_morning_and_afternoon() {
        assert_eq!(parse_slot("9:00-10:00").unwrap(), times("09:00", "10:00"));
        assert_eq!(parse_slot("12:00-1:00").unwrap(), times("12:00", "13:00"));
        assert_eq!(parse_slot("2:00-5:00").unwrap(), times("14:00", "17:00"));
        assert_eq!(parse_slot("9:00-5:00").unwrap(), times("09:00", "17:00"));
    }

    #[test]
    fn test_parse_slot_keeps_inverted_ranges() {
        // Each endpoint is converted independently
        assert_eq!(parse_slot("8:00-9:00").unwrap(), times("20:00", "09:00"));
    }

    #[test]
    fn test_parse_slot_rejects_garbage() {
        assert_eq!(
            parse_slot("9:00"),
            Err(SlotParseError::MissingSeparator("9:00".to_string()))
        );
        assert_eq!(
            parse_slot("nine-ten"),
            Err(SlotParseError::InvalidTime("nine".to_string()))
        );
    }

    #[test]
    fn test_default_week_contents() {
        let week = default_week();

        assert_eq!(week.days().len(), 6);

        // Monday's "-" slot is dropped
        let monday = week.day(Weekday::Monday).unwrap();
        let subjects: Vec<&str> = monday.classes.iter().map(|c| c.subject.as_str()).collect();
        assert_eq!(subjects, vec!["KAN (ACB)", "ENG (VS)", "LUNCH", "WEB LAB"]);
        assert_eq!(monday.classes[3].start_time, "14:00");
        assert_eq!(monday.classes[3].end_time, "17:00");
        assert!(monday.classes.iter().all(|c| c.location.is_none()));

        assert_eq!(week.day(Weekday::Tuesday).unwrap().classes.len(), 8);
        assert_eq!(week.day(Weekday::Wednesday).unwrap().classes.len(), 7);
        assert_eq!(week.day(Weekday::Thursday).unwrap().classes.len(), 7);
        assert_eq!(week.day(Weekday::Saturday).unwrap().classes.len(), 4);

        // Friday keeps declaration order, not time order
        let friday = week.day(Weekday::Friday).unwrap();
        assert_eq!(friday.classes[0].subject, "Python LAB");
        assert_eq!(friday.classes[1].subject, "LUNCH");
        assert_eq!(friday.classes[1].start_time, "13:00");
    }

    #[test]
    fn test_bad_slots_are_skipped() {
        const BROKEN: &[(Weekday, TimetableDay)] =
            &[(Weekday::Monday, &[("whenever", "Art"), ("10:00-11:00", "  Music  ")])];

        let week = build_week(BROKEN);
        let monday = week.day(Weekday::Monday).unwrap();

        assert_eq!(monday.classes.len(), 1);
        assert_eq!(monday.classes[0].subject, "Music");
        assert!(week.day(Weekday::Tuesday).unwrap().classes.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let week = default_week();
        let mut ids: Vec<&str> = week
            .days()
            .iter()
            .flat_map(|d| d.classes.iter().map(|c| c.id.as_str()))
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
