use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the week.
///
/// All seven days exist so the current date always maps to a value, but only
/// Monday through Saturday own a bucket in the stored schedule. Use
/// [`Weekday::has_schedule`] instead of comparing against Sunday directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// The six days that own a bucket, in canonical order
    pub const SCHEDULE_DAYS: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Whether this day has an editable bucket in the week schedule
    pub fn has_schedule(self) -> bool {
        !matches!(self, Weekday::Sunday)
    }

    /// The following day, wrapping Sunday back to Monday
    pub fn succ(self) -> Weekday {
        match self {
            Weekday::Monday => Weekday::Tuesday,
            Weekday::Tuesday => Weekday::Wednesday,
            Weekday::Wednesday => Weekday::Thursday,
            Weekday::Thursday => Weekday::Friday,
            Weekday::Friday => Weekday::Saturday,
            Weekday::Saturday => Weekday::Sunday,
            Weekday::Sunday => Weekday::Monday,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not a day name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWeekday(pub String);

impl fmt::Display for UnknownWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown weekday: {}", self.0)
    }
}

impl std::error::Error for UnknownWeekday {}

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monday" => Ok(Weekday::Monday),
            "Tuesday" => Ok(Weekday::Tuesday),
            "Wednesday" => Ok(Weekday::Wednesday),
            "Thursday" => Ok(Weekday::Thursday),
            "Friday" => Ok(Weekday::Friday),
            "Saturday" => Ok(Weekday::Saturday),
            "Sunday" => Ok(Weekday::Sunday),
            other => Err(UnknownWeekday(other.to_string())),
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// One scheduled class occurrence.
///
/// Times are 24-hour `HH:mm` strings. They are not validated, and nothing
/// requires `start_time` to come before `end_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    /// Opaque identifier, generated once and never reused
    pub id: String,
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ClassEntry {
    /// Generate a fresh class identifier
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    /// Create a class with a fresh id and no location
    pub fn new(subject: impl Into<String>, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            id: Self::generate_id(),
            subject: subject.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            location: None,
        }
    }

    /// The placeholder row added by the setup editor: 09:00 to 10:00, blank subject
    pub fn blank() -> Self {
        Self {
            id: Self::generate_id(),
            subject: String::new(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            location: Some(String::new()),
        }
    }

    /// True when the subject is empty or only whitespace
    pub fn has_blank_subject(&self) -> bool {
        self.subject.trim().is_empty()
    }

    /// Location to display, if any non-empty one is set
    pub fn display_location(&self) -> Option<&str> {
        self.location.as_deref().filter(|location| !location.is_empty())
    }
}

/// Editable fields of a [`ClassEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassField {
    Subject,
    StartTime,
    EndTime,
    Location,
}

impl ClassEntry {
    /// Overwrite a single field
    pub fn set_field(&mut self, field: ClassField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ClassField::Subject => self.subject = value,
            ClassField::StartTime => self.start_time = value,
            ClassField::EndTime => self.end_time = value,
            ClassField::Location => self.location = Some(value),
        }
    }
}

/// One weekday's classes, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: Weekday,
    pub classes: Vec<ClassEntry>,
}

impl DaySchedule {
    pub fn empty(day: Weekday) -> Self {
        Self { day, classes: Vec::new() }
    }

    /// Classes ordered by start time.
    ///
    /// Plain string comparison on `HH:mm` is chronological; the sort is stable
    /// so classes with the same start keep insertion order.
    pub fn sorted_classes(&self) -> Vec<&ClassEntry> {
        let mut classes: Vec<&ClassEntry> = self.classes.iter().collect();
        classes.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        classes
    }
}

/// The whole week: exactly six buckets, Monday through Saturday, in order.
///
/// Every constructor goes through [`WeekSchedule::reconcile`], so deserializing
/// a partial, reordered or padded list still yields the canonical shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<DaySchedule>", into = "Vec<DaySchedule>")]
pub struct WeekSchedule {
    days: Vec<DaySchedule>,
}

impl WeekSchedule {
    /// Six days, zero classes each
    pub fn empty() -> Self {
        Self {
            days: Weekday::SCHEDULE_DAYS.iter().map(|&day| DaySchedule::empty(day)).collect(),
        }
    }

    /// Build the canonical week from arbitrary day records.
    ///
    /// For each schedule day the first record with that day wins; missing days
    /// become empty; Sunday and duplicate records are dropped.
    pub fn reconcile(records: Vec<DaySchedule>) -> Self {
        let days = Weekday::SCHEDULE_DAYS
            .iter()
            .map(|&day| {
                records
                    .iter()
                    .find(|record| record.day == day)
                    .cloned()
                    .unwrap_or_else(|| DaySchedule::empty(day))
            })
            .collect();
        Self { days }
    }

    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    pub fn day(&self, day: Weekday) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn day_mut(&mut self, day: Weekday) -> Option<&mut DaySchedule> {
        self.days.iter_mut().find(|d| d.day == day)
    }

    /// Whether at least one day holds a class
    pub fn has_classes(&self) -> bool {
        self.days.iter().any(|d| !d.classes.is_empty())
    }

    pub fn class_count(&self) -> usize {
        self.days.iter().map(|d| d.classes.len()).sum()
    }
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<DaySchedule>> for WeekSchedule {
    fn from(records: Vec<DaySchedule>) -> Self {
        Self::reconcile(records)
    }
}

impl From<WeekSchedule> for Vec<DaySchedule> {
    fn from(week: WeekSchedule) -> Self {
        week.days
    }
}

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Background, text and border colors for a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectColor {
    pub background: Rgb,
    pub text: Rgb,
    pub border: Rgb,
}

/// A class prepared for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassCard {
    pub id: String,
    pub subject: String,
    pub start_time: String,
    /// e.g. "9:00 AM"
    pub formatted_start: String,
    pub formatted_end: String,
    pub location: Option<String>,
    pub color: SubjectColor,
    /// The class has already ended today
    pub is_past: bool,
}

/// One day's classes, sorted by start time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAgenda {
    pub day: Weekday,
    pub classes: Vec<ClassCard>,
    pub is_today: bool,
}

impl DayAgenda {
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Data for the Today/Tomorrow view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayTomorrowView {
    /// None on Sunday, which has no schedule
    pub today: Option<DayAgenda>,
    pub tomorrow: DayAgenda,
}

/// Data for the Week view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekOverview {
    pub days: Vec<DayAgenda>,
}
