//! Day and time logic for the class schedule.
//!
//! Works out which weekday is "today" and "tomorrow" from the wall clock and
//! formats `HH:mm` strings for display. The clock is injected so every rule
//! here can be tested against a fixed date.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};
use log::debug;
use shared::Weekday;
use std::sync::Arc;

/// Source of the current local date and time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given instant
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

#[cfg(test)]
impl FixedClock {
    /// Clock at `hour:minute` on the given date
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid test date");
        Self(date.and_hms_opt(hour, minute, 0).expect("valid test time"))
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Calendar service answering day-of-week questions against a clock
#[derive(Clone)]
pub struct CalendarService {
    clock: Arc<dyn Clock>,
}

impl CalendarService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Today's weekday; may be Sunday, which has no schedule
    pub fn today(&self) -> Weekday {
        today_for(self.clock.now().date())
    }

    /// The next weekday that has a schedule
    pub fn tomorrow(&self) -> Weekday {
        tomorrow_for(self.clock.now().date())
    }

    /// Minutes elapsed since local midnight
    pub fn minutes_now(&self) -> u32 {
        let now = self.clock.now();
        now.hour() * 60 + now.minute()
    }
}

/// Weekday of `date`
pub fn today_for(date: NaiveDate) -> Weekday {
    Weekday::from(date.weekday())
}

/// Weekday after `date`, rolling forward to Monday when that day has no schedule
pub fn tomorrow_for(date: NaiveDate) -> Weekday {
    let next = today_for(date).succ();
    if next.has_schedule() {
        next
    } else {
        debug!("{} has no schedule, rolling tomorrow forward to Monday", next);
        Weekday::Monday
    }
}

/// Parse `H:MM` or `HH:MM` into (hour, minute)
fn parse_clock(time: &str) -> Option<(u32, u32)> {
    let (hour, minute) = time.trim().split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    (hour < 24 && minute < 60).then_some((hour, minute))
}

/// Minutes since midnight for an `HH:mm` string
pub fn minutes_since_midnight(time: &str) -> Option<u32> {
    parse_clock(time).map(|(hour, minute)| hour * 60 + minute)
}

/// Format a 24-hour `HH:mm` string as 12-hour time, e.g. "13:30" -> "1:30 PM".
///
/// Input that doesn't parse is returned unchanged.
pub fn format_time(time: &str) -> String {
    let Some((hour, minute)) = parse_clock(time) else {
        return time.to_string();
    };

    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour12, minute, suffix)
}
