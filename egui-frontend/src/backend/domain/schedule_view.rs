//! View composition for the Today/Tomorrow and Week views.
//!
//! Turns the stored week into sorted, formatted, colored view models so the
//! UI only draws what it is given.

use log::debug;
use shared::{ClassCard, ClassEntry, DayAgenda, TodayTomorrowView, WeekOverview, WeekSchedule, Weekday};

use crate::backend::domain::calendar::{format_time, minutes_since_midnight, CalendarService};
use crate::backend::domain::colors::color_for;

/// Builds display data for the read-only views
#[derive(Clone)]
pub struct ScheduleViewService {
    calendar: CalendarService,
}

impl ScheduleViewService {
    pub fn new(calendar: CalendarService) -> Self {
        Self { calendar }
    }

    /// Today's and tomorrow's classes at the current time
    pub fn today_tomorrow(&self, week: &WeekSchedule) -> TodayTomorrowView {
        compose_today_tomorrow(
            week,
            self.calendar.today(),
            self.calendar.tomorrow(),
            self.calendar.minutes_now(),
        )
    }

    /// All six days with today highlighted
    pub fn week_overview(&self, week: &WeekSchedule) -> WeekOverview {
        compose_week_overview(week, self.calendar.today())
    }
}

/// Build the Today/Tomorrow view for a given moment.
///
/// The today section is omitted when today has no schedule. Today's classes
/// are marked past once `now_minutes` reaches their end time.
pub fn compose_today_tomorrow(
    week: &WeekSchedule,
    today: Weekday,
    tomorrow: Weekday,
    now_minutes: u32,
) -> TodayTomorrowView {
    let today = today
        .has_schedule()
        .then(|| agenda(week, today, true, Some(now_minutes)));

    debug!(
        "Composed today/tomorrow view: today={:?} tomorrow={}",
        today.as_ref().map(|a| a.day),
        tomorrow
    );

    TodayTomorrowView {
        today,
        tomorrow: agenda(week, tomorrow, false, None),
    }
}

/// Build the Week view with `today` highlighted
pub fn compose_week_overview(week: &WeekSchedule, today: Weekday) -> WeekOverview {
    let days = week
        .days()
        .iter()
        .map(|day| agenda(week, day.day, day.day == today, None))
        .collect();
    WeekOverview { days }
}

/// One day's sorted cards. `now_minutes` enables the "already ended" check.
fn agenda(week: &WeekSchedule, day: Weekday, is_today: bool, now_minutes: Option<u32>) -> DayAgenda {
    let classes = week
        .day(day)
        .map(|schedule| {
            schedule
                .sorted_classes()
                .into_iter()
                .map(|class| class_card(class, now_minutes))
                .collect()
        })
        .unwrap_or_default();

    DayAgenda { day, classes, is_today }
}

/// Format one class for display
pub fn class_card(class: &ClassEntry, now_minutes: Option<u32>) -> ClassCard {
    let is_past = match (now_minutes, minutes_since_midnight(&class.end_time)) {
        (Some(now), Some(end)) => now >= end,
        _ => false,
    };

    ClassCard {
        id: class.id.clone(),
        subject: class.subject.clone(),
        start_time: class.start_time.clone(),
        formatted_start: format_time(&class.start_time),
        formatted_end: format_time(&class.end_time),
        location: class.display_location().map(str::to_string),
        color: color_for(&class.subject),
        is_past,
    }
}

/// "1 class", "3 classes"
pub fn class_count_label(count: usize) -> String {
    if count == 1 {
        "1 class".to_string()
    } else {
        format!("{} classes", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::calendar::FixedClock;
    use crate::backend::domain::colors::DEFAULT_SUBJECT_COLOR;
    use std::sync::Arc;

    fn week_with(day: Weekday, classes: &[(&str, &str, &str)]) -> WeekSchedule {
        let mut week = WeekSchedule::empty();
        let schedule = week.day_mut(day).unwrap();
        for (subject, start, end) in classes {
            schedule.classes.push(ClassEntry::new(*subject, *start, *end));
        }
        week
    }

    fn starts(agenda: &DayAgenda) -> Vec<&str> {
        agenda.classes.iter().map(|c| c.start_time.as_str()).collect()
    }

    #[test]
    fn test_today_classes_are_sorted_and_dimmed() {
        let week = week_with(
            Weekday::Monday,
            &[("B", "10:00", "11:00"), ("A", "09:00", "10:00"), ("C", "13:00", "14:00")],
        );

        // 10:30 on a Monday
        let view = compose_today_tomorrow(&week, Weekday::Monday, Weekday::Tuesday, 10 * 60 + 30);

        let today = view.today.unwrap();
        assert!(today.is_today);
        assert_eq!(starts(&today), vec!["09:00", "10:00", "13:00"]);
        let past: Vec<bool> = today.classes.iter().map(|c| c.is_past).collect();
        assert_eq!(past, vec![true, false, false]);
        assert!(view.tomorrow.is_empty());
        assert_eq!(view.tomorrow.day, Weekday::Tuesday);
    }

    #[test]
    fn test_class_is_past_at_its_end_minute() {
        let class = ClassEntry::new("Math", "09:00", "10:00");
        assert!(!class_card(&class, Some(599)).is_past);
        assert!(class_card(&class, Some(600)).is_past);
        assert!(!class_card(&class, None).is_past);
    }

    #[test]
    fn test_unparsable_end_time_is_never_past() {
        let class = ClassEntry::new("Math", "09:00", "later");
        assert!(!class_card(&class, Some(23 * 60)).is_past);
    }

    #[test]
    fn test_sunday_suppresses_today() {
        let week = week_with(Weekday::Monday, &[("Math", "13:00", "14:00"), ("Art", "10:00", "11:00")]);

        let view = compose_today_tomorrow(&week, Weekday::Sunday, Weekday::Monday, 0);

        assert!(view.today.is_none());
        assert_eq!(view.tomorrow.day, Weekday::Monday);
        assert_eq!(starts(&view.tomorrow), vec!["10:00", "13:00"]);
        assert!(view.tomorrow.classes.iter().all(|c| !c.is_past));
    }

    #[test]
    fn test_week_overview_highlights_today() {
        let week = week_with(
            Weekday::Wednesday,
            &[("B", "10:00", "11:00"), ("A", "09:00", "10:00"), ("C", "13:00", "14:00")],
        );

        let overview = compose_week_overview(&week, Weekday::Wednesday);

        let days: Vec<Weekday> = overview.days.iter().map(|d| d.day).collect();
        assert_eq!(days, Weekday::SCHEDULE_DAYS.to_vec());
        let highlighted: Vec<Weekday> = overview.days.iter().filter(|d| d.is_today).map(|d| d.day).collect();
        assert_eq!(highlighted, vec![Weekday::Wednesday]);
        assert_eq!(starts(&overview.days[2]), vec!["09:00", "10:00", "13:00"]);
        assert!(overview.days[0].is_empty());
    }

    #[test]
    fn test_week_overview_on_sunday_highlights_nothing() {
        let overview = compose_week_overview(&WeekSchedule::empty(), Weekday::Sunday);
        assert!(overview.days.iter().all(|d| !d.is_today));
    }

    #[test]
    fn test_class_card_formatting() {
        let mut class = ClassEntry::new("Python (AND)", "12:00", "13:00");
        class.location = Some("Lab 1".to_string());

        let card = class_card(&class, None);

        assert_eq!(card.formatted_start, "12:00 PM");
        assert_eq!(card.formatted_end, "1:00 PM");
        assert_eq!(card.location.as_deref(), Some("Lab 1"));
        assert_ne!(card.color, DEFAULT_SUBJECT_COLOR);

        class.location = Some(String::new());
        assert_eq!(class_card(&class, None).location, None);
    }

    #[test]
    fn test_service_uses_clock() {
        // Saturday 2026-10-17 at 11:15
        let calendar = CalendarService::new(Arc::new(FixedClock::at(2026, 10, 17, 11, 15)));
        let service = ScheduleViewService::new(calendar);
        let mut week = week_with(Weekday::Saturday, &[("KAN (ACB)", "09:00", "10:00")]);
        week.day_mut(Weekday::Monday)
            .unwrap()
            .classes
            .push(ClassEntry::new("ENG (VS)", "11:00", "12:00"));

        let view = service.today_tomorrow(&week);

        let today = view.today.unwrap();
        assert_eq!(today.day, Weekday::Saturday);
        assert!(today.classes[0].is_past);
        assert_eq!(view.tomorrow.day, Weekday::Monday);
        assert_eq!(view.tomorrow.classes[0].subject, "ENG (VS)");

        let overview = service.week_overview(&week);
        assert!(overview.days[5].is_today);
    }

    #[test]
    fn test_class_count_label() {
        assert_eq!(class_count_label(0), "0 classes");
        assert_eq!(class_count_label(1), "1 class");
        assert_eq!(class_count_label(7), "7 classes");
    }
}
