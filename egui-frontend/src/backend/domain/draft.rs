//! Draft editing for the setup view.
//!
//! A [`ScheduleDraft`] is a deep copy of the live week. Edits only touch the
//! copy; [`ScheduleDraft::commit`] hands back the cleaned week to persist, and
//! dropping the draft discards every edit.

use log::debug;
use shared::{ClassEntry, ClassField, DaySchedule, WeekSchedule, Weekday};
use thiserror::Error;

/// Errors from draft edits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} has no schedule")]
    NotAScheduleDay(Weekday),
    #[error("{day} has no class at position {index}")]
    ClassNotFound { day: Weekday, index: usize },
}

/// Edit-session copy of the week schedule
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleDraft {
    week: WeekSchedule,
}

impl ScheduleDraft {
    /// Start a draft from the live schedule
    pub fn open(live: &WeekSchedule) -> Self {
        Self { week: live.clone() }
    }

    pub fn week(&self) -> &WeekSchedule {
        &self.week
    }

    fn day_mut(&mut self, day: Weekday) -> Result<&mut DaySchedule, DraftError> {
        if !day.has_schedule() {
            return Err(DraftError::NotAScheduleDay(day));
        }
        self.week.day_mut(day).ok_or(DraftError::NotAScheduleDay(day))
    }

    /// Append a blank 09:00-10:00 class and return its index
    pub fn add_class(&mut self, day: Weekday) -> Result<usize, DraftError> {
        let schedule = self.day_mut(day)?;
        schedule.classes.push(ClassEntry::blank());
        debug!("Draft: added blank class to {}", day);
        Ok(schedule.classes.len() - 1)
    }

    /// Change one field of one class
    pub fn update_class(
        &mut self,
        day: Weekday,
        index: usize,
        field: ClassField,
        value: impl Into<String>,
    ) -> Result<(), DraftError> {
        let class = self
            .day_mut(day)?
            .classes
            .get_mut(index)
            .ok_or(DraftError::ClassNotFound { day, index })?;
        class.set_field(field, value);
        Ok(())
    }

    /// Remove a class, returning it
    pub fn remove_class(&mut self, day: Weekday, index: usize) -> Result<ClassEntry, DraftError> {
        let schedule = self.day_mut(day)?;
        if index >= schedule.classes.len() {
            return Err(DraftError::ClassNotFound { day, index });
        }
        debug!("Draft: removed class {} from {}", index, day);
        Ok(schedule.classes.remove(index))
    }

    /// Finish the draft, dropping every class whose subject is blank
    pub fn commit(self) -> WeekSchedule {
        let mut week = self.week;
        for day in Weekday::SCHEDULE_DAYS {
            if let Some(schedule) = week.day_mut(day) {
                schedule.classes.retain(|class| !class.has_blank_subject());
            }
        }
        week
    }
}
