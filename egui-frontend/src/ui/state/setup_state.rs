//! # Setup State Module
//!
//! State of the "Setup" tab while it is open: the draft being edited and
//! which day sections are expanded.
//!
//! Rendering collects [`SetupAction`]s instead of mutating the draft while it
//! is borrowed for drawing; they are applied once the frame is laid out.

use shared::{ClassField, WeekSchedule, Weekday};
use std::collections::BTreeSet;

use crate::backend::domain::{DraftError, ScheduleDraft};

/// One user edit in the setup view
#[derive(Debug, Clone, PartialEq)]
pub enum SetupAction {
    ToggleDay(Weekday),
    AddClass(Weekday),
    UpdateClass {
        day: Weekday,
        index: usize,
        field: ClassField,
        value: String,
    },
    RemoveClass {
        day: Weekday,
        index: usize,
    },
}

/// Draft plus expansion state; dropped when the tab closes
#[derive(Debug, Clone)]
pub struct SetupState {
    pub draft: ScheduleDraft,
    expanded: BTreeSet<Weekday>,
}

impl SetupState {
    /// Open the editor on a copy of the live schedule, all days collapsed
    pub fn open(live: &WeekSchedule) -> Self {
        Self {
            draft: ScheduleDraft::open(live),
            expanded: BTreeSet::new(),
        }
    }

    pub fn is_expanded(&self, day: Weekday) -> bool {
        self.expanded.contains(&day)
    }

    pub fn toggle_day(&mut self, day: Weekday) {
        if !self.expanded.remove(&day) {
            self.expanded.insert(day);
        }
    }

    pub fn apply(&mut self, action: SetupAction) -> Result<(), DraftError> {
        match action {
            SetupAction::ToggleDay(day) => self.toggle_day(day),
            SetupAction::AddClass(day) => {
                self.draft.add_class(day)?;
                // Make the new row visible
                self.expanded.insert(day);
            }
            SetupAction::UpdateClass { day, index, field, value } => {
                self.draft.update_class(day, index, field, value)?;
            }
            SetupAction::RemoveClass { day, index } => {
                self.draft.remove_class(day, index)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_expand_independently() {
        let mut state = SetupState::open(&WeekSchedule::empty());
        assert!(!state.is_expanded(Weekday::Monday));

        state.apply(SetupAction::ToggleDay(Weekday::Monday)).unwrap();
        state.apply(SetupAction::ToggleDay(Weekday::Friday)).unwrap();
        assert!(state.is_expanded(Weekday::Monday));
        assert!(state.is_expanded(Weekday::Friday));

        state.apply(SetupAction::ToggleDay(Weekday::Monday)).unwrap();
        assert!(!state.is_expanded(Weekday::Monday));
        assert!(state.is_expanded(Weekday::Friday));
    }

    #[test]
    fn test_actions_edit_the_draft_only() {
        let live = WeekSchedule::empty();
        let mut state = SetupState::open(&live);

        state.apply(SetupAction::AddClass(Weekday::Tuesday)).unwrap();
        state
            .apply(SetupAction::UpdateClass {
                day: Weekday::Tuesday,
                index: 0,
                field: ClassField::Subject,
                value: "Physics".to_string(),
            })
            .unwrap();

        assert!(state.is_expanded(Weekday::Tuesday));
        assert_eq!(state.draft.week().day(Weekday::Tuesday).unwrap().classes[0].subject, "Physics");
        assert!(!live.has_classes());

        state
            .apply(SetupAction::RemoveClass { day: Weekday::Tuesday, index: 0 })
            .unwrap();
        assert!(!state.draft.week().has_classes());
    }

    #[test]
    fn test_bad_index_reports_error() {
        let mut state = SetupState::open(&WeekSchedule::empty());
        let result = state.apply(SetupAction::RemoveClass { day: Weekday::Monday, index: 2 });
        assert_eq!(result, Err(DraftError::ClassNotFound { day: Weekday::Monday, index: 2 }));
    }
}
