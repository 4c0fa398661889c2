//! # Schedule Repository
//!
//! Loads and saves the [`WeekSchedule`] held in a single key-value slot.
//!
//! ## Slot Format
//!
//! ```json
//! [
//!   {"day": "Monday", "classes": [
//!     {"id": "3f2c…", "subject": "ENG (VS)", "startTime": "11:00", "endTime": "12:00"}
//!   ]},
//!   {"day": "Tuesday", "classes": []}
//! ]
//! ```
//!
//! Reads never fail: a missing slot, invalid JSON or a value that is not a
//! list all load as the empty week. Day records that do not decode or name an
//! unknown day are dropped, and the rest are reconciled into the canonical
//! six-day shape. Within a kept day, only the classes that fail to decode are
//! dropped.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;
use shared::{ClassEntry, DaySchedule, WeekSchedule, Weekday};
use std::sync::Arc;

use super::traits::KeyValueStorage;

/// Default key of the schedule slot
pub const DEFAULT_SCHEDULE_KEY: &str = "myclassschedule_data";

/// A stored day whose classes are decoded one at a time
#[derive(Deserialize)]
struct StoredDay {
    day: Weekday,
    #[serde(default)]
    classes: Vec<Value>,
}

impl StoredDay {
    fn into_day_schedule(self) -> DaySchedule {
        let day = self.day;
        let classes = self
            .classes
            .into_iter()
            .filter_map(|class| match serde_json::from_value::<ClassEntry>(class) {
                Ok(class) => Some(class),
                Err(e) => {
                    warn!("Dropping undecodable class on {}: {}", day, e);
                    None
                }
            })
            .collect();
        DaySchedule { day, classes }
    }
}

/// Repository for the persisted week schedule
#[derive(Clone)]
pub struct ScheduleRepository {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl ScheduleRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// Load the schedule, degrading to the empty week on any failure
    pub fn load(&self) -> WeekSchedule {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored schedule under '{}'", self.key);
                return WeekSchedule::empty();
            }
            Err(e) => {
                warn!("Failed to read stored schedule, using empty week: {:#}", e);
                return WeekSchedule::empty();
            }
        };

        Self::parse_lenient(&raw)
    }

    /// Overwrite the slot with the given schedule
    pub fn save(&self, schedule: &WeekSchedule) -> Result<()> {
        let json = serde_json::to_string(schedule).context("Failed to serialize schedule")?;
        self.storage
            .set(&self.key, &json)
            .with_context(|| format!("Failed to write schedule slot '{}'", self.key))?;
        info!("Saved schedule with {} classes", schedule.class_count());
        Ok(())
    }

    /// Parse a stored blob into the canonical week
    pub fn parse_lenient(raw: &str) -> WeekSchedule {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Stored schedule is not valid JSON, using empty week: {}", e);
                return WeekSchedule::empty();
            }
        };

        let Value::Array(items) = value else {
            warn!("Stored schedule is not a list, using empty week");
            return WeekSchedule::empty();
        };

        let records: Vec<DaySchedule> = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<StoredDay>(item) {
                Ok(record) => Some(record.into_day_schedule()),
                Err(e) => {
                    debug!("Dropping undecodable day record: {}", e);
                    None
                }
            })
            .collect();

        WeekSchedule::reconcile(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::test_utils::{memory_store, TestEnvironment};
    use shared::{ClassEntry, Weekday};

    fn sample_week() -> WeekSchedule {
        let mut week = WeekSchedule::empty();
        week.day_mut(Weekday::Monday)
            .unwrap()
            .classes
            .push(ClassEntry::new("KAN (ACB)", "10:00", "11:00"));
        let mut lab = ClassEntry::new("Python LAB", "09:00", "17:00");
        lab.location = Some("Lab 2".to_string());
        week.day_mut(Weekday::Friday).unwrap().classes.push(lab);
        week
    }

    fn canonical_days(week: &WeekSchedule) -> Vec<Weekday> {
        week.days().iter().map(|d| d.day).collect()
    }

    #[test]
    fn test_missing_slot_loads_empty_week() {
        let repo = ScheduleRepository::new(memory_store(), DEFAULT_SCHEDULE_KEY);
        let week = repo.load();
        assert_eq!(week, WeekSchedule::empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let env = TestEnvironment::new().unwrap();
        let repo = ScheduleRepository::new(env.file_store(), DEFAULT_SCHEDULE_KEY);
        let week = sample_week();

        repo.save(&week).unwrap();

        assert_eq!(repo.load(), week);
    }

    #[test]
    fn test_malformed_json_loads_empty_week() {
        let storage = memory_store();
        storage.set(DEFAULT_SCHEDULE_KEY, "{not json").unwrap();
        let repo = ScheduleRepository::new(storage, DEFAULT_SCHEDULE_KEY);

        assert_eq!(repo.load(), WeekSchedule::empty());
    }

    #[test]
    fn test_non_list_json_loads_empty_week() {
        let storage = memory_store();
        storage.set(DEFAULT_SCHEDULE_KEY, r#"{"day":"Monday"}"#).unwrap();
        let repo = ScheduleRepository::new(storage, DEFAULT_SCHEDULE_KEY);

        assert_eq!(repo.load(), WeekSchedule::empty());
    }

    #[test]
    fn test_partial_reordered_and_stale_days_are_normalized() {
        let raw = r#"[
            {"day":"Saturday","classes":[{"id":"s1","subject":"WEB (MSM)","startTime":"12:00","endTime":"13:00"}]},
            {"day":"Sunday","classes":[{"id":"x","subject":"Brunch","startTime":"11:00","endTime":"12:00"}]},
            {"day":"Funday","classes":[]},
            {"day":"Monday","classes":"not a list"},
            {"day":"Tuesday","classes":[{"id":"t1","subject":"SE (MNM)","startTime":"09:00","endTime":"10:00"}]},
            42
        ]"#;

        let week = ScheduleRepository::parse_lenient(raw);

        assert_eq!(canonical_days(&week), Weekday::SCHEDULE_DAYS.to_vec());
        assert!(week.day(Weekday::Monday).unwrap().classes.is_empty());
        assert_eq!(week.day(Weekday::Tuesday).unwrap().classes[0].id, "t1");
        assert_eq!(week.day(Weekday::Saturday).unwrap().classes[0].id, "s1");
        assert_eq!(week.class_count(), 2);
    }

    #[test]
    fn test_bad_class_is_dropped_without_losing_its_day() {
        let raw = r#"[
            {"day":"Monday","classes":[
                {"id":"m1","subject":"ENG (VS)","startTime":"11:00","endTime":"12:00"},
                {"subject":"No id","startTime":"12:00","endTime":"13:00"},
                {"id":"m3","subject":42,"startTime":"13:00","endTime":"14:00"},
                {"id":"m4","subject":"KAN (ACB)","startTime":"14:00","endTime":"15:00","location":"B12"}
            ]},
            {"day":"Wednesday"}
        ]"#;

        let week = ScheduleRepository::parse_lenient(raw);

        let monday: Vec<&str> = week
            .day(Weekday::Monday)
            .unwrap()
            .classes
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(monday, vec!["m1", "m4"]);
        assert_eq!(week.day(Weekday::Monday).unwrap().classes[1].location.as_deref(), Some("B12"));
        assert!(week.day(Weekday::Wednesday).unwrap().classes.is_empty());
        assert_eq!(week.class_count(), 2);
    }

    #[test]
    fn test_save_overwrites_previous_blob() {
        let storage = memory_store();
        let repo = ScheduleRepository::new(storage.clone(), DEFAULT_SCHEDULE_KEY);

        repo.save(&sample_week()).unwrap();
        repo.save(&WeekSchedule::empty()).unwrap();

        assert_eq!(repo.load(), WeekSchedule::empty());
        let raw = storage.get(DEFAULT_SCHEDULE_KEY).unwrap().unwrap();
        assert!(raw.starts_with('['));
    }
}
