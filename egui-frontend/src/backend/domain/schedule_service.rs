use anyhow::Result;
use log::info;
use shared::WeekSchedule;

use crate::backend::domain::draft::ScheduleDraft;
use crate::backend::domain::seed;
use crate::backend::storage::ScheduleRepository;

/// What `seed_if_empty` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The default timetable was written
    Seeded,
    /// At least one class already existed
    AlreadyPopulated,
    /// Seeding is turned off in the config
    Disabled,
}

/// Service owning reads and writes of the week schedule
#[derive(Clone)]
pub struct ScheduleService {
    repository: ScheduleRepository,
    seed_enabled: bool,
}

impl ScheduleService {
    pub fn new(repository: ScheduleRepository, seed_enabled: bool) -> Self {
        Self {
            repository,
            seed_enabled,
        }
    }

    /// Load the stored week; never fails, an unreadable slot is an empty week
    pub fn load(&self) -> WeekSchedule {
        let week = self.repository.load();
        info!("Loaded schedule with {} classes", week.class_count());
        week
    }

    /// Replace the stored week
    pub fn save(&self, schedule: &WeekSchedule) -> Result<()> {
        self.repository.save(schedule)
    }

    /// Write the default timetable if no day has a class yet
    pub fn seed_if_empty(&self) -> Result<SeedOutcome> {
        if !self.seed_enabled {
            info!("Default timetable seeding disabled");
            return Ok(SeedOutcome::Disabled);
        }

        if self.repository.load().has_classes() {
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let week = seed::default_week();
        self.repository.save(&week)?;
        info!("🌱 Seeded default timetable with {} classes", week.class_count());
        Ok(SeedOutcome::Seeded)
    }

    /// Commit a draft and persist the result as the new live week
    pub fn save_draft(&self, draft: ScheduleDraft) -> Result<WeekSchedule> {
        let week = draft.commit();
        self.save(&week)?;
        Ok(week)
    }
}
