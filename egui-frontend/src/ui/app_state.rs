//! # App State Module
//!
//! This module defines the central application state structure and the
//! operations the views trigger on it.
//!
//! ## Key Types:
//! - `MainTab` - Enum defining available tabs (Today, Week, Setup)
//! - `ClassScheduleApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Initialize a new app with the default data directory
//! - `select_tab()` - Switch tabs, opening or discarding the setup draft
//! - `save_setup()` - Commit the setup draft and return to Today
//!
//! The live schedule is held here and replaced only by a successful save, so
//! the Today and Week views never see unsaved edits.

use anyhow::Result;
use log::{error, info, warn};
use shared::WeekSchedule;

use crate::backend::domain::{InstallBanner, NativeInstallHost, SeedOutcome};
use crate::backend::storage::StartupTab;
use crate::backend::Backend;
use crate::ui::state::{SetupAction, SetupState, UIState};

/// Tabs available in the main interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    Today,
    Week,
    Setup,
}

impl MainTab {
    pub const ALL: [MainTab; 3] = [MainTab::Today, MainTab::Week, MainTab::Setup];

    pub fn label(&self) -> &'static str {
        match self {
            MainTab::Today => "Today",
            MainTab::Week => "Week",
            MainTab::Setup => "Setup",
        }
    }
}

impl From<StartupTab> for MainTab {
    fn from(tab: StartupTab) -> Self {
        match tab {
            StartupTab::Today => MainTab::Today,
            StartupTab::Week => MainTab::Week,
            StartupTab::Setup => MainTab::Setup,
        }
    }
}

/// Main application struct for the egui class schedule
pub struct ClassScheduleApp {
    pub backend: Backend,

    /// Last saved week
    pub schedule: WeekSchedule,
    pub current_tab: MainTab,

    /// Present only while the Setup tab is open
    pub setup: Option<SetupState>,

    pub ui_state: UIState,
    pub install_banner: InstallBanner,
}

impl ClassScheduleApp {
    /// Create a new app over the default data directory
    pub fn new() -> Result<Self> {
        info!("🚀 Initializing ClassScheduleApp");
        let backend = Backend::new()?;
        Ok(Self::with_backend(backend))
    }

    /// Create an app around an already built backend
    pub fn with_backend(backend: Backend) -> Self {
        let mut ui_state = UIState::new();

        match backend.schedule_service.seed_if_empty() {
            Ok(SeedOutcome::Seeded) => info!("First run, default timetable written"),
            Ok(_) => {}
            Err(e) => {
                error!("Failed to seed default timetable: {:#}", e);
                ui_state.set_error(format!("Could not save the default timetable: {}", e));
            }
        }

        let schedule = backend.schedule_service.load();
        let install_banner = InstallBanner::new(&NativeInstallHost, backend.session_storage.clone());
        let start_tab = MainTab::from(backend.config.default_tab);

        let mut app = Self {
            backend,
            schedule,
            current_tab: MainTab::Today,
            setup: None,
            ui_state,
            install_banner,
        };
        app.select_tab(start_tab);
        app
    }

    /// Switch tabs. Entering Setup opens a fresh draft; leaving it drops any
    /// unsaved edits.
    pub fn select_tab(&mut self, tab: MainTab) {
        if tab == MainTab::Setup {
            if self.setup.is_none() {
                self.setup = Some(SetupState::open(&self.schedule));
            }
        } else if self.setup.take().is_some() {
            info!("Leaving setup, unsaved edits discarded");
        }
        self.current_tab = tab;
    }

    /// Apply edits collected while drawing the setup view
    pub fn apply_setup_actions(&mut self, actions: Vec<SetupAction>) {
        let Some(setup) = self.setup.as_mut() else {
            return;
        };

        for action in actions {
            if let Err(e) = setup.apply(action) {
                warn!("Setup edit rejected: {}", e);
                self.ui_state.set_error(e.to_string());
            }
        }
    }

    /// Persist the draft. On success the live schedule is replaced and the
    /// app returns to Today; on failure the draft is kept for another try.
    pub fn save_setup(&mut self) {
        let Some(setup) = self.setup.as_ref() else {
            return;
        };

        match self.backend.schedule_service.save_draft(setup.draft.clone()) {
            Ok(week) => {
                info!("💾 Schedule saved with {} classes", week.class_count());
                self.schedule = week;
                self.setup = None;
                self.current_tab = MainTab::Today;
                self.ui_state.set_success("Schedule saved!".to_string());
            }
            Err(e) => {
                error!("Failed to save schedule: {:#}", e);
                self.ui_state.set_error(format!("Could not save schedule: {}", e));
            }
        }
    }

    /// Hide the install banner for this session
    pub fn dismiss_install_banner(&mut self) {
        if let Err(e) = self.install_banner.dismiss() {
            warn!("Could not remember banner dismissal: {:#}", e);
        }
    }

    /// Run the deferred install prompt, if the host gave us one
    pub fn run_install_prompt(&mut self) {
        if let Err(e) = self.install_banner.install() {
            error!("Install prompt failed: {:#}", e);
            self.ui_state.set_error(format!("Install failed: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::FixedClock;
    use crate::backend::storage::test_utils::memory_store;
    use crate::backend::storage::{AppConfig, KeyValueStorage};
    use anyhow::anyhow;
    use shared::{ClassField, Weekday};
    use std::sync::Arc;

    fn app_with(config: AppConfig, storage: Arc<dyn KeyValueStorage>) -> ClassScheduleApp {
        let backend = Backend::from_parts(
            config,
            storage,
            memory_store(),
            Arc::new(FixedClock::at(2026, 10, 19, 9, 0)),
        );
        ClassScheduleApp::with_backend(backend)
    }

    fn app() -> ClassScheduleApp {
        app_with(AppConfig::default(), memory_store())
    }

    #[test]
    fn test_first_launch_seeds_and_opens_today() {
        let app = app();
        assert_eq!(app.current_tab, MainTab::Today);
        assert!(app.schedule.has_classes());
        assert!(app.setup.is_none());
        assert!(!app.ui_state.has_message());
    }

    #[test]
    fn test_configured_setup_tab_opens_a_draft() {
        let mut config = AppConfig::default();
        config.default_tab = StartupTab::Setup;
        config.seed_default_timetable = false;

        let app = app_with(config, memory_store());

        assert_eq!(app.current_tab, MainTab::Setup);
        assert!(app.setup.is_some());
        assert!(!app.schedule.has_classes());
    }

    #[test]
    fn test_leaving_setup_discards_edits() {
        let mut app = app();
        let before = app.schedule.clone();

        app.select_tab(MainTab::Setup);
        app.apply_setup_actions(vec![SetupAction::AddClass(Weekday::Monday)]);
        app.select_tab(MainTab::Week);

        assert!(app.setup.is_none());
        assert_eq!(app.schedule, before);

        app.select_tab(MainTab::Setup);
        let draft = app.setup.as_ref().unwrap().draft.week().clone();
        assert_eq!(draft, before);
    }

    #[test]
    fn test_save_setup_replaces_schedule_and_returns_to_today() {
        let storage = memory_store();
        let mut app = app_with(AppConfig::default(), storage.clone());
        let monday_before = app.schedule.day(Weekday::Monday).unwrap().classes.len();

        app.select_tab(MainTab::Setup);
        app.apply_setup_actions(vec![
            SetupAction::AddClass(Weekday::Monday),
            SetupAction::UpdateClass {
                day: Weekday::Monday,
                index: monday_before,
                field: ClassField::Subject,
                value: "Robotics".to_string(),
            },
            // Left blank, dropped on save
            SetupAction::AddClass(Weekday::Tuesday),
        ]);
        app.save_setup();

        assert_eq!(app.current_tab, MainTab::Today);
        assert!(app.setup.is_none());
        assert_eq!(app.ui_state.success_message.as_deref(), Some("Schedule saved!"));
        let monday = &app.schedule.day(Weekday::Monday).unwrap().classes;
        assert_eq!(monday.len(), monday_before + 1);
        assert!(app.schedule.day(Weekday::Tuesday).unwrap().classes.iter().all(|c| !c.has_blank_subject()));
        assert_eq!(app.backend.schedule_service.load(), app.schedule);
    }

    #[test]
    fn test_rejected_edit_shows_error() {
        let mut app = app();
        app.select_tab(MainTab::Setup);
        app.apply_setup_actions(vec![SetupAction::RemoveClass { day: Weekday::Monday, index: 99 }]);
        assert!(app.ui_state.error_message.is_some());
    }

    struct ReadOnlyStore;

    impl KeyValueStorage for ReadOnlyStore {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow!("read-only"))
        }
    }

    #[test]
    fn test_failed_save_keeps_draft() {
        let mut app = app_with(AppConfig::default(), Arc::new(ReadOnlyStore));
        // Seeding failed too
        assert!(app.ui_state.error_message.is_some());
        app.ui_state.clear_messages();

        app.select_tab(MainTab::Setup);
        app.apply_setup_actions(vec![SetupAction::AddClass(Weekday::Friday)]);
        app.save_setup();

        assert_eq!(app.current_tab, MainTab::Setup);
        assert!(app.setup.is_some());
        assert!(app.ui_state.error_message.is_some());
        assert!(!app.schedule.has_classes());
    }
}
