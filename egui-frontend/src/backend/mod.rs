//! # Backend Module
//!
//! Contains all non-UI logic for the class schedule app.
//!
//! - **Domain**: day rules, seeding, drafts, view composition
//! - **Storage**: data directory, key-value slots, configuration
//!
//! The backend is built once at startup and owned by the app; every store it
//! uses is passed in explicitly, so tests can assemble one over in-memory
//! storage and a fixed clock.

pub mod domain;
pub mod storage;

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use domain::{CalendarService, Clock, ScheduleService, ScheduleViewService, SystemClock};
use storage::{AppConfig, ConfigRepository, DataConnection, FileKeyValueStore, KeyValueStorage, MemoryKeyValueStore, ScheduleRepository};

/// Main backend struct that wires the services together
pub struct Backend {
    pub config: AppConfig,
    pub schedule_service: ScheduleService,
    pub view_service: ScheduleViewService,
    /// Storage that lives only for this run
    pub session_storage: Arc<dyn KeyValueStorage>,
}

impl Backend {
    /// Create a backend in the default data directory
    pub fn new() -> Result<Self> {
        let connection = DataConnection::new_default().context("Failed to open data directory")?;
        Self::with_connection(connection)
    }

    /// Create a backend rooted at an existing data directory
    pub fn with_connection(connection: DataConnection) -> Result<Self> {
        info!("Using data directory {:?}", connection.base_directory());
        let config = ConfigRepository::new(connection.clone())
            .load_or_create()
            .context("Failed to load configuration")?;
        let storage: Arc<dyn KeyValueStorage> = Arc::new(FileKeyValueStore::new(connection));

        Ok(Self::from_parts(
            config,
            storage,
            Arc::new(MemoryKeyValueStore::new()),
            Arc::new(SystemClock),
        ))
    }

    /// Assemble a backend from explicit collaborators
    pub fn from_parts(
        config: AppConfig,
        storage: Arc<dyn KeyValueStorage>,
        session_storage: Arc<dyn KeyValueStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        info!("Setting up backend with schedule slot '{}'", config.storage_key);

        let repository = ScheduleRepository::new(storage, config.storage_key.clone());
        let schedule_service = ScheduleService::new(repository, config.seed_default_timetable);
        let view_service = ScheduleViewService::new(CalendarService::new(clock));

        Self {
            config,
            schedule_service,
            view_service,
            session_storage,
        }
    }
}
