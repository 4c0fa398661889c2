//! # Config Repository
//!
//! File-based application configuration stored as `config.yaml` at the root
//! of the data directory.
//!
//! ## YAML Format
//!
//! ```yaml
//! data_format_version: "1.0"
//! storage_key: myclassschedule_data
//! seed_default_timetable: true
//! default_tab: today
//! created_at: "2026-01-21T19:30:00Z"
//! updated_at: "2026-01-21T19:35:00Z"
//! ```
//!
//! Missing fields take their defaults, so older files keep loading.

use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;

use super::connection::DataConnection;
use super::schedule_repository::DEFAULT_SCHEDULE_KEY;

/// Format version written by this build
pub const CURRENT_DATA_FORMAT_VERSION: &str = "1.0";

/// View shown when the app starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartupTab {
    Today,
    Week,
    Setup,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Data format version for future migrations
    pub data_format_version: String,
    /// Key of the slot holding the schedule
    pub storage_key: String,
    /// Populate the default timetable when the schedule is empty
    pub seed_default_timetable: bool,
    pub default_tab: StartupTab,
    pub created_at: String,
    pub updated_at: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            data_format_version: CURRENT_DATA_FORMAT_VERSION.to_string(),
            storage_key: DEFAULT_SCHEDULE_KEY.to_string(),
            seed_default_timetable: true,
            default_tab: StartupTab::Today,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Repository for `config.yaml`
#[derive(Debug, Clone)]
pub struct ConfigRepository {
    connection: DataConnection,
}

impl ConfigRepository {
    pub fn new(connection: DataConnection) -> Self {
        Self { connection }
    }

    /// Load the config, writing the defaults first if the file doesn't exist
    pub fn load_or_create(&self) -> Result<AppConfig> {
        let config_path = self.connection.config_file_path();

        if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: AppConfig = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;
            debug!("Loaded config from {:?}", config_path);

            if config.data_format_version != CURRENT_DATA_FORMAT_VERSION {
                info!(
                    "Upgrading config from format {} to {}",
                    config.data_format_version, CURRENT_DATA_FORMAT_VERSION
                );
                let mut upgraded = config;
                upgraded.data_format_version = CURRENT_DATA_FORMAT_VERSION.to_string();
                return self.update(&upgraded);
            }
            Ok(config)
        } else {
            let config = AppConfig::default();
            self.save(&config)?;
            info!("Created default config at {:?}", config_path);
            Ok(config)
        }
    }

    /// Persist the config, stamping `updated_at`
    pub fn update(&self, config: &AppConfig) -> Result<AppConfig> {
        let mut updated = config.clone();
        updated.updated_at = Utc::now().to_rfc3339();
        self.save(&updated)?;
        info!("Updated config");
        Ok(updated)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        let yaml_content = serde_yaml::to_string(config).context("Failed to serialize config")?;
        self.connection
            .write_atomically(&self.connection.config_file_path(), &yaml_content)
    }
}
