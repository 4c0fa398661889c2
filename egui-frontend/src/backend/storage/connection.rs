use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV_VAR: &str = "CLASS_SCHEDULE_DATA_DIR";

/// Name of the application folder inside the platform data directory
pub const APP_DIR_NAME: &str = "MyClassSchedule";

/// DataConnection owns the base directory where all app files live
#[derive(Debug, Clone)]
pub struct DataConnection {
    base_directory: PathBuf,
}

impl DataConnection {
    /// Create a new connection rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self { base_directory: base_path })
    }

    /// Create a connection in the default data directory
    ///
    /// Resolution order: `CLASS_SCHEDULE_DATA_DIR`, the platform data
    /// directory, then `~/Documents/MyClassSchedule`.
    pub fn new_default() -> Result<Self> {
        let override_dir = std::env::var(DATA_DIR_ENV_VAR).ok();
        let data_dir = Self::resolve_data_directory(override_dir.as_deref())?;
        info!("Using data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Pick the data directory given an optional override
    pub fn resolve_data_directory(override_dir: Option<&str>) -> Result<PathBuf> {
        if let Some(dir) = override_dir.map(str::trim).filter(|dir| !dir.is_empty()) {
            debug!("Data directory overridden via {}", DATA_DIR_ENV_VAR);
            return Ok(PathBuf::from(dir));
        }

        if let Some(platform_dir) = dirs::data_dir() {
            return Ok(platform_dir.join(APP_DIR_NAME));
        }

        warn!("No platform data directory available, falling back to ~/Documents");
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(PathBuf::from(home_dir).join("Documents").join(APP_DIR_NAME))
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the file backing a key-value slot
    pub fn slot_file_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", Self::generate_safe_file_stem(key)))
    }

    /// Path of the YAML configuration file
    pub fn config_file_path(&self) -> PathBuf {
        self.base_directory.join("config.yaml")
    }

    /// Turn an arbitrary key into a file stem made of `[A-Za-z0-9_-]`
    pub fn generate_safe_file_stem(key: &str) -> String {
        let stem: String = key
            .trim()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();

        if stem.is_empty() {
            "_".to_string()
        } else {
            stem
        }
    }

    /// Write `contents` to `path` through a temp file and rename
    pub fn write_atomically(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to move {} into place", path.display()))?;

        debug!("Wrote {}", path.display());
        Ok(())
    }
}
