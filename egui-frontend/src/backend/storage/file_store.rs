//! # File Key-Value Store
//!
//! Durable [`KeyValueStorage`] backed by one JSON file per key inside the
//! data directory.
//!
//! ```text
//! MyClassSchedule/
//! ├── config.yaml
//! └── myclassschedule_data.json   ← one file per key
//! ```

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;

use super::connection::DataConnection;
use super::traits::KeyValueStorage;

/// File-backed key-value store
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    connection: DataConnection,
}

impl FileKeyValueStore {
    pub fn new(connection: DataConnection) -> Self {
        Self { connection }
    }
}

impl KeyValueStorage for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.connection.slot_file_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!("Read slot '{}' from {:?}", key, path);
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.connection.slot_file_path(key);
        self.connection.write_atomically(&path, value)
    }
}
