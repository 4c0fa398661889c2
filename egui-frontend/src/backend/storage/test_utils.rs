/// Test utilities for file-backed storage tests
///
/// The temporary directory is removed when the environment is dropped, even
/// if the test panics.
use anyhow::Result;
use std::sync::Arc;
use tempfile::TempDir;

use super::connection::DataConnection;
use super::file_store::FileKeyValueStore;
use super::memory_store::MemoryKeyValueStore;
use super::traits::KeyValueStorage;

/// Test environment with a temporary data directory and connection
pub struct TestEnvironment {
    pub connection: DataConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    /// Create a new test environment with a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = DataConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }

    /// A file-backed store rooted in this environment
    pub fn file_store(&self) -> Arc<dyn KeyValueStorage> {
        Arc::new(FileKeyValueStore::new(self.connection.clone()))
    }
}

/// A fresh in-memory store behind the storage trait
pub fn memory_store() -> Arc<dyn KeyValueStorage> {
    Arc::new(MemoryKeyValueStore::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());
            // Environment dropped here
        }
        assert!(!base_path.exists());
        Ok(())
    }
}
