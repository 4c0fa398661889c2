//! # Storage Traits
//!
//! This module defines the storage abstraction used by the domain layer.
//! The schedule lives in a single key-value slot, so the seam is a flat
//! string-to-string store rather than a repository per entity.

use anyhow::Result;

/// Trait defining a flat key-value store
///
/// Implementations overwrite whole values; there are no partial updates.
/// All operations are synchronous.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
