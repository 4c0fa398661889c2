//! # Storage Module
//!
//! Handles all data persistence for the class schedule app.
//!
//! Everything durable lives in one data directory: the YAML config and one
//! file per key-value slot. The domain layer only sees the
//! [`KeyValueStorage`] trait, so the in-memory store can stand in for the
//! file store in tests and doubles as session storage.

pub mod connection;
pub mod traits;
pub mod file_store;
pub mod memory_store;
pub mod schedule_repository;
pub mod config_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::DataConnection;
pub use traits::KeyValueStorage;
pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
pub use schedule_repository::ScheduleRepository;
pub use config_repository::{AppConfig, ConfigRepository, StartupTab};
