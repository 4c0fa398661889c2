//! # Domain Module
//!
//! Contains all business logic for the class schedule app, independent of
//! egui and of how the schedule is stored.
//!
//! ## Module Organization
//!
//! - **calendar**: today/tomorrow weekday rules and time formatting
//! - **colors**: subject keyword -> color triple
//! - **seed**: built-in default timetable
//! - **draft**: copy-on-open editing session for the setup view
//! - **schedule_service**: loading, saving and seeding the week
//! - **schedule_view**: sorted, formatted view models for the read-only views
//! - **install_prompt**: install promotion banner state

pub mod calendar;
pub mod colors;
pub mod seed;
pub mod draft;
pub mod schedule_service;
pub mod schedule_view;
pub mod install_prompt;

pub use calendar::*;
pub use draft::*;
pub use schedule_service::*;
pub use schedule_view::*;
pub use install_prompt::*;
