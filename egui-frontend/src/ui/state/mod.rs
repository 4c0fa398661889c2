//! # UI State
//!
//! State structs owned by the app that are not part of the persisted schedule.

pub mod setup_state;
pub mod ui_state;

pub use setup_state::{SetupAction, SetupState};
pub use ui_state::UIState;
