//! # UI Components Module
//!
//! Each submodule renders one part of the class schedule interface.
//!
//! ## Module Organization:
//! - `styling` - Global style, color constants, frame helpers
//! - `header` - Title bar and feedback messages
//! - `tab_bar` - Bottom navigation and content routing
//! - `class_card` - A single class card and the empty-day placeholder
//! - `today_view` - Today's and tomorrow's classes
//! - `week_view` - Six-day overview
//! - `setup_view` - Schedule editor
//! - `install_banner` - Install promotion card

pub mod class_card;
pub mod header;
pub mod install_banner;
pub mod setup_view;
pub mod styling;
pub mod tab_bar;
pub mod today_view;
pub mod week_view;

pub use styling::setup_schedule_style;
