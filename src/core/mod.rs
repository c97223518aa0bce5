//! # Core Module
//!
//! Shared configuration, error types, and formatting helpers.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod config;
pub mod error;
pub mod format;

// Re-export commonly used items
pub use config::Config;
pub use error::{ScheduleError, ScheduleResult};
pub use format::{format_countdown, format_medium, time_until_release, MEDIUM_DATETIME};
