//! # Errors
//!
//! Error types for capsule scheduling
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Zone name is not a recognised IANA identifier.
    #[error("Invalid timezone: {0}")]
    InvalidZone(String),

    /// `release_date` was missing or not valid ISO-8601 with an offset.
    #[error("Failed to parse capsule {id}: {reason}")]
    Parse { id: String, reason: String },

    /// Wall-clock time skipped by a DST transition in the author's zone.
    #[error("Local time {local} does not exist in {zone}")]
    NonexistentLocalTime { local: String, zone: String },

    #[error("Release time {release} is not after {now}")]
    ReleaseNotInFuture { release: String, now: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ScheduleError {
    /// Create a parse error for the capsule with the given id.
    pub fn parse(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            id: id.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_zone(zone: impl Into<String>) -> Self {
        Self::InvalidZone(zone.into())
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
