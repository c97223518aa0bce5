//! # Capsule Scheduling
//!
//! Turns the wall-clock release date/time an author picks in their own zone into
//! the absolute instant that gets stored.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use super::model::Capsule;
use crate::core::{ScheduleError, ScheduleResult};
use crate::features::release::parse_zone;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, TimeZone, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

pub const MAX_TITLE_LEN: usize = 120;

/// Resolve a local wall-clock time in `zone` to an absolute instant.
///
/// Times repeated by a DST fall-back resolve to the earlier instant. Times
/// skipped by a spring-forward are rejected.
pub fn resolve_release(local: NaiveDateTime, zone: &str) -> ScheduleResult<DateTime<Utc>> {
    let tz = parse_zone(zone)?;
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| ScheduleError::NonexistentLocalTime {
            local: local.to_string(),
            zone: tz.name().to_string(),
        })
}

/// A capsule as composed by its author, before it is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapsuleDraft {
    pub title: String,
    pub description: String,
    /// Release date/time as shown on the author's clock
    pub release_local: NaiveDateTime,
    /// The author's IANA zone
    pub timezone: String,
}

/// A validated draft with its release instant fixed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledCapsule {
    pub title: String,
    pub description: String,
    pub release_instant: DateTime<Utc>,
    pub timezone: String,
}

/// Insert payload handed to the persistence layer, which assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCapsuleRecord {
    pub title: String,
    pub description: String,
    pub release_date: String,
    pub timezone: Option<String>,
}

impl CapsuleDraft {
    /// Validate the draft and fix its release instant.
    ///
    /// The release is stored at whole-second precision and must fall strictly
    /// after `now` at that precision.
    pub fn schedule(&self, now: DateTime<Utc>) -> ScheduleResult<ScheduledCapsule> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ScheduleError::Validation("title cannot be empty".to_string()));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(ScheduleError::Validation(format!(
                "title must be {MAX_TITLE_LEN} characters or less"
            )));
        }

        let timezone = self.timezone.trim();
        let release_instant = resolve_release(self.release_local, timezone)?.trunc_subsecs(0);
        if release_instant <= now {
            return Err(ScheduleError::ReleaseNotInFuture {
                release: release_instant.to_rfc3339(),
                now: now.to_rfc3339(),
            });
        }

        debug!(
            "Scheduled capsule '{}' for {} ({} in {})",
            title, release_instant, self.release_local, timezone
        );

        Ok(ScheduledCapsule {
            title: title.to_string(),
            description: self.description.clone(),
            release_instant,
            timezone: timezone.to_string(),
        })
    }
}

impl ScheduledCapsule {
    pub fn to_record(&self) -> NewCapsuleRecord {
        NewCapsuleRecord {
            title: self.title.clone(),
            description: self.description.clone(),
            release_date: self
                .release_instant
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            timezone: Some(self.timezone.clone()),
        }
    }

    /// Attach the id assigned by persistence
    pub fn into_capsule(self, id: impl Into<String>) -> Capsule {
        Capsule {
            id: id.into(),
            title: self.title,
            description: self.description,
            release_instant: self.release_instant,
            timezone: Some(self.timezone),
        }
    }
}
