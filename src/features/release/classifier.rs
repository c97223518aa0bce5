//! # Release Classifier
//!
//! Pure functions deciding whether a capsule is upcoming or released and how its
//! release time is displayed. `now` and zones are always passed in; nothing here
//! reads the clock or the host's local zone.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use crate::core::{format_medium, ScheduleError, ScheduleResult};
use crate::features::capsules::Capsule;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::warn;
use serde::{Deserialize, Serialize};

/// Release state of a capsule at a sampled instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseState {
    /// Release instant is still in the future
    Upcoming,
    /// Release instant has been reached or passed
    Released,
}

impl std::fmt::Display for ReleaseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleaseState::Upcoming => write!(f, "upcoming"),
            ReleaseState::Released => write!(f, "released"),
        }
    }
}

/// Classify a release instant against `now`.
///
/// A capsule releasing exactly at `now` counts as released.
pub fn classify(release_instant: DateTime<Utc>, now: DateTime<Utc>) -> ReleaseState {
    if release_instant > now {
        ReleaseState::Upcoming
    } else {
        ReleaseState::Released
    }
}

/// Render the release instant in the viewer's zone
pub fn render_local(release_instant: DateTime<Utc>, local_zone: Tz) -> String {
    format_medium(&release_instant.with_timezone(&local_zone))
}

/// Resolve an IANA zone name. The name must match exactly; callers trim.
pub fn parse_zone(name: &str) -> ScheduleResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| ScheduleError::invalid_zone(name))
}

/// Render the release instant in a named IANA zone
pub fn render_in_zone(release_instant: DateTime<Utc>, target_zone: &str) -> ScheduleResult<String> {
    let tz = parse_zone(target_zone)?;
    Ok(format_medium(&release_instant.with_timezone(&tz)))
}

/// Render in the capsule's zone, degrading to the viewer's zone when the
/// capsule has no zone or an unrecognised one.
///
/// Returns the rendering together with the zone actually used.
pub fn render_in_zone_or_local(
    release_instant: DateTime<Utc>,
    target_zone: Option<&str>,
    local_zone: Tz,
) -> (String, Tz) {
    let Some(name) = target_zone else {
        return (render_local(release_instant, local_zone), local_zone);
    };

    match parse_zone(name) {
        Ok(tz) => (format_medium(&release_instant.with_timezone(&tz)), tz),
        Err(e) => {
            warn!("{e}, falling back to {}", local_zone.name());
            (render_local(release_instant, local_zone), local_zone)
        }
    }
}

/// Capsules split by release state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub upcoming: Vec<Capsule>,
    pub released: Vec<Capsule>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.upcoming.len() + self.released.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.released.is_empty()
    }
}

/// Stable partition of capsules into upcoming and released.
///
/// Relative input order is kept on both sides; nothing is sorted.
pub fn partition<I>(capsules: I, now: DateTime<Utc>) -> Partition
where
    I: IntoIterator<Item = Capsule>,
{
    let (upcoming, released): (Vec<Capsule>, Vec<Capsule>) = capsules
        .into_iter()
        .partition(|c| classify(c.release_instant, now) == ReleaseState::Upcoming);

    Partition { upcoming, released }
}
