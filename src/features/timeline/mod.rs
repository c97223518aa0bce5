//! # Feature: Timeline
//!
//! Builds the upcoming/released view of a user's capsules from raw backend
//! records. One `now` snapshot is taken by the caller per render and used for
//! every capsule.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use crate::core::{format_countdown, time_until_release, ScheduleError};
use crate::features::capsules::{decode_records, parse_records, Capsule, CapsuleRecord};
use crate::features::release::{partition, render_in_zone_or_local, render_local, ReleaseState};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct TimelineOptions {
    pub viewer_zone: Tz,
    pub show_capsule_zone: bool,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            viewer_zone: Tz::UTC,
            show_capsule_zone: true,
        }
    }
}

/// Display data for a single capsule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapsuleView {
    pub id: String,
    pub title: String,
    pub state: ReleaseState,
    /// Release time in the viewer's zone
    pub release_local: String,
    /// Release time in the capsule's zone, or the viewer's zone on fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_in_zone: Option<String>,
    /// Zone actually used for `release_in_zone`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    /// Time left before release, upcoming capsules only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown: Option<String>,
}

impl CapsuleView {
    fn build(capsule: &Capsule, now: DateTime<Utc>, options: &TimelineOptions) -> Self {
        let state = capsule.state(now);

        let (release_in_zone, zone) = if options.show_capsule_zone {
            let (rendered, used) = render_in_zone_or_local(
                capsule.release_instant,
                capsule.timezone.as_deref(),
                options.viewer_zone,
            );
            (Some(rendered), Some(used.name().to_string()))
        } else {
            (None, None)
        };

        let countdown = time_until_release(capsule.release_instant, now)
            .map(|left| format_countdown(left.num_seconds()));

        CapsuleView {
            id: capsule.id.clone(),
            title: capsule.title.clone(),
            state,
            release_local: render_local(capsule.release_instant, options.viewer_zone),
            release_in_zone,
            zone,
            countdown,
        }
    }
}

/// Rejected record, reported instead of being shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedCapsule {
    pub reason: String,
}

impl From<ScheduleError> for RejectedCapsule {
    fn from(e: ScheduleError) -> Self {
        RejectedCapsule {
            reason: e.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub generated_at: DateTime<Utc>,
    pub viewer_zone: String,
    pub upcoming: Vec<CapsuleView>,
    pub released: Vec<CapsuleView>,
    pub rejected: Vec<RejectedCapsule>,
}

impl Timeline {
    /// Number of capsules shown (rejected records excluded)
    pub fn len(&self) -> usize {
        self.upcoming.len() + self.released.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.released.is_empty()
    }
}

fn views(capsules: &[Capsule], now: DateTime<Utc>, options: &TimelineOptions) -> Vec<CapsuleView> {
    capsules
        .iter()
        .map(|c| CapsuleView::build(c, now, options))
        .collect()
}

/// Build the timeline for `records` as of `now`
pub fn build_timeline(
    records: &[CapsuleRecord],
    now: DateTime<Utc>,
    options: &TimelineOptions,
) -> Timeline {
    let batch = parse_records(records);
    let split = partition(batch.capsules, now);

    debug!(
        "Timeline at {}: {} upcoming, {} released, {} rejected",
        now,
        split.upcoming.len(),
        split.released.len(),
        batch.rejected.len()
    );

    Timeline {
        generated_at: now,
        viewer_zone: options.viewer_zone.name().to_string(),
        upcoming: views(&split.upcoming, now, options),
        released: views(&split.released, now, options),
        rejected: batch.rejected.into_iter().map(RejectedCapsule::from).collect(),
    }
}

/// Build the timeline from raw backend rows. Rows that do not decode are
/// reported in `rejected` ahead of records whose release date fails to parse.
pub fn build_timeline_from_values(
    values: Vec<serde_json::Value>,
    now: DateTime<Utc>,
    options: &TimelineOptions,
) -> Timeline {
    let (records, malformed) = decode_records(values);
    let mut timeline = build_timeline(&records, now, options);

    let mut rejected: Vec<RejectedCapsule> =
        malformed.into_iter().map(RejectedCapsule::from).collect();
    rejected.append(&mut timeline.rejected);
    timeline.rejected = rejected;
    timeline
}
