//! # Feature: Release Classification
//!
//! Upcoming/released classification of capsules against an explicit `now`, plus
//! zone-aware rendering of release times with a local-zone fallback.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod classifier;

pub use classifier::{
    classify, parse_zone, partition, render_in_zone, render_in_zone_or_local, render_local,
    Partition, ReleaseState,
};
