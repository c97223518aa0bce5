//! # Feature: Capsules
//!
//! Capsule records as stored by the backend, parsing into absolute release
//! instants, and scheduling of new capsules from an author's local clock.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod model;
pub mod schedule;

pub use model::{decode_records, parse_records, Capsule, CapsuleRecord, ParsedBatch};
pub use schedule::{resolve_release, CapsuleDraft, NewCapsuleRecord, ScheduledCapsule};
