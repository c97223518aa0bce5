// Core layer - shared types and configuration
pub mod core;

// Features layer - capsule scheduling and release classification
pub mod features;

// Re-export core items
pub use crate::core::{Config, ScheduleError, ScheduleResult};

// Re-export feature items
pub use features::{
    // Capsules
    Capsule, CapsuleDraft, CapsuleRecord, ScheduledCapsule,
    // Release classification
    classify, partition, render_in_zone, render_local, ReleaseState,
    // Timeline
    build_timeline, Timeline, TimelineOptions,
};
