//! # Features
//!
//! Feature modules and the registry of their versions.

pub mod capsules;
pub mod release;
pub mod timeline;

pub use capsules::{Capsule, CapsuleDraft, CapsuleRecord, ScheduledCapsule};
pub use release::{classify, partition, render_in_zone, render_local, ReleaseState};
pub use timeline::{build_timeline, build_timeline_from_values, Timeline, TimelineOptions};

/// Version information for a feature module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub since: &'static str,
    pub toggleable: bool,
}

/// Crate version embedded at compile time
pub fn get_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// All feature modules with their versions
pub fn get_features() -> Vec<FeatureInfo> {
    vec![
        FeatureInfo {
            name: "Capsules",
            version: "1.0.0",
            since: "1.0.0",
            toggleable: false,
        },
        FeatureInfo {
            name: "Release Classification",
            version: "1.0.0",
            since: "1.0.0",
            toggleable: false,
        },
        FeatureInfo {
            name: "Timeline",
            version: "1.0.0",
            since: "1.0.0",
            toggleable: false,
        },
    ]
}
