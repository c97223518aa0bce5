//! Capsule timeline preview
//!
//! Reads a JSON array of capsule records (as returned by the backend) and
//! prints the upcoming/released timeline as seen from the configured zone.
//!
//! Usage: cargo run --bin timeline -- [capsules.json]

use anyhow::{Context, Result};
use dotenvy::dotenv;
use log::{info, warn};

use timecapsule::core::Config;
use timecapsule::features::{
    build_timeline_from_values, get_crate_version, get_features, TimelineOptions,
};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting capsule timeline v{}", get_crate_version());
    for feature in get_features() {
        info!("  {} v{}", feature.name, feature.version);
    }

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.capsules_path.clone());
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read capsules from {path}"))?;
    // Rows are decoded one at a time so a single bad row is only rejected
    let records: Vec<serde_json::Value> = serde_json::from_str(&contents)
        .with_context(|| format!("Expected a JSON array of capsule records in {path}"))?;

    info!(
        "📄 Loaded {} capsule records from {path} (viewer zone {})",
        records.len(),
        config.viewer_timezone.name()
    );

    let options = TimelineOptions {
        viewer_zone: config.viewer_timezone,
        show_capsule_zone: config.show_capsule_zone,
    };

    // Single snapshot of the clock for the whole render
    let now = chrono::Utc::now();
    let timeline = build_timeline_from_values(records, now, &options);

    if !timeline.rejected.is_empty() {
        warn!(
            "{} capsule records were excluded from the timeline",
            timeline.rejected.len()
        );
    }

    println!("{}", serde_json::to_string_pretty(&timeline)?);
    Ok(())
}
