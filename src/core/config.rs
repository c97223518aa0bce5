//! # Configuration
//!
//! Environment-driven settings for the timeline tooling. Call `dotenvy::dotenv()`
//! before `Config::from_env()` to pick up a local `.env` file.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::{Context, Result};
use chrono_tz::Tz;

pub const DEFAULT_VIEWER_TIMEZONE: &str = "UTC";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_CAPSULES_PATH: &str = "capsules.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Zone used for local renderings and as the fallback for bad capsule zones
    pub viewer_timezone: Tz,
    pub log_level: String,
    /// JSON file holding the capsule records to preview
    pub capsules_path: String,
    /// Whether to render each capsule in its own stored zone
    pub show_capsule_zone: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let zone_name = lookup("VIEWER_TIMEZONE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_VIEWER_TIMEZONE.to_string());
        let viewer_timezone = zone_name
            .trim()
            .parse::<Tz>()
            .map_err(|_| anyhow::anyhow!("VIEWER_TIMEZONE is not a valid IANA zone: {zone_name}"))?;

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let capsules_path =
            lookup("CAPSULES_PATH").unwrap_or_else(|| DEFAULT_CAPSULES_PATH.to_string());

        let show_capsule_zone = match lookup("SHOW_CAPSULE_ZONE") {
            Some(v) => parse_bool(&v).context("SHOW_CAPSULE_ZONE must be true or false")?,
            None => true,
        };

        Ok(Config {
            viewer_timezone,
            log_level,
            capsules_path,
            show_capsule_zone,
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("Invalid boolean: {}", other)),
    }
}
