//! # Capsule Records
//!
//! Wire shape of a capsule as returned by the backend, and the parsed form the
//! release classifier works on. Parsing happens here so the classifier never
//! sees raw strings.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use crate::core::{ScheduleError, ScheduleResult};
use crate::features::release::{classify, ReleaseState};
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

/// A capsule row as fetched from the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapsuleRecord {
    /// Opaque id; backends may send it as a string or a number
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// ISO-8601 timestamp with UTC offset
    #[serde(default)]
    pub release_date: Option<String>,

    /// IANA zone the capsule belongs to for display
    #[serde(default)]
    pub timezone: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// A capsule with its release time resolved to an absolute instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capsule {
    pub id: String,
    pub title: String,
    pub description: String,
    pub release_instant: DateTime<Utc>,
    pub timezone: Option<String>,
}

impl Capsule {
    /// Release state relative to the supplied `now`
    pub fn state(&self, now: DateTime<Utc>) -> ReleaseState {
        classify(self.release_instant, now)
    }
}

impl CapsuleRecord {
    /// Resolve `release_date` into an absolute instant.
    ///
    /// Any UTC offset is accepted and normalised to UTC. Timestamps without an
    /// offset are rejected since their instant is ambiguous.
    pub fn parse(&self) -> ScheduleResult<Capsule> {
        let raw = self
            .release_date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ScheduleError::parse(&self.id, "missing release_date"))?;

        let release_instant = DateTime::parse_from_rfc3339(raw)
            .map_err(|e| ScheduleError::parse(&self.id, format!("invalid release_date '{raw}': {e}")))?
            .with_timezone(&Utc);

        let timezone = self
            .timezone
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Capsule {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            release_instant,
            timezone,
        })
    }
}

/// Result of parsing a batch of records
#[derive(Debug, Clone, Default)]
pub struct ParsedBatch {
    /// Successfully parsed capsules, in input order
    pub capsules: Vec<Capsule>,
    /// Records that could not be parsed, in input order
    pub rejected: Vec<ScheduleError>,
}

/// Decode backend rows one by one so a malformed row is rejected on its own
/// instead of failing the whole batch
pub fn decode_records(values: Vec<serde_json::Value>) -> (Vec<CapsuleRecord>, Vec<ScheduleError>) {
    let mut records = Vec::with_capacity(values.len());
    let mut rejected = Vec::new();

    for (index, value) in values.into_iter().enumerate() {
        let id = match value.get("id") {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => format!("#{index}"),
        };

        match serde_json::from_value::<CapsuleRecord>(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                let err = ScheduleError::parse(id, format!("malformed record: {e}"));
                warn!("Excluding capsule from timeline: {err}");
                rejected.push(err);
            }
        }
    }

    (records, rejected)
}

/// Parse every record, collecting failures instead of stopping at the first one
pub fn parse_records(records: &[CapsuleRecord]) -> ParsedBatch {
    let mut batch = ParsedBatch::default();

    for record in records {
        match record.parse() {
            Ok(capsule) => batch.capsules.push(capsule),
            Err(e) => {
                warn!("Excluding capsule from timeline: {e}");
                batch.rejected.push(e);
            }
        }
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: &str, release_date: Option<&str>, timezone: Option<&str>) -> CapsuleRecord {
        CapsuleRecord {
            id: id.to_string(),
            title: format!("Capsule {id}"),
            description: String::new(),
            release_date: release_date.map(str::to_string),
            timezone: timezone.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_utc() {
        let capsule = record("c1", Some("2025-01-05T20:00:00Z"), None)
            .parse()
            .unwrap();
        assert_eq!(
            capsule.release_instant,
            Utc.with_ymd_and_hms(2025, 1, 5, 20, 0, 0).unwrap()
        );
        assert_eq!(capsule.timezone, None);
    }

    #[test]
    fn test_parse_normalises_offset() {
        let capsule = record("c1", Some("2025-01-05T15:00:00-05:00"), Some("America/New_York"))
            .parse()
            .unwrap();
        assert_eq!(
            capsule.release_instant,
            Utc.with_ymd_and_hms(2025, 1, 5, 20, 0, 0).unwrap()
        );
        assert_eq!(capsule.timezone.as_deref(), Some("America/New_York"));
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let capsule = record("c1", Some("2025-01-05T20:00:00.123+00:00"), None)
            .parse()
            .unwrap();
        assert_eq!(capsule.release_instant.timestamp(), 1736107200);
    }

    #[test]
    fn test_parse_missing_release_date() {
        let err = record("c1", None, None).parse().unwrap_err();
        assert!(matches!(err, ScheduleError::Parse { ref id, .. } if id == "c1"));

        let err = record("c2", Some("  "), None).parse().unwrap_err();
        assert!(matches!(err, ScheduleError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_offsetless_timestamp() {
        assert!(record("c1", Some("2025-01-05T20:00:00"), None).parse().is_err());
        assert!(record("c1", Some("next tuesday"), None).parse().is_err());
    }

    #[test]
    fn test_blank_timezone_treated_as_absent() {
        let capsule = record("c1", Some("2025-01-05T20:00:00Z"), Some(""))
            .parse()
            .unwrap();
        assert_eq!(capsule.timezone, None);
    }

    #[test]
    fn test_parse_records_keeps_order_and_failures() {
        let records = vec![
            record("a", Some("2025-01-01T00:00:00Z"), None),
            record("b", Some("garbage"), None),
            record("c", Some("2024-01-01T00:00:00Z"), None),
            record("d", None, None),
        ];
        let batch = parse_records(&records);

        let ids: Vec<&str> = batch.capsules.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(batch.rejected.len(), 2);
        assert_eq!(batch.capsules.len() + batch.rejected.len(), records.len());
    }

    #[test]
    fn test_record_deserializes_backend_json() {
        let json = r#"{"id":"42","title":"Graduation","release_date":"2030-06-01T12:00:00+00:00","timezone":null}"#;
        let record: CapsuleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "42");
        assert_eq!(record.description, "");
        assert!(record.timezone.is_none());
        assert!(record.parse().is_ok());
    }

    #[test]
    fn test_record_accepts_numeric_id() {
        let json = r#"[{"id":42,"release_date":"2030-06-01T12:00:00Z"},{"id":"x","release_date":"2030-06-01T12:00:00Z"}]"#;
        let records: Vec<CapsuleRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].id, "42");
        assert_eq!(records[1].id, "x");
    }

    #[test]
    fn test_decode_records_rejects_only_malformed_rows() {
        let values: Vec<serde_json::Value> = serde_json::from_str(
            r#"[
                {"id":42,"title":"a","release_date":"2030-06-01T12:00:00Z"},
                {"id":"b","title":7,"release_date":"2030-06-01T12:00:00Z"},
                {"title":"no id"},
                {"id":"c","release_date":"2020-01-01T00:00:00Z","timezone":"UTC"}
            ]"#,
        )
        .unwrap();

        let (records, rejected) = decode_records(values);

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["42", "c"]);
        assert_eq!(rejected.len(), 2);
        assert!(matches!(rejected[0], ScheduleError::Parse { ref id, .. } if id == "b"));
        assert!(matches!(rejected[1], ScheduleError::Parse { ref id, .. } if id == "#2"));
    }

    #[test]
    fn test_capsule_state() {
        let capsule = record("c1", Some("2025-01-05T20:00:00Z"), None)
            .parse()
            .unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 5, 20, 0, 0).unwrap();
        assert_eq!(capsule.state(now), ReleaseState::Released);
    }
}
