//! The tagged-object convention
//!
//! An encoded temporal value is an ordinary JSON object carrying a `_type`
//! discriminator field. This module owns both sides of the convention: the
//! builders that render a typed value as a tagged object, and the registry
//! of reconstruction functions keyed by discriminator tag.

use crate::error::*;
use crate::types::Value;
use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use std::collections::HashMap;

/// Discriminator key marking an object as an encoded typed value
pub const TYPE_TAG: &str = "_type";

/// Discriminator tag for encoded timestamps
pub const TIMESTAMP_TAG: &str = "datetime";

/// Discriminator tag for encoded durations
pub const DURATION_TAG: &str = "timedelta";

const MICROS_PER_SEC: i64 = 1_000_000;
const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SEC;

/// Reconstruction function: builds a typed value from the fields remaining
/// after the discriminator has been removed.
pub type Revive = fn(&Map<String, JsonValue>) -> Result<Value>;

/// Registry mapping discriminator tags to reconstruction functions.
///
/// Built once and read-only afterwards; decode entry points take it by
/// reference, so one registry serves any number of calls. Tags absent from
/// the registry are not an error at decode time, the object degrades to a
/// plain map.
#[derive(Debug, Clone)]
pub struct TagRegistry {
    entries: HashMap<&'static str, Revive>,
}

impl TagRegistry {
    /// Registry with the two built-in tags, `datetime` and `timedelta`.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(TIMESTAMP_TAG, revive_timestamp);
        registry.register(DURATION_TAG, revive_duration);
        registry
    }

    /// Registry with no tags; every tagged object degrades to a plain map.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add a tag, replacing any existing entry under the same tag.
    pub fn register(&mut self, tag: &'static str, revive: Revive) {
        self.entries.insert(tag, revive);
    }

    /// Look up the reconstruction function for a tag.
    pub fn get(&self, tag: &str) -> Option<Revive> {
        self.entries.get(tag).copied()
    }

    /// Registered tags in sorted order.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.entries.keys().copied().collect();
        tags.sort_unstable();
        tags
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================
// Encoder side: typed value -> tagged object
// ============================================================

/// Render a timestamp as a tagged object. Sub-second precision is dropped.
pub(crate) fn timestamp_to_tagged(t: &NaiveDateTime) -> JsonValue {
    let mut obj = Map::new();
    obj.insert(TYPE_TAG.to_string(), TIMESTAMP_TAG.into());
    obj.insert("year".to_string(), t.year().into());
    obj.insert("month".to_string(), t.month().into());
    obj.insert("day".to_string(), t.day().into());
    obj.insert("hour".to_string(), t.hour().into());
    obj.insert("minute".to_string(), t.minute().into());
    obj.insert("second".to_string(), t.second().into());
    JsonValue::Object(obj)
}

/// Render a duration as a tagged object with normalized fields:
/// 0 <= seconds < 86400 and 0 <= microseconds < 1_000_000, days signed.
pub(crate) fn duration_to_tagged(d: &TimeDelta) -> Result<JsonValue> {
    let micros = d
        .num_microseconds()
        .ok_or_else(|| TagError::Unserializable(format!("duration out of microsecond range: {d}")))?;
    let days = micros.div_euclid(MICROS_PER_DAY);
    let rem = micros.rem_euclid(MICROS_PER_DAY);

    let mut obj = Map::new();
    obj.insert(TYPE_TAG.to_string(), DURATION_TAG.into());
    obj.insert("days".to_string(), days.into());
    obj.insert("seconds".to_string(), (rem / MICROS_PER_SEC).into());
    obj.insert("microseconds".to_string(), (rem % MICROS_PER_SEC).into());
    Ok(JsonValue::Object(obj))
}

// ============================================================
// Decoder side: payload fields -> typed value
// ============================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TimestampFields {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DurationFields {
    days: i64,
    seconds: i64,
    microseconds: i64,
}

fn revive_timestamp(fields: &Map<String, JsonValue>) -> Result<Value> {
    let f: TimestampFields = parse_fields(TIMESTAMP_TAG, fields)?;
    let date = NaiveDate::from_ymd_opt(f.year, f.month, f.day).ok_or_else(|| {
        malformed(
            TIMESTAMP_TAG,
            format!("no such date: {:04}-{:02}-{:02}", f.year, f.month, f.day),
        )
    })?;
    let stamp = date.and_hms_opt(f.hour, f.minute, f.second).ok_or_else(|| {
        malformed(
            TIMESTAMP_TAG,
            format!("no such time: {:02}:{:02}:{:02}", f.hour, f.minute, f.second),
        )
    })?;
    Ok(Value::Timestamp(stamp))
}

fn revive_duration(fields: &Map<String, JsonValue>) -> Result<Value> {
    let f: DurationFields = parse_fields(DURATION_TAG, fields)?;
    let span = TimeDelta::try_days(f.days)
        .and_then(|d| d.checked_add(&TimeDelta::try_seconds(f.seconds)?))
        .and_then(|d| d.checked_add(&TimeDelta::microseconds(f.microseconds)))
        .ok_or_else(|| malformed(DURATION_TAG, "duration fields overflow".to_string()))?;
    Ok(Value::Duration(span))
}

/// Parse the remaining fields into a payload struct. The field set is strict:
/// missing fields, extra fields, and mistyped fields all fail.
fn parse_fields<T: serde::de::DeserializeOwned>(
    tag: &str,
    fields: &Map<String, JsonValue>,
) -> Result<T> {
    serde_json::from_value(JsonValue::Object(fields.clone())).map_err(|e| malformed(tag, e.to_string()))
}

fn malformed(tag: &str, reason: String) -> TagError {
    TagError::MalformedPayload {
        tag: tag.to_string(),
        reason,
    }
}
