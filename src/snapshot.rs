//! Snapshot decoding and write-back payloads.
//!
//! The persistence collaborator pushes the whole record list as a JSON array
//! of camelCase documents (`dateNumber`, `nextStep`, `reminderShown`, …) with
//! dates as `YYYY-MM-DD` and times as `HH:MM` (tolerating `HH:MM:SS`).
//! Decoding is fail-fast on temporal values: a malformed date or time is a
//! precondition violation, never a silently wrong classification. Category
//! fields are lenient and coerce to their display fallbacks instead.
//!
//! Write-backs are partial documents for the store's merge update: absent
//! fields are omitted entirely so they are never clobbered to null.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::error::SnapshotError;
use crate::types::{DateRecord, Feeling, NextStep, Scenario, Stage};

/// Raw document shape as stored. Kept separate from [`DateRecord`] so the
/// temporal fields can be validated in one place.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecord {
    id: Option<String>,
    #[serde(default)]
    name: String,
    title: Option<String>,
    link: Option<String>,
    photo: Option<String>,
    date: Option<String>,
    time: Option<String>,
    #[serde(rename = "dateNumber")]
    date_number: Option<String>,
    scenario: Option<String>,
    feeling: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    diary_feel: Option<String>,
    diary_attraction: Option<String>,
    next_step: Option<String>,
    #[serde(rename = "reminderShown", default)]
    reminder_shown: bool,
}

/// Decode a full snapshot array into domain records.
///
/// Fails on the first malformed document; the caller retries with the next
/// change notification rather than working from a partial list.
pub fn parse_snapshot(json: &str) -> Result<Vec<DateRecord>, SnapshotError> {
    let wire: Vec<WireRecord> = serde_json::from_str(json)?;
    wire.into_iter().map(record_from_wire).collect()
}

/// Decode a single document (e.g. one changed record from an incremental
/// notification).
pub fn parse_record(json: &str) -> Result<DateRecord, SnapshotError> {
    let wire: WireRecord = serde_json::from_str(json)?;
    record_from_wire(wire)
}

fn record_from_wire(wire: WireRecord) -> Result<DateRecord, SnapshotError> {
    let date = match wire.date {
        Some(value) => Some(parse_date(&value)?),
        None => None,
    };
    let time = match wire.time {
        Some(value) => Some(parse_time(&value)?),
        None => None,
    };

    Ok(DateRecord {
        id: wire.id,
        name: wire.name,
        title: wire.title,
        link: wire.link,
        photo: wire.photo,
        date,
        time,
        stage: Stage::from_label(wire.date_number.as_deref().unwrap_or_default()),
        scenario: Scenario::from_wire(wire.scenario.as_deref().unwrap_or_default()),
        // A stored empty string means unset, same as the key being absent.
        feeling: wire
            .feeling
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(Feeling::from_wire),
        tags: wire.tags,
        diary_feel: wire.diary_feel,
        diary_attraction: wire.diary_attraction,
        next_step: wire
            .next_step
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(NextStep::from_wire),
        reminder_acknowledged: wire.reminder_shown,
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, SnapshotError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| SnapshotError::InvalidDate(value.to_string()))
}

fn parse_time(value: &str) -> Result<NaiveTime, SnapshotError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| SnapshotError::InvalidTime(value.to_string()))
}

/// Merge payload for acknowledging a missed-date reminder: only the flag,
/// nothing else, so the update can never clobber other fields.
pub fn reminder_ack_update() -> Map<String, Value> {
    let mut doc = Map::new();
    doc.insert("reminderShown".to_string(), Value::Bool(true));
    doc
}

/// Merge payload for promoting a scheduled placeholder to a logged outcome.
///
/// Carries every set field of the record and forces `reminderShown` to true;
/// a logged date must never prompt again. Unset fields are omitted so the
/// store's merge keeps whatever it already has. The store-assigned `id` is
/// addressing, not content, and is not part of the payload.
pub fn promotion_update(record: &DateRecord) -> Map<String, Value> {
    let mut doc = Map::new();
    doc.insert("name".to_string(), json!(record.name));
    doc.insert("dateNumber".to_string(), json!(record.stage.label()));
    doc.insert("scenario".to_string(), json!(record.scenario.as_wire()));
    doc.insert("tags".to_string(), json!(record.tags));
    doc.insert("reminderShown".to_string(), Value::Bool(true));

    if let Some(ref title) = record.title {
        doc.insert("title".to_string(), json!(title));
    }
    if let Some(ref link) = record.link {
        doc.insert("link".to_string(), json!(link));
    }
    if let Some(ref photo) = record.photo {
        doc.insert("photo".to_string(), json!(photo));
    }
    if let Some(date) = record.date {
        doc.insert("date".to_string(), json!(date.format("%Y-%m-%d").to_string()));
    }
    if let Some(time) = record.time {
        doc.insert("time".to_string(), json!(time.format("%H:%M").to_string()));
    }
    if let Some(feeling) = record.feeling {
        doc.insert("feeling".to_string(), json!(feeling.as_wire()));
    }
    if let Some(ref diary_feel) = record.diary_feel {
        doc.insert("diaryFeel".to_string(), json!(diary_feel));
    }
    if let Some(ref diary_attraction) = record.diary_attraction {
        doc.insert("diaryAttraction".to_string(), json!(diary_attraction));
    }
    if let Some(next_step) = record.next_step {
        doc.insert("nextStep".to_string(), json!(next_step.as_wire()));
    }

    doc
}
