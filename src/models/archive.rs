use super::date_key::DateKey;
use super::roster::Roster;
use super::student::StudentRecord;
use crate::errors::{AppError, AppResult};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Every roster ever recorded, keyed by day.
///
/// Serialized as a JSON object `{ "YYYY-MM-DD": [records...] }`. Keys are
/// kept sorted, which is chronological order. Entries that could not be
/// read are carried along untouched and written back on every save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceArchive {
    days: BTreeMap<DateKey, Roster>,
    unreadable: BTreeMap<String, Value>,
}

/// Result of validating a stored archive blob.
#[derive(Debug)]
pub struct DecodedArchive {
    pub archive: AttendanceArchive,
    /// The blob was the old bare-array format.
    pub legacy: bool,
    /// Student records that failed validation and were skipped: (day, reason).
    pub dropped: Vec<(String, String)>,
    /// Entries kept as stored because they are not a readable roster: (key, reason).
    pub unreadable: Vec<(String, String)>,
}

impl AttendanceArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &DateKey) -> Option<&Roster> {
        self.days.get(key)
    }

    /// Store `roster` under `key`, replacing whatever was there, readable or not.
    pub fn insert(&mut self, key: DateKey, roster: Roster) {
        self.unreadable.remove(&key.to_string());
        self.days.insert(key, roster);
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Day keys in ascending order.
    pub fn date_keys(&self) -> Vec<DateKey> {
        self.days.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &Roster)> {
        self.days.iter()
    }

    pub fn to_json(&self) -> AppResult<String> {
        let mut map = Map::new();
        for (key, value) in &self.unreadable {
            map.insert(key.clone(), value.clone());
        }
        for (day, roster) in &self.days {
            map.insert(day.to_string(), serde_json::to_value(roster)?);
        }
        Ok(serde_json::to_string(&Value::Object(map))?)
    }

    /// Validate a stored blob.
    ///
    /// - JSON object: the archive. Each day is read on its own; a record
    ///   without a usable id is skipped, and an entry that is not a dated
    ///   list of records is kept as stored.
    /// - JSON array: legacy format, today's roster only.
    /// - Anything else (or not JSON at all) is a `StorageRead` error.
    pub fn decode(raw: &str, today: DateKey) -> AppResult<DecodedArchive> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| AppError::StorageRead(e.to_string()))?;

        let mut archive = Self::new();
        let mut dropped = Vec::new();
        let mut unreadable = Vec::new();

        match value {
            Value::Array(items) => {
                let key = today.to_string();
                archive.insert(today, read_roster(&key, items, &mut dropped));
                Ok(DecodedArchive {
                    archive,
                    legacy: true,
                    dropped,
                    unreadable,
                })
            }
            Value::Object(map) => {
                for (key, entry) in map {
                    let reason = match (DateKey::parse(&key), entry) {
                        (Ok(date), Value::Array(items)) => {
                            let roster = read_roster(&key, items, &mut dropped);
                            archive.days.insert(date, roster);
                            continue;
                        }
                        (Err(e), entry) => {
                            let reason = e.to_string();
                            archive.unreadable.insert(key.clone(), entry);
                            reason
                        }
                        (Ok(_), entry) => {
                            let reason =
                                format!("expected a list of students, found {}", json_kind(&entry));
                            archive.unreadable.insert(key.clone(), entry);
                            reason
                        }
                    };
                    unreadable.push((key, reason));
                }

                Ok(DecodedArchive {
                    archive,
                    legacy: false,
                    dropped,
                    unreadable,
                })
            }
            other => Err(AppError::StorageRead(format!(
                "expected an object or an array, found {}",
                json_kind(&other)
            ))),
        }
    }
}

fn read_roster(key: &str, items: Vec<Value>, dropped: &mut Vec<(String, String)>) -> Roster {
    let mut records = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<StudentRecord>(item) {
            Ok(record) => records.push(record),
            Err(e) => dropped.push((key.to_string(), format!("record {}: {e}", i + 1))),
        }
    }
    Roster::from_records(records)
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
