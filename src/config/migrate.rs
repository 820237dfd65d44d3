//! Config file upkeep: report and fill in keys added by newer versions.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys of [`Config::KEYS`] not present in `map`.
fn missing_in(map: &Mapping) -> Vec<&'static str> {
    Config::KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect()
}

/// List the keys missing from the config file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    Ok(missing_in(&read_mapping(path)?))
}

/// Add every missing key with its default value, keeping existing ones.
///
/// Returns Ok(true) when the file was rewritten, Ok(false) when nothing was
/// missing.
pub fn migrate_file(path: &Path) -> AppResult<bool> {
    let mut map = read_mapping(path)?;
    let missing = missing_in(&map);

    if missing.is_empty() {
        info("Configuration file is up to date.");
        return Ok(false);
    }

    let defaults = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(e.to_string()))?;

    for key in &missing {
        let k = Value::String(key.to_string());
        if let Some(v) = defaults.get(*key) {
            map.insert(k, v.clone());
        }
    }

    let serialized =
        serde_yaml::to_string(&Value::Mapping(map)).map_err(|e| AppError::Config(e.to_string()))?;
    fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;

    success(format!("Added missing configuration keys: {}", missing.join(", ")));
    Ok(true)
}
