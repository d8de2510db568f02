//! Config file upgrades: detect keys added in newer releases and fill them
//! in with their defaults without touching values the user already set.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Every key a current config file is expected to carry, with its default.
fn expected_keys() -> Vec<(&'static str, Value)> {
    let defaults = super::Config::default();
    vec![
        ("database", Value::String(defaults.database)),
        ("hourly_rate", Value::from(defaults.hourly_rate)),
        ("mileage_rate", Value::from(defaults.mileage_rate)),
        (
            "default_required_guards",
            Value::from(defaults.default_required_guards),
        ),
        ("default_kickoff", Value::String(defaults.default_kickoff)),
        ("separator_char", Value::String(defaults.separator_char)),
    ]
}

fn read_mapping(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

    if !yaml.is_mapping() {
        return Err(AppError::Config(format!(
            "{}: top level is not a mapping",
            path.display()
        )));
    }
    Ok(yaml)
}

/// Keys missing from the config file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let yaml = read_mapping(path)?;

    let missing = expected_keys()
        .into_iter()
        .filter(|(key, _)| yaml.get(*key).is_none())
        .map(|(key, _)| key)
        .collect();

    Ok(missing)
}

/// Insert the default value of every missing key and rewrite the file.
/// Returns the keys that were added.
pub fn fill_missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut yaml = read_mapping(path)?;
    let mut added = Vec::new();

    if let Some(map) = yaml.as_mapping_mut() {
        for (key, default) in expected_keys() {
            let k = Value::String(key.to_string());
            if !map.contains_key(&k) {
                map.insert(k, default);
                added.push(key);
            }
        }
    }

    if added.is_empty() {
        info("Configuration is up to date.");
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&yaml).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;

    success(format!("Configuration migrated: added {}", added.join(", ")));
    Ok(added)
}
