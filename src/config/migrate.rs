//! Config file upkeep: report and fill keys missing from an existing YAML
//! file, without touching the values the user already set.

use super::{Config, SectorConfig};
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn as_mapping(value: Value) -> Mapping {
    match value {
        Value::Mapping(m) => m,
        _ => Mapping::new(),
    }
}

/// Walk the document and collect (or insert, when `fill`) every missing key.
/// Paths are reported as `key` or `sectors.<name>.<field>`.
fn walk(doc: &mut Mapping, fill: bool) -> AppResult<Vec<String>> {
    let defaults = as_mapping(serde_yaml::to_value(Config::default())?);
    let mut missing = Vec::new();

    for (key, default) in defaults.iter() {
        if !doc.contains_key(key) {
            missing.push(key.as_str().unwrap_or_default().to_string());
            if fill {
                doc.insert(key.clone(), default.clone());
            }
        }
    }

    if let Some(Value::Mapping(sectors)) = doc.get_mut("sectors") {
        for (name, fields) in sectors.iter_mut() {
            let name = name.as_str().unwrap_or_default().to_string();
            let base = SectorConfig::builtin(&name).unwrap_or_default();
            let base = as_mapping(serde_yaml::to_value(&base)?);

            if !fields.is_mapping() {
                *fields = Value::Mapping(Mapping::new());
            }
            let Value::Mapping(fields) = fields else {
                continue;
            };

            for (field, default) in base.iter() {
                if !fields.contains_key(field) {
                    missing.push(format!(
                        "sectors.{}.{}",
                        name,
                        field.as_str().unwrap_or_default()
                    ));
                    if fill {
                        fields.insert(field.clone(), default.clone());
                    }
                }
            }
        }
    }

    Ok(missing)
}

fn read_doc(path: &Path) -> AppResult<Mapping> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "config file not found: {}",
            path.display()
        )));
    }
    let content = fs::read_to_string(path)?;
    let value: Value = serde_yaml::from_str(&content)?;
    match value {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("top level must be a mapping".into())),
    }
}

/// Keys missing from the config file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let mut doc = read_doc(path)?;
    walk(&mut doc, false)
}

/// Insert the defaults for every missing key and rewrite the file.
/// Returns the keys that were added (empty when nothing changed).
pub fn migrate_file(path: &Path) -> AppResult<Vec<String>> {
    let mut doc = read_doc(path)?;
    let added = walk(&mut doc, true)?;

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(doc))?;
        fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}
