//! Configuration file check: detect keys missing from an older config file
//! and fill them with their defaults, keeping everything else untouched.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Returns the keys of `defaults` that `current` lacks, inserting them.
fn fill_missing(current: &mut Mapping, defaults: &Mapping) -> Vec<String> {
    let mut added = Vec::new();

    for (key, value) in defaults {
        if !current.contains_key(key) {
            current.insert(key.clone(), value.clone());
            if let Some(k) = key.as_str() {
                added.push(k.to_string());
            }
        }
    }

    added
}

/// Check the config file at `path`; when keys are missing they are added
/// with default values and the file is rewritten.
///
/// Returns the names of the keys that were added.
pub fn check_and_fill(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let mut yaml: Value = serde_yaml::from_str(&content)?;
    let current = yaml
        .as_mapping_mut()
        .ok_or_else(|| AppError::Config(format!("{} is not a YAML mapping", path.display())))?;

    let defaults = serde_yaml::to_value(Config::default())?;
    let defaults = defaults
        .as_mapping()
        .ok_or_else(|| AppError::Config("default config is not a mapping".into()))?;

    let added = fill_missing(current, defaults);

    if !added.is_empty() {
        fs::write(path, serde_yaml::to_string(&yaml)?)?;
    }

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn adds_only_missing_keys() {
        let path = env::temp_dir().join("coursedesk_config_check_test.conf");
        fs::write(&path, "database: /data/desk.sqlite\nat_risk_threshold: 80\n").unwrap();

        let mut added = check_and_fill(&path).unwrap();
        added.sort();
        assert_eq!(added, vec!["description_placeholder", "student_id"]);

        let cfg: Config = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(cfg.database, "/data/desk.sqlite");
        assert_eq!(cfg.at_risk_threshold, 80);

        // second pass is a no-op
        assert!(check_and_fill(&path).unwrap().is_empty());
        fs::remove_file(&path).ok();
    }
}
