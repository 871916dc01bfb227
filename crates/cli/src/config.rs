//! Runtime configuration, read once from the environment at startup.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `INVTRACK_EXPORT_PATH` | `inventory.txt` | File written by "Export Inventory" |
//! | `INVTRACK_LOW_STOCK_THRESHOLD` | `5` | Items strictly below this are low stock |
//! | `INVTRACK_ADD_MODE` | `upsert` | `upsert` overwrites on add, `create-only` rejects known names |

use std::path::PathBuf;

use thiserror::Error;

use invtrack_core::Quantity;
use invtrack_inventory::{AddMode, InventoryPolicy};

pub const EXPORT_PATH_VAR: &str = "INVTRACK_EXPORT_PATH";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "INVTRACK_LOW_STOCK_THRESHOLD";
pub const ADD_MODE_VAR: &str = "INVTRACK_ADD_MODE";

pub const DEFAULT_EXPORT_PATH: &str = "inventory.txt";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is set to {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub export_path: PathBuf,
    pub policy: InventoryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            policy: InventoryPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from any variable source (the environment in production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        match lookup(EXPORT_PATH_VAR) {
            Some(path) if !path.is_empty() => config.export_path = PathBuf::from(path),
            Some(_) => {
                return Err(ConfigError::Invalid {
                    var: EXPORT_PATH_VAR,
                    value: String::new(),
                    reason: "path cannot be empty".to_string(),
                });
            }
            None => tracing::debug!("{EXPORT_PATH_VAR} not set; exporting to {DEFAULT_EXPORT_PATH}"),
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_VAR) {
            let threshold = Quantity::parse(&raw).map_err(|e| ConfigError::Invalid {
                var: LOW_STOCK_THRESHOLD_VAR,
                value: raw.clone(),
                reason: e.to_string(),
            })?;
            config.policy = config.policy.with_low_stock_threshold(threshold);
        }

        if let Some(raw) = lookup(ADD_MODE_VAR) {
            config.policy = config.policy.with_add_mode(parse_add_mode(&raw)?);
        }

        Ok(config)
    }
}

fn parse_add_mode(raw: &str) -> Result<AddMode, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "upsert" => Ok(AddMode::Upsert),
        "create-only" | "create_only" => Ok(AddMode::CreateOnly),
        _ => Err(ConfigError::Invalid {
            var: ADD_MODE_VAR,
            value: raw.to_string(),
            reason: "expected `upsert` or `create-only`".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.export_path, PathBuf::from("inventory.txt"));
        assert_eq!(config.policy.low_stock_threshold, Quantity::new(5));
        assert_eq!(config.policy.add_mode, AddMode::Upsert);
    }

    #[test]
    fn every_variable_is_honoured() {
        let config = Config::from_lookup(lookup(&[
            (EXPORT_PATH_VAR, "/tmp/stock.txt"),
            (LOW_STOCK_THRESHOLD_VAR, " 12 "),
            (ADD_MODE_VAR, "Create-Only"),
        ]))
        .unwrap();
        assert_eq!(config.export_path, PathBuf::from("/tmp/stock.txt"));
        assert_eq!(config.policy.low_stock_threshold, Quantity::new(12));
        assert_eq!(config.policy.add_mode, AddMode::CreateOnly);
    }

    #[test]
    fn bad_values_are_rejected() {
        let err = Config::from_lookup(lookup(&[(LOW_STOCK_THRESHOLD_VAR, "five")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: LOW_STOCK_THRESHOLD_VAR, .. }));

        let err = Config::from_lookup(lookup(&[(ADD_MODE_VAR, "append")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: ADD_MODE_VAR, .. }));

        let err = Config::from_lookup(lookup(&[(EXPORT_PATH_VAR, "")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: EXPORT_PATH_VAR, .. }));
    }
}
