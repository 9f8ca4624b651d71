//! Inputs documents on disk: `--input` files and the user defaults file.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::models::Inputs;

const APP_DIR: &str = "footprint-tui";
const DEFAULTS_FILE: &str = "defaults.json";

/// Path of the optional user defaults file
pub fn user_defaults_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(DEFAULTS_FILE))
}

/// Load a (possibly partial) inputs JSON document over the built-in defaults
pub fn load_inputs_file(path: &Path) -> Result<Inputs, ConfigError> {
    load_inputs_over(path, Inputs::default())
}

/// Load a (possibly partial) inputs JSON document; missing fields keep `base`
pub fn load_inputs_over(path: &Path, base: Inputs) -> Result<Inputs, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_err = |source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let overrides: Map<String, Value> = serde_json::from_str(&content).map_err(parse_err)?;
    let mut merged = match serde_json::to_value(base).map_err(parse_err)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    merged.extend(overrides);
    serde_json::from_value(Value::Object(merged)).map_err(parse_err)
}

/// Load the user defaults file, if there is one
pub fn load_user_defaults() -> Result<Option<Inputs>, ConfigError> {
    match user_defaults_path() {
        Some(path) if path.exists() => {
            tracing::debug!("loading user defaults from {}", path.display());
            load_inputs_file(&path).map(Some)
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Diet, TransportMode};

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "footprint-tui-{}-{}",
            std::process::id(),
            name
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_partial_file() {
        let path = temp_file(
            "partial.json",
            r#"{"transportMode": "electric", "recycles": false}"#,
        );
        let inputs = load_inputs_file(&path).unwrap();
        assert_eq!(inputs.transport_mode, TransportMode::Electric);
        assert!(!inputs.recycles);
        assert_eq!(inputs.diet, Diet::HeavyMeat);
        assert_eq!(inputs.weekly_car_km, 50.0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_partial_file_keeps_base_fields() {
        let path = temp_file("over-base.json", r#"{"weeklyCarKm": 10}"#);
        let base = Inputs {
            diet: Diet::Vegan,
            recycles: false,
            ..Inputs::default()
        };
        let inputs = load_inputs_over(&path, base).unwrap();
        assert_eq!(inputs.weekly_car_km, 10.0);
        assert_eq!(inputs.diet, Diet::Vegan);
        assert!(!inputs.recycles);
        assert_eq!(inputs.monthly_electricity_kwh, 90.0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_non_object_document_is_rejected() {
        let path = temp_file("array.json", "[1, 2, 3]");
        let err = load_inputs_over(&path, Inputs::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("footprint-tui-does-not-exist.json");
        let err = load_inputs_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_file("bad.json", r#"{"diet": "keto"}"#);
        let err = load_inputs_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("failed to parse"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_user_defaults_path_shape() {
        if let Some(path) = user_defaults_path() {
            assert!(path.ends_with("footprint-tui/defaults.json"));
        }
    }
}
