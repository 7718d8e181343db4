use crate::error::{AccessoryError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Display name used when the config block has none.
pub const DEFAULT_NAME: &str = "Multisensor Trigger";

/// Fallback for the configured reset delay, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Configuration block for one multisensor trigger accessory.
///
/// The field names match the JSON config block the host platform hands to
/// the accessory (`name`, `sensors`, `delay`). Loading never rejects a
/// malformed field: a non-numeric or non-positive sensor count coerces to 1
/// and a junk delay falls back to [`DEFAULT_DELAY_MS`]. Only file I/O and
/// top-level JSON syntax errors are surfaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessoryConfig {
    /// Display name of the accessory. Also seeds its stable id.
    pub name: String,

    /// Number of motion sensors exposed. Always at least 1 after loading.
    #[serde(deserialize_with = "lenient_sensor_count")]
    pub sensors: usize,

    /// Reset delay from the config block, in milliseconds. Retained and
    /// surfaced at startup, but the reset timer runs on the fixed
    /// [`RESET_DELAY`](crate::trigger::RESET_DELAY) instead.
    #[serde(deserialize_with = "lenient_delay_ms")]
    pub delay: u64,
}

impl Default for AccessoryConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            sensors: 1,
            delay: DEFAULT_DELAY_MS,
        }
    }
}

impl AccessoryConfig {
    /// Parse a config block from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a config block from an already-deserialized JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Load a config block from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AccessoryError::ConfigRead {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Build a config from environment variables, starting from defaults.
    ///
    /// Recognized variables: `TRIGGER_NAME`, `TRIGGER_SENSORS`,
    /// `TRIGGER_DELAY_MS`. Unparseable or non-positive values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(name) = std::env::var("TRIGGER_NAME") {
            config.name = name;
        }
        if let Ok(sensors) = std::env::var("TRIGGER_SENSORS")
            && let Ok(n) = sensors.parse::<i64>()
            && n >= 1
        {
            config.sensors = n as usize;
        }
        if let Ok(delay) = std::env::var("TRIGGER_DELAY_MS")
            && let Ok(d) = delay.parse()
        {
            config.delay = d;
        }

        config
    }

    /// Default location of the config file (platform config dir).
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("multisensor-trigger").join("config.json"))
    }
}

/// Coerce any JSON value into a sensor count, defaulting to 1.
///
/// Positive integers pass through; positive fractional values truncate;
/// everything else (null, strings, zero, negatives) becomes 1.
fn lenient_sensor_count<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_sensor_count(&value))
}

fn coerce_sensor_count(value: &serde_json::Value) -> usize {
    if let Some(n) = value.as_u64()
        && n >= 1
    {
        return n as usize;
    }
    if let Some(f) = value.as_f64()
        && f >= 1.0
    {
        return f as usize;
    }
    1
}

/// Coerce any JSON value into a delay in milliseconds, defaulting to
/// [`DEFAULT_DELAY_MS`].
fn lenient_delay_ms<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_delay_ms(&value))
}

fn coerce_delay_ms(value: &serde_json::Value) -> u64 {
    if let Some(d) = value.as_u64() {
        return d;
    }
    if let Some(f) = value.as_f64()
        && f >= 0.0
    {
        return f as u64;
    }
    DEFAULT_DELAY_MS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AccessoryConfig::default();
        assert_eq!(config.name, DEFAULT_NAME);
        assert_eq!(config.sensors, 1);
        assert_eq!(config.delay, DEFAULT_DELAY_MS);
    }

    #[test]
    fn test_from_json_full_block() {
        let config = AccessoryConfig::from_json(
            r#"{"name": "Hallway Trigger", "sensors": 3, "delay": 2500}"#,
        )
        .unwrap();
        assert_eq!(config.name, "Hallway Trigger");
        assert_eq!(config.sensors, 3);
        assert_eq!(config.delay, 2500);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AccessoryConfig::from_json(r#"{"name": "Solo"}"#).unwrap();
        assert_eq!(config.name, "Solo");
        assert_eq!(config.sensors, 1);
        assert_eq!(config.delay, DEFAULT_DELAY_MS);
    }

    #[test]
    fn test_sensor_count_coercion() {
        // Non-numeric, zero and negative all coerce to 1, never error.
        for (raw, expected) in [
            (r#"{"sensors": "three"}"#, 1),
            (r#"{"sensors": null}"#, 1),
            (r#"{"sensors": 0}"#, 1),
            (r#"{"sensors": -4}"#, 1),
            (r#"{"sensors": 0.5}"#, 1),
            (r#"{"sensors": 2.9}"#, 2),
            (r#"{"sensors": 5}"#, 5),
        ] {
            let config = AccessoryConfig::from_json(raw).unwrap();
            assert_eq!(config.sensors, expected, "input: {raw}");
        }
    }

    #[test]
    fn test_delay_coercion() {
        for (raw, expected) in [
            (r#"{"delay": "fast"}"#, DEFAULT_DELAY_MS),
            (r#"{"delay": null}"#, DEFAULT_DELAY_MS),
            (r#"{"delay": -50}"#, DEFAULT_DELAY_MS),
            (r#"{"delay": 0}"#, 0),
            (r#"{"delay": 1500.7}"#, 1500),
            (r#"{"delay": 3000}"#, 3000),
        ] {
            let config = AccessoryConfig::from_json(raw).unwrap();
            assert_eq!(config.delay, expected, "input: {raw}");
        }
    }

    #[test]
    fn test_top_level_syntax_errors_surface() {
        assert!(AccessoryConfig::from_json("not json").is_err());
        assert!(AccessoryConfig::from_value(serde_json::json!("a string")).is_err());
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "Porch", "sensors": 2, "delay": 800}}"#).unwrap();

        let config = AccessoryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.name, "Porch");
        assert_eq!(config.sensors, 2);
        assert_eq!(config.delay, 800);
    }

    #[test]
    fn test_from_file_missing_reports_path() {
        let err = AccessoryConfig::from_file(Path::new("/nonexistent/trigger.json"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/trigger.json"));
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Some(path) = AccessoryConfig::default_config_path() {
            assert!(path.ends_with("multisensor-trigger/config.json"));
        }
    }
}
