//! Centralized engine options with TOML preset support.
//!
//! All tweakable settings (joystick range, gesture thresholds) are
//! consolidated here. Options serialize to/from TOML for tuning presets,
//! and every numeric value is validated before an engine will accept it.

mod gestures;
mod joystick;

use std::path::Path;

pub use gestures::GestureOptions;
pub use joystick::JoystickOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlickstickError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[gestures]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Joystick displacement parameters.
    pub joystick: JoystickOptions,
    /// Gesture classification thresholds.
    pub gestures: GestureOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FlickstickError::Io`] if the file cannot be read and
    /// [`FlickstickError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, FlickstickError> {
        let content = std::fs::read_to_string(path).map_err(FlickstickError::Io)?;
        toml::from_str(&content)
            .map_err(|e| FlickstickError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`FlickstickError::OptionsParse`] on serialization failure
    /// and [`FlickstickError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), FlickstickError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlickstickError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FlickstickError::Io)?;
        }
        std::fs::write(path, content).map_err(FlickstickError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Check that every range and threshold is positive and finite.
    ///
    /// Zero or negative values are a caller contract violation: a zero
    /// movement range divides by zero in normalization, and non-positive
    /// thresholds make classification undefined. Engines refuse to start
    /// rather than misclassify.
    ///
    /// # Errors
    ///
    /// Returns [`FlickstickError::InvalidOptions`] naming the first
    /// offending field.
    pub fn validate(&self) -> Result<(), FlickstickError> {
        let checks = [
            ("joystick.movement_range", self.joystick.movement_range),
            ("gestures.hold_time", self.gestures.hold_time),
            ("gestures.flick_time", self.gestures.flick_time),
            (
                "gestures.min_swipe_distance",
                self.gestures.min_swipe_distance,
            ),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(FlickstickError::InvalidOptions(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[gestures]
hold_time = 0.35
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.gestures.hold_time, 0.35);
        // Everything else should be default
        assert_eq!(opts.gestures.flick_time, 0.2);
        assert_eq!(opts.joystick.movement_range, 100.0);
    }

    #[test]
    fn defaults_validate() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_values() {
        let mut opts = Options::default();
        opts.joystick.movement_range = 0.0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.gestures.min_swipe_distance = -30.0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.gestures.flick_time = f32::NAN;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn validation_error_names_the_field() {
        let mut opts = Options::default();
        opts.gestures.hold_time = 0.0;
        let err = opts.validate().unwrap_err();
        assert!(err.to_string().contains("gestures.hold_time"));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("joystick"));
        assert!(props.contains_key("gestures"));

        let gestures = &props["gestures"]["properties"];
        assert!(gestures.get("hold_time").is_some());
        assert!(gestures.get("flick_time").is_some());
        assert!(gestures.get("min_swipe_distance").is_some());
    }
}
