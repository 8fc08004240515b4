//! Magnifier configuration
//!
//! Read once at startup and treated as read-only for the process lifetime.
//! The two mode flags are only the *initial* values; the engine owns the
//! live copies and flips them from the toggle handlers.

use serde::{Deserialize, Serialize};

use crate::error::{MagnifierError, MagnifierResult};

/// Largest accepted pan step in pixels
pub const MAX_MOVE_STEP: i32 = 1 << 15;

/// Tunables for zooming, panning and mode defaults
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnifierConfig {
    /// Pixels moved by a single pan command
    pub move_step: i32,
    /// Multiplier applied per zoom step (must be > 1)
    pub scale_factor: f64,
    /// Smallest allowed scale
    pub min_scale: f64,
    /// Largest allowed scale
    pub max_scale: f64,
    /// Scale for new contexts while window tracking is on
    pub default_windows_scale: f64,
    /// Scale for new contexts while window tracking is off
    pub default_desktop_scale: f64,
    /// Initial window tracking mode
    pub window_tracking_enabled: bool,
    /// Initial cursor capturing mode
    pub cursor_capturing_enabled: bool,
}

impl Default for MagnifierConfig {
    fn default() -> Self {
        Self {
            move_step: 50,
            scale_factor: 1.25,
            min_scale: 1.0,
            max_scale: 8.0,
            default_windows_scale: 1.0,
            default_desktop_scale: 1.0,
            window_tracking_enabled: false,
            cursor_capturing_enabled: true,
        }
    }
}

impl MagnifierConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> MagnifierResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> MagnifierResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that all values are usable by the engine.
    pub fn validate(&self) -> MagnifierResult<()> {
        if self.move_step <= 0 {
            return Err(MagnifierError::invalid_config("move_step", "must be positive"));
        }
        if self.move_step > MAX_MOVE_STEP {
            return Err(MagnifierError::invalid_config(
                "move_step",
                "must not exceed 32768 pixels",
            ));
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 1.0 {
            return Err(MagnifierError::invalid_config(
                "scale_factor",
                "must be greater than 1",
            ));
        }
        if !self.min_scale.is_finite() || self.min_scale <= 0.0 {
            return Err(MagnifierError::invalid_config("min_scale", "must be positive"));
        }
        if !self.max_scale.is_finite() || self.max_scale < self.min_scale {
            return Err(MagnifierError::invalid_config(
                "max_scale",
                "must not be below min_scale",
            ));
        }
        if !self.in_bounds(self.default_windows_scale) {
            return Err(MagnifierError::invalid_config(
                "default_windows_scale",
                "must lie within [min_scale, max_scale]",
            ));
        }
        if !self.in_bounds(self.default_desktop_scale) {
            return Err(MagnifierError::invalid_config(
                "default_desktop_scale",
                "must lie within [min_scale, max_scale]",
            ));
        }
        Ok(())
    }

    fn in_bounds(&self, scale: f64) -> bool {
        scale >= self.min_scale && scale <= self.max_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(MagnifierConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = MagnifierConfig::from_json(r#"{ "move_step": 20, "max_scale": 4.0 }"#).unwrap();
        assert_eq!(config.move_step, 20);
        assert!((config.max_scale - 4.0).abs() < 1e-9);
        // Untouched fields keep their defaults
        assert!((config.scale_factor - 1.25).abs() < 1e-9);
        assert!(config.cursor_capturing_enabled);
    }

    #[test]
    fn test_from_json_rejects_bad_factor() {
        let err = MagnifierConfig::from_json(r#"{ "scale_factor": 0.5 }"#).unwrap_err();
        assert_eq!(
            err,
            MagnifierError::invalid_config("scale_factor", "must be greater than 1")
        );
    }

    #[test]
    fn test_from_json_rejects_default_outside_bounds() {
        let err = MagnifierConfig::from_json(r#"{ "default_windows_scale": 9.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            MagnifierError::InvalidConfig { field: "default_windows_scale", .. }
        ));
    }

    #[test]
    fn test_move_step_bounds() {
        let huge = MagnifierConfig {
            move_step: i32::MAX,
            ..Default::default()
        };
        assert_eq!(
            huge.validate().unwrap_err(),
            MagnifierError::invalid_config("move_step", "must not exceed 32768 pixels")
        );

        let max = MagnifierConfig {
            move_step: MAX_MOVE_STEP,
            ..Default::default()
        };
        assert!(max.validate().is_ok());

        let err = MagnifierConfig::from_json(r#"{ "move_step": 0 }"#).unwrap_err();
        assert_eq!(err, MagnifierError::invalid_config("move_step", "must be positive"));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = MagnifierConfig::from_json("{ move_step: ").unwrap_err();
        assert!(matches!(err, MagnifierError::ConfigParse(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = MagnifierConfig {
            window_tracking_enabled: true,
            default_windows_scale: 2.0,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(MagnifierConfig::from_json(&json).unwrap(), config);
    }
}
