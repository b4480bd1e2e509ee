//! Simulation settings
//!
//! Stored as JSON. Missing fields fall back to defaults so older files keep
//! loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Simulation settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Masses ===
    /// Block 1 mass is 10^m1_exponent
    pub m1_exponent: i32,
    /// Block 2 mass is 10^m2_exponent
    pub m2_exponent: i32,

    // === Stepping ===
    /// Time budget per tick
    pub dt: f64,
    /// Collisions resolved per tick before the rest is deferred
    pub max_events_per_advance: usize,

    // === Scheduling ===
    /// Ticks per second in real-time mode
    pub tick_rate_hz: f64,
    /// Catch-up limit per frame
    pub max_ticks_per_frame: u32,

    // === Log ===
    /// Lines kept in the collision log
    pub log_max_lines: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            m1_exponent: 0,
            m2_exponent: 0,

            dt: DEFAULT_DT,
            max_events_per_advance: MAX_EVENTS_PER_ADVANCE,

            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            max_ticks_per_frame: MAX_TICKS_PER_FRAME,

            log_max_lines: LOG_MAX_LINES,
        }
    }
}

impl Settings {
    /// Defaults with the given mass exponents
    pub fn with_masses(m1_exponent: i32, m2_exponent: i32) -> Self {
        Self {
            m1_exponent,
            m2_exponent,
            ..Self::default()
        }
    }

    /// Mass ratio m2 / m1
    pub fn mass_ratio(&self) -> f64 {
        10f64.powi(self.m2_exponent - self.m1_exponent)
    }

    /// Check ranges; everything downstream assumes these hold
    pub fn validate(&self) -> Result<()> {
        let exponents = MIN_MASS_EXPONENT..=MAX_MASS_EXPONENT;
        for (name, n) in [("m1_exponent", self.m1_exponent), ("m2_exponent", self.m2_exponent)] {
            if !exponents.contains(&n) {
                return Err(Error::InvalidSettings(format!(
                    "{name} = {n} outside {MIN_MASS_EXPONENT}..={MAX_MASS_EXPONENT}"
                )));
            }
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(Error::InvalidSettings(format!("dt = {} must be positive", self.dt)));
        }
        if !(self.tick_rate_hz.is_finite() && self.tick_rate_hz > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "tick_rate_hz = {} must be positive",
                self.tick_rate_hz
            )));
        }
        if self.max_events_per_advance == 0 {
            return Err(Error::InvalidSettings("max_events_per_advance must be at least 1".into()));
        }
        if self.max_ticks_per_frame == 0 {
            return Err(Error::InvalidSettings("max_ticks_per_frame must be at least 1".into()));
        }
        if self.log_max_lines == 0 {
            return Err(Error::InvalidSettings("log_max_lines must be at least 1".into()));
        }
        Ok(())
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Using default settings ({err})");
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.dt, 1.0);
        assert_eq!(settings.log_max_lines, 50);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "m2_exponent": 2, "dt": 0.5 }"#).unwrap();
        assert_eq!(settings.m1_exponent, 0);
        assert_eq!(settings.m2_exponent, 2);
        assert_eq!(settings.dt, 0.5);
        assert_eq!(settings.max_events_per_advance, MAX_EVENTS_PER_ADVANCE);
        assert_eq!(settings.mass_ratio(), 100.0);
    }

    #[test]
    fn test_rejects_out_of_range_exponent() {
        let err = Settings::from_json(r#"{ "m1_exponent": 11 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidSettings(_)));
        assert!(Settings::with_masses(-1, 0).validate().is_err());
    }

    #[test]
    fn test_rejects_bad_numbers() {
        for json in [
            r#"{ "dt": 0.0 }"#,
            r#"{ "dt": -1.0 }"#,
            r#"{ "tick_rate_hz": 0.0 }"#,
            r#"{ "max_events_per_advance": 0 }"#,
            r#"{ "max_ticks_per_frame": 0 }"#,
            r#"{ "log_max_lines": 0 }"#,
        ] {
            assert!(Settings::from_json(json).is_err(), "{json}");
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Settings::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("wall_blocks_settings_{}.json", std::process::id()));
        let settings = Settings::with_masses(1, 4);
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let settings = Settings::load_or_default("/definitely/not/here.json");
        assert_eq!(settings, Settings::default());
    }
}
