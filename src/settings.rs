//! Table geometry settings
//!
//! Loaded once at startup from a JSON file; the simulation never reads them again.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Table geometry and bounce tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    pub screen_height: u32,
    pub screen_width: u32,
    pub ball_size: u32,
    pub paddle_height: u32,
    pub paddle_width: u32,
    /// Largest vertical speed a paddle hit can give the ball
    pub max_y_vel: f32,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            screen_height: 480,
            screen_width: 800,
            ball_size: 10,
            paddle_height: 60,
            paddle_width: 10,
            max_y_vel: 8.0,
        }
    }
}

impl TableSettings {
    /// Check the geometry is playable
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.paddle_height < 2 {
            return Err(SettingsError::Invalid(format!(
                "paddle_height must be at least 2, got {}",
                self.paddle_height
            )));
        }
        if self.screen_width == 0 {
            return Err(SettingsError::Invalid("screen_width must be positive".into()));
        }
        if self.screen_height <= self.paddle_height {
            return Err(SettingsError::Invalid(format!(
                "screen_height ({}) must exceed paddle_height ({})",
                self.screen_height, self.paddle_height
            )));
        }
        if self.screen_height <= self.ball_size {
            return Err(SettingsError::Invalid(format!(
                "screen_height ({}) must exceed ball_size ({})",
                self.screen_height, self.ball_size
            )));
        }
        if !self.max_y_vel.is_finite() || self.max_y_vel < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "max_y_vel must be a non-negative number, got {}",
                self.max_y_vel
            )));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
