//! Pipeline configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_FULL_RENDER_DISTANCE_MI, SURVEILLANCE_RANGE_M};
use crate::enums::ChannelVariant;

/// Configuration for the traffic pipeline, supplied once at startup and
/// replaceable at runtime through the facade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficConfig {
    /// Globally enable terrain clamping (individual aircraft still opt in).
    pub enable_surface_clamping: bool,
    /// Full-detail rendering distance in statute miles, scaled by camera
    /// zoom each frame.
    pub max_full_render_distance_mi: f64,
    /// Surveillance reporting range in meters.
    pub surveillance_range_m: f64,
    /// Scale applied to the effective vertical offset before clamping.
    /// A negative value disables offset scaling entirely.
    pub offset_scale: f64,
    /// Which downstream surveillance channel design to drive.
    pub channel: ChannelVariant,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            enable_surface_clamping: true,
            max_full_render_distance_mi: DEFAULT_FULL_RENDER_DISTANCE_MI,
            surveillance_range_m: SURVEILLANCE_RANGE_M,
            offset_scale: 1.0,
            channel: ChannelVariant::default(),
        }
    }
}

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be finite and positive, got {value}")]
    InvalidDistance { field: &'static str, value: f64 },
}

impl TrafficConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_full_render_distance_mi.is_finite() || self.max_full_render_distance_mi <= 0.0
        {
            return Err(ConfigError::InvalidDistance {
                field: "max_full_render_distance_mi",
                value: self.max_full_render_distance_mi,
            });
        }
        if !self.surveillance_range_m.is_finite() || self.surveillance_range_m <= 0.0 {
            return Err(ConfigError::InvalidDistance {
                field: "surveillance_range_m",
                value: self.surveillance_range_m,
            });
        }
        Ok(())
    }
}
