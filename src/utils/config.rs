//! Engine configuration with JSON persistence

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{SmoothedPoint, DEFAULT_MAX_SAMPLE_AGE_MS};
use crate::processing::TrackSmoother;

/// Tunable parameters for the fusion engine and track smoothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum sample age admitted into fusion (milliseconds)
    pub max_sample_age_ms: u64,
    /// Process noise covariance for track smoothing
    pub process_noise: f64,
    /// Measurement noise covariance for track smoothing
    pub measurement_noise: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_sample_age_ms: DEFAULT_MAX_SAMPLE_AGE_MS,
            process_noise: TrackSmoother::DEFAULT_PROCESS_NOISE,
            measurement_noise: TrackSmoother::DEFAULT_MEASUREMENT_NOISE,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    #[error("failed to read or write config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl EngineConfig {
    /// Loads and validates a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Rejects parameter values the engine cannot operate with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_sample_age_ms == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "max_sample_age_ms".to_string(),
                value: self.max_sample_age_ms.to_string(),
                reason: "staleness window must admit at least one sample".to_string(),
            });
        }
        if self.process_noise <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "process_noise".to_string(),
                value: self.process_noise.to_string(),
                reason: "noise covariance must be positive".to_string(),
            });
        }
        if self.measurement_noise <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "measurement_noise".to_string(),
                value: self.measurement_noise.to_string(),
                reason: "noise covariance must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Builds a smoother seeded at `initial` with this configuration's noise
    /// parameters.
    pub fn smoother(&self, initial: SmoothedPoint) -> TrackSmoother {
        TrackSmoother::with_noise(initial, self.process_noise, self.measurement_noise)
    }
}
