use serde::Deserialize;

use crate::error::ConfigError;

/// Lives at the start of a run.
pub const MAX_LIVES: i32 = 5;
/// Cumulative defeats needed per level increment.
pub const DEFEATS_PER_LEVEL: u32 = 6;
/// Lateral positions an enemy can approach on.
pub const LANES: [f32; 3] = [-10.0, 0.0, 10.0];

/// Tunables for one game session. Every field falls back to its default when
/// missing from JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TyperConfig {
    /// Seed for word, lane and jitter randomness.
    pub seed: u64,
    pub max_lives: i32,
    pub defeats_per_level: u32,
    pub lanes: Vec<f32>,
}

impl Default for TyperConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_lives: MAX_LIVES,
            defeats_per_level: DEFEATS_PER_LEVEL,
            lanes: LANES.to_vec(),
        }
    }
}

impl TyperConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }

    /// Parse and validate a configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TyperConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lanes.is_empty() {
            return Err(ConfigError::NoLanes);
        }
        if self.max_lives < 1 {
            return Err(ConfigError::InvalidLives(self.max_lives));
        }
        if self.defeats_per_level == 0 {
            return Err(ConfigError::InvalidDefeatsPerLevel);
        }
        Ok(())
    }
}
