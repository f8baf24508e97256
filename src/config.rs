//! Engine configuration
//!
//! Heuristic weights and the difficulty-to-depth policy. Every field has a
//! default, so a TOML file only needs to mention what it overrides:
//!
//! ```toml
//! [weights]
//! mobility = 0.5
//!
//! [depths]
//! hard = 6
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::Difficulty;
use crate::error::{EngineError, Result};

/// Weights of the combined evaluation.
///
/// `actual_corners` splits the corner term between corners already held and
/// corners currently playable; the playable share is `1 - actual_corners`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    pub coin_parity: f64,
    pub mobility: f64,
    pub stability: f64,
    pub corners: f64,
    pub actual_corners: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            coin_parity: 0.05,
            mobility: 0.35,
            stability: 0.20,
            corners: 0.40,
            actual_corners: 0.8,
        }
    }
}

impl HeuristicWeights {
    #[inline]
    pub fn potential_corners(&self) -> f64 {
        1.0 - self.actual_corners
    }

    fn validate(&self) -> Result<()> {
        let all = [
            ("coin_parity", self.coin_parity),
            ("mobility", self.mobility),
            ("stability", self.stability),
            ("corners", self.corners),
            ("actual_corners", self.actual_corners),
        ];
        if let Some((name, value)) = all.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EngineError::InvalidConfig(format!(
                "weight {name} is not finite: {value}"
            )));
        }
        if !(0.0..=1.0).contains(&self.actual_corners) {
            return Err(EngineError::InvalidConfig(format!(
                "actual_corners must be within [0, 1], got {}",
                self.actual_corners
            )));
        }
        Ok(())
    }
}

/// Search depth (in plies) for each difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyDepths {
    pub easy: u8,
    pub medium: u8,
    pub hard: u8,
}

impl Default for DifficultyDepths {
    fn default() -> Self {
        Self {
            easy: 1,
            medium: 3,
            hard: 5,
        }
    }
}

impl DifficultyDepths {
    #[inline]
    pub fn depth(&self, difficulty: Difficulty) -> u8 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    fn validate(&self) -> Result<()> {
        for difficulty in Difficulty::ALL {
            if self.depth(difficulty) == 0 {
                return Err(EngineError::InvalidConfig(format!(
                    "depth for {difficulty} must be at least 1"
                )));
            }
        }
        Ok(())
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: HeuristicWeights,
    pub depths: DifficultyDepths,
}

impl EngineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| EngineError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded engine config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.depths.validate()
    }
}
