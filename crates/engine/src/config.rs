//! Engine configuration.
//!
//! Configurations are plain serde structs so a whole recombination setup can
//! be stored as JSON and reloaded to reproduce a run.

use crate::errors::{ConfigError, DistanceError};
use crate::pairing::{MetricSense, PairingResolver};
use crate::recombination::{
    DistanceGenerator, GeometricDistance, ScriptedDistance, UniformDistance,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound of uniform crossover distances when none is configured.
pub const DEFAULT_MAX_DISTANCE: u16 = 16;

/// The master configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub pairing: PairingConfig,
    #[serde(default)]
    pub crossover: CrossoverConfig,
}

/// Homologous pairing parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairingConfig {
    /// Whether larger metrics mean more alike
    #[serde(default)]
    pub sense: MetricSense,
    /// Minimum likeness a pair must reach; unpaired items stay single
    #[serde(default)]
    pub threshold: Option<f64>,
}

impl PairingConfig {
    pub fn resolver(&self) -> PairingResolver<f64> {
        let resolver = PairingResolver::new(self.sense);
        match self.threshold {
            Some(threshold) => resolver.with_threshold(threshold),
            None => resolver,
        }
    }
}

/// Crossover parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrossoverConfig {
    #[serde(default)]
    pub distance: DistanceConfig,
    /// Optional RNG seed for reproducibility
    #[serde(default)]
    pub seed: Option<u64>,
}

/// How distances between breakpoints are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DistanceConfig {
    /// Uniform in `0..=max`.
    Uniform { max: u16 },
    /// Fixed script, then uniform in `0..=max`.
    Scripted { script: Vec<u16>, max: u16 },
    /// Geometric segment lengths with per-position break probability `p`.
    Geometric { p: f64 },
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self::Uniform {
            max: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl DistanceConfig {
    pub fn validate(&self) -> Result<(), DistanceError> {
        match *self {
            Self::Uniform { max } | Self::Scripted { max, .. } if max == 0 => {
                Err(DistanceError::ZeroUpperBound(max))
            }
            Self::Geometric { p } if !(p > 0.0 && p <= 1.0) => {
                Err(DistanceError::InvalidBreakProbability(p))
            }
            _ => Ok(()),
        }
    }

    /// Build a generator drawing from `rng`.
    pub fn build<R>(&self, rng: R) -> Result<Box<dyn DistanceGenerator>, DistanceError>
    where
        R: Rng + 'static,
    {
        Ok(match self {
            Self::Uniform { max } => Box::new(UniformDistance::new(*max, rng)?),
            Self::Scripted { script, max } => {
                Box::new(ScriptedDistance::new(script.iter().copied(), *max, rng)?)
            }
            Self::Geometric { p } => Box::new(GeometricDistance::new(*p, rng)?),
        })
    }
}

impl CrossoverConfig {
    /// Build the configured distance generator, seeded from `seed` or, if
    /// none is set, from the thread RNG.
    pub fn build_generator(&self) -> Result<Box<dyn DistanceGenerator>, DistanceError> {
        let rng = if let Some(seed) = self.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };
        self.distance.build(rng)
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(threshold) = self.pairing.threshold {
            if !threshold.is_finite() {
                return Err(ConfigError::InvalidThreshold(threshold));
            }
        }
        self.crossover.distance.validate()?;
        Ok(())
    }
}
