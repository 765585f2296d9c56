//! Convenient re-exports of the most commonly used types.
//!
//! ```
//! use synapsis_engine::prelude::*;
//! ```

pub use crate::alignment::{lcs_similarity, length_ratio, Alignment, Anchor, LcsMatrix};
pub use crate::config::{CrossoverConfig, DistanceConfig, EngineConfig, PairingConfig};
pub use crate::errors::{AlignmentError, ConfigError, DistanceError, PreferenceError};
pub use crate::pairing::{
    resolve, stable_roommates, MetricSense, Pair, PairingResolver, PreferenceMatrix,
    SimilarityMatrix,
};
pub use crate::recombination::{
    crossover, DistanceGenerator, Gametes, Meiosis, ScriptedDistance, UniformDistance,
};
