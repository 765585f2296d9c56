use clap::{Args, ValueEnum};
use std::path::PathBuf;
use synapsis_engine::config::{
    CrossoverConfig, DistanceConfig, EngineConfig, PairingConfig, DEFAULT_MAX_DISTANCE,
};
use synapsis_engine::MetricSense;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Pairing overrides shared by `pair` and `meiosis`.
#[derive(Args, Debug, Clone, Default)]
pub struct PairingArgs {
    /// Minimum likeness a pair must reach
    ///
    /// Sequences whose best partner falls short stay unpaired.
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Pair by LCS distance (1 - similarity) instead of similarity
    #[arg(long)]
    pub less_is_more: bool,
}

impl PairingArgs {
    pub fn apply(&self, config: &mut PairingConfig) {
        if self.less_is_more {
            config.sense = MetricSense::LessIsMoreAlike;
        }
        if self.threshold.is_some() {
            config.threshold = self.threshold;
        }
    }
}

/// Crossover overrides shared by `cross` and `meiosis`.
#[derive(Args, Debug, Clone, Default)]
pub struct DistanceArgs {
    /// Random seed (default: configured seed, else random)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Upper bound of uniform breakpoint distances
    #[arg(long)]
    pub max_distance: Option<u16>,

    /// Distances to replay before drawing at random, e.g. "2,0,4,3"
    #[arg(long, value_delimiter = ',')]
    pub script: Option<Vec<u16>>,
}

impl DistanceArgs {
    pub fn apply(&self, config: &mut CrossoverConfig) {
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        let configured_max = match &config.distance {
            DistanceConfig::Uniform { max } | DistanceConfig::Scripted { max, .. } => *max,
            DistanceConfig::Geometric { .. } => DEFAULT_MAX_DISTANCE,
        };
        let max = self.max_distance.unwrap_or(configured_max);

        if let Some(script) = &self.script {
            config.distance = DistanceConfig::Scripted {
                script: script.clone(),
                max,
            };
        } else if self.max_distance.is_some() {
            config.distance = DistanceConfig::Uniform { max };
        }
    }
}

#[derive(Args, Debug)]
pub struct PairArgs {
    /// Input file, one sequence per line
    pub input: PathBuf,

    #[command(flatten)]
    pub pairing: PairingArgs,
}

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// Input file; the first two sequences are aligned
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct CrossArgs {
    /// Input file; the first two sequences are crossed over
    pub input: PathBuf,

    #[command(flatten)]
    pub distance: DistanceArgs,
}

#[derive(Args, Debug)]
pub struct MeiosisArgs {
    /// Input file, one chromosome per line
    pub input: PathBuf,

    #[command(flatten)]
    pub pairing: PairingArgs,

    #[command(flatten)]
    pub distance: DistanceArgs,
}

impl MeiosisArgs {
    pub fn apply(&self, config: &mut EngineConfig) {
        self.pairing.apply(&mut config.pairing);
        self.distance.apply(&mut config.crossover);
    }
}
