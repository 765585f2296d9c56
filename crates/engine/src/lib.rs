//! # Synapsis Engine
//!
//! The `synapsis_engine` crate implements meiotic recombination of opaque
//! sequences. Items are never inspected directly; callers supply the
//! comparators.
//!
//! - [`pairing`] groups items into stable homologous pairs.
//! - [`alignment`] aligns two sequences by longest common subsequence and
//!   maps positions between them.
//! - [`recombination`] crosses aligned sequences over and runs whole-genome
//!   meiosis.

pub mod alignment;
pub mod config;
pub mod errors;
pub mod pairing;
pub mod prelude;
pub mod recombination;

pub use alignment::Alignment;
pub use config::EngineConfig;
pub use pairing::{resolve, MetricSense, Pair};
pub use recombination::{crossover, Meiosis};
