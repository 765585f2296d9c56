//! Homologous pairing.
//!
//! This module groups items into pairs by mutual similarity:
//! - **Metric**: direction-aware comparison of similarity or distance values
//! - **Matrix**: triangular pairwise metric store with logical row removal
//! - **Roommates**: Irving's stable-roommates algorithm
//! - **Resolver**: reduction, stable matching, greedy fallback and result assembly

pub mod matrix;
pub mod metric;
pub mod resolver;
pub mod roommates;

pub use matrix::{Extremum, SimilarityMatrix};
pub use metric::MetricSense;
pub use resolver::{resolve, Pair, PairingResolver};
pub use roommates::{stable_roommates, PersonIndex, PreferenceMatrix, StableRoommatesSolver};
