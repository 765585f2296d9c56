//! Sequence alignment by longest common subsequence.
//!
//! - **LCS**: dynamic-programming table and one traced subsequence
//! - **Correspondence**: sparse anchor-based mapping between positions
//! - **Interpolate**: best-estimate mapping for positions between anchors
//! - **Similarity**: comparators for homologous pairing

pub mod correspondence;
pub mod interpolate;
pub mod lcs;
pub mod similarity;

pub use correspondence::{Alignment, AlignmentStep, AlignmentWalk};
pub use interpolate::{interpolate, scale, Direction, IndexInterpolator};
pub use lcs::{lcs_length, Anchor, LcsMatrix};
pub use similarity::{lcs_similarity, length_ratio};
