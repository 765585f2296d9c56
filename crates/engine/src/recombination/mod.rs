//! Recombination of aligned sequences.
//!
//! - **Distance**: generators for the spacing of crossover breakpoints
//! - **Crossover**: two-parent recombination along an alignment
//! - **Meiosis**: pairing, alignment and crossover of a whole genome

pub mod crossover;
pub mod distance;
pub mod meiosis;

pub use crossover::{crossover, crossover_with_breakpoints, Breakpoint};
pub use distance::{
    DistanceGenerator, Distances, GeometricDistance, ScriptedDistance, UniformDistance,
};
pub use meiosis::{Gametes, Meiosis, MeiosisReport, SlotReport};
