//! Whole-genome recombination.
//!
//! A genome is a list of chromosomes. Meiosis pairs homologous chromosomes,
//! crosses each pair over along its LCS alignment and deals the offspring
//! into two gametes. Chromosomes without a homolog are copied into both.

use super::crossover::{crossover_with_breakpoints, Breakpoint};
use super::distance::DistanceGenerator;
use crate::alignment::Alignment;
use crate::config::PairingConfig;
use crate::pairing::{Pair, PairingResolver};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Provenance of one gamete slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotReport {
    /// Chromosomes the slot was built from.
    pub pair: Pair<f64>,
    /// LCS length of the pair; 0 for a single.
    pub lcs_length: usize,
    /// Crossover cuts; empty for a single.
    pub breakpoints: Vec<Breakpoint>,
}

/// What happened during one meiosis, slot by slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeiosisReport {
    pub slots: Vec<SlotReport>,
}

impl MeiosisReport {
    pub fn pair_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.pair.is_paired()).count()
    }

    pub fn single_count(&self) -> usize {
        self.slots.len() - self.pair_count()
    }

    pub fn breakpoint_count(&self) -> usize {
        self.slots.iter().map(|slot| slot.breakpoints.len()).sum()
    }
}

/// The two gametes produced by one meiosis.
///
/// Both gametes have one chromosome per slot of the report, in the same
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gametes<T> {
    pub gametes: [Vec<Vec<T>>; 2],
    pub report: MeiosisReport,
}

/// Recombination of one genome.
#[derive(Debug, Clone)]
pub struct Meiosis<'a, T> {
    genome: &'a [Vec<T>],
    resolver: PairingResolver<f64>,
}

impl<'a, T: Clone> Meiosis<'a, T> {
    pub fn new(genome: &'a [Vec<T>], pairing: &PairingConfig) -> Self {
        Self::with_resolver(genome, pairing.resolver())
    }

    pub fn with_resolver(genome: &'a [Vec<T>], resolver: PairingResolver<f64>) -> Self {
        Self { genome, resolver }
    }

    pub fn genome(&self) -> &'a [Vec<T>] {
        self.genome
    }

    /// Pair the chromosomes by `similarity`.
    pub fn pairs<S>(&self, similarity: S) -> Vec<Pair<f64>>
    where
        S: Fn(&[T], &[T]) -> f64,
    {
        self.resolver
            .resolve(self.genome, |a: &Vec<T>, b: &Vec<T>| similarity(a, b))
    }

    /// Run meiosis.
    ///
    /// Homologs are found with `similarity`, aligned with `equals` and
    /// crossed over with distances from `generator`. Pairs are processed in
    /// sorted order, so a seeded generator gives reproducible gametes.
    pub fn run<S, E, G>(&self, similarity: S, equals: E, mut generator: G) -> Gametes<T>
    where
        S: Fn(&[T], &[T]) -> f64,
        E: Fn(&T, &T) -> bool,
        G: DistanceGenerator,
    {
        let pairs = self.pairs(similarity);
        let mut first = Vec::with_capacity(pairs.len());
        let mut second = Vec::with_capacity(pairs.len());
        let mut report = MeiosisReport::default();

        for pair in pairs {
            let slot = match pair {
                Pair::Paired { left, right, .. } => {
                    let (a, b) = (&self.genome[left], &self.genome[right]);
                    let alignment = Alignment::new(a, b, &equals);
                    let (x, y, breakpoints) =
                        crossover_with_breakpoints(a, b, &alignment, &mut generator);
                    first.push(x);
                    second.push(y);
                    SlotReport {
                        pair,
                        lcs_length: alignment.len(),
                        breakpoints,
                    }
                }
                Pair::Single { index } => {
                    first.push(self.genome[index].clone());
                    second.push(self.genome[index].clone());
                    SlotReport {
                        pair,
                        lcs_length: 0,
                        breakpoints: Vec::new(),
                    }
                }
            };
            report.slots.push(slot);
        }

        debug!(
            chromosomes = self.genome.len(),
            pairs = report.pair_count(),
            singles = report.single_count(),
            breakpoints = report.breakpoint_count(),
            "meiosis complete"
        );

        Gametes {
            gametes: [first, second],
            report,
        }
    }
}
