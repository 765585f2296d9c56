//! Distance generators for crossover.
//!
//! A distance is the number of positions copied from one parent before the
//! next breakpoint. Generators own their random source, so the same seed
//! always yields the same sequence of breakpoints.

use crate::errors::DistanceError;
use rand::Rng;
use rand_distr::{Distribution, Geometric};
use std::collections::VecDeque;

/// Source of distances between consecutive crossover breakpoints.
pub trait DistanceGenerator {
    /// Draw the next distance.
    fn generate(&mut self) -> u16;

    /// View the generator as an endless iterator of distances.
    fn distances(&mut self) -> Distances<'_, Self>
    where
        Self: Sized,
    {
        Distances { generator: self }
    }
}

impl<G: DistanceGenerator + ?Sized> DistanceGenerator for &mut G {
    #[inline]
    fn generate(&mut self) -> u16 {
        (**self).generate()
    }
}

impl<G: DistanceGenerator + ?Sized> DistanceGenerator for Box<G> {
    #[inline]
    fn generate(&mut self) -> u16 {
        (**self).generate()
    }
}

/// Iterator returned by [`DistanceGenerator::distances`]. Never ends.
#[derive(Debug)]
pub struct Distances<'a, G> {
    generator: &'a mut G,
}

impl<G: DistanceGenerator> Iterator for Distances<'_, G> {
    type Item = u16;

    #[inline]
    fn next(&mut self) -> Option<u16> {
        Some(self.generator.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Uniform distances in `0..=max`.
#[derive(Debug, Clone)]
pub struct UniformDistance<R> {
    max: u16,
    rng: R,
}

impl<R: Rng> UniformDistance<R> {
    /// # Errors
    /// Returns [`DistanceError::ZeroUpperBound`] if `max` is 0, since a
    /// generator that only ever yields 0 never moves the crossover cursors.
    pub fn new(max: u16, rng: R) -> Result<Self, DistanceError> {
        if max == 0 {
            return Err(DistanceError::ZeroUpperBound(max));
        }
        Ok(Self { max, rng })
    }

    pub fn max(&self) -> u16 {
        self.max
    }
}

impl<R: Rng> DistanceGenerator for UniformDistance<R> {
    #[inline]
    fn generate(&mut self) -> u16 {
        self.rng.random_range(0..=self.max)
    }
}

/// Replays a fixed script of distances, then draws uniformly.
///
/// Used to make crossover deterministic in tests and when reproducing a
/// known recombination.
#[derive(Debug, Clone)]
pub struct ScriptedDistance<R> {
    script: VecDeque<u16>,
    fallback: UniformDistance<R>,
}

impl<R: Rng> ScriptedDistance<R> {
    /// # Errors
    /// Returns an error if the fallback bound `max` is 0.
    pub fn new<I>(script: I, max: u16, rng: R) -> Result<Self, DistanceError>
    where
        I: IntoIterator<Item = u16>,
    {
        Ok(Self {
            script: script.into_iter().collect(),
            fallback: UniformDistance::new(max, rng)?,
        })
    }

    /// Scripted distances not yet replayed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl<R: Rng> DistanceGenerator for ScriptedDistance<R> {
    fn generate(&mut self) -> u16 {
        match self.script.pop_front() {
            Some(distance) => distance,
            None => self.fallback.generate(),
        }
    }
}

/// Distances from independent per-position breaks.
///
/// Each position ends the current segment with probability `p`, so segment
/// lengths follow a geometric distribution with mean `1/p`. The drawn
/// length counts the breaking position itself and is therefore at least 1;
/// lengths beyond `u16::MAX` saturate.
#[derive(Debug, Clone)]
pub struct GeometricDistance<R> {
    distribution: Geometric,
    p: f64,
    rng: R,
}

impl<R: Rng> GeometricDistance<R> {
    /// # Errors
    /// Returns [`DistanceError::InvalidBreakProbability`] unless `0 < p <= 1`.
    pub fn new(p: f64, rng: R) -> Result<Self, DistanceError> {
        if !(p > 0.0 && p <= 1.0) {
            return Err(DistanceError::InvalidBreakProbability(p));
        }
        let distribution =
            Geometric::new(p).map_err(|_| DistanceError::InvalidBreakProbability(p))?;
        Ok(Self {
            distribution,
            p,
            rng,
        })
    }

    pub fn probability(&self) -> f64 {
        self.p
    }
}

impl<R: Rng> DistanceGenerator for GeometricDistance<R> {
    fn generate(&mut self) -> u16 {
        // Geometric counts the failures before the first break
        let failures = self.distribution.sample(&mut self.rng);
        u16::try_from(failures.saturating_add(1)).unwrap_or(u16::MAX)
    }
}
