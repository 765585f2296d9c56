//! Crossover of two aligned sequences.
//!
//! Both parents are cut into alternating segments. On a straight step the
//! segment length is drawn on the left parent and the matching cut on the
//! right parent comes from the alignment; on a crossed step the roles swap.
//! Segments from one parent alternate between the two offspring, so every
//! item of either parent ends up in exactly one offspring.

use super::distance::DistanceGenerator;
use crate::alignment::Alignment;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// End of one crossover segment: exclusive cut positions on both parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub left: usize,
    pub right: usize,
}

/// Recombine `left` and `right` into two offspring.
///
/// `alignment` must have been built for these two sequences. If either
/// parent is empty the parents are returned unchanged.
pub fn crossover<T, G>(
    left: &[T],
    right: &[T],
    alignment: &Alignment,
    generator: G,
) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    G: DistanceGenerator,
{
    let (first, second, _) = crossover_with_breakpoints(left, right, alignment, generator);
    (first, second)
}

/// Like [`crossover`], also returning the cut positions of every step.
///
/// The last breakpoint is always `(left.len(), right.len())` unless a parent
/// is empty, in which case there are no breakpoints.
pub fn crossover_with_breakpoints<T, G>(
    left: &[T],
    right: &[T],
    alignment: &Alignment,
    mut generator: G,
) -> (Vec<T>, Vec<T>, Vec<Breakpoint>)
where
    T: Clone,
    G: DistanceGenerator,
{
    debug_assert_eq!(alignment.left_size(), left.len());
    debug_assert_eq!(alignment.right_size(), right.len());

    if left.is_empty() || right.is_empty() {
        return (left.to_vec(), right.to_vec(), Vec::new());
    }

    let mut first = Vec::with_capacity(left.len());
    let mut second = Vec::with_capacity(right.len());
    let mut breakpoints = Vec::new();

    let (mut left_begin, mut right_begin) = (0usize, 0usize);
    let mut straight = true;

    while left_begin < left.len() && right_begin < right.len() {
        let distance = usize::from(generator.generate());

        // Interpolated cuts can land before the cursor; clamp so segments
        // are never negative.
        let (left_end, right_end) = if straight {
            let left_end = left_begin.saturating_add(distance).min(left.len());
            let right_end = if left_end < left.len() {
                alignment.right_index(left_end).max(right_begin)
            } else {
                right.len()
            };
            (left_end, right_end)
        } else {
            let right_end = right_begin.saturating_add(distance).min(right.len());
            let left_end = if right_end < right.len() {
                alignment.left_index(right_end).max(left_begin)
            } else {
                left.len()
            };
            (left_end, right_end)
        };

        let (from_left, from_right) = if straight {
            (&mut first, &mut second)
        } else {
            (&mut second, &mut first)
        };
        from_left.extend_from_slice(&left[left_begin..left_end]);
        from_right.extend_from_slice(&right[right_begin..right_end]);

        trace!(distance, left_end, right_end, straight, "crossover breakpoint");
        breakpoints.push(Breakpoint {
            left: left_end,
            right: right_end,
        });

        left_begin = left_end;
        right_begin = right_end;
        straight = !straight;
    }

    (first, second, breakpoints)
}
