//! Position correspondence between two aligned sequences.

use super::interpolate::{Direction, IndexInterpolator};
use super::lcs::{Anchor, LcsMatrix};
use crate::errors::AlignmentError;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// Sparse monotone correspondence between two sequences.
///
/// Stores only the matched anchors of a longest common subsequence plus the
/// two sequence lengths. Positions that are not anchors are mapped by
/// interpolating between the surrounding anchors, see [`IndexInterpolator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    anchors: Vec<Anchor>,
    left_size: usize,
    right_size: usize,
}

impl Alignment {
    /// Align `left` and `right` by their longest common subsequence.
    pub fn new<T, F>(left: &[T], right: &[T], equals: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        LcsMatrix::new(left, right, equals).into_alignment()
    }

    /// Build an alignment from explicit anchors.
    ///
    /// # Errors
    /// Returns an error if the anchors are not strictly increasing in both
    /// coordinates or fall outside the given sizes.
    pub fn from_anchors<I>(
        anchors: I,
        left_size: usize,
        right_size: usize,
    ) -> Result<Self, AlignmentError>
    where
        I: IntoIterator,
        I::Item: Into<Anchor>,
    {
        let anchors: Vec<Anchor> = anchors.into_iter().map(Into::into).collect();

        for (position, anchor) in anchors.iter().enumerate() {
            if anchor.left >= left_size || anchor.right >= right_size {
                return Err(AlignmentError::AnchorOutOfRange {
                    left: anchor.left,
                    right: anchor.right,
                    left_size,
                    right_size,
                });
            }
            if position > 0 {
                let previous = anchors[position - 1];
                if anchor.left <= previous.left || anchor.right <= previous.right {
                    return Err(AlignmentError::NotMonotonic { position });
                }
            }
        }

        Ok(Self::from_sorted_anchors(anchors, left_size, right_size))
    }

    pub(crate) fn from_sorted_anchors(
        anchors: Vec<Anchor>,
        left_size: usize,
        right_size: usize,
    ) -> Self {
        Self {
            anchors,
            left_size,
            right_size,
        }
    }

    #[inline]
    pub fn left_size(&self) -> usize {
        self.left_size
    }

    #[inline]
    pub fn right_size(&self) -> usize {
        self.right_size
    }

    /// Matched pairs, strictly increasing in both coordinates.
    #[inline]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Number of matched pairs (the LCS length).
    #[inline]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn interpolator(&self, direction: Direction) -> IndexInterpolator<'_> {
        IndexInterpolator::new(&self.anchors, direction, self.left_size, self.right_size)
    }

    /// Right position corresponding to left position `left_index`.
    ///
    /// `left_index` must be less than [`left_size`](Self::left_size); this is
    /// not checked in release builds.
    #[inline]
    pub fn right_index(&self, left_index: usize) -> usize {
        self.interpolator(Direction::LeftToRight).query(left_index)
    }

    /// Left position corresponding to right position `right_index`.
    ///
    /// `right_index` must be less than [`right_size`](Self::right_size); this
    /// is not checked in release builds.
    #[inline]
    pub fn left_index(&self, right_index: usize) -> usize {
        self.interpolator(Direction::RightToLeft).query(right_index)
    }

    /// Diff-style walk over both sequences.
    ///
    /// Yields one [`AlignmentStep`] per left position and per right position,
    /// merging the two at anchors. Between anchors the unmatched left
    /// positions come first, then the unmatched right positions.
    pub fn walk(&self) -> AlignmentWalk<'_> {
        AlignmentWalk {
            alignment: self,
            next_anchor: 0,
            next_left: 0,
            next_right: 0,
        }
    }
}

/// One step of an [`AlignmentWalk`]: a gap on one side, or an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentStep {
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl AlignmentStep {
    #[inline]
    pub fn is_anchor(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}

/// Iterator returned by [`Alignment::walk`].
#[derive(Debug, Clone)]
pub struct AlignmentWalk<'a> {
    alignment: &'a Alignment,
    next_anchor: usize,
    next_left: usize,
    next_right: usize,
}

impl Iterator for AlignmentWalk<'_> {
    type Item = AlignmentStep;

    fn next(&mut self) -> Option<Self::Item> {
        let anchor = self.alignment.anchors.get(self.next_anchor);
        let (left_limit, right_limit) = anchor.map_or(
            (self.alignment.left_size, self.alignment.right_size),
            |anchor| (anchor.left, anchor.right),
        );

        if self.next_left < left_limit {
            self.next_left += 1;
            return Some(AlignmentStep {
                left: Some(self.next_left - 1),
                right: None,
            });
        }
        if self.next_right < right_limit {
            self.next_right += 1;
            return Some(AlignmentStep {
                left: None,
                right: Some(self.next_right - 1),
            });
        }

        let anchor = anchor?;
        self.next_anchor += 1;
        self.next_left = anchor.left + 1;
        self.next_right = anchor.right + 1;
        Some(AlignmentStep {
            left: Some(anchor.left),
            right: Some(anchor.right),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.alignment.left_size - self.next_left)
            + (self.alignment.right_size - self.next_right)
            - (self.alignment.anchors.len() - self.next_anchor);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AlignmentWalk<'_> {}

impl FusedIterator for AlignmentWalk<'_> {}
