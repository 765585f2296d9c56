//! Longest common subsequence table and backtrack.

use super::correspondence::Alignment;
use serde::{Deserialize, Serialize};

/// A matched position pair: `left[left] == right[right]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Anchor {
    pub left: usize,
    pub right: usize,
}

impl Anchor {
    #[inline]
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
}

impl From<(usize, usize)> for Anchor {
    fn from((left, right): (usize, usize)) -> Self {
        Self { left, right }
    }
}

#[doc(alias = "LcsAligner")]
/// Dynamic-programming table of LCS lengths between two sequences, together
/// with the anchors of one longest common subsequence.
///
/// `length_at(i, j)` is the LCS length of `left[..i]` and `right[..j]`.
#[derive(Debug, Clone)]
pub struct LcsMatrix {
    /// Row-major `(left.len() + 1) x (right.len() + 1)` table.
    lengths: Vec<usize>,
    width: usize,
    left_size: usize,
    right_size: usize,
    anchors: Vec<Anchor>,
}

impl LcsMatrix {
    /// Fill the table for `left` and `right` under `equals` and trace back one
    /// longest common subsequence.
    ///
    /// The backtrack walks from the bottom-right corner, taking a diagonal
    /// step whenever the items match. Otherwise it moves up when that keeps a
    /// strictly longer subsequence and left on ties, which favours matches
    /// late in `right`.
    pub fn new<T, F>(left: &[T], right: &[T], equals: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        let width = right.len() + 1;
        let mut lengths = vec![0usize; (left.len() + 1) * width];

        for (i, a) in left.iter().enumerate() {
            for (j, b) in right.iter().enumerate() {
                let cell = (i + 1) * width + j + 1;
                lengths[cell] = if equals(a, b) {
                    lengths[i * width + j] + 1
                } else {
                    lengths[i * width + j + 1].max(lengths[(i + 1) * width + j])
                };
            }
        }

        let mut matrix = Self {
            lengths,
            width,
            left_size: left.len(),
            right_size: right.len(),
            anchors: Vec::new(),
        };
        matrix.anchors = matrix.backtrack(left, right, &equals);
        matrix
    }

    #[inline]
    pub fn length_at(&self, i: usize, j: usize) -> usize {
        self.lengths[i * self.width + j]
    }

    /// Length of the longest common subsequence.
    #[inline]
    pub fn lcs_length(&self) -> usize {
        self.length_at(self.left_size, self.right_size)
    }

    /// Matched pairs, strictly increasing in both coordinates.
    #[inline]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn left_size(&self) -> usize {
        self.left_size
    }

    pub fn right_size(&self) -> usize {
        self.right_size
    }

    /// Turn the traced subsequence into an [`Alignment`], dropping the table.
    pub fn into_alignment(self) -> Alignment {
        Alignment::from_sorted_anchors(self.anchors, self.left_size, self.right_size)
    }

    fn backtrack<T, F>(&self, left: &[T], right: &[T], equals: &F) -> Vec<Anchor>
    where
        F: Fn(&T, &T) -> bool,
    {
        let mut anchors = Vec::with_capacity(self.lcs_length());
        let (mut i, mut j) = (left.len(), right.len());

        while i > 0 && j > 0 {
            if equals(&left[i - 1], &right[j - 1]) {
                anchors.push(Anchor::new(i - 1, j - 1));
                i -= 1;
                j -= 1;
            } else if self.length_at(i - 1, j) > self.length_at(i, j - 1) {
                i -= 1;
            } else {
                j -= 1;
            }
        }

        anchors.reverse();
        anchors
    }
}

/// LCS length of two sequences in O(min-row) memory.
///
/// Use [`LcsMatrix`] when the matched positions are needed as well.
pub fn lcs_length<T: PartialEq>(left: &[T], right: &[T]) -> usize {
    if left.is_empty() || right.is_empty() {
        return 0;
    }
    let n = right.len();
    let mut prev = vec![0usize; n + 1];
    let mut curr = vec![0usize; n + 1];
    for a in left {
        for (j, b) in right.iter().enumerate() {
            curr[j + 1] = if a == b {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}
