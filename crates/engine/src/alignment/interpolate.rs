//! Best-estimate correspondence for positions outside the LCS.
//!
//! A query index that is not an anchor lies in the gap between its nearest
//! anchors `prev` and `next`. The gap on the query side is mapped linearly
//! onto the gap on the other side. Missing anchors are replaced by virtual
//! ones just outside the sequences, at `(-1, -1)` and `(key_size,
//! value_size)`, so an empty alignment maps the whole range proportionally.

use super::lcs::Anchor;

/// Which side of an alignment is being queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Query left positions, answer right positions.
    LeftToRight,
    /// Query right positions, answer left positions.
    RightToLeft,
}

/// Maps positions on one side of an alignment to the other side.
#[derive(Debug, Clone, Copy)]
pub struct IndexInterpolator<'a> {
    anchors: &'a [Anchor],
    direction: Direction,
    key_size: usize,
    value_size: usize,
}

impl<'a> IndexInterpolator<'a> {
    /// `anchors` must be strictly increasing in both coordinates.
    pub fn new(
        anchors: &'a [Anchor],
        direction: Direction,
        left_size: usize,
        right_size: usize,
    ) -> Self {
        let (key_size, value_size) = match direction {
            Direction::LeftToRight => (left_size, right_size),
            Direction::RightToLeft => (right_size, left_size),
        };
        Self {
            anchors,
            direction,
            key_size,
            value_size,
        }
    }

    #[inline]
    fn key(&self, anchor: &Anchor) -> usize {
        match self.direction {
            Direction::LeftToRight => anchor.left,
            Direction::RightToLeft => anchor.right,
        }
    }

    #[inline]
    fn value(&self, anchor: &Anchor) -> usize {
        match self.direction {
            Direction::LeftToRight => anchor.right,
            Direction::RightToLeft => anchor.left,
        }
    }

    /// Position on the other side corresponding to `key`.
    ///
    /// Anchors map exactly. Other positions are interpolated between their
    /// neighbouring anchors; the result is always a valid index of the other
    /// side (or 0 if that side is empty) and never decreases as `key` grows.
    ///
    /// `key` must be less than the size of the queried side; larger keys
    /// give meaningless results.
    pub fn query(&self, key: usize) -> usize {
        debug_assert!(key < self.key_size, "query {key} out of range {}", self.key_size);

        let split = self.anchors.partition_point(|anchor| self.key(anchor) < key);
        if let Some(anchor) = self.anchors.get(split) {
            if self.key(anchor) == key {
                return self.value(anchor);
            }
        }

        let prev = split
            .checked_sub(1)
            .map(|i| (self.key(&self.anchors[i]), self.value(&self.anchors[i])));
        let next = self
            .anchors
            .get(split)
            .map(|anchor| (self.key(anchor), self.value(anchor)));

        interpolate(key, prev, next, self.key_size, self.value_size)
    }
}

/// Interpolate `key` between the anchors `prev` and `next` (`(key, value)`
/// pairs), with virtual anchors standing in for missing ones.
pub fn interpolate(
    key: usize,
    prev: Option<(usize, usize)>,
    next: Option<(usize, usize)>,
    key_size: usize,
    value_size: usize,
) -> usize {
    if value_size == 0 {
        return 0;
    }

    let (prev_key, prev_value) = prev.map_or((-1, -1), |(k, v)| (k as i64, v as i64));
    let (next_key, next_value) =
        next.map_or((key_size as i64, value_size as i64), |(k, v)| (k as i64, v as i64));

    let k = key as i64 - prev_key - 1;
    let k_max = next_key - prev_key - 2;

    let value = if next_value - prev_value > 1 {
        prev_value + 1 + scale(k, k_max, next_value - prev_value - 2)
    } else if 2 * k <= k_max {
        prev_value
    } else {
        next_value
    };

    // A virtual anchor is not a real position
    value.clamp(0, value_size as i64 - 1) as usize
}

/// Map `k` in `[0, k_max]` proportionally onto `[0, v_max]`, rounding half up.
pub fn scale(k: i64, k_max: i64, v_max: i64) -> i64 {
    if k_max == 0 {
        v_max / 2
    } else if v_max == 0 {
        0
    } else if k_max == v_max {
        k
    } else {
        (2 * k * v_max + k_max) / (2 * k_max)
    }
}
