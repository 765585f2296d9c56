//! Homologous pairing of items by pairwise similarity.

use super::matrix::SimilarityMatrix;
use super::metric::MetricSense;
use super::roommates::stable_roommates;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// One entry of a pairing result.
///
/// Every input index appears in exactly one `Pair`: either as one side of a
/// `Paired` entry (with `left < right`) or as a `Single`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Pair<M> {
    /// Two items matched together, with the metric between them.
    Paired { left: usize, right: usize, metric: M },
    /// An item left without a partner.
    Single { index: usize },
}

impl<M> Pair<M> {
    /// Build a matched pair, putting the smaller index on the left.
    pub fn paired(a: usize, b: usize, metric: M) -> Self {
        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        Self::Paired {
            left,
            right,
            metric,
        }
    }

    pub fn single(index: usize) -> Self {
        Self::Single { index }
    }

    /// Index of the item (or of the smaller item, for a pair).
    #[inline]
    pub fn left(&self) -> usize {
        match self {
            Self::Paired { left, .. } => *left,
            Self::Single { index } => *index,
        }
    }

    #[inline]
    pub fn right(&self) -> Option<usize> {
        match self {
            Self::Paired { right, .. } => Some(*right),
            Self::Single { .. } => None,
        }
    }

    #[inline]
    pub fn metric(&self) -> Option<&M> {
        match self {
            Self::Paired { metric, .. } => Some(metric),
            Self::Single { .. } => None,
        }
    }

    #[inline]
    pub fn is_paired(&self) -> bool {
        matches!(self, Self::Paired { .. })
    }

    /// Position in a sorted result: pairs before singles, then by `left`,
    /// then by `right`.
    #[inline]
    pub fn sort_key(&self) -> (u8, usize, usize) {
        match self {
            Self::Paired { left, right, .. } => (0, *left, *right),
            Self::Single { index } => (1, *index, 0),
        }
    }

    /// Total order on positions; the metric does not take part.
    pub fn cmp_position(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// Pairs items by mutual similarity.
///
/// Items are reduced to an even set, matched with the stable-roommates
/// algorithm and, if no stable matching exists, matched greedily by
/// repeatedly taking the most alike remaining pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairingResolver<M> {
    sense: MetricSense,
    threshold: Option<M>,
}

impl<M: Copy + PartialOrd> PairingResolver<M> {
    pub fn new(sense: MetricSense) -> Self {
        Self {
            sense,
            threshold: None,
        }
    }

    /// Require every matched pair's metric to pass `threshold`.
    pub fn with_threshold(mut self, threshold: M) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn sense(&self) -> MetricSense {
        self.sense
    }

    pub fn threshold(&self) -> Option<M> {
        self.threshold
    }

    /// Pair `items` using the symmetric comparator `compare`.
    ///
    /// The result covers every index of `items` exactly once and is sorted
    /// with pairs first, each group ascending by index.
    pub fn resolve<T, F>(&self, items: &[T], compare: F) -> Vec<Pair<M>>
    where
        F: Fn(&T, &T) -> M,
    {
        let mut matrix = SimilarityMatrix::new(items, compare, self.sense);
        matrix.reduce(self.threshold);
        let removed = matrix.tail().to_vec();

        let mut result = Vec::with_capacity(items.len());

        if !matrix.is_empty() {
            match stable_roommates(&matrix.roommates_matrix()) {
                Some(partners) => {
                    for (person, &partner) in partners.iter().enumerate() {
                        if person < partner {
                            self.push_pair(&matrix, person, partner, &mut result);
                        }
                    }
                }
                None => {
                    debug!(
                        size = matrix.size(),
                        "no stable matching; falling back to greedy pairing"
                    );
                    self.pair_greedily(&mut matrix, &mut result);
                }
            }
        }

        result.extend(removed.into_iter().map(Pair::single));
        result.sort_by(Pair::cmp_position);

        debug!(
            items = items.len(),
            pairs = result.iter().filter(|pair| pair.is_paired()).count(),
            "resolved pairs"
        );
        result
    }

    /// Repeatedly pair the most alike remaining rows until none are left.
    fn pair_greedily(&self, matrix: &mut SimilarityMatrix<M>, out: &mut Vec<Pair<M>>) {
        while let Some(best) = matrix.global_extremum() {
            self.push_pair(matrix, best.row, best.column, out);
            // row > column, so the column index is unaffected
            matrix.remove(best.row);
            matrix.remove(best.column);
        }
    }

    /// Emit a pair of logical rows, or two singles if the pair itself fails
    /// the threshold.
    fn push_pair(
        &self,
        matrix: &SimilarityMatrix<M>,
        row: usize,
        column: usize,
        out: &mut Vec<Pair<M>>,
    ) {
        let metric = matrix.at(row, column);
        let (a, b) = (matrix.original_index(row), matrix.original_index(column));
        if self.sense.passes(&metric, self.threshold.as_ref()) {
            out.push(Pair::paired(a, b, metric));
        } else {
            out.push(Pair::single(a));
            out.push(Pair::single(b));
        }
    }
}

/// Pair `items` by `compare` under `sense`, optionally requiring each pair to
/// pass `threshold`. See [`PairingResolver::resolve`].
pub fn resolve<T, M, F>(
    items: &[T],
    compare: F,
    sense: MetricSense,
    threshold: Option<M>,
) -> Vec<Pair<M>>
where
    M: Copy + PartialOrd,
    F: Fn(&T, &T) -> M,
{
    let resolver = PairingResolver {
        sense,
        threshold,
    };
    resolver.resolve(items, compare)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(a: &f64, b: &f64) -> f64 {
        a.min(*b) / a.max(*b)
    }

    fn distance(a: &i32, b: &i32) -> i32 {
        (a - b).abs()
    }

    #[test]
    fn test_two_items_pair_without_threshold() {
        let pairs = resolve(&[4.0, 6.0], ratio, MetricSense::MoreIsMoreAlike, None);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].left(), 0);
        assert_eq!(pairs[0].right(), Some(1));
        assert!((pairs[0].metric().unwrap() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_items_split_by_threshold() {
        let pairs = resolve(&[4.0, 6.0], ratio, MetricSense::MoreIsMoreAlike, Some(0.75));
        assert_eq!(pairs, vec![Pair::single(0), Pair::single(1)]);
    }

    #[test]
    fn test_empty_and_single_input() {
        let empty: Vec<Pair<i32>> = resolve(&[], distance, MetricSense::LessIsMoreAlike, None);
        assert!(empty.is_empty());

        let single = resolve(&[3], distance, MetricSense::LessIsMoreAlike, None);
        assert_eq!(single, vec![Pair::single(0)]);
    }

    #[test]
    fn test_nearest_neighbours_pair_up() {
        let items = [1, 100, 2, 101, 50];
        let pairs = resolve(&items, distance, MetricSense::LessIsMoreAlike, None);

        assert_eq!(
            pairs,
            vec![
                Pair::paired(0, 2, 1),
                Pair::paired(1, 3, 1),
                Pair::single(4),
            ]
        );
    }

    #[test]
    fn test_greedy_pairing_takes_best_pairs_first() {
        let items = [0, 10, 11, 30, 31, 100];
        let resolver = PairingResolver::new(MetricSense::LessIsMoreAlike).with_threshold(20);
        let mut matrix = SimilarityMatrix::new(&items, distance, MetricSense::LessIsMoreAlike);
        let mut pairs = Vec::new();
        resolver.pair_greedily(&mut matrix, &mut pairs);

        assert!(matrix.is_empty());
        assert_eq!(
            pairs,
            vec![
                Pair::paired(1, 2, 1),
                Pair::paired(3, 4, 1),
                // 0 and 100 are the last ones left and fail the threshold
                Pair::single(5),
                Pair::single(0),
            ]
        );
    }

    #[test]
    fn test_sort_order_is_total() {
        let mut pairs = vec![
            Pair::single(1),
            Pair::paired(3, 5, 0.1),
            Pair::single(0),
            Pair::paired(0, 7, 0.9),
            Pair::paired(0, 2, 0.5),
        ];
        pairs.sort_by(Pair::cmp_position);

        let keys: Vec<_> = pairs.iter().map(Pair::sort_key).collect();
        assert_eq!(
            keys,
            vec![(0, 0, 2), (0, 0, 7), (0, 3, 5), (1, 0, 0), (1, 1, 0)]
        );
    }

    #[test]
    fn test_paired_normalizes_order() {
        let pair = Pair::paired(4, 1, ());
        assert_eq!(pair.left(), 1);
        assert_eq!(pair.right(), Some(4));
    }

    #[test]
    fn test_resolver_builder() {
        let resolver = PairingResolver::new(MetricSense::LessIsMoreAlike).with_threshold(2);
        assert_eq!(resolver.threshold(), Some(2));

        let pairs = resolver.resolve(&[0, 1, 10, 20], distance);
        assert_eq!(
            pairs,
            vec![Pair::paired(0, 1, 1), Pair::single(2), Pair::single(3)]
        );
    }
}
