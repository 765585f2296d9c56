//! Triangular store of pairwise metrics with logical row removal.

use super::metric::MetricSense;
use super::roommates::PreferenceMatrix;
use tracing::debug;

/// The best-scoring pair found by [`SimilarityMatrix::global_extremum`].
///
/// `row` and `column` are logical indices with `row > column`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum<M> {
    pub row: usize,
    pub column: usize,
    pub metric: M,
}

/// Symmetric pairwise metric matrix over a set of items.
///
/// Every unordered pair is compared exactly once at construction time and
/// stored in a flat lower-triangular buffer. Rows are addressed through a
/// permutation (`proxy`) so that removing a row only reorders indices: the
/// first `size` proxy entries are the active rows, the remainder (the
/// *tail*) lists removed original indices in the order they were removed.
///
/// Self-similarity is computed once, from the first item, and used for every
/// diagonal entry. If the comparator's self-similarity differs between items
/// the diagonal is wrong for all but item 0. The diagonal never takes part in
/// extremum or ranking computations, so in practice this only affects
/// [`SimilarityMatrix::at`] called with `row == column`.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix<M> {
    sense: MetricSense,
    /// Row-major lower triangle including the diagonal: row `r` holds
    /// `r + 1` entries starting at `r * (r + 1) / 2`.
    lower: Vec<M>,
    proxy: Vec<usize>,
    size: usize,
}

#[inline]
fn row_offset(row: usize) -> usize {
    row * (row + 1) / 2
}

impl<M: Copy + PartialOrd> SimilarityMatrix<M> {
    /// Compare every unordered pair of `items` with `compare`.
    ///
    /// `compare` must be symmetric; only `compare(later, earlier)` is ever
    /// evaluated.
    pub fn new<T, F>(items: &[T], compare: F, sense: MetricSense) -> Self
    where
        F: Fn(&T, &T) -> M,
    {
        let n = items.len();
        let mut lower = Vec::with_capacity(row_offset(n));

        if let Some(first) = items.first() {
            let diagonal = compare(first, first);
            for (row, item) in items.iter().enumerate() {
                lower.extend(items[..row].iter().map(|other| compare(item, other)));
                lower.push(diagonal);
            }
        }

        Self {
            sense,
            lower,
            proxy: (0..n).collect(),
            size: n,
        }
    }

    /// Number of active rows.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of items the matrix was built from.
    #[inline]
    pub fn original_size(&self) -> usize {
        self.proxy.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn sense(&self) -> MetricSense {
        self.sense
    }

    /// Original item index of logical row `row`.
    #[inline]
    pub fn original_index(&self, row: usize) -> usize {
        self.proxy[row]
    }

    /// Original indices of the active rows, in logical order.
    #[inline]
    pub fn active(&self) -> &[usize] {
        &self.proxy[..self.size]
    }

    /// Original indices of removed rows, in removal order.
    #[inline]
    pub fn tail(&self) -> &[usize] {
        &self.proxy[self.size..]
    }

    /// Metric between logical rows `row` and `column`.
    ///
    /// Both indices must be less than [`size`](Self::size); this is not
    /// checked in release builds, where an index into the tail reads the
    /// metric of a removed row.
    #[inline]
    pub fn at(&self, row: usize, column: usize) -> M {
        debug_assert!(row < self.size && column < self.size);
        let (r, c) = (self.proxy[row], self.proxy[column]);
        let (hi, lo) = if r >= c { (r, c) } else { (c, r) };
        self.lower[row_offset(hi) + lo]
    }

    /// Remove logical row `row`.
    ///
    /// Later rows shift down by one; the removed original index is appended
    /// to the tail.
    pub fn remove(&mut self, row: usize) {
        debug_assert!(row < self.size);
        self.proxy[row..].rotate_left(1);
        self.size -= 1;
    }

    /// Most alike metric between `row` and any other active row.
    ///
    /// `None` when `row` is the only active row.
    pub fn row_extremum(&self, row: usize) -> Option<M> {
        self.sense.best(
            (0..self.size)
                .filter(|&column| column != row)
                .map(|column| self.at(row, column)),
        )
    }

    /// Drop rows until an even number of rows remains.
    ///
    /// With a threshold, every row whose best partner fails the threshold is
    /// dropped: immediately if the row count is odd, otherwise two at a time
    /// so the count stays even. A remaining odd row count is then fixed by
    /// dropping the row whose best partner is the least alike.
    pub fn reduce(&mut self, threshold: Option<M>) {
        let before = self.size;

        if let Some(threshold) = threshold {
            let extrema: Vec<Option<M>> =
                (0..self.size).map(|row| self.row_extremum(row)).collect();
            let mut pending: Option<usize> = None;

            // Scanning backwards keeps the indices of unscanned rows stable.
            for row in (0..extrema.len()).rev() {
                let passes = extrema[row]
                    .map(|metric| self.sense.passes(&metric, Some(&threshold)))
                    .unwrap_or(false);
                if passes {
                    continue;
                }

                if self.size % 2 == 1 {
                    self.remove(row);
                } else if let Some(previous) = pending.take() {
                    // `previous > row`, remove it first
                    self.remove(previous);
                    self.remove(row);
                } else {
                    pending = Some(row);
                }
            }
        }

        if self.size % 2 == 1 {
            let worst = self.worst_row();
            self.remove(worst);
        }

        if self.size != before {
            debug!(
                removed = before - self.size,
                remaining = self.size,
                "reduced similarity matrix"
            );
        }
    }

    /// Logical row whose best partner is the least alike; first found wins.
    fn worst_row(&self) -> usize {
        let mut worst: Option<(usize, M)> = None;
        for row in 0..self.size {
            if let Some(metric) = self.row_extremum(row) {
                let replace = match &worst {
                    Some((_, current)) => self.sense.is_worse(&metric, current),
                    None => true,
                };
                if replace {
                    worst = Some((row, metric));
                }
            }
        }
        worst.map_or(0, |(row, _)| row)
    }

    /// Most alike pair of distinct active rows; first found wins ties.
    pub fn global_extremum(&self) -> Option<Extremum<M>> {
        let mut best: Option<Extremum<M>> = None;
        for row in 1..self.size {
            for column in 0..row {
                let metric = self.at(row, column);
                let replace = match &best {
                    Some(current) => self.sense.is_better(&metric, &current.metric),
                    None => true,
                };
                if replace {
                    best = Some(Extremum {
                        row,
                        column,
                        metric,
                    });
                }
            }
        }
        best
    }

    /// Preference table over the active rows, in logical indices.
    ///
    /// Each row ranks all other active rows from most to least alike (ties
    /// keep index order) and ends with the row itself.
    pub fn roommates_matrix(&self) -> PreferenceMatrix {
        let rows = (0..self.size)
            .map(|row| {
                let mut ranking: Vec<usize> =
                    (0..self.size).filter(|&column| column != row).collect();
                ranking.sort_by(|&a, &b| self.sense.compare(&self.at(row, a), &self.at(row, b)));
                ranking.push(row);
                ranking
            })
            .collect();
        PreferenceMatrix::from_ranked_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absolute_difference(a: &i32, b: &i32) -> i32 {
        (a - b).abs()
    }

    #[test]
    fn test_new_stores_pairwise_metrics() {
        let items = [1, 4, 9];
        let matrix = SimilarityMatrix::new(&items, absolute_difference, MetricSense::LessIsMoreAlike);

        assert_eq!(matrix.size(), 3);
        assert_eq!(matrix.at(0, 1), 3);
        assert_eq!(matrix.at(1, 0), 3);
        assert_eq!(matrix.at(2, 0), 8);
        assert_eq!(matrix.at(2, 2), 0);
    }

    #[test]
    fn test_empty_matrix() {
        let items: [i32; 0] = [];
        let mut matrix = SimilarityMatrix::new(&items, absolute_difference, MetricSense::LessIsMoreAlike);
        assert!(matrix.is_empty());
        assert!(matrix.global_extremum().is_none());
        matrix.reduce(Some(1));
        assert_eq!(matrix.size(), 0);
        assert_eq!(matrix.roommates_matrix().size(), 0);
    }

    #[test]
    fn test_remove_keeps_removal_order_in_tail() {
        let items = [10, 20, 30, 40, 50];
        let mut matrix = SimilarityMatrix::new(&items, absolute_difference, MetricSense::LessIsMoreAlike);

        matrix.remove(1); // original 1
        matrix.remove(2); // logical 2 is now original 3
        assert_eq!(matrix.active(), &[0, 2, 4]);
        assert_eq!(matrix.tail(), &[1, 3]);

        // Metrics follow the remapping
        assert_eq!(matrix.at(1, 2), 20);
        assert_eq!(matrix.original_index(2), 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_at_rejects_removed_rows_in_debug_builds() {
        let items = [10, 20, 30];
        let mut matrix = SimilarityMatrix::new(&items, absolute_difference, MetricSense::LessIsMoreAlike);
        matrix.remove(0);
        let _ = matrix.at(0, 2);
    }

    #[test]
    fn test_reduce_without_threshold_drops_worst_row() {
        // 100 is far from everything else
        let items = [1, 2, 100, 3, 4];
        let mut matrix = SimilarityMatrix::new(&items, absolute_difference, MetricSense::LessIsMoreAlike);
        matrix.reduce(None);

        assert_eq!(matrix.size(), 4);
        assert_eq!(matrix.tail(), &[2]);
    }

    #[test]
    fn test_reduce_with_threshold_removes_in_twos() {
        let items = [1, 2, 50, 100, 150, 3];
        let mut matrix = SimilarityMatrix::new(&items, absolute_difference, MetricSense::LessIsMoreAlike);
        matrix.reduce(Some(5));

        // Rows 4 and 3 fail and go together; row 2 fails too but has no
        // partner to be dropped with, so it survives to keep the count even.
        assert_eq!(matrix.size(), 4);
        assert_eq!(matrix.active(), &[0, 1, 2, 5]);
        assert_eq!(matrix.tail(), &[4, 3]);
    }

    #[test]
    fn test_reduce_odd_size_removes_first_failure_immediately() {
        let items = [1, 2, 3, 4, 100];
        let mut matrix = SimilarityMatrix::new(&items, absolute_difference, MetricSense::LessIsMoreAlike);
        matrix.reduce(Some(5));

        assert_eq!(matrix.size(), 4);
        assert_eq!(matrix.tail(), &[4]);
    }

    #[test]
    fn test_reduce_single_item() {
        let items = [7];
        let mut matrix = SimilarityMatrix::new(&items, absolute_difference, MetricSense::LessIsMoreAlike);
        matrix.reduce(None);
        assert_eq!(matrix.size(), 0);
        assert_eq!(matrix.tail(), &[0]);
    }

    #[test]
    fn test_global_extremum_first_found_wins() {
        let items = [0, 5, 10, 15];
        let matrix = SimilarityMatrix::new(&items, absolute_difference, MetricSense::LessIsMoreAlike);
        let best = matrix.global_extremum().unwrap();

        // All neighbours are 5 apart, (1, 0) is scanned first
        assert_eq!((best.row, best.column, best.metric), (1, 0, 5));
    }

    #[test]
    fn test_roommates_matrix_ranks_by_sense() {
        let items = [0.0, 0.9, 0.5];
        let similarity = |a: &f64, b: &f64| 1.0 - (a - b).abs();
        let matrix = SimilarityMatrix::new(&items, similarity, MetricSense::MoreIsMoreAlike);
        let prefs = matrix.roommates_matrix();

        assert_eq!(prefs.row(0), &[2, 1, 0]);
        assert_eq!(prefs.row(1), &[2, 0, 1]);
        assert_eq!(prefs.row(2), &[1, 0, 2]);
    }
}
