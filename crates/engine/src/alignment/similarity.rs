//! Ready-made similarity comparators for [`resolve`](crate::pairing::resolve).
//!
//! Both comparators are symmetric and return values in `[0, 1]` where larger
//! means more alike, so they pair with [`MetricSense::MoreIsMoreAlike`].
//!
//! [`MetricSense::MoreIsMoreAlike`]: crate::pairing::MetricSense::MoreIsMoreAlike

use super::lcs::lcs_length;

/// Fraction of both sequences covered by their longest common subsequence:
/// `2 * lcs / (|a| + |b|)`. Two empty sequences are identical (1.0).
pub fn lcs_similarity<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * lcs_length(a, b) as f64 / total as f64
}

/// Ratio of the shorter length to the longer. Two empty sequences give 1.0.
pub fn length_ratio<T>(a: &[T], b: &[T]) -> f64 {
    let (short, long) = if a.len() <= b.len() {
        (a.len(), b.len())
    } else {
        (b.len(), a.len())
    };
    if long == 0 {
        1.0
    } else {
        short as f64 / long as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcs_similarity() {
        assert_eq!(lcs_similarity(b"abcd", b"abcd"), 1.0);
        assert_eq!(lcs_similarity(b"abcd", b"wxyz"), 0.0);
        // lcs("abcd", "ad") = 2 -> 4 / 6
        assert!((lcs_similarity(b"abcd", b"ad") - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(lcs_similarity::<u8>(&[], &[]), 1.0);
        assert_eq!(lcs_similarity(&[], b"ab"), 0.0);
    }

    #[test]
    fn test_lcs_similarity_is_symmetric() {
        let a = [3, 1, 4, 1, 5, 9, 2, 6];
        let b = [2, 7, 1, 8, 2, 8];
        assert_eq!(lcs_similarity(&a, &b), lcs_similarity(&b, &a));
    }

    #[test]
    fn test_length_ratio() {
        assert_eq!(length_ratio(&[1, 2], &[1, 2, 3, 4]), 0.5);
        assert_eq!(length_ratio(&[1, 2, 3, 4], &[1, 2]), 0.5);
        assert_eq!(length_ratio::<u8>(&[], &[]), 1.0);
        assert_eq!(length_ratio(&[], &[1]), 0.0);
    }
}
