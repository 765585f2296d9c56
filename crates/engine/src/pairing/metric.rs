//! Direction-aware comparisons of pairwise metrics.
//!
//! Every comparison made by the pairing code goes through [`MetricSense`],
//! so the same algorithms work for similarities (bigger is closer) and for
//! distances (smaller is closer).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Whether a larger or a smaller metric means two items are more alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MetricSense {
    /// Similarity-like metrics: larger values are better partners.
    #[default]
    MoreIsMoreAlike,
    /// Distance-like metrics: smaller values are better partners.
    LessIsMoreAlike,
}

impl MetricSense {
    /// Order two metrics so that the *more alike* one comes first.
    ///
    /// A value that is not comparable with itself (NaN) is less alike than
    /// any other value, which keeps this a total order usable for sorting.
    #[inline]
    pub fn compare<M: PartialOrd>(self, a: &M, b: &M) -> Ordering {
        match a.partial_cmp(b) {
            Some(ord) => match self {
                MetricSense::MoreIsMoreAlike => ord.reverse(),
                MetricSense::LessIsMoreAlike => ord,
            },
            None => match (is_nan(a), is_nan(b)) {
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                _ => Ordering::Equal,
            },
        }
    }

    /// `true` if `candidate` is strictly more alike than `current`.
    #[inline]
    pub fn is_better<M: PartialOrd>(self, candidate: &M, current: &M) -> bool {
        self.compare(candidate, current) == Ordering::Less
    }

    /// `true` if `candidate` is strictly less alike than `current`.
    #[inline]
    pub fn is_worse<M: PartialOrd>(self, candidate: &M, current: &M) -> bool {
        self.compare(candidate, current) == Ordering::Greater
    }

    /// Check a metric against an optional threshold.
    ///
    /// With no threshold every metric passes. Otherwise the metric must be at
    /// least as alike as the threshold (`>=` for similarities, `<=` for
    /// distances).
    #[inline]
    pub fn passes<M: PartialOrd>(self, metric: &M, threshold: Option<&M>) -> bool {
        match threshold {
            None => true,
            Some(threshold) => match self {
                MetricSense::MoreIsMoreAlike => metric >= threshold,
                MetricSense::LessIsMoreAlike => metric <= threshold,
            },
        }
    }

    /// Fold an iterator of metrics into its best element.
    ///
    /// Ties keep the first element seen.
    pub fn best<M, I>(self, metrics: I) -> Option<M>
    where
        M: PartialOrd,
        I: IntoIterator<Item = M>,
    {
        metrics.into_iter().fold(None, |best, metric| match best {
            Some(current) if !self.is_better(&metric, &current) => Some(current),
            _ => Some(metric),
        })
    }
}

#[inline]
fn is_nan<M: PartialOrd>(value: &M) -> bool {
    value.partial_cmp(value).is_none()
}

impl std::fmt::Display for MetricSense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MoreIsMoreAlike => write!(f, "more-is-more-alike"),
            Self::LessIsMoreAlike => write!(f, "less-is-more-alike"),
        }
    }
}

impl std::str::FromStr for MetricSense {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "more-is-more-alike" | "more" | "similarity" => Ok(Self::MoreIsMoreAlike),
            "less-is-more-alike" | "less" | "distance" => Ok(Self::LessIsMoreAlike),
            _ => Err(format!(
                "Unknown metric sense: {s}. Available: more-is-more-alike, less-is-more-alike"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_follows_sense() {
        let more = MetricSense::MoreIsMoreAlike;
        let less = MetricSense::LessIsMoreAlike;

        assert!(more.is_better(&0.9, &0.1));
        assert!(less.is_better(&0.1, &0.9));
        assert!(more.is_worse(&0.1, &0.9));
        assert!(!more.is_better(&0.5, &0.5));
    }

    #[test]
    fn test_passes_threshold() {
        let more = MetricSense::MoreIsMoreAlike;
        assert!(more.passes(&0.75, Some(&0.75)));
        assert!(!more.passes(&(2.0 / 3.0), Some(&0.75)));
        assert!(more.passes(&0.0, None));

        let less = MetricSense::LessIsMoreAlike;
        assert!(less.passes(&3, Some(&5)));
        assert!(!less.passes(&6, Some(&5)));
    }

    #[test]
    fn test_best_keeps_first_on_ties() {
        let more = MetricSense::MoreIsMoreAlike;
        let values = vec![
            Tagged(1, 'a'),
            Tagged(3, 'b'),
            Tagged(3, 'c'),
            Tagged(2, 'd'),
        ];
        assert_eq!(more.best(values).map(|t| t.1), Some('b'));

        let less = MetricSense::LessIsMoreAlike;
        assert_eq!(less.best(vec![4, 1, 1, 7]), Some(1));
        assert_eq!(less.best(Vec::<i32>::new()), None);
    }

    #[test]
    fn test_nan_is_least_alike() {
        for sense in [MetricSense::MoreIsMoreAlike, MetricSense::LessIsMoreAlike] {
            assert!(sense.is_worse(&f64::NAN, &0.5));
            assert!(sense.is_better(&0.5, &f64::NAN));
            assert_eq!(sense.compare(&f64::NAN, &f64::NAN), Ordering::Equal);
        }
    }

    #[test]
    fn test_parse_and_display() {
        let sense: MetricSense = "distance".parse().unwrap();
        assert_eq!(sense, MetricSense::LessIsMoreAlike);
        assert_eq!(sense.to_string(), "less-is-more-alike");
        assert!("sideways".parse::<MetricSense>().is_err());
    }

    /// Compares on the metric only, so ties are visible through the tag.
    struct Tagged(i32, char);

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }
}
