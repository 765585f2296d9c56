use std::path::PathBuf;
use thiserror::Error;

/// Error returned when a preference table cannot be used by the
/// stable-roommates solver.
///
/// Odd-sized and empty tables are *not* errors: they build fine and simply
/// solve to "no stable matching".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// A row does not rank every person exactly once.
    #[error("Row {row} has {len} entries, expected {expected}")]
    RowLength {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A row references a person that does not exist.
    #[error("Row {row} references person {person} (table size {size})")]
    PersonOutOfRange {
        row: usize,
        person: usize,
        size: usize,
    },
    /// A row ranks the same person twice.
    #[error("Row {row} ranks person {person} more than once")]
    DuplicatePerson { row: usize, person: usize },
    /// A person must rank themself last, as the exhaustion sentinel.
    #[error("Row {row} must end with the person themself, found {found}")]
    SentinelNotLast { row: usize, found: usize },
}

/// Error returned when explicit alignment anchors are inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    /// Anchors must increase strictly on both sides.
    #[error("Anchor {position} does not follow its predecessor on both sides")]
    NotMonotonic { position: usize },
    /// An anchor points past the end of a sequence.
    #[error("Anchor ({left}, {right}) outside sequences of length {left_size} and {right_size}")]
    AnchorOutOfRange {
        left: usize,
        right: usize,
        left_size: usize,
        right_size: usize,
    },
}

/// Errors raised when building a distance generator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistanceError {
    /// A uniform generator needs a strictly positive upper bound, otherwise
    /// crossover can never advance.
    #[error("Distance upper bound must be at least 1, got {0}")]
    ZeroUpperBound(u16),
    /// Break probability of a geometric generator outside (0, 1].
    #[error("Invalid break probability: {0} (must be in (0.0, 1.0])")]
    InvalidBreakProbability(f64),
}

/// Errors that can occur while loading or validating an engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid pairing threshold: {0}")]
    InvalidThreshold(f64),
    #[error(transparent)]
    Distance(#[from] DistanceError),
}
