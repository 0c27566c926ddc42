use thiserror::Error;

/// Errors returned by [`BitSet`](crate::BitSet) construction and bit scans.
///
/// Every variant is an invalid-argument error: the call was rejected before
/// touching the set. Out-of-range indices everywhere else are not errors and
/// resolve to a defined boundary value instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitSetError {
    /// The requested initial bit capacity was negative.
    #[error("invalid argument: initial capacity must not be negative, got {0}")]
    NegativeCapacity(isize),
    /// A forward scan was started at a negative index.
    #[error("invalid argument: scan start must not be negative, got {0}")]
    NegativeFromIndex(isize),
    /// A backward scan was started below `-1`.
    #[error("invalid argument: backward scan start must be at least -1, got {0}")]
    FromIndexBelowSentinel(isize),
}

impl BitSetError {
    /// Classifies the error as an invalid-argument error.
    ///
    /// The crate has a single error category, so this holds for every
    /// variant. Callers that only care about the category can match on this
    /// instead of listing the variants.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NegativeCapacity(_) | Self::NegativeFromIndex(_) | Self::FromIndexBelowSentinel(_)
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, BitSetError>;
