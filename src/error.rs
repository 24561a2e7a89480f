//! Errors returned by the filter and the spell checker.
use thiserror::Error;

/// A filter or spell checker error.
#[derive(Debug, Error)]
pub enum Error {
    /// The sizing parameters can't produce a valid filter.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// The derived bit array doesn't fit in memory.
    #[error("filter of {bits} bits is too large")]
    TooLarge {
        /// The number of bits that was asked for.
        bits: f64,
    },

    /// The dictionary has no words to size a filter with.
    #[error("dictionary contains no words")]
    EmptyDictionary,

    /// An I/O error while reading a dictionary or running the check loop.
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
