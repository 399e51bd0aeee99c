//! Error types for the randpick operations.

use std::num::ParseIntError;

use thiserror::Error;

/// Top-level error type. Every variant carries the name of the failing
/// operation so callers can trace a failure back to the call site.
///
/// All conditions are caller-correctable: they are returned synchronously,
/// never retried or recovered internally.
#[derive(Debug, Error)]
pub enum RandomError {
    /// A selection was attempted on an empty pool.
    #[error("randpick.{op}: pool is empty")]
    EmptyPool {
        /// The failing operation.
        op: &'static str,
    },

    /// More distinct draws were requested than the pool can supply.
    #[error("randpick.{op}: requested {requested} draws from a pool of {available}")]
    ExceedsPoolSize {
        /// The failing operation.
        op: &'static str,
        /// Number of draws requested.
        requested: usize,
        /// Number of candidates available.
        available: usize,
    },

    /// A mixed pool contains a composite element that cannot be
    /// deduplicated by value equality.
    #[error("randpick.{op}: composite elements are not supported")]
    UnsupportedElementType {
        /// The failing operation.
        op: &'static str,
    },

    /// A numeric range with `start >= end` was supplied.
    #[error("randpick.{op}: start must be strictly less than end")]
    RangeInvalid {
        /// The failing operation.
        op: &'static str,
    },

    /// A drawn string failed base-10 integer parsing.
    #[error("randpick.{op}: {source}")]
    ParseInt {
        /// The failing operation.
        op: &'static str,
        /// The underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// A drawn string was not a well-formed double-quoted string.
    #[error("randpick.{op}: malformed quoted string")]
    MalformedQuote {
        /// The failing operation.
        op: &'static str,
    },
}

impl RandomError {
    /// Returns the name of the operation that failed.
    #[must_use]
    pub fn operation(&self) -> &'static str {
        match self {
            Self::EmptyPool { op }
            | Self::ExceedsPoolSize { op, .. }
            | Self::UnsupportedElementType { op }
            | Self::RangeInvalid { op }
            | Self::ParseInt { op, .. }
            | Self::MalformedQuote { op } => op,
        }
    }
}
