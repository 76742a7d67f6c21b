//! Error types for the collection algebra.
//!
//! Almost every operation in this crate is total: empty sequences are valid
//! input and produce empty results. The few failure modes are collected in
//! [`AlgebraError`].

use thiserror::Error;

/// Represents errors that can occur while running a collection algorithm.
///
/// # Examples
///
/// ```rust
/// use seqalg::error::AlgebraError;
///
/// let error = AlgebraError::EmptyInput { operation: "min" };
/// assert_eq!(format!("{error}"), "min: empty input and no default value");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgebraError {
    /// An extremal or reducing operation was given an empty sequence.
    #[error("{operation}: empty input and no default value")]
    EmptyInput {
        /// The name of the operation that failed.
        operation: &'static str,
    },

    /// A caller-supplied comparator could not order two of its inputs.
    ///
    /// This variant is never produced by the crate itself; it is created by
    /// fallible comparators and propagated unchanged.
    #[error("incompatible keys: {reason}")]
    IncompatibleKeys {
        /// Why the comparator rejected the pair.
        reason: String,
    },

    /// A non-finite float was converted to an exact decimal.
    #[error("{value} has no exact decimal representation")]
    NonFiniteFloat {
        /// The rejected value.
        value: f64,
    },

    /// A string could not be parsed as a number.
    #[error("invalid number literal: {input:?}")]
    InvalidNumber {
        /// The rejected input.
        input: String,
    },
}

impl AlgebraError {
    /// Creates an [`AlgebraError::IncompatibleKeys`] from any displayable reason.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqalg::error::AlgebraError;
    ///
    /// let error = AlgebraError::incompatible("cannot compare text with a number");
    /// assert_eq!(
    ///     format!("{error}"),
    ///     "incompatible keys: cannot compare text with a number"
    /// );
    /// ```
    pub fn incompatible(reason: impl std::fmt::Display) -> Self {
        Self::IncompatibleKeys {
            reason: reason.to_string(),
        }
    }
}

/// Result alias used by the fallible operations of this crate.
pub type Result<T> = std::result::Result<T, AlgebraError>;
