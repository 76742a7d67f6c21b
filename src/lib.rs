//! # seqalg
//!
//! Collection algebra over a single cross-numeric equivalence relation.
//!
//! ## Overview
//!
//! Every algorithm in this crate works over arbitrary finite sequences and
//! compares elements through [`numeric::Equivalence`] and
//! [`numeric::NumericOrd`]. Numbers of different representations
//! (fixed-width integers, arbitrary-precision integers, fixed and
//! arbitrary-precision decimals, binary floats) compare as equal whenever
//! they are mathematically equal; everything else falls back to its natural
//! equality and ordering.
//!
//! - **Numeric Equivalence**: the [`numeric::Number`] tower and the traits
//!   every other module is built on
//! - **Callable Resolver**: key extractor or comparator, resolved once
//! - **Dedup**: `unique`, keeping first occurrences
//! - **Set Algebra**: `intersect`, `minus`, `disjoint` with adaptive
//!   sorted-index / pairwise selection
//! - **Sort**: stable sorting into a copy or in place
//! - **Extremal**: `min` / `max` where the first extremal element wins
//! - **Classify**: `group_by`, `count_by` and nested grouping with
//!   first-seen key order
//!
//! ## Feature Flags
//!
//! - `numeric`: numeric tower and equivalence traits
//! - `callable`: key extractor / comparator resolution
//! - `dedup`, `set-algebra`, `sort`, `extremal`, `classify`: the algorithms
//! - `sequence`: method-call syntax over standard containers
//! - `serde`: serialization for numbers and classifications
//! - `rayon`: parallel in-place sorting
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqalg::prelude::*;
//!
//! let values = vec![Number::from(1), Number::from(2_u64), "1.0".parse().unwrap()];
//! assert_eq!(unique(values).len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the traits, types and algorithm entry points of every enabled
/// feature.
///
/// # Usage
///
/// ```rust
/// use seqalg::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::AlgebraError;

    #[cfg(feature = "numeric")]
    pub use crate::numeric::*;

    #[cfg(feature = "numeric")]
    pub use crate::wrappers::*;

    #[cfg(feature = "callable")]
    pub use crate::callable::*;

    #[cfg(feature = "dedup")]
    pub use crate::dedup::*;

    #[cfg(feature = "set-algebra")]
    pub use crate::set_algebra::*;

    #[cfg(feature = "sort")]
    pub use crate::sort::*;

    #[cfg(feature = "extremal")]
    pub use crate::extremal::*;

    #[cfg(feature = "classify")]
    pub use crate::classify::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

pub mod error;

#[cfg(feature = "numeric")]
pub mod numeric;

#[cfg(feature = "numeric")]
pub mod wrappers;

#[cfg(feature = "callable")]
pub mod callable;

#[cfg(feature = "dedup")]
pub mod dedup;

#[cfg(feature = "set-algebra")]
pub mod set_algebra;

#[cfg(feature = "sort")]
pub mod sort;

#[cfg(feature = "extremal")]
pub mod extremal;

#[cfg(feature = "classify")]
pub mod classify;

#[cfg(feature = "sequence")]
pub mod sequence;
