//! Numeric equivalence: the relation every algorithm in this crate uses.
//!
//! This module provides the two traits that decide whether elements count
//! as "the same" and how they are ordered:
//!
//! - [`Equivalence`]: a reflexive, symmetric, transitive equality, plus a
//!   capability probe ([`Equivalence::total_order`]) reporting whether the
//!   type is totally ordered
//! - [`NumericOrd`]: a total order consistent with [`Equivalence`]
//!
//! and the numeric tower that makes the relation cross-representation:
//!
//! - [`Number`]: fixed-width integer, arbitrary-precision integer,
//!   fixed-precision decimal, arbitrary-precision decimal or binary float
//! - [`ExactDecimal`]: the lossless common form every finite [`Number`] is
//!   promoted to before two different representations are compared
//!
//! # Laws
//!
//! ```text
//! a.equivalent(&a)                                   // reflexivity
//! a.equivalent(&b) == b.equivalent(&a)               // symmetry
//! a.numeric_cmp(&b) == Equal  <=>  a.equivalent(&b)  // consistency
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use seqalg::numeric::{Number, numeric_cmp, numeric_eq};
//! use std::cmp::Ordering;
//!
//! let two = Number::from(2_i32);
//! let two_point_zero = Number::from(Decimal::new(20, 1));
//! let two_long = Number::from(2_i64);
//!
//! assert!(numeric_eq(&two, &two_point_zero));
//! assert!(numeric_eq(&two, &two_long));
//! assert_eq!(numeric_cmp(&two, &Number::from(2.5_f64)), Ordering::Less);
//! ```

use std::cmp::Ordering;

mod exact;
mod natural;
mod number;

pub use exact::ExactDecimal;
pub use number::{Number, NumberKind};

/// Equality under the cross-numeric relation.
///
/// Implementations must be reflexive, symmetric and transitive, and free of
/// side effects.
///
/// # Capability probe
///
/// [`Equivalence::total_order`] returns `Some(comparator)` when every pair
/// of values of the type is mutually orderable. The set algebra calls it once
/// per invocation to choose between an `O(n log n)` sorted index and an
/// `O(n * m)` pairwise scan. The default is `None`; every [`NumericOrd`]
/// implementation in this crate overrides it.
///
/// # Examples
///
/// ```rust
/// use seqalg::numeric::Equivalence;
///
/// assert!(1_u8.equivalent(&1));
/// assert!(i32::total_order().is_some());
/// assert!(0.0_f64.equivalent(&-0.0));
/// ```
pub trait Equivalence {
    /// Returns `true` if `self` and `other` count as the same element.
    fn equivalent(&self, other: &Self) -> bool;

    /// Returns a total order over the type, if it has one.
    #[inline]
    fn total_order() -> Option<fn(&Self, &Self) -> Ordering> {
        None
    }
}

/// A total order consistent with [`Equivalence`].
///
/// `a.numeric_cmp(&b) == Ordering::Equal` must hold exactly when
/// `a.equivalent(&b)`.
///
/// # Examples
///
/// ```rust
/// use seqalg::numeric::NumericOrd;
/// use std::cmp::Ordering;
///
/// assert_eq!(1.5_f64.numeric_cmp(&f64::NAN), Ordering::Less);
/// assert_eq!("b".numeric_cmp("a"), Ordering::Greater);
/// ```
pub trait NumericOrd: Equivalence {
    /// Compares `self` with `other`.
    fn numeric_cmp(&self, other: &Self) -> Ordering;
}

/// Returns `true` if `left` and `right` are equivalent.
#[inline]
pub fn numeric_eq<T: Equivalence + ?Sized>(left: &T, right: &T) -> bool {
    left.equivalent(right)
}

/// Compares `left` with `right` under the numeric total order.
#[inline]
pub fn numeric_cmp<T: NumericOrd + ?Sized>(left: &T, right: &T) -> Ordering {
    left.numeric_cmp(right)
}
